//! Per-field validation rules
//!
//! Each rule is a predicate plus the reason reported when it fails.
//! Rules never look at other fields.
//!
//! | field    | accepted                                  |
//! |----------|-------------------------------------------|
//! | id       | one or more ASCII digits                  |
//! | name     | ASCII letters and whitespace              |
//! | email    | `local@domain.tld`, no whitespace         |
//! | phone    | exactly 10 ASCII digits                   |
//! | course   | non-empty                                 |
//! | semester | whole number in 1..=8                     |
//! | gpa      | finite number in 0.0..=4.0                |

use regex::Regex;
use std::sync::OnceLock;

pub const ID_REQUIRED: &str = "Student ID is required";
pub const ID_NOT_NUMERIC: &str = "Student ID must be numeric";
pub const NAME_REQUIRED: &str = "Student Name is required";
pub const NAME_NOT_LETTERS: &str = "Name should contain only letters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_MALFORMED: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_MALFORMED: &str = "Phone number must be exactly 10 digits";
pub const COURSE_REQUIRED: &str = "Please select a course";
pub const COURSE_NOT_OFFERED: &str = "Course is not offered";
pub const SEMESTER_REQUIRED: &str = "Semester is required";
pub const SEMESTER_NOT_INTEGER: &str = "Semester must be a whole number";
pub const SEMESTER_OUT_OF_RANGE: &str = "Semester must be between 1 and 8";
pub const GPA_REQUIRED: &str = "GPA is required";
pub const GPA_NOT_NUMBER: &str = "GPA must be a number";
pub const GPA_OUT_OF_RANGE: &str = "GPA must be between 0.0 and 4.0";

pub const SEMESTER_MIN: u8 = 1;
pub const SEMESTER_MAX: u8 = 8;
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

/// Outcome of a single rule: the parsed value or a failure reason
pub type RuleResult<T> = Result<T, &'static str>;

static ID_PATTERN: OnceLock<Regex> = OnceLock::new();
static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern must compile"))
}

// \d is Unicode-aware in `regex`; identifiers and phone numbers are ASCII only.
fn id_pattern() -> &'static Regex {
    compiled(&ID_PATTERN, r"^[0-9]+$")
}

fn name_pattern() -> &'static Regex {
    compiled(&NAME_PATTERN, r"^[A-Za-z\s]+$")
}

fn email_pattern() -> &'static Regex {
    compiled(&EMAIL_PATTERN, r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
}

fn phone_pattern() -> &'static Regex {
    compiled(&PHONE_PATTERN, r"^[0-9]{10}$")
}

/// Checks a required value against a pattern.
fn matching(
    value: &str,
    pattern: &Regex,
    required: &'static str,
    malformed: &'static str,
) -> RuleResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(required);
    }
    if !pattern.is_match(value) {
        return Err(malformed);
    }
    Ok(value.to_string())
}

pub fn check_id(value: &str) -> RuleResult<String> {
    matching(value, id_pattern(), ID_REQUIRED, ID_NOT_NUMERIC)
}

pub fn check_name(value: &str) -> RuleResult<String> {
    matching(value, name_pattern(), NAME_REQUIRED, NAME_NOT_LETTERS)
}

pub fn check_email(value: &str) -> RuleResult<String> {
    matching(value, email_pattern(), EMAIL_REQUIRED, EMAIL_MALFORMED)
}

pub fn check_phone(value: &str) -> RuleResult<String> {
    matching(value, phone_pattern(), PHONE_REQUIRED, PHONE_MALFORMED)
}

/// Course must be present and, when `offered` is non-empty, one of them.
pub fn check_course(value: &str, offered: &[String]) -> RuleResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(COURSE_REQUIRED);
    }
    if !offered.is_empty() && !offered.iter().any(|course| course == value) {
        return Err(COURSE_NOT_OFFERED);
    }
    Ok(value.to_string())
}

pub fn check_semester(value: &str) -> RuleResult<u8> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SEMESTER_REQUIRED);
    }
    // Whole-valued decimals such as "4.0" count as integers
    let semester: f64 = value.parse().map_err(|_| SEMESTER_NOT_INTEGER)?;
    if !semester.is_finite() || semester.fract() != 0.0 {
        return Err(SEMESTER_NOT_INTEGER);
    }
    if semester < f64::from(SEMESTER_MIN) || semester > f64::from(SEMESTER_MAX) {
        return Err(SEMESTER_OUT_OF_RANGE);
    }
    Ok(semester as u8)
}

pub fn check_gpa(value: &str) -> RuleResult<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GPA_REQUIRED);
    }
    let gpa: f64 = value.parse().map_err(|_| GPA_NOT_NUMBER)?;
    // "inf" and "NaN" parse as f64
    if !gpa.is_finite() {
        return Err(GPA_NOT_NUMBER);
    }
    if !(GPA_MIN..=GPA_MAX).contains(&gpa) {
        return Err(GPA_OUT_OF_RANGE);
    }
    Ok(gpa)
}
