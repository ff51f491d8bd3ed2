//! Candidate record validator
//!
//! Validation semantics:
//! - Every field is checked, failures never short-circuit
//! - The report lists exactly the violated fields
//! - Validation never mutates anything and is deterministic
//! - A candidate that passes is returned as a typed `StudentRecord`

use super::report::ValidationReport;
use super::rules;
use crate::record::{Field, RawRecord, StudentRecord};

/// Validator for candidate student records.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    /// Courses on offer; empty accepts any non-empty course
    courses: Vec<String>,
}

impl Validator {
    /// Creates a validator that accepts any non-empty course
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator restricted to the given course offerings
    pub fn with_courses<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            courses: courses.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the configured course offerings
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Checks every field of a candidate and reports each outcome.
    pub fn validate(&self, candidate: &RawRecord) -> ValidationReport {
        self.evaluate(candidate).0
    }

    /// Validates a candidate, producing the typed record on success.
    ///
    /// # Errors
    ///
    /// Returns the full report if any field fails.
    pub fn check(&self, candidate: &RawRecord) -> Result<StudentRecord, ValidationReport> {
        match self.evaluate(candidate) {
            (_, Some(record)) => Ok(record),
            (report, None) => Err(report),
        }
    }

    fn evaluate(&self, candidate: &RawRecord) -> (ValidationReport, Option<StudentRecord>) {
        let id = rules::check_id(&candidate.id);
        let name = rules::check_name(&candidate.name);
        let email = rules::check_email(&candidate.email);
        let phone = rules::check_phone(&candidate.phone);
        let course = rules::check_course(&candidate.course, &self.courses);
        let semester = rules::check_semester(&candidate.semester);
        let gpa = rules::check_gpa(&candidate.gpa);

        let mut report = ValidationReport::new();
        report.record(Field::Id, &id);
        report.record(Field::Name, &name);
        report.record(Field::Email, &email);
        report.record(Field::Phone, &phone);
        report.record(Field::Course, &course);
        report.record(Field::Semester, &semester);
        report.record(Field::Gpa, &gpa);

        let record = match (id, name, email, phone, course, semester, gpa) {
            (Ok(id), Ok(name), Ok(email), Ok(phone), Ok(course), Ok(semester), Ok(gpa)) => {
                Some(StudentRecord {
                    id,
                    name,
                    email,
                    phone,
                    course,
                    semester,
                    gpa,
                })
            }
            _ => None,
        };

        (report, record)
    }
}
