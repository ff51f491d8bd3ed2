//! Record type definitions
//!
//! A `RawRecord` is what the presentation layer collects: seven text
//! values, untrusted. A `StudentRecord` only exists once every field
//! has passed validation.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Name,
    Email,
    Phone,
    Course,
    Semester,
    Gpa,
}

impl Field {
    /// All columns in display order
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Course,
        Field::Semester,
        Field::Gpa,
    ];

    /// Columns matched by free-text search
    pub const SEARCHABLE: [Field; 4] = [Field::Id, Field::Name, Field::Email, Field::Course];

    /// Returns the column name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Course => "course",
            Field::Semester => "semester",
            Field::Gpa => "gpa",
        }
    }

    /// Returns the column header used when rendering tables
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Course => "Course",
            Field::Semester => "Semester",
            Field::Gpa => "GPA",
        }
    }

    /// Returns true if the column orders numerically
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Id | Field::Semester | Field::Gpa)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// Unvalidated candidate record as collected from a form.
///
/// Missing fields deserialize as empty strings so that the validator
/// reports them as required rather than the parser rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "text_or_number")]
    pub phone: String,
    pub course: String,
    #[serde(deserialize_with = "text_or_number")]
    pub semester: String,
    #[serde(deserialize_with = "text_or_number")]
    pub gpa: String,
}

impl RawRecord {
    /// Creates a candidate from the seven raw values
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        course: impl Into<String>,
        semester: impl Into<String>,
        gpa: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            course: course.into(),
            semester: semester.into(),
            gpa: gpa.into(),
        }
    }

    /// Returns the raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Course => &self.course,
            Field::Semester => &self.semester,
            Field::Gpa => &self.gpa,
        }
    }

    /// Replaces the raw value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Course => &mut self.course,
            Field::Semester => &mut self.semester,
            Field::Gpa => &mut self.gpa,
        };
        *slot = value.into();
    }

    /// Returns a copy with one field replaced
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut raw = RawRecord::default();
        for (field, value) in iter {
            raw.set(field, value);
        }
        raw
    }
}

/// Accepts either a JSON string or a JSON number for a raw field.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Str(s) => s,
        Text::Num(n) => n.to_string(),
    })
}

/// A validated student record.
///
/// Only the validator constructs these from user input, so every
/// instance in a store satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub semester: u8,
    pub gpa: f64,
}

impl StudentRecord {
    /// Returns the record's identity key
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a field rendered as text
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.clone(),
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::Course => self.course.clone(),
            Field::Semester => self.semester.to_string(),
            Field::Gpa => self.gpa.to_string(),
        }
    }

    /// Converts back into raw form, e.g. to prefill an edit form
    pub fn to_raw(&self) -> RawRecord {
        Field::ALL
            .iter()
            .map(|&field| (field, self.field_text(field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rahul() -> StudentRecord {
        StudentRecord {
            id: "1001".into(),
            name: "Rahul Kumar".into(),
            email: "rahul.kumar@email.com".into(),
            phone: "9876543210".into(),
            course: "BCA".into(),
            semester: 4,
            gpa: 3.5,
        }
    }

    #[test]
    fn test_field_order_matches_columns() {
        let mut sorted = Field::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Field::ALL.to_vec());
    }

    #[test]
    fn test_field_from_str_ignores_case() {
        assert_eq!("GPA".parse::<Field>().unwrap(), Field::Gpa);
        assert_eq!(" semester ".parse::<Field>().unwrap(), Field::Semester);
        assert!("grade".parse::<Field>().is_err());
    }

    #[test]
    fn test_to_raw_renders_numbers_as_entered() {
        let raw = rahul().to_raw();
        assert_eq!(raw.semester, "4");
        assert_eq!(raw.gpa, "3.5");
        assert_eq!(raw.get(Field::Email), "rahul.kumar@email.com");
    }

    #[test]
    fn test_raw_record_missing_fields_default_empty() {
        let raw: RawRecord = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(raw.id, "7");
        assert_eq!(raw.name, "");
        assert_eq!(raw.gpa, "");
    }

    #[test]
    fn test_raw_record_accepts_numbers() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"id": 1004, "semester": 2, "gpa": 3.25}"#).unwrap();
        assert_eq!(raw.id, "1004");
        assert_eq!(raw.semester, "2");
        assert_eq!(raw.gpa, "3.25");
    }

    #[test]
    fn test_raw_record_with_replaces_field() {
        let raw = rahul().to_raw().with(Field::Name, "R@hul");
        assert_eq!(raw.name, "R@hul");
        assert_eq!(raw.id, "1001");
    }
}
