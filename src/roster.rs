//! Student records as supplied by roster ingestion.
//!
//! The engine expects the roster to be already validated and deduplicated:
//! roll numbers are unique, gender tags are normalized. It only reads the
//! records and moves them into seats, never mutating a field.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A single examination candidate.
///
/// Identity is the roll number: two records with the same roll number compare
/// equal regardless of their other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique roll number.
    pub roll_number: String,
    /// Display name.
    pub name: String,
    /// Class designation, the unit that must never be co-located
    /// (typically grade plus section, e.g. `"10A"`).
    pub class: String,
    /// Section, informational only.
    pub section: String,
    /// Normalized gender tag. The engine only ever compares tags for
    /// equality.
    pub gender: String,
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.roll_number == other.roll_number
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.roll_number.hash(state);
    }
}

impl Student {
    /// Creates a new student record.
    pub fn new(
        roll_number: impl Into<String>,
        name: impl Into<String>,
        class: impl Into<String>,
        section: impl Into<String>,
        gender: impl Into<String>,
    ) -> Student {
        Student {
            roll_number: roll_number.into(),
            name: name.into(),
            class: class.into(),
            section: section.into(),
            gender: gender.into(),
        }
    }
}

/// Restricts a roster to the given class designations.
///
/// An empty selection disables filtering and returns the roster unchanged.
pub fn filter_classes<S: AsRef<str>>(students: Vec<Student>, selected: &[S]) -> Vec<Student> {
    if selected.is_empty() {
        return students;
    }
    students
        .into_iter()
        .filter(|student| selected.iter().any(|class| class.as_ref() == student.class))
        .collect()
}
