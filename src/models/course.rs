//! Course identifier.
//!
//! Course names arrive as free text (typed by hand, pasted from a
//! spreadsheet, edited in a table). A [`Course`] is the normalized form of
//! such a name, and equality is defined on that form only, so `"math"`,
//! `" Math "` and `"MATH"` all denote the same course.
//!
//! # Normalization
//! 1. Trim leading/trailing whitespace.
//! 2. Collapse internal whitespace runs to a single space.
//! 3. Title-case each word: first character upper, remainder lower.
//!
//! A name that is empty after step 1 is not a course.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized course identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Course(String);

impl Course {
    /// Normalizes a raw course name.
    ///
    /// Returns `None` if the name is blank.
    pub fn parse(raw: &str) -> Option<Self> {
        let words: Vec<String> = raw.split_whitespace().map(title_case).collect();
        if words.is_empty() {
            None
        } else {
            Some(Self(words.join(" ")))
        }
    }

    /// The normalized name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Course {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Course {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "course name is empty".to_string())
    }
}

impl From<Course> for String {
    fn from(course: Course) -> Self {
        course.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_variants_are_equal() {
        let a = Course::parse("math").unwrap();
        let b = Course::parse("MATH").unwrap();
        let c = Course::parse("  Math\t").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_str(), "Math");
    }

    #[test]
    fn test_multi_word_names() {
        let c = Course::parse("  computer   SCIENCE ").unwrap();
        assert_eq!(c.as_str(), "Computer Science");
        assert_eq!(
            Course::parse("physical education"),
            Course::parse("Physical Education")
        );
    }

    #[test]
    fn test_blank_names_rejected() {
        assert!(Course::parse("").is_none());
        assert!(Course::parse("   \t ").is_none());
    }

    #[test]
    fn test_non_ascii() {
        let c = Course::parse("éTUDES").unwrap();
        assert_eq!(c.as_str(), "Études");
    }

    #[test]
    fn test_serde_normalizes() {
        let c: Course = serde_json::from_str("\"business   studies\"").unwrap();
        assert_eq!(c.as_str(), "Business Studies");
        assert!(serde_json::from_str::<Course>("\"  \"").is_err());
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"Business Studies\"");
    }
}
