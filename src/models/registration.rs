//! Student course registrations.
//!
//! The registration table is the only input to conflict-graph construction.
//! Student identifiers are kept only as long as the table lives; the graph
//! built from it retains courses, never students.
//!
//! Order matters: students and their courses keep the order in which they
//! were added, and the conflict graph numbers its vertices by first
//! appearance in that order.

use serde::{Deserialize, Serialize};

use super::Course;

/// One student's selection, as supplied by the caller.
///
/// Course names are raw strings; normalization happens when the table is
/// read by [`RegistrationTable::selections`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRegistration {
    /// Student identifier.
    pub student: String,
    /// Selected course names (raw).
    #[serde(default)]
    pub courses: Vec<String>,
}

/// A degenerate registration entry that is skipped during graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationIssue {
    /// The student selected no courses.
    NoCourses {
        /// Student identifier.
        student: String,
    },
    /// A course name was blank after normalization.
    BlankCourseName {
        /// Student identifier.
        student: String,
        /// Position of the blank entry in the student's selection.
        position: usize,
    },
}

impl std::fmt::Display for RegistrationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCourses { student } => write!(f, "Student '{student}' has no courses"),
            Self::BlankCourseName { student, position } => write!(
                f,
                "Student '{student}' has a blank course name at position {position}"
            ),
        }
    }
}

/// Ordered mapping from student to selected courses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationTable {
    students: Vec<StudentRegistration>,
}

impl RegistrationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a student's selection.
    pub fn with_student<I, S>(mut self, student: impl Into<String>, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_student(student, courses);
        self
    }

    /// Adds a student's selection in place.
    ///
    /// A student that is already present gets the new courses appended.
    pub fn add_student<I, S>(&mut self, student: impl Into<String>, courses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let student = student.into();
        let courses = courses.into_iter().map(Into::into);
        match self.students.iter_mut().find(|s| s.student == student) {
            Some(existing) => existing.courses.extend(courses),
            None => self.students.push(StudentRegistration {
                student,
                courses: courses.collect(),
            }),
        }
    }

    /// Builds a table from `(student, course)` rows.
    ///
    /// Rows are grouped by student in first-seen order.
    pub fn from_rows<I, S, C>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        let mut table = Self::new();
        for (student, course) in rows {
            table.add_student(student, [course]);
        }
        table
    }

    /// Raw registrations in insertion order.
    pub fn students(&self) -> &[StudentRegistration] {
        &self.students
    }

    /// Number of students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Whether the table has no students.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Normalized, deduplicated course selections per student.
    ///
    /// Blank names are dropped. Students left with no courses yield an
    /// empty selection; callers that only need conflicts may skip them.
    pub fn selections(&self) -> impl Iterator<Item = (&str, Vec<Course>)> + '_ {
        self.students.iter().map(|reg| {
            let mut courses: Vec<Course> = Vec::with_capacity(reg.courses.len());
            for course in reg.courses.iter().filter_map(|raw| Course::parse(raw)) {
                if !courses.contains(&course) {
                    courses.push(course);
                }
            }
            (reg.student.as_str(), courses)
        })
    }

    /// Degenerate entries that graph construction will ignore.
    pub fn issues(&self) -> Vec<RegistrationIssue> {
        let mut issues = Vec::new();
        for reg in &self.students {
            if reg.courses.is_empty() {
                issues.push(RegistrationIssue::NoCourses {
                    student: reg.student.clone(),
                });
                continue;
            }
            for (position, raw) in reg.courses.iter().enumerate() {
                if Course::parse(raw).is_none() {
                    issues.push(RegistrationIssue::BlankCourseName {
                        student: reg.student.clone(),
                        position,
                    });
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let table = RegistrationTable::new()
            .with_student("s2", ["Physics"])
            .with_student("s1", ["Math"]);
        let ids: Vec<&str> = table.students().iter().map(|s| s.student.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s1"]);
        assert_eq!(table.student_count(), 2);
    }

    #[test]
    fn test_selections_normalize_and_dedup() {
        let table =
            RegistrationTable::new().with_student("s1", ["math", "Math ", "  ", "PHYSICS", "math"]);
        let (student, courses) = table.selections().next().unwrap();
        assert_eq!(student, "s1");
        let names: Vec<&str> = courses.iter().map(Course::as_str).collect();
        assert_eq!(names, vec!["Math", "Physics"]);
    }

    #[test]
    fn test_from_rows_groups_students() {
        let table = RegistrationTable::from_rows([
            ("alice", "Math"),
            ("bob", "Art"),
            ("alice", "Music"),
        ]);
        assert_eq!(table.student_count(), 2);
        assert_eq!(table.students()[0].courses, vec!["Math", "Music"]);
        assert_eq!(table.students()[1].courses, vec!["Art"]);
    }

    #[test]
    fn test_issues() {
        let table = RegistrationTable::new()
            .with_student("empty", Vec::<String>::new())
            .with_student("blank", ["Math", " "])
            .with_student("ok", ["Art"]);
        let issues = table.issues();
        assert_eq!(
            issues,
            vec![
                RegistrationIssue::NoCourses {
                    student: "empty".into()
                },
                RegistrationIssue::BlankCourseName {
                    student: "blank".into(),
                    position: 1
                },
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let json = r#"[{"student": "s1", "courses": ["Math", "Art"]}, {"student": "s2"}]"#;
        let table: RegistrationTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.student_count(), 2);
        assert!(table.students()[1].courses.is_empty());
    }
}
