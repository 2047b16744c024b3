//! Schedule validation.
//!
//! Checks an arbitrary (typically hand-edited) day assignment against the
//! conflict graph it is meant to satisfy. Detects:
//! - Courses with no day (completeness)
//! - Conflicting courses sharing a day (conflict-freedom)
//! - Courses placed on more than one day (uniqueness)
//! - Rows whose day value could not be read
//!
//! Every check runs on every call; the report lists all violations at once
//! so a caller can highlight each offending cell. Validation never fails:
//! an invalid schedule is a report with violations, not an error.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use tracing::debug;

use crate::graph::ConflictGraph;
use crate::models::{day_number, Course, Day, DayAssignment, EditedSchedule};

/// Categories of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A course in the graph has no day.
    Unassigned,
    /// Two conflicting courses share a day.
    Conflict,
    /// A course appears on several distinct days.
    DuplicateAssignment,
    /// A row's day value is not a day label or index.
    InvalidDay,
}

/// A single schedule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleViolation {
    /// `course` has no assigned day.
    Unassigned {
        /// The unscheduled course.
        course: Course,
    },
    /// `first` and `second` share a student and are both on `day`.
    Conflict {
        /// Earlier course in graph order.
        first: Course,
        /// Later course in graph order.
        second: Course,
        /// The shared day.
        day: Day,
    },
    /// `course` is scheduled on each of `days`.
    DuplicateAssignment {
        /// The course.
        course: Course,
        /// Distinct days, ascending.
        days: Vec<Day>,
    },
    /// `course` was given the unreadable day `value`.
    InvalidDay {
        /// The course.
        course: Course,
        /// Raw day value.
        value: String,
    },
}

impl ScheduleViolation {
    /// The violation category.
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::Unassigned { .. } => ViolationKind::Unassigned,
            Self::Conflict { .. } => ViolationKind::Conflict,
            Self::DuplicateAssignment { .. } => ViolationKind::DuplicateAssignment,
            Self::InvalidDay { .. } => ViolationKind::InvalidDay,
        }
    }

    /// Courses involved, for highlighting.
    pub fn courses(&self) -> Vec<&Course> {
        match self {
            Self::Conflict { first, second, .. } => vec![first, second],
            Self::Unassigned { course }
            | Self::DuplicateAssignment { course, .. }
            | Self::InvalidDay { course, .. } => vec![course],
        }
    }
}

impl fmt::Display for ScheduleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unassigned { course } => write!(f, "Course '{course}' has no assigned day"),
            Self::Conflict { first, second, day } => write!(
                f,
                "Courses '{first}' and '{second}' share a student but are both on day {}",
                day_number(*day)
            ),
            Self::DuplicateAssignment { course, days } => {
                let days: Vec<String> =
                    days.iter().map(|&d| day_number(d).to_string()).collect();
                write!(
                    f,
                    "Course '{course}' is scheduled for multiple days ({})",
                    days.join(", ")
                )
            }
            Self::InvalidDay { course, value } => {
                write!(f, "Course '{course}' has an invalid day '{value}'")
            }
        }
    }
}

/// Outcome of validating one schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Violations: unassigned, then conflicts, then duplicates, then invalid days.
    pub violations: Vec<ScheduleViolation>,
    /// Scheduled courses that are not in the graph, in input order.
    ///
    /// These carry no constraints and do not affect validity.
    pub unknown_courses: Vec<Course>,
}

impl ValidationReport {
    /// Whether the schedule is complete and conflict-free.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Courses whose day collides with a conflicting course.
    pub fn course_conflicts(&self) -> BTreeSet<&Course> {
        self.courses_of(ViolationKind::Conflict)
    }

    /// Courses placed on more than one day.
    pub fn multi_day_errors(&self) -> BTreeSet<&Course> {
        self.courses_of(ViolationKind::DuplicateAssignment)
    }

    /// Graph courses with no day, in graph order.
    pub fn unassigned(&self) -> Vec<&Course> {
        self.violations
            .iter()
            .filter_map(|v| match v {
                ScheduleViolation::Unassigned { course } => Some(course),
                _ => None,
            })
            .collect()
    }

    /// Conflicting pairs with their shared day, in edge order.
    pub fn conflicting_pairs(&self) -> Vec<(&Course, &Course, Day)> {
        self.violations
            .iter()
            .filter_map(|v| match v {
                ScheduleViolation::Conflict { first, second, day } => Some((first, second, *day)),
                _ => None,
            })
            .collect()
    }

    /// Number of violations of one kind.
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind() == kind).count()
    }

    /// Human-readable violation messages.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    fn courses_of(&self, kind: ViolationKind) -> BTreeSet<&Course> {
        self.violations
            .iter()
            .filter(|v| v.kind() == kind)
            .flat_map(ScheduleViolation::courses)
            .collect()
    }
}

/// Validates a one-day-per-course assignment.
pub fn validate_schedule(graph: &ConflictGraph, assignment: &DayAssignment) -> ValidationReport {
    validate_entries(graph, &EditedSchedule::from(assignment))
}

/// Validates an edited schedule.
///
/// Checks:
/// 1. Every graph course has at least one day
/// 2. No edge has both ends on the same day
/// 3. No course has two distinct days (repeating the same day is harmless)
/// 4. No row carries an unreadable day value
///
/// A course with several days is checked for conflicts on each of them.
pub fn validate_entries(graph: &ConflictGraph, edited: &EditedSchedule) -> ValidationReport {
    let mut report = ValidationReport::default();

    // Course → distinct days, plus first-appearance order.
    let mut days_of: HashMap<&Course, BTreeSet<Day>> = HashMap::new();
    let mut seen: Vec<&Course> = Vec::new();
    for entry in &edited.entries {
        let days = days_of.entry(&entry.course).or_insert_with(|| {
            seen.push(&entry.course);
            BTreeSet::new()
        });
        days.insert(entry.day);
    }

    // Completeness
    for course in graph.vertices() {
        if !days_of.contains_key(course) {
            report.violations.push(ScheduleViolation::Unassigned {
                course: course.clone(),
            });
        }
    }

    // Conflict-freedom
    for (first, second) in graph.edges() {
        if let (Some(a), Some(b)) = (days_of.get(first), days_of.get(second)) {
            for &day in a.intersection(b) {
                report.violations.push(ScheduleViolation::Conflict {
                    first: first.clone(),
                    second: second.clone(),
                    day,
                });
            }
        }
    }

    // Uniqueness
    for &course in &seen {
        let days = &days_of[course];
        if days.len() > 1 {
            report.violations.push(ScheduleViolation::DuplicateAssignment {
                course: course.clone(),
                days: days.iter().copied().collect(),
            });
        }
    }

    // Unreadable rows
    for bad in &edited.malformed {
        report.violations.push(ScheduleViolation::InvalidDay {
            course: bad.course.clone(),
            value: bad.value.clone(),
        });
    }

    report.unknown_courses = seen
        .into_iter()
        .filter(|c| !graph.contains(c))
        .cloned()
        .collect();

    debug!(
        entries = edited.entries.len(),
        violations = report.violations.len(),
        unknown = report.unknown_courses.len(),
        "validated schedule"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::WelshPowellColorer;
    use crate::models::{DayLabels, DayTable, RegistrationTable};
    use proptest::prelude::*;

    fn c(name: &str) -> Course {
        Course::parse(name).unwrap()
    }

    fn sample_graph() -> ConflictGraph {
        ConflictGraph::build(
            &RegistrationTable::new()
                .with_student("student1", ["Math", "Physics", "Computer Science"])
                .with_student("student2", ["Physics", "Chemistry", "Biology"]),
        )
    }

    fn valid_assignment() -> DayAssignment {
        DayAssignment::new()
            .with(c("Physics"), 0)
            .with(c("Math"), 1)
            .with(c("Chemistry"), 1)
            .with(c("Computer Science"), 2)
            .with(c("Biology"), 2)
    }

    #[test]
    fn test_valid_schedule() {
        let report = validate_schedule(&sample_graph(), &valid_assignment());
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
        assert!(report.unknown_courses.is_empty());
    }

    #[test]
    fn test_empty_graph_empty_assignment() {
        let report = validate_schedule(&ConflictGraph::default(), &DayAssignment::new());
        assert!(report.is_valid());
    }

    #[test]
    fn test_conflict_detected() {
        let a = c("A");
        let b = c("B");
        let graph = ConflictGraph::from_edges([(&a, &b)]);
        let assignment = DayAssignment::new().with(a.clone(), 0).with(b.clone(), 0);

        let report = validate_schedule(&graph, &assignment);
        assert!(!report.is_valid());
        assert_eq!(report.conflicting_pairs(), vec![(&a, &b, 0)]);
        assert_eq!(report.course_conflicts(), BTreeSet::from([&a, &b]));
    }

    #[test]
    fn test_missing_course_reported() {
        let mut assignment = valid_assignment();
        assignment.unassign(&c("Biology"));

        let report = validate_schedule(&sample_graph(), &assignment);
        assert!(!report.is_valid());
        assert_eq!(report.unassigned(), vec![&c("Biology")]);
        assert_eq!(report.count(ViolationKind::Unassigned), 1);
        assert_eq!(report.count(ViolationKind::Conflict), 0);
        assert!(report.messages()[0].contains("Biology"));
    }

    #[test]
    fn test_all_checks_run() {
        // Biology missing, Math/Physics clash, Chemistry on two days.
        let table = DayTable::from_rows(
            vec!["Day 1".into(), "Day 2".into(), "Day 3".into()],
            &[
                vec!["Physics".into(), "Chemistry".into(), "Computer Science".into()],
                vec!["Math".into(), "".into(), "Chemistry".into()],
            ],
        );
        let edited = table.to_edited(&DayLabels::default());

        let report = validate_entries(&sample_graph(), &edited);
        assert!(!report.is_valid());
        assert_eq!(report.unassigned(), vec![&c("Biology")]);
        assert_eq!(report.conflicting_pairs(), vec![(&c("Math"), &c("Physics"), 0)]);
        assert_eq!(report.multi_day_errors(), BTreeSet::from([&c("Chemistry")]));
        assert_eq!(
            report.violations[2],
            ScheduleViolation::DuplicateAssignment {
                course: c("Chemistry"),
                days: vec![1, 2],
            }
        );
    }

    #[test]
    fn test_duplicate_checked_for_conflicts_on_each_day() {
        let mut edited = EditedSchedule::from(&valid_assignment());
        // Chemistry also on day 0, next to Physics.
        edited.push(c("Chemistry"), 0);

        let report = validate_entries(&sample_graph(), &edited);
        assert_eq!(
            report.conflicting_pairs(),
            vec![(&c("Physics"), &c("Chemistry"), 0)]
        );
        assert_eq!(report.multi_day_errors(), BTreeSet::from([&c("Chemistry")]));
    }

    #[test]
    fn test_repeated_identical_rows_are_fine() {
        let mut edited = EditedSchedule::from(&valid_assignment());
        edited.push(c("math"), 1);
        assert!(validate_entries(&sample_graph(), &edited).is_valid());
    }

    #[test]
    fn test_unknown_courses_listed_but_valid() {
        let assignment = valid_assignment().with(c("Driving"), 0);
        let report = validate_schedule(&sample_graph(), &assignment);
        assert!(report.is_valid());
        assert_eq!(report.unknown_courses, vec![c("Driving")]);
    }

    #[test]
    fn test_misspelled_course_is_unassigned() {
        let mut assignment = valid_assignment();
        assignment.unassign(&c("Chemistry"));
        let assignment = assignment.with(c("Chemestry"), 1);

        let report = validate_schedule(&sample_graph(), &assignment);
        assert_eq!(report.unassigned(), vec![&c("Chemistry")]);
        assert_eq!(report.unknown_courses, vec![c("Chemestry")]);
    }

    #[test]
    fn test_invalid_day_reported() {
        let labels = DayLabels::default();
        let mut edited = EditedSchedule::from(&valid_assignment());
        edited.push_raw("Music", "next week", &labels);

        let report = validate_entries(&sample_graph(), &edited);
        assert_eq!(report.count(ViolationKind::InvalidDay), 1);
        assert!(!report.is_valid());
        assert!(report.messages()[0].contains("next week"));
    }

    #[test]
    fn test_validation_does_not_mutate_graph() {
        let graph = sample_graph();
        let before = graph.clone();
        let _ = validate_schedule(&graph, &valid_assignment());
        let _ = validate_schedule(&graph, &DayAssignment::new());
        assert_eq!(graph, before);
    }

    #[test]
    fn test_violation_messages() {
        let v = ScheduleViolation::DuplicateAssignment {
            course: c("Art"),
            days: vec![0, 3],
        };
        assert_eq!(
            v.to_string(),
            "Course 'Art' is scheduled for multiple days (1, 4)"
        );
        assert_eq!(v.kind(), ViolationKind::DuplicateAssignment);
    }

    #[test]
    fn test_out_of_range_day_is_invalid() {
        let graph = ConflictGraph::build(&RegistrationTable::new().with_student("s", ["A", "B"]));
        let labels = DayLabels::default();
        let huge = Day::MAX.to_string();
        let mut edited = EditedSchedule::new();
        edited.push_raw("A", &huge, &labels);
        edited.push_raw("B", &huge, &labels);

        let report = validate_entries(&graph, &edited);
        assert!(!report.is_valid());
        assert_eq!(report.count(ViolationKind::InvalidDay), 2);
        assert_eq!(report.messages().len(), report.violations.len());
    }

    #[test]
    fn test_messages_at_last_day() {
        let v = ScheduleViolation::Conflict {
            first: c("A"),
            second: c("B"),
            day: Day::MAX,
        };
        assert!(v.to_string().ends_with(&Day::MAX.to_string()));
        let v = ScheduleViolation::DuplicateAssignment {
            course: c("A"),
            days: vec![0, Day::MAX],
        };
        assert_eq!(
            v.to_string(),
            format!("Course 'A' is scheduled for multiple days (1, {})", Day::MAX)
        );
    }

    #[test]
    fn test_public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConflictGraph>();
        assert_send_sync::<crate::coloring::Coloring>();
        assert_send_sync::<ValidationReport>();
        assert_send_sync::<EditedSchedule>();
    }

    proptest! {
        #[test]
        fn prop_colorer_output_validates(
            students in prop::collection::vec(prop::collection::vec(0usize..10, 0..5), 0..12)
        ) {
            let mut table = RegistrationTable::new();
            for (s, courses) in students.into_iter().enumerate() {
                table.add_student(format!("s{s}"), courses.into_iter().map(|c| format!("C{c}")));
            }
            let plan = WelshPowellColorer::new().plan(&table);
            let report = validate_schedule(&plan.graph, &plan.coloring.assignment);
            prop_assert!(report.is_valid(), "{:?}", report.messages());
        }
    }
}
