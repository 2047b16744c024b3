//! Day assignments (solutions) and their edited counterparts.
//!
//! A [`DayAssignment`] maps each course to exactly one day; it is what the
//! colorer produces. An [`EditedSchedule`] is what comes back from a manual
//! editing surface: a list of entries that may name a course twice, name
//! unknown courses, or carry day values that do not parse.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Course;

/// 0-based day index.
pub type Day = usize;

/// 1-based day number shown to people. Saturates at the top of the range.
pub fn day_number(day: Day) -> Day {
    day.saturating_add(1)
}

/// Converts between day indices and human day labels.
///
/// Labels are 1-based: with the default prefix, day `0` is `"Day 1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayLabels {
    /// Label prefix (e.g. `"Day"`).
    pub prefix: String,
}

impl DayLabels {
    /// Creates labels with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Label for a day index.
    pub fn label(&self, day: Day) -> String {
        format!("{} {}", self.prefix, day_number(day))
    }

    /// Parses a day label or a bare day index.
    ///
    /// Accepts `"<prefix> N"` (1-based, prefix matched case-insensitively)
    /// or a bare integer `"N"` (0-based index). Anything else is `None`,
    /// including an index too large to have a 1-based label.
    pub fn parse(&self, value: &str) -> Option<Day> {
        let value = value.trim();
        if let Ok(index) = value.parse::<Day>() {
            return index.checked_add(1).map(|_| index);
        }
        let (head, tail) = value.split_at_checked(self.prefix.len())?;
        if !head.eq_ignore_ascii_case(&self.prefix) {
            return None;
        }
        let number: Day = tail.trim().parse().ok()?;
        number.checked_sub(1)
    }
}

impl Default for DayLabels {
    fn default() -> Self {
        Self::new("Day")
    }
}

/// A flat `(course, day)` record, suitable for tabular export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    /// Course.
    pub course: Course,
    /// Assigned day.
    pub day: Day,
}

/// Course → day mapping with one day per course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayAssignment {
    days: BTreeMap<Course, Day>,
}

impl DayAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a course to a day (builder form).
    pub fn with(mut self, course: Course, day: Day) -> Self {
        self.assign(course, day);
        self
    }

    /// Assigns a course to a day, replacing any previous day.
    pub fn assign(&mut self, course: Course, day: Day) -> Option<Day> {
        self.days.insert(course, day)
    }

    /// Removes a course's assignment.
    pub fn unassign(&mut self, course: &Course) -> Option<Day> {
        self.days.remove(course)
    }

    /// Day assigned to a course.
    pub fn day_of(&self, course: &Course) -> Option<Day> {
        self.days.get(course).copied()
    }

    /// Iterates `(course, day)` pairs in course-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Course, Day)> + '_ {
        self.days.iter().map(|(c, &d)| (c, d))
    }

    /// Number of assigned courses.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no course is assigned.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days spanned: highest day index + 1, or 0 if empty.
    pub fn day_count(&self) -> usize {
        self.days.values().max().map_or(0, |&d| day_number(d))
    }

    /// Courses grouped by day, occupied days only, names sorted within a day.
    pub fn by_day(&self) -> BTreeMap<Day, Vec<Course>> {
        let mut groups: BTreeMap<Day, Vec<Course>> = BTreeMap::new();
        for (course, day) in self.iter() {
            groups.entry(day).or_default().push(course.clone());
        }
        groups
    }

    /// Flat entries ordered by day, then course name.
    pub fn entries(&self) -> Vec<AssignmentEntry> {
        let mut entries: Vec<AssignmentEntry> = self
            .iter()
            .map(|(course, day)| AssignmentEntry {
                course: course.clone(),
                day,
            })
            .collect();
        entries.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.course.cmp(&b.course)));
        entries
    }
}

impl FromIterator<(Course, Day)> for DayAssignment {
    fn from_iter<T: IntoIterator<Item = (Course, Day)>>(iter: T) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// A row whose day value could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedEntry {
    /// Course named on the row.
    pub course: Course,
    /// The raw day value.
    pub value: String,
}

/// An externally edited schedule, possibly inconsistent.
///
/// Unlike [`DayAssignment`], the same course may appear with several days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditedSchedule {
    /// Parsed entries in input order.
    pub entries: Vec<AssignmentEntry>,
    /// Rows with unreadable day values.
    pub malformed: Vec<MalformedEntry>,
}

impl EditedSchedule {
    /// Creates an empty edited schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parsed entry.
    pub fn push(&mut self, course: Course, day: Day) {
        self.entries.push(AssignmentEntry { course, day });
    }

    /// Appends a raw `(course, day)` cell pair.
    ///
    /// Blank course cells are empty table slots and are ignored.
    pub fn push_raw(&mut self, course: &str, day: &str, labels: &DayLabels) {
        let Some(course) = Course::parse(course) else {
            return;
        };
        match labels.parse(day) {
            Some(day) => self.push(course, day),
            None => self.malformed.push(MalformedEntry {
                course,
                value: day.to_string(),
            }),
        }
    }

    /// Number of parsed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries and no malformed rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.malformed.is_empty()
    }
}

impl From<&DayAssignment> for EditedSchedule {
    fn from(assignment: &DayAssignment) -> Self {
        Self {
            entries: assignment.entries(),
            malformed: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str) -> Course {
        Course::parse(name).unwrap()
    }

    #[test]
    fn test_labels_roundtrip() {
        let labels = DayLabels::default();
        assert_eq!(labels.label(0), "Day 1");
        assert_eq!(labels.parse("Day 1"), Some(0));
        assert_eq!(labels.parse("day 3"), Some(2));
        assert_eq!(labels.parse(" Day7 "), Some(6));
    }

    #[test]
    fn test_labels_bare_index() {
        let labels = DayLabels::default();
        assert_eq!(labels.parse("0"), Some(0));
        assert_eq!(labels.parse("4"), Some(4));
    }

    #[test]
    fn test_labels_reject_unlabellable_index() {
        let labels = DayLabels::default();
        assert_eq!(labels.parse(&Day::MAX.to_string()), None);
        assert_eq!(labels.parse(&(Day::MAX - 1).to_string()), Some(Day::MAX - 1));
        assert_eq!(labels.label(Day::MAX), format!("Day {}", Day::MAX));
    }

    #[test]
    fn test_labels_reject_garbage() {
        let labels = DayLabels::default();
        assert_eq!(labels.parse("Day 0"), None);
        assert_eq!(labels.parse("Monday"), None);
        assert_eq!(labels.parse(""), None);
        assert_eq!(labels.parse("-1"), None);
        assert_eq!(DayLabels::new("Session").parse("Day 2"), None);
    }

    #[test]
    fn test_assignment_basics() {
        let mut a = DayAssignment::new().with(c("Math"), 1).with(c("Art"), 0);
        assert_eq!(a.len(), 2);
        assert_eq!(a.day_count(), 2);
        assert_eq!(a.day_of(&c("math")), Some(1));
        assert_eq!(a.assign(c("Math"), 0), Some(1));
        assert_eq!(a.day_count(), 1);
        assert_eq!(a.unassign(&c("Art")), Some(0));
        assert_eq!(a.len(), 1);
        assert_eq!(DayAssignment::new().day_count(), 0);
    }

    #[test]
    fn test_huge_day_is_sparse() {
        let a = DayAssignment::new().with(c("Math"), Day::MAX).with(c("Art"), 2);
        assert_eq!(a.day_count(), Day::MAX);
        let groups = a.by_day();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&Day::MAX], vec![c("Math")]);
        assert_eq!(groups[&2], vec![c("Art")]);
    }

    #[test]
    fn test_entries_sorted_by_day() {
        let a = DayAssignment::new()
            .with(c("Physics"), 0)
            .with(c("Math"), 1)
            .with(c("Chemistry"), 1);
        let entries = a.entries();
        let flat: Vec<(&str, Day)> = entries.iter().map(|e| (e.course.as_str(), e.day)).collect();
        assert_eq!(flat, vec![("Physics", 0), ("Chemistry", 1), ("Math", 1)]);
    }

    #[test]
    fn test_edited_push_raw() {
        let labels = DayLabels::default();
        let mut edited = EditedSchedule::new();
        edited.push_raw("math", "Day 1", &labels);
        edited.push_raw("", "Day 2", &labels);
        edited.push_raw("art", "someday", &labels);
        assert_eq!(edited.len(), 1);
        assert_eq!(edited.entries[0].course, c("Math"));
        assert_eq!(edited.malformed.len(), 1);
        assert_eq!(edited.malformed[0].value, "someday");
    }
}
