//! Exam scheduling domain models.
//!
//! Provides the data types that flow through the scheduling pipeline:
//! registrations in, day assignments out, edited schedules back in for
//! validation.
//!
//! # Domain Mapping
//!
//! | exam-schedule | Graph coloring |
//! |---------------|----------------|
//! | Course | Vertex |
//! | Shared student | Edge |
//! | Day | Color |
//! | DayAssignment | Vertex coloring |

mod assignment;
mod course;
mod day_table;
mod registration;

pub use assignment::{
    day_number, AssignmentEntry, Day, DayAssignment, DayLabels, EditedSchedule, MalformedEntry,
};
pub use course::Course;
pub use day_table::{DayColumn, DayTable};
pub use registration::{RegistrationIssue, RegistrationTable, StudentRegistration};
