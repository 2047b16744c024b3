//! Exam timetabling by graph coloring.
//!
//! Assigns courses to as few exam days as a greedy heuristic allows, such
//! that no student has two exams on the same day, and checks hand-edited
//! timetables against the same constraint.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `RegistrationTable`,
//!   `DayAssignment`, `EditedSchedule`, `DayTable`, `DayLabels`
//! - **`graph`**: Conflict graph construction and a serializable view
//! - **`coloring`**: Welsh–Powell day assignment and schedule metrics
//! - **`validation`**: Completeness, conflict and uniqueness checks
//! - **`io`**: JSON/CSV import and export
//! - **`config`**: TOML session configuration
//! - **`demo`**: Course catalog and random registrations
//!
//! # Pipeline
//!
//! ```
//! use exam_schedule::coloring::WelshPowellColorer;
//! use exam_schedule::models::RegistrationTable;
//! use exam_schedule::validation::validate_schedule;
//!
//! let table = RegistrationTable::new()
//!     .with_student("s1", ["Math", "Physics"])
//!     .with_student("s2", ["physics", "Chemistry"]);
//!
//! let plan = WelshPowellColorer::new().plan(&table);
//! assert_eq!(plan.coloring.day_count, 2);
//!
//! let report = validate_schedule(&plan.graph, &plan.coloring.assignment);
//! assert!(report.is_valid());
//! ```
//!
//! All core operations are pure: they borrow their inputs, return new
//! values, and hold no state between calls.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"
//! - de Werra (1985), "An introduction to timetabling"

pub mod coloring;
pub mod config;
pub mod demo;
pub mod error;
pub mod graph;
pub mod io;
pub mod models;
pub mod validation;

pub use error::{Result, ScheduleError};
