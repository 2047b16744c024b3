//! Greedy day assignment and schedule metrics.
//!
//! # Algorithm
//!
//! `WelshPowellColorer` colors the conflict graph with the Welsh–Powell
//! largest-degree-first heuristic. It always yields a proper coloring but
//! not necessarily one with the fewest days: the day count is an upper
//! bound on the chromatic number.
//!
//! # Metrics
//!
//! `ScheduleStats` summarizes a graph and an assignment: day count, per-day
//! load, degree bound, density.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"
//! - de Werra (1985), "An introduction to timetabling"

mod stats;
mod welsh_powell;

pub use stats::ScheduleStats;
pub use welsh_powell::{degree_order, Coloring, ExamPlan, WelshPowellColorer};
