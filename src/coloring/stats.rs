//! Schedule summary metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Day count | Highest assigned day + 1 |
//! | Day load | Courses held on each occupied day |
//! | Busiest day | Largest day load |
//! | Degree bound | max_degree + 1 (Welsh–Powell upper bound) |
//! | Density | \|E\| / (\|V\|·(\|V\|−1)/2) |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::ConflictGraph;
use crate::models::{Day, DayAssignment};

/// Summary of a graph and a day assignment over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Number of courses in the graph.
    pub course_count: usize,
    /// Number of conflicts.
    pub conflict_count: usize,
    /// Largest course degree.
    pub max_degree: usize,
    /// Welsh–Powell bound on the day count (0 for an empty graph).
    pub degree_bound: usize,
    /// Edge density in `0.0..=1.0`.
    pub density: f64,
    /// Days spanned by the assignment.
    pub day_count: usize,
    /// Courses per occupied day.
    pub courses_per_day: BTreeMap<Day, usize>,
    /// Largest day load.
    pub busiest_day_load: usize,
}

impl ScheduleStats {
    /// Computes stats for an assignment over `graph`.
    pub fn calculate(graph: &ConflictGraph, assignment: &DayAssignment) -> Self {
        let n = graph.vertex_count();
        let conflict_count = graph.edge_count();
        let max_degree = graph.max_degree();

        let pairs = n * n.saturating_sub(1) / 2;
        let density = if pairs == 0 {
            0.0
        } else {
            conflict_count as f64 / pairs as f64
        };

        let day_count = assignment.day_count();
        let mut courses_per_day: BTreeMap<Day, usize> = BTreeMap::new();
        for (_, day) in assignment.iter() {
            *courses_per_day.entry(day).or_default() += 1;
        }
        let busiest_day_load = courses_per_day.values().copied().max().unwrap_or(0);

        Self {
            course_count: n,
            conflict_count,
            max_degree,
            degree_bound: if n == 0 { 0 } else { max_degree + 1 },
            density,
            day_count,
            courses_per_day,
            busiest_day_load,
        }
    }

    /// Whether the day count respects the Welsh–Powell bound.
    pub fn within_degree_bound(&self) -> bool {
        self.day_count <= self.degree_bound
    }
}
