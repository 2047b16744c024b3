//! Welsh–Powell greedy day assignment.
//!
//! # Algorithm
//!
//! 1. Order courses by degree, highest first. Equal degrees keep the
//!    conflict graph's first-seen order (stable sort on `-degree`).
//! 2. Open day 0. Scan the ordered list; give the open day to every
//!    unassigned course that has no neighbor already placed on it.
//! 3. Open the next day and scan again, until every course has a day.
//!
//! The first unassigned course in the order always fits the open day, so
//! each pass places at least one course and at most |V| passes are needed.
//! The result uses at most `max_degree + 1` days.
//!
//! # Complexity
//! O(d · (|V| + |E|)) where d is the number of days used.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::graph::ConflictGraph;
use crate::models::{Course, Day, DayAssignment, DayLabels, DayTable, RegistrationTable};

/// Output of the colorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    /// Course → day.
    pub assignment: DayAssignment,
    /// Number of days used (0 for an empty graph).
    pub day_count: usize,
    /// Courses in the degree order the colorer scanned them.
    pub order: Vec<Course>,
    /// Courses per day, each day in scan order.
    pub days: Vec<Vec<Course>>,
}

impl Coloring {
    /// Day assigned to a course.
    pub fn day_of(&self, course: &Course) -> Option<Day> {
        self.assignment.day_of(course)
    }

    /// Courses held on `day`, in scan order.
    pub fn courses_on(&self, day: Day) -> &[Course] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Day-column table of this coloring.
    pub fn to_table(&self, labels: &DayLabels) -> DayTable {
        DayTable::from_groups(&self.days, labels)
    }
}

/// A conflict graph together with its initial coloring.
#[derive(Debug, Clone, Default)]
pub struct ExamPlan {
    /// Conflict graph built from the registrations.
    pub graph: ConflictGraph,
    /// Initial day assignment.
    pub coloring: Coloring,
}

/// Welsh–Powell graph colorer.
///
/// # Example
///
/// ```
/// use exam_schedule::coloring::WelshPowellColorer;
/// use exam_schedule::graph::ConflictGraph;
/// use exam_schedule::models::RegistrationTable;
///
/// let table = RegistrationTable::new()
///     .with_student("s1", ["Math", "Physics"])
///     .with_student("s2", ["Physics", "Art"]);
/// let graph = ConflictGraph::build(&table);
///
/// let coloring = WelshPowellColorer::new().color(&graph);
/// assert_eq!(coloring.day_count, 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WelshPowellColorer;

impl WelshPowellColorer {
    /// Creates a colorer.
    pub fn new() -> Self {
        Self
    }

    /// Assigns every course of `graph` to a day.
    pub fn color(&self, graph: &ConflictGraph) -> Coloring {
        let order = degree_order(graph);
        let n = graph.vertex_count();
        let mut day_of: Vec<Option<Day>> = vec![None; n];
        let mut days: Vec<Vec<usize>> = Vec::new();
        let mut remaining = n;

        while remaining > 0 {
            let day = days.len();
            // Vertices adjacent to something already placed on `day`.
            let mut blocked = vec![false; n];
            let mut placed = Vec::new();

            for &v in &order {
                if day_of[v].is_some() || blocked[v] {
                    continue;
                }
                day_of[v] = Some(day);
                placed.push(v);
                for u in graph.neighbor_indices(v) {
                    blocked[u] = true;
                }
            }

            trace!(day, placed = placed.len(), "welsh-powell pass");
            remaining -= placed.len();
            days.push(placed);
        }

        let course = |i: usize| graph.vertices()[i].clone();
        let assignment: DayAssignment = day_of
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (course(i), d)))
            .collect();

        debug!(
            courses = n,
            days = days.len(),
            max_degree = graph.max_degree(),
            "colored conflict graph"
        );

        Coloring {
            assignment,
            day_count: days.len(),
            order: order.iter().map(|&i| course(i)).collect(),
            days: days
                .iter()
                .map(|group| group.iter().map(|&i| course(i)).collect())
                .collect(),
        }
    }

    /// Builds the conflict graph for `table` and colors it.
    pub fn plan(&self, table: &RegistrationTable) -> ExamPlan {
        let graph = ConflictGraph::build(table);
        let coloring = self.color(&graph);
        ExamPlan { graph, coloring }
    }
}

/// Vertex indices sorted by degree descending, ties in first-seen order.
pub fn degree_order(graph: &ConflictGraph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
    // `sort_by_key` is stable.
    order.sort_by_key(|&i| std::cmp::Reverse(graph.degree_at(i)));
    order
}
