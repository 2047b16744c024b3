//! Serializable graph snapshot for rendering.

use serde::{Deserialize, Serialize};

use super::ConflictGraph;
use crate::models::{Course, Day, DayAssignment};

/// A vertex as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexView {
    /// Course.
    pub course: Course,
    /// Number of conflicting courses.
    pub degree: usize,
    /// Assigned day, if a coloring was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<Day>,
}

/// Flat vertex/edge lists, vertices in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    /// Vertices.
    pub vertices: Vec<VertexView>,
    /// Edges as `(first, second)` course pairs.
    pub edges: Vec<(Course, Course)>,
}

impl GraphView {
    /// Snapshot of the graph without day information.
    pub fn new(graph: &ConflictGraph) -> Self {
        let vertices = graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, course)| VertexView {
                course: course.clone(),
                degree: graph.degree_at(i),
                day: None,
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();
        Self { vertices, edges }
    }

    /// Attaches days from an assignment.
    pub fn with_days(mut self, assignment: &DayAssignment) -> Self {
        for vertex in &mut self.vertices {
            vertex.day = assignment.day_of(&vertex.course);
        }
        self
    }
}

impl From<&ConflictGraph> for GraphView {
    fn from(graph: &ConflictGraph) -> Self {
        Self::new(graph)
    }
}
