//! Course conflict graph.
//!
//! # Algorithm
//!
//! 1. Walk students in table order; number each course the first time it
//!    is seen. This numbering is the vertex order.
//! 2. For every student, connect every unordered pair of distinct courses
//!    in their (deduplicated) selection.
//!
//! # Complexity
//! O(Σ k_s²) where k_s is the number of courses student `s` takes.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::{Course, RegistrationTable};

/// Undirected simple graph of course conflicts.
///
/// Vertices are courses in first-seen order; an edge joins two courses
/// that share at least one student. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictGraph {
    vertices: Vec<Course>,
    index: HashMap<Course, usize>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl ConflictGraph {
    /// Builds the conflict graph from a registration table.
    ///
    /// Never fails: students without usable courses are skipped, blank
    /// course names are dropped. A student with a single course still
    /// contributes that course as an isolated vertex.
    pub fn build(table: &RegistrationTable) -> Self {
        let mut graph = Self::default();

        for (student, courses) in table.selections() {
            if courses.is_empty() {
                debug!(student, "skipping registration with no usable courses");
                continue;
            }

            let ids: Vec<usize> = courses
                .into_iter()
                .map(|course| graph.intern(course))
                .collect();

            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    graph.adjacency[a].insert(b);
                    graph.adjacency[b].insert(a);
                }
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built conflict graph"
        );
        graph
    }

    /// Builds a graph directly from an edge list.
    ///
    /// Courses are numbered in order of first appearance across the edges;
    /// self-loops and repeated edges are ignored.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a Course, &'a Course)>,
    {
        let mut graph = Self::default();
        for (a, b) in edges {
            let a = graph.intern(a.clone());
            let b = graph.intern(b.clone());
            if a != b {
                graph.adjacency[a].insert(b);
                graph.adjacency[b].insert(a);
            }
        }
        graph
    }

    fn intern(&mut self, course: Course) -> usize {
        if let Some(&id) = self.index.get(&course) {
            return id;
        }
        let id = self.vertices.len();
        self.index.insert(course.clone(), id);
        self.vertices.push(course);
        self.adjacency.push(BTreeSet::new());
        id
    }

    /// Courses in first-seen order.
    pub fn vertices(&self) -> &[Course] {
        &self.vertices
    }

    /// Number of courses.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no courses.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the course is a vertex.
    pub fn contains(&self, course: &Course) -> bool {
        self.index.contains_key(course)
    }

    /// First-seen index of a course.
    pub fn index_of(&self, course: &Course) -> Option<usize> {
        self.index.get(course).copied()
    }

    /// Course at a first-seen index.
    pub fn course(&self, index: usize) -> Option<&Course> {
        self.vertices.get(index)
    }

    /// Courses conflicting with `course`, in first-seen order.
    ///
    /// Empty if the course is not in the graph.
    pub fn neighbors<'a>(&'a self, course: &Course) -> impl Iterator<Item = &'a Course> + 'a {
        self.index_of(course)
            .into_iter()
            .flat_map(move |i| self.neighbor_indices(i))
            .map(move |j| &self.vertices[j])
    }

    /// Neighbor indices of the vertex at `index`, ascending.
    pub fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(index)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Number of conflicting courses. Zero for unknown courses.
    pub fn degree(&self, course: &Course) -> usize {
        self.index_of(course).map_or(0, |i| self.degree_at(i))
    }

    /// Degree of the vertex at `index`.
    pub fn degree_at(&self, index: usize) -> usize {
        self.adjacency.get(index).map_or(0, BTreeSet::len)
    }

    /// Largest degree, 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Whether two courses conflict.
    pub fn is_adjacent(&self, a: &Course, b: &Course) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }

    /// Edges as index pairs `(i, j)` with `i < j`, ordered by `i` then `j`.
    pub fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, set)| {
            set.range(i + 1..).map(move |&j| (i, j))
        })
    }

    /// Edges as course pairs, in [`edge_indices`](Self::edge_indices) order.
    pub fn edges(&self) -> impl Iterator<Item = (&Course, &Course)> + '_ {
        self.edge_indices()
            .map(|(i, j)| (&self.vertices[i], &self.vertices[j]))
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }
}
