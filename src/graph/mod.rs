//! Conflict graph construction.
//!
//! Courses become vertices; two courses are joined when some student is
//! registered for both. The graph is simple (no self-loops, no parallel
//! edges) and unweighted: one shared student conflicts as much as fifty.
//!
//! Vertex order is first-seen order over the registration table. The
//! colorer breaks degree ties by this order, so it is part of the graph's
//! contract rather than an implementation detail.

mod conflict;
mod view;

pub use conflict::ConflictGraph;
pub use view::{GraphView, VertexView};
