//! Undirected hull edge keyed by vertex identity.

use crate::triangle::VertexId;

/// Unordered pair of vertex handles.
///
/// Stored with the smaller handle first so `Edge::new(a, b) == Edge::new(b, a)`.
/// Equality and hashing never look at coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// Creates the edge between two vertices, in either order.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Both endpoints, smaller handle first.
    #[inline]
    pub fn vertices(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// Returns true if `id` is an endpoint.
    #[inline]
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.a == id || self.b == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_edge_is_unordered() {
        let (a, b) = (VertexId::new(4), VertexId::new(1));
        assert_eq!(Edge::new(a, b), Edge::new(b, a));
        assert_eq!(Edge::new(a, b).vertices(), (b, a));
    }

    #[test]
    fn test_edge_toggle_cancels_shared_edges() {
        let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
        let mut set = HashSet::new();
        for edge in [Edge::new(a, b), Edge::new(b, c), Edge::new(b, a)] {
            if !set.remove(&edge) {
                set.insert(edge);
            }
        }
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Edge::new(c, b)));
    }

    #[test]
    fn test_edge_membership() {
        let edge = Edge::new(VertexId::new(2), VertexId::new(5));
        assert!(edge.has_vertex(VertexId::new(5)));
        assert!(!edge.has_vertex(VertexId::new(3)));
    }
}
