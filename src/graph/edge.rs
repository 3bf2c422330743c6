//! Edge identifier and edge record for the graph arena.
//!
//! This module provides the [`EdgeId`] type, a strongly-typed identifier for edges
//! within a [`Graph`](crate::Graph), and [`Edge`], the directed weighted connection
//! it names. Edges are distinguished by identity, not by their endpoints: two edges
//! between the same pair of nodes are two different edges.

use std::fmt;

use crate::graph::node::{GraphTag, NodeId};

/// A strongly-typed identifier for edges within a [`Graph`](crate::Graph).
///
/// `EdgeId` wraps a slot index plus the tag of the owning graph, preventing
/// accidental mixing of edge indices with node indices or with edges of other
/// graphs. Edge IDs are assigned sequentially starting from 0 and are never
/// reused after the edge is removed.
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, EdgeId};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let edge: EdgeId = graph.create_weighted_di_edge(a, b, 7)?;
///
/// assert_eq!(graph.edge(edge).map(|e| e.weight()), Some(7));
/// assert_eq!(graph.edge(edge).map(|e| e.endpoints()), Some((a, b)));
/// # Ok::<(), graphmesh::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    pub(crate) owner: GraphTag,
    pub(crate) index: usize,
}

impl EdgeId {
    /// Creates an `EdgeId` from a raw index that belongs to no graph.
    ///
    /// Every [`Graph`](crate::Graph) rejects such an identifier with
    /// [`Error::EdgeNotFound`](crate::Error::EdgeNotFound).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId {
            owner: GraphTag::DETACHED,
            index,
        }
    }

    #[inline]
    pub(crate) const fn owned(owner: GraphTag, index: usize) -> Self {
        EdgeId { owner, index }
    }

    /// The same slot, stamped with another graph's tag.
    #[inline]
    pub(crate) const fn restamp(self, owner: GraphTag) -> Self {
        EdgeId::owned(owner, self.index)
    }

    /// Returns the raw slot index of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.index)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.index)
    }
}

/// A directed connection from `source` to `target` carrying an integer weight.
///
/// The edge is owned by its source node's outgoing list; `target` is a non-owning
/// reference into the graph's node arena. Undirected connections are modelled as
/// two independent `Edge`s, one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    weight: i64,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, source: NodeId, target: NodeId, weight: i64) -> Self {
        Edge {
            id,
            source,
            target,
            weight,
        }
    }

    /// The identity of this edge.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The node this edge leaves.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The node this edge enters.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The edge weight.
    #[must_use]
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Returns `(source, target)`.
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.source, self.target)
    }

    /// Returns `true` if the edge starts and ends at the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Swaps source and target in place.
    pub(crate) fn flip(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    /// Copies the edge with its id and endpoints stamped with `owner`.
    pub(crate) fn restamped(&self, owner: GraphTag) -> Self {
        Edge {
            id: self.id.restamp(owner),
            source: self.source.restamp(owner),
            target: self.target.restamp(owner),
            weight: self.weight,
        }
    }
}
