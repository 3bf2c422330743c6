//! Node identifier and node storage for the graph arena.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for nodes
//! within a [`Graph`](crate::Graph), and [`Node`], the per-node record holding the
//! node's value and its adjacency lists.
//!
//! Identifiers carry the tag of the graph instance that minted them. A graph only
//! accepts its own identifiers, so a `NodeId` from another graph is treated exactly
//! like a node that was never added.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::graph::edge::EdgeId;

/// Identity of a graph instance, embedded in every [`NodeId`] and [`EdgeId`] it mints.
///
/// Tag `0` is never handed out, so identifiers built with [`NodeId::new`] or
/// [`EdgeId::new`] are foreign to every graph. The counter is 64 bits wide and
/// does not wrap in practice.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub(crate) struct GraphTag(u64);

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

impl GraphTag {
    /// The tag of identifiers not minted by any graph.
    pub(crate) const DETACHED: GraphTag = GraphTag(0);

    /// Returns a tag not used by any other live graph.
    pub(crate) fn fresh() -> Self {
        GraphTag(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

/// A strongly-typed identifier for nodes within a [`Graph`](crate::Graph).
///
/// `NodeId` wraps a slot index plus the tag of the owning graph, preventing
/// accidental mixing of node indices with other integer values and with nodes of
/// other graphs. Node IDs are assigned sequentially starting from 0 when nodes are
/// added; the slot of a deleted node is never reused, so a stale `NodeId` can never
/// silently alias a newer node.
///
/// # Usage
///
/// Node IDs are created by [`Graph::add_node`](crate::Graph::add_node) and are used to:
///
/// - Reference nodes when creating edges
/// - Look up node values
/// - Query adjacency relationships and degrees
/// - Index per-node algorithm results
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, NodeId};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let node_a: NodeId = graph.add_node("A");
/// let node_b: NodeId = graph.add_node("B");
///
/// assert_ne!(node_a, node_b);
/// assert_eq!(node_a.index(), 0);
/// assert_eq!(node_b.index(), 1);
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub(crate) owner: GraphTag,
    pub(crate) index: usize,
}

impl NodeId {
    /// Creates a `NodeId` from a raw index that belongs to no graph.
    ///
    /// Primarily intended for tests and for implementors of the
    /// [`traits`](crate::graph::traits) on their own graph types. Every
    /// [`Graph`](crate::Graph) rejects such an identifier with
    /// [`Error::NodeNotFound`](crate::Error::NodeNotFound).
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node index (0-based)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphmesh::NodeId;
    ///
    /// let node = NodeId::new(0);
    /// assert_eq!(node.index(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId {
            owner: GraphTag::DETACHED,
            index,
        }
    }

    #[inline]
    pub(crate) const fn owned(owner: GraphTag, index: usize) -> Self {
        NodeId { owner, index }
    }

    /// The same slot, stamped with another graph's tag.
    #[inline]
    pub(crate) const fn restamp(self, owner: GraphTag) -> Self {
        NodeId::owned(owner, self.index)
    }

    /// Returns the raw slot index of this node identifier.
    ///
    /// The index is a 0-based position that can be used to index into vectors
    /// storing per-node data, sized by [`GraphBase::node_bound`](crate::graph::traits::GraphBase::node_bound).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index)
    }
}

/// A node stored in a [`Graph`](crate::Graph): its value and its adjacency lists.
///
/// The outgoing list is the node's edge collection in insertion order. The incoming
/// list is an index maintained by the graph so that in-degree queries and node
/// deletion do not have to scan every other node. Neither list ever holds the same
/// [`EdgeId`] twice; distinct edges to the same neighbour (multi-edges) are allowed.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Returns the value carried by this node.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the outgoing edges in insertion order.
    #[must_use]
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Returns the incoming edges in insertion order.
    #[must_use]
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// Number of edges leaving this node.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of edges entering this node.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Appends an outgoing edge; a no-op returning `false` if it is already present.
    pub(crate) fn attach_outgoing(&mut self, edge: EdgeId) -> bool {
        if self.outgoing.contains(&edge) {
            return false;
        }
        self.outgoing.push(edge);
        true
    }

    /// Appends an incoming edge; a no-op returning `false` if it is already present.
    pub(crate) fn attach_incoming(&mut self, edge: EdgeId) -> bool {
        if self.incoming.contains(&edge) {
            return false;
        }
        self.incoming.push(edge);
        true
    }

    /// Removes an outgoing edge, keeping the order of the others.
    pub(crate) fn detach_outgoing(&mut self, edge: EdgeId) -> bool {
        match self.outgoing.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.outgoing.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes an incoming edge, keeping the order of the others.
    pub(crate) fn detach_incoming(&mut self, edge: EdgeId) -> bool {
        match self.incoming.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.incoming.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn take_outgoing(&mut self) -> Vec<EdgeId> {
        std::mem::take(&mut self.outgoing)
    }

    pub(crate) fn take_incoming(&mut self) -> Vec<EdgeId> {
        std::mem::take(&mut self.incoming)
    }

    /// Exchanges the outgoing and incoming lists, as needed when every edge is flipped.
    pub(crate) fn swap_directions(&mut self) {
        std::mem::swap(&mut self.outgoing, &mut self.incoming);
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

impl<T: Clone> Node<T> {
    /// Copies the node with every adjacency entry stamped with `owner`.
    pub(crate) fn restamped(&self, owner: GraphTag) -> Self {
        Node {
            value: self.value.clone(),
            outgoing: self.outgoing.iter().map(|edge| edge.restamp(owner)).collect(),
            incoming: self.incoming.iter().map(|edge| edge.restamp(owner)).collect(),
        }
    }
}
