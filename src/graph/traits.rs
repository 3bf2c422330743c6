//! Trait definitions for graph abstractions.
//!
//! This module defines the traits that the algorithms in
//! [`algorithms`](crate::graph::algorithms) are written against. By programming
//! against these traits, the same traversal, cycle, component and shortest-path code
//! runs on [`Graph`](crate::Graph) and on any other adjacency structure a caller
//! wants to analyze.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node slot bound, membership and node iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//! - [`Predecessors`] - Backward edge traversal (incoming edges), i.e. the transposed graph
//! - [`WeightedSuccessors`] - Forward traversal with edge identity and weight
//!
//! # Node Indexing
//!
//! Algorithms keep per-node state in vectors indexed by [`NodeId::index`]. A graph
//! reports the exclusive upper bound of its indices through
//! [`GraphBase::node_bound`]; that bound may exceed [`GraphBase::node_count`] when
//! slots have been vacated by deletion.

use crate::graph::{EdgeId, NodeId};

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, graph::traits::GraphBase};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("A");
/// graph.add_node("B");
/// graph.delete_node(a)?;
///
/// assert_eq!(GraphBase::node_count(&graph), 1);
/// assert_eq!(graph.node_bound(), 2);
/// assert!(!GraphBase::contains_node(&graph, a));
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub trait GraphBase {
    /// Returns the number of live nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an exclusive upper bound on [`NodeId::index`] of every live node.
    ///
    /// Per-node algorithm state is allocated with this length.
    fn node_bound(&self) -> usize {
        self.node_count()
    }

    /// Returns an iterator over all live node identifiers, in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` is a live node of this graph.
    ///
    /// The default accepts any index below [`node_bound`](GraphBase::node_bound);
    /// graphs that can vacate slots or reject foreign identifiers override it.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_bound()
    }

    /// Renders `node` for error messages.
    ///
    /// The default prints the identifier; graphs that carry values print the value.
    fn describe(&self, node: NodeId) -> String {
        node.to_string()
    }
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`. A node with
    /// several parallel edges to the same target yields that target once per edge.
    ///
    /// A node that is not live yields an empty iterator. [`Graph`](crate::Graph)
    /// guarantees this, so callers need no membership check first.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
///
/// Walking predecessors is walking the transposed graph, which is how the second
/// pass of Kosaraju's algorithm avoids reversing the graph in place.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `u` is a predecessor of `v`.
    ///
    /// A node that is not live yields an empty iterator. [`Graph`](crate::Graph)
    /// guarantees this, so callers need no membership check first.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs whose edges carry identity and an integer weight.
///
/// Required by the shortest-path family, which records the edge used to reach
/// each node and relaxes costs along edge weights.
pub trait WeightedSuccessors: Successors {
    /// Returns `(edge, target, weight)` for every outgoing edge of `node`.
    ///
    /// A node that is not live yields an empty iterator. [`Graph`](crate::Graph)
    /// guarantees this, so callers need no membership check first.
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, NodeId, i64)>;

    /// Returns `(source, target)` of an edge, or `None` if it is not part of the graph.
    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal edge-list graph for trait testing
    struct TestGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId, i64)>,
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.node_count).map(NodeId::new)
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(src, _, _)| *src == node)
                .map(|(_, dst, _)| *dst)
        }
    }

    impl Predecessors for TestGraph {
        fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(_, dst, _)| *dst == node)
                .map(|(src, _, _)| *src)
        }
    }

    impl WeightedSuccessors for TestGraph {
        fn weighted_successors(
            &self,
            node: NodeId,
        ) -> impl Iterator<Item = (EdgeId, NodeId, i64)> {
            self.edges
                .iter()
                .enumerate()
                .filter(move |(_, (src, _, _))| *src == node)
                .map(|(i, (_, dst, w))| (EdgeId::new(i), *dst, *w))
        }

        fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
            self.edges
                .get(edge.index())
                .map(|(src, dst, _)| (*src, *dst))
        }
    }

    fn sample() -> TestGraph {
        TestGraph {
            node_count: 4,
            edges: vec![
                (NodeId::new(0), NodeId::new(1), 3),
                (NodeId::new(0), NodeId::new(2), 1),
                (NodeId::new(1), NodeId::new(3), 2),
            ],
        }
    }

    #[test]
    fn test_graph_base_defaults() {
        let graph = sample();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.node_bound(), 4);
        assert!(graph.contains_node(NodeId::new(3)));
        assert!(!graph.contains_node(NodeId::new(4)));

        let ids: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], NodeId::new(0));
    }

    #[test]
    fn test_successors_and_predecessors() {
        let graph = sample();

        let succ: Vec<NodeId> = graph.successors(NodeId::new(0)).collect();
        assert_eq!(succ, vec![NodeId::new(1), NodeId::new(2)]);
        assert_eq!(graph.successors(NodeId::new(3)).count(), 0);

        let pred: Vec<NodeId> = graph.predecessors(NodeId::new(3)).collect();
        assert_eq!(pred, vec![NodeId::new(1)]);
        assert_eq!(graph.predecessors(NodeId::new(0)).count(), 0);
    }

    #[test]
    fn test_weighted_successors() {
        let graph = sample();
        let weighted: Vec<(EdgeId, NodeId, i64)> =
            graph.weighted_successors(NodeId::new(0)).collect();
        assert_eq!(
            weighted,
            vec![
                (EdgeId::new(0), NodeId::new(1), 3),
                (EdgeId::new(1), NodeId::new(2), 1)
            ]
        );
        assert_eq!(
            graph.edge_endpoints(EdgeId::new(2)),
            Some((NodeId::new(1), NodeId::new(3)))
        );
        assert_eq!(graph.edge_endpoints(EdgeId::new(9)), None);
    }
}
