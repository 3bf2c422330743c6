//! Structural classification of a graph.
//!
//! [`GraphProperties`] summarizes the shape of a graph as a set of flags, computed
//! in one call by [`classify`] (or [`Graph::properties`](crate::Graph::properties)).

use bitflags::bitflags;

use crate::graph::{algorithms, NodeId, Predecessors, Successors};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Structural properties of a directed graph
    pub struct GraphProperties: u8 {
        /// The graph has no nodes
        const EMPTY = 0x01;
        /// At least one edge starts and ends at the same node
        const HAS_LOOP = 0x02;
        /// The graph contains a directed cycle (self-loops included)
        const CYCLIC = 0x04;
        /// Every node is reachable from every other when edge direction is ignored
        const CONNECTED = 0x08;
        /// Every node is reachable from every other along directed edges
        const STRONGLY_CONNECTED = 0x10;
    }
}

impl GraphProperties {
    /// Returns `true` if the graph has no directed cycle.
    #[must_use]
    pub fn is_acyclic(self) -> bool {
        !self.contains(Self::CYCLIC)
    }
}

/// Weak connectivity: a traversal over successors and predecessors from any node
/// reaches every node.
fn weakly_connected<G: Successors + Predecessors>(graph: &G) -> bool {
    let Some(root) = graph.node_ids().next() else {
        return false;
    };

    let mut seen = vec![false; graph.node_bound()];
    seen[root.index()] = true;
    let mut stack = vec![root];
    let mut reached = 1;

    while let Some(node) = stack.pop() {
        for next in graph.successors(node).chain(graph.predecessors(node)) {
            if !seen[next.index()] {
                seen[next.index()] = true;
                reached += 1;
                stack.push(next);
            }
        }
    }

    reached == graph.node_count()
}

fn has_self_loop<G: Successors>(graph: &G) -> bool {
    graph
        .node_ids()
        .any(|node| graph.successors(node).any(|succ: NodeId| succ == node))
}

/// Computes the [`GraphProperties`] of a graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, GraphProperties};
///
/// let mut graph: Graph<u32> = Graph::new();
/// let n: Vec<_> = (0..4).map(|v| graph.add_node(v)).collect();
/// graph.create_di_edge(n[0], n[1])?;
/// graph.create_di_edge(n[1], n[2])?;
/// graph.create_di_edge(n[2], n[0])?;
/// graph.create_bi_edge(n[2], n[3])?;
///
/// assert_eq!(
///     graph.properties(),
///     GraphProperties::CYCLIC | GraphProperties::CONNECTED | GraphProperties::STRONGLY_CONNECTED
/// );
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub fn classify<G: Successors + Predecessors>(graph: &G) -> GraphProperties {
    if graph.node_count() == 0 {
        return GraphProperties::EMPTY;
    }

    let mut properties = GraphProperties::empty();
    if has_self_loop(graph) {
        properties |= GraphProperties::HAS_LOOP | GraphProperties::CYCLIC;
    } else if algorithms::has_cycle(graph) {
        properties |= GraphProperties::CYCLIC;
    }
    if weakly_connected(graph) {
        properties |= GraphProperties::CONNECTED;
        if algorithms::strongly_connected_components(graph).len() == 1 {
            properties |= GraphProperties::STRONGLY_CONNECTED;
        }
    }

    tracing::debug!(?properties, "classified graph");
    properties
}
