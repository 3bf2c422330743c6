//! Strongly Connected Components (SCC) using Kosaraju's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that there is
//! a directed path from every vertex to every other vertex in the set.
//!
//! Kosaraju's algorithm runs two depth-first passes:
//!
//! 1. DFS the whole graph, pushing every node onto a stack when its exploration
//!    finishes (postorder).
//! 2. Pop the stack; each popped node not yet assigned seeds a DFS on the
//!    transposed graph, and everything that DFS reaches forms one component.
//!
//! The transposed graph is read through [`Predecessors`] rather than by reversing
//! the graph in place and back, so the analysis only needs a shared borrow.
//!
//! On an undirected graph (every edge mirrored) this degenerates to ordinary
//! connected components.

use crate::graph::{algorithms::postorder_all, NodeId, Predecessors, Successors};

/// Computes the strongly connected components of a directed graph.
///
/// # Returns
///
/// A vector of SCCs, each a vector of `NodeId`s. Components are returned in
/// **topological order of the condensation**: if an edge leads from component A to
/// component B, A appears before B. Inside a component, nodes appear in the order
/// the transposed DFS discovered them, starting with the component's seed.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, graph::algorithms::strongly_connected_components};
///
/// // Cycle A -> B -> C -> A, plus a bridge C -> D
/// let mut graph: Graph<char> = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// let d = graph.add_node('D');
/// graph.create_di_edge(a, b)?;
/// graph.create_di_edge(b, c)?;
/// graph.create_di_edge(c, a)?;
/// graph.create_di_edge(c, d)?;
///
/// let sccs = strongly_connected_components(&graph);
/// assert_eq!(sccs.len(), 2);
/// assert_eq!(sccs[0].len(), 3);
/// assert_eq!(sccs[1], vec![d]);
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: Successors + Predecessors,
{
    let mut finished = postorder_all(graph);
    let mut assigned = vec![false; graph.node_bound()];
    let mut components = Vec::new();

    while let Some(seed) = finished.pop() {
        if assigned[seed.index()] {
            continue;
        }
        assigned[seed.index()] = true;

        let mut component = Vec::new();
        let mut stack = vec![seed];
        while let Some(node) = stack.pop() {
            component.push(node);
            for pred in graph.predecessors(node) {
                if !assigned[pred.index()] {
                    assigned[pred.index()] = true;
                    stack.push(pred);
                }
            }
        }

        components.push(component);
    }

    tracing::debug!(
        nodes = graph.node_count(),
        components = components.len(),
        "computed strongly connected components"
    );

    components
}

/// Returns the index of the component containing each node, indexed by
/// [`NodeId::index`]; `None` for vacant slots.
///
/// # Arguments
///
/// * `node_bound` - Length of the returned vector, see
///   [`GraphBase::node_bound`](crate::graph::traits::GraphBase::node_bound)
/// * `components` - As returned by [`strongly_connected_components`]
#[must_use]
pub fn component_index(node_bound: usize, components: &[Vec<NodeId>]) -> Vec<Option<usize>> {
    let mut index = vec![None; node_bound];
    for (component, nodes) in components.iter().enumerate() {
        for node in nodes {
            index[node.index()] = Some(component);
        }
    }
    index
}
