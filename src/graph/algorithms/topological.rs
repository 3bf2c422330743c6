//! Topological sorting for directed acyclic graphs (DAGs).
//!
//! This module provides Kahn's algorithm for computing a topological ordering
//! of nodes in a directed acyclic graph. A topological ordering is a linear
//! ordering of vertices such that for every directed edge (u, v), vertex u
//! comes before v in the ordering.
//!
//! # Use Cases
//!
//! - Relaxing shortest paths on a DAG in a single pass
//! - Dependency resolution and task scheduling with precedence constraints
//! - Checking acyclicity while producing a witness ordering

use std::collections::VecDeque;

use crate::graph::{NodeId, Predecessors, Successors};

/// Computes a topological ordering of every node in the graph.
///
/// Uses Kahn's algorithm which processes nodes with no incoming edges first,
/// then removes those nodes and repeats. This produces a valid topological
/// ordering if and only if the graph is acyclic. Among nodes that become ready
/// at the same time, lower indices come first.
///
/// # Arguments
///
/// * `graph` - The graph to sort topologically
///
/// # Returns
///
/// `Some(Vec<NodeId>)` containing nodes in topological order if the graph is
/// acyclic (a DAG), `None` if the graph contains a cycle. A self-loop is a cycle.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the in-degree counts and queue
///
/// # Algorithm
///
/// 1. Compute in-degree for all nodes (parallel edges each count)
/// 2. Initialize queue with all nodes having in-degree 0
/// 3. While queue is not empty:
///    - Remove a node from the queue and add to result
///    - For each successor, decrement its in-degree
///    - If successor's in-degree becomes 0, add to queue
/// 4. If result contains all nodes, return it; otherwise graph has a cycle
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, graph::algorithms::topological_sort};
///
/// // A simple DAG: A -> B -> D, A -> C -> D
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// let d = graph.add_node("D");
/// graph.create_di_edge(a, b)?;
/// graph.create_di_edge(a, c)?;
/// graph.create_di_edge(b, d)?;
/// graph.create_di_edge(c, d)?;
///
/// assert_eq!(topological_sort(&graph), Some(vec![a, b, c, d]));
///
/// // Closing a cycle makes sorting impossible
/// graph.create_di_edge(d, a)?;
/// assert!(topological_sort(&graph).is_none());
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub fn topological_sort<G>(graph: &G) -> Option<Vec<NodeId>>
where
    G: Successors + Predecessors,
{
    let node_count = graph.node_count();
    if node_count == 0 {
        return Some(Vec::new());
    }

    // Compute in-degrees
    let mut in_degree: Vec<usize> = vec![0; graph.node_bound()];
    for node in graph.node_ids() {
        in_degree[node.index()] = graph.predecessors(node).count();
    }

    // Initialize queue with nodes having in-degree 0
    let mut queue: VecDeque<NodeId> = graph
        .node_ids()
        .filter(|node| in_degree[node.index()] == 0)
        .collect();

    let mut result = Vec::with_capacity(node_count);

    while let Some(node) = queue.pop_front() {
        result.push(node);

        for successor in graph.successors(node) {
            in_degree[successor.index()] -= 1;
            if in_degree[successor.index()] == 0 {
                queue.push_back(successor);
            }
        }
    }

    // If we didn't process all nodes, there must be a cycle
    if result.len() == node_count {
        Some(result)
    } else {
        tracing::trace!(
            sorted = result.len(),
            nodes = node_count,
            "topological sort stopped at a cycle"
        );
        None
    }
}
