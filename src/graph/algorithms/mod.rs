//! Graph algorithms over the [`traits`](crate::graph::traits) seams.
//!
//! Every algorithm here is a free function generic over the traits it needs, so it
//! runs on [`Graph`](crate::Graph) and on any other structure implementing them.
//! [`Graph`](crate::Graph) also exposes each of them as a method.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] / [`dfs_all`] - Depth-first search traversal
//! - [`bfs`] / [`bfs_all`] - Breadth-first search traversal
//! - [`postorder`] / [`postorder_all`] - Depth-first finish order
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Check if a graph contains any cycles
//! - [`has_cycle_from`] - Check if a cycle is reachable from a node
//! - [`find_cycle`] - Find a cycle if one exists
//!
//! ## Topological Ordering
//!
//! - [`topological_sort`] - Compute a topological ordering of nodes
//!
//! ## Strongly Connected Components
//!
//! - [`strongly_connected_components`] - Kosaraju's SCC algorithm
//! - [`component_index`] - Map each node to its component
//!
//! ## Shortest Paths
//!
//! - [`bfs_tree`] / [`shortest_path_unweighted`] - Fewest edges
//! - [`dag_tree`] / [`shortest_path_dag`] - Relaxation in topological order
//! - [`dijkstra_tree`] / [`shortest_path_dijkstra`] - Non-negative weights
//! - [`bellman_ford_tree`] / [`shortest_path_bellman_ford`] - Any weights, detects negative cycles
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | Cycle detection | O(V + E) | Acyclicity checks |
//! | Topological Sort | O(V + E) | Dependency ordering, DAG relaxation |
//! | SCC | O(V + E) | Mutual reachability, condensation |
//! | DAG relaxation | O(V + E) | Weighted paths on acyclic graphs |
//! | Dijkstra | O((V + E) log E) | Non-negative weighted paths |
//! | Bellman-Ford | O(V · E) | Negative weights, cycle detection |
//!
//! # Examples
//!
//! ```rust
//! use graphmesh::{Graph, NodeId, graph::algorithms};
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.create_di_edge(a, b)?;
//! graph.create_di_edge(b, c)?;
//!
//! let order: Vec<NodeId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//! assert!(!algorithms::has_cycle(&graph));
//!
//! graph.create_di_edge(c, a)?;
//! assert!(algorithms::has_cycle(&graph));
//! assert_eq!(algorithms::strongly_connected_components(&graph).len(), 1);
//! # Ok::<(), graphmesh::Error>(())
//! ```

mod cycles;
mod scc;
mod shortest_path;
mod topological;
mod traversal;

pub use cycles::{find_cycle, has_cycle, has_cycle_from};
pub use scc::{component_index, strongly_connected_components};
pub use shortest_path::{
    bellman_ford_tree, bfs_tree, dag_tree, dijkstra_tree, shortest_path_bellman_ford,
    shortest_path_dag, shortest_path_dijkstra, shortest_path_unweighted, PathTree, ShortestPath,
};
pub use topological::topological_sort;
pub use traversal::{bfs, bfs_all, dfs, dfs_all, postorder, postorder_all, BfsIterator, DfsIterator};
