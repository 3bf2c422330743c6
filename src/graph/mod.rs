//! In-memory directed graph engine.
//!
//! This module provides [`Graph`], a directed, integer-weighted multigraph whose
//! nodes carry unique values, together with the algorithms that run on it:
//! traversal, cycle detection, strongly connected components, topological
//! ordering and shortest paths.
//!
//! # Architecture
//!
//! The graph module is organized into several components:
//!
//! - **Core Types**: [`NodeId`], [`EdgeId`], [`Node`], [`Edge`] and [`Graph`] provide
//!   the fundamental building blocks for graph representation
//! - **Algorithms**: Traversal, cycle detection, SCC, topological sorting and
//!   shortest paths in [`algorithms`]
//! - **Traits**: Abstraction traits in [`traits`] enabling algorithms to work with
//!   different graph types
//! - **Properties**: [`GraphProperties`] structural classification
//!
//! # Design Principles
//!
//! ## Arena Storage
//!
//! Nodes and edges live in two arenas owned by the graph and refer to each other
//! by identifier, never by reference. Cyclic graphs therefore need no shared
//! ownership, and copying a graph is a plain clone of the arenas.
//!
//! ## Strongly-Typed Identifiers
//!
//! Node and edge identifiers use newtype wrappers to prevent accidental mixing of
//! indices. They also carry the identity of the graph that minted them, so an
//! identifier from another graph is reported as not found instead of silently
//! naming an unrelated node.
//!
//! ## Undirected Edges
//!
//! There is no undirected edge type. [`Graph::create_bi_edge`] inserts two
//! independent directed edges, and each direction is deleted separately.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphmesh::Graph;
//!
//! // Create a diamond-shaped graph: A -> B, A -> C, B -> D, C -> D
//! let mut graph: Graph<&str> = Graph::new();
//!
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//!
//! graph.create_weighted_di_edge(a, b, 1)?;
//! graph.create_weighted_di_edge(a, c, 5)?;
//! graph.create_weighted_di_edge(b, d, 1)?;
//! graph.create_weighted_di_edge(c, d, 1)?;
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert!(!graph.has_cycle());
//!
//! let path = graph.shortest_path_dijkstra(a, d)?;
//! assert_eq!(path.nodes(), &[a, b, d]);
//! assert_eq!(path.cost(), 2);
//! # Ok::<(), graphmesh::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All types in this module implement [`Send`] and [`Sync`] when their generic
//! parameters do. Traversal iterators borrow the graph, so it cannot be mutated
//! while one is live.

mod directed;
mod edge;
mod node;
mod properties;

pub mod algorithms;
pub mod traits;

// Re-export core types at module level
pub use directed::Graph;
pub use edge::{Edge, EdgeId};
pub use node::{Node, NodeId};
pub use properties::{classify, GraphProperties};
pub use traits::{GraphBase, Predecessors, Successors, WeightedSuccessors};
