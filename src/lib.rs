// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphmesh
//!
//! An in-memory directed graph engine with integer edge weights, built around an
//! index-addressed arena.
//!
//! ## Features
//!
//! - **Arena storage** - Nodes and edges addressed by typed, graph-stamped identifiers
//! - **Unique node values** - Adding an existing value returns the existing node
//! - **Multigraph semantics** - Self-loops and parallel edges, configurable through [`GraphConfig`]
//! - **Traversal** - Lazy, single-use BFS and DFS iterators, per node or over the whole graph
//! - **Structure** - Degrees, adjacency, loops, cycles, in-place reversal, topological order
//! - **Components** - Strongly connected components with Kosaraju's algorithm
//! - **Shortest paths** - Unweighted BFS, DAG relaxation, Dijkstra, Bellman-Ford
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphmesh::prelude::*;
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//!
//! graph.create_weighted_di_edge(a, b, 2)?;
//! graph.create_weighted_di_edge(b, c, 3)?;
//! graph.create_weighted_di_edge(c, a, 4)?;
//!
//! assert!(graph.has_cycle());
//! assert_eq!(graph.connected_components().len(), 1);
//!
//! let path = graph.shortest_path_bellman_ford(a, c)?;
//! assert_eq!(path.cost(), 5);
//! # Ok::<(), graphmesh::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`graph`] - The [`Graph`] arena, its node and edge types, and the [`graph::algorithms`]
//! - [`GraphConfig`] - Structural rules applied while edges are created
//! - [`Error`] and [`Result`] - Error handling
//!
//! Every algorithm is a free function in [`graph::algorithms`] written against the
//! traits in [`graph::traits`], and is also available as a method on [`Graph`].
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Errors are plain
//! values carrying the [`Operation`] that failed; nothing panics on a bad argument:
//!
//! ```rust
//! use graphmesh::{Error, Graph, NodeId, Operation};
//!
//! let mut graph: Graph<u32> = Graph::new();
//! let a = graph.add_node(1);
//!
//! match graph.create_di_edge(a, NodeId::new(7)) {
//!     Err(Error::NodeNotFound { node, operation }) => {
//!         assert_eq!(node, "n7");
//!         assert_eq!(operation, Operation::CreateDiEdge);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` when an
//! algorithm or bulk mutation completes, `trace` for individual insertions and
//! settled nodes. No subscriber is installed by the library.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Fuzz the mutation API
//! cargo +nightly fuzz run graph_ops --release
//! ```

pub(crate) mod config;
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphmesh::prelude::*;
///
/// let mut graph: Graph<u8> = Graph::with_config(GraphConfig::simple());
/// let a = graph.add_node(0);
/// let b = graph.add_node(1);
/// graph.create_bi_edge(a, b)?;
/// assert!(graph.properties().contains(GraphProperties::STRONGLY_CONNECTED));
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub mod prelude;

/// The graph arena, its identifiers, traits and algorithms.
///
/// # Key Components
///
/// - [`graph::Graph`] - Arena owner of nodes and edges
/// - [`graph::NodeId`] / [`graph::EdgeId`] - Typed identifiers
/// - [`graph::traits`] - Seams the algorithms are written against
/// - [`graph::algorithms`] - Traversal, cycles, SCC, topological order, shortest paths
pub mod graph;

/// `graphmesh` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, NodeId, Result};
///
/// fn degree_sum(graph: &Graph<u32>, node: NodeId) -> Result<usize> {
///     Ok(graph.in_degree(node)? + graph.out_degree(node)?)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphmesh` Error type
///
/// The main error type for all operations in this crate. See [`ErrorKind`] for
/// coarse categories and [`Operation`] for the failing call site.
pub use error::{Error, ErrorKind, Operation};

/// Structural rules for edge creation.
pub use config::GraphConfig;

/// Core graph types.
pub use graph::{Edge, EdgeId, Graph, GraphProperties, Node, NodeId};

/// Shortest-path results.
pub use graph::algorithms::{PathTree, ShortestPath};
