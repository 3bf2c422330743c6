//! # graphmesh Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphmesh library. Import this module to get quick access to the graph type,
//! its identifiers, the algorithm traits and the error types.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphmesh operations
pub use crate::Error;

/// Error categories and failing call sites
pub use crate::{ErrorKind, Operation};

/// The result type used throughout graphmesh
pub use crate::Result;

/// Structural rules applied during edge creation
pub use crate::GraphConfig;

// ================================================================================================
// Graph
// ================================================================================================

/// The graph arena and its records
pub use crate::graph::{Edge, Graph, Node};

/// Typed identifiers
pub use crate::graph::{EdgeId, NodeId};

/// Structural classification
pub use crate::graph::GraphProperties;

/// Traits the algorithms are generic over
pub use crate::graph::traits::{GraphBase, Predecessors, Successors, WeightedSuccessors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversal iterators
pub use crate::graph::algorithms::{BfsIterator, DfsIterator};

/// Shortest-path results
pub use crate::graph::algorithms::{PathTree, ShortestPath};
