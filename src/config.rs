//! Graph construction configuration.
//!
//! This module provides [`GraphConfig`], the set of structural rules a [`Graph`](crate::Graph)
//! enforces while edges are created. The defaults describe the most permissive graph
//! (self-loops and parallel edges allowed), which is what every algorithm in this crate
//! is designed to handle.

/// Structural rules applied by a [`Graph`](crate::Graph) during edge creation.
///
/// The configuration is fixed for the lifetime of a graph and copied into graphs
/// derived from it (see [`Graph::copy_reachable`](crate::Graph::copy_reachable)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Allow edges whose source and target are the same node (default: true)
    pub allow_self_loops: bool,

    /// Allow more than one directed edge between the same ordered pair of nodes (default: true)
    pub allow_parallel_edges: bool,

    /// Weight assigned by the unweighted edge constructors (default: 1)
    pub default_weight: i64,

    /// Initial node slot capacity (default: 0)
    pub node_capacity: usize,

    /// Initial edge slot capacity (default: 0)
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            allow_self_loops: true,
            allow_parallel_edges: true,
            default_weight: 1,
            node_capacity: 0,
            edge_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Creates a configuration for a multigraph: self-loops and parallel edges allowed
    ///
    /// Identical to [`GraphConfig::default`].
    #[must_use]
    pub fn multigraph() -> Self {
        Self::default()
    }

    /// Creates a configuration for a simple graph
    ///
    /// Rejects self-loops and parallel edges with [`Error::InvalidEdge`](crate::Error::InvalidEdge).
    #[must_use]
    pub fn simple() -> Self {
        Self {
            allow_self_loops: false,
            allow_parallel_edges: false,
            ..Self::default()
        }
    }

    /// Sets whether self-loops are accepted
    #[must_use]
    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    /// Sets whether parallel edges are accepted
    #[must_use]
    pub fn with_parallel_edges(mut self, allow: bool) -> Self {
        self.allow_parallel_edges = allow;
        self
    }

    /// Sets the weight used by [`Graph::create_di_edge`](crate::Graph::create_di_edge)
    /// and [`Graph::create_bi_edge`](crate::Graph::create_bi_edge)
    #[must_use]
    pub fn with_default_weight(mut self, weight: i64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Pre-allocates storage for the expected number of nodes and edges
    #[must_use]
    pub fn with_capacity(mut self, nodes: usize, edges: usize) -> Self {
        self.node_capacity = nodes;
        self.edge_capacity = edges;
        self
    }
}
