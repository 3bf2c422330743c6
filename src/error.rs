use strum::{Display, EnumCount, EnumIter};
use thiserror::Error;

/// The call site at which a graph operation failed.
///
/// Every [`Error`] variant carries the [`Operation`] that produced it, so a failure
/// surfaced several layers up can still be traced back to the exact entry point.
/// The set is closed: adding an operation is a compile-time change and every match
/// over it stays exhaustive.
///
/// The [`Display`](std::fmt::Display) form is the `snake_case` method name
/// (e.g. `create_di_edge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    /// [`Graph::create_di_edge`](crate::Graph::create_di_edge)
    CreateDiEdge,
    /// [`Graph::create_weighted_di_edge`](crate::Graph::create_weighted_di_edge)
    CreateWeightedDiEdge,
    /// [`Graph::create_bi_edge`](crate::Graph::create_bi_edge)
    CreateBiEdge,
    /// [`Graph::create_weighted_bi_edge`](crate::Graph::create_weighted_bi_edge)
    CreateWeightedBiEdge,
    /// [`Graph::delete_node`](crate::Graph::delete_node)
    DeleteNode,
    /// [`Graph::delete_edge`](crate::Graph::delete_edge)
    DeleteEdge,
    /// [`Graph::remove_edge`](crate::Graph::remove_edge)
    RemoveEdge,
    /// [`Graph::find_edge`](crate::Graph::find_edge)
    FindEdge,
    /// [`Graph::clear_edges`](crate::Graph::clear_edges)
    ClearEdges,
    /// [`Graph::are_adjacent`](crate::Graph::are_adjacent)
    AreAdjacent,
    /// [`Graph::in_degree`](crate::Graph::in_degree)
    InDegree,
    /// [`Graph::out_degree`](crate::Graph::out_degree)
    OutDegree,
    /// [`Graph::copy_reachable`](crate::Graph::copy_reachable)
    CopyReachable,
    /// [`Graph::bfs_from`](crate::Graph::bfs_from) and the whole-graph BFS iterator
    BfsIterator,
    /// [`Graph::dfs_from`](crate::Graph::dfs_from) and the whole-graph DFS iterator
    DfsIterator,
    /// Unweighted breadth-first shortest path
    ShortestPathUnweighted,
    /// Shortest path by relaxation in topological order
    ShortestPathDag,
    /// Dijkstra's shortest path
    ShortestPathDijkstra,
    /// Bellman-Ford shortest path
    ShortestPathBellmanFord,
    /// Reconstructing a path from a [`PathTree`](crate::PathTree)
    PathReconstruction,
    /// Topological ordering of the graph
    TopologicalSort,
}

/// Coarse category of an [`Error`], independent of the failing operation.
///
/// Useful when a caller wants to branch on *what* went wrong without matching on
/// every field of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A node argument is not a member of the graph
    NodeNotFound,
    /// A directed edge does not exist
    EdgeNotFound,
    /// An iterator was advanced past its end
    EmptyIterator,
    /// The target is unreachable from the source
    PathNotFound,
    /// A negative-weight cycle is reachable from the source
    NegativeCycle,
    /// Dijkstra encountered a negative edge weight
    NegativeWeight,
    /// An algorithm that requires a DAG was run on a cyclic graph
    NotAcyclic,
    /// The graph configuration rejected an edge
    InvalidEdge,
    /// A path cost does not fit in `i64`
    CostOverflow,
}

/// The error type returned by every fallible graph operation.
///
/// All failures are plain values: nothing in this crate panics on a bad
/// argument and nothing retries on its own. Node and edge endpoints are rendered
/// to strings at the failure site (the node's value in `Debug` form where one is
/// available, otherwise its [`NodeId`](crate::NodeId)), which keeps the error type
/// independent of the graph's value type.
///
/// # Error Categories
///
/// ## Membership
/// - [`Error::NodeNotFound`] - A node is absent, deleted, or belongs to another graph
/// - [`Error::EdgeNotFound`] - The queried directed edge does not exist
/// - [`Error::InvalidEdge`] - The graph's [`GraphConfig`](crate::GraphConfig) forbids the edge
///
/// ## Iteration
/// - [`Error::EmptyIterator`] - `try_next` called on an exhausted traversal
///
/// ## Paths
/// - [`Error::PathNotFound`] - No path between the endpoints
/// - [`Error::NegativeCycle`] - Bellman-Ford found an improvable edge after |V|-1 passes
/// - [`Error::NegativeWeight`] - Dijkstra reached a negative edge
/// - [`Error::NotAcyclic`] - DAG relaxation on a cyclic graph
/// - [`Error::CostOverflow`] - A shortest-path cost lies outside the `i64` range
///
/// ## Composition
/// - [`Error::Context`] - Another error, annotated with the outer operation
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Error, ErrorKind, Graph};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
///
/// match graph.delete_edge(a, b) {
///     Err(Error::EdgeNotFound { from, to, .. }) => {
///         assert_eq!(from, "\"a\"");
///         assert_eq!(to, "\"b\"");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
///
/// let err = graph.delete_edge(a, b).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::EdgeNotFound);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A node argument is not a member of the graph.
    ///
    /// Raised for nodes that were never added, nodes that have been deleted, and
    /// identifiers minted by a different graph instance.
    #[error("{operation}: node {node} not found")]
    NodeNotFound {
        /// The missing node, rendered as its value or identifier
        node: String,
        /// The failing operation
        operation: Operation,
    },

    /// The directed edge `from -> to` does not exist.
    #[error("{operation}: edge {from} -> {to} not found")]
    EdgeNotFound {
        /// The edge source
        from: String,
        /// The edge target
        to: String,
        /// The failing operation
        operation: Operation,
    },

    /// A traversal was advanced after it yielded its last node.
    #[error("{operation}: iterator is exhausted")]
    EmptyIterator {
        /// The failing operation
        operation: Operation,
    },

    /// The target cannot be reached from the source.
    #[error("{operation}: no path from {from} to {to}")]
    PathNotFound {
        /// The path source
        from: String,
        /// The path target
        to: String,
        /// The failing operation
        operation: Operation,
    },

    /// A negative-weight cycle is reachable from the source, so no shortest path exists.
    #[error("{operation}: negative cycle reachable from {from}")]
    NegativeCycle {
        /// The path source
        from: String,
        /// The failing operation
        operation: Operation,
    },

    /// Dijkstra's algorithm reached an edge with a negative weight.
    #[error("{operation}: edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        /// The edge source
        from: String,
        /// The edge target
        to: String,
        /// The offending weight
        weight: i64,
        /// The failing operation
        operation: Operation,
    },

    /// The graph contains a directed cycle but the operation requires a DAG.
    #[error("{operation}: graph contains a directed cycle")]
    NotAcyclic {
        /// The failing operation
        operation: Operation,
    },

    /// The edge violates the graph's configuration.
    #[error("{operation}: edge {from} -> {to} rejected: {reason}")]
    InvalidEdge {
        /// The edge source
        from: String,
        /// The edge target
        to: String,
        /// Why the configuration rejected it
        reason: &'static str,
        /// The failing operation
        operation: Operation,
    },

    /// The cheapest cost of reaching `to` from `from` lies outside the `i64` range.
    #[error("{operation}: cost of the path from {from} to {to} exceeds the i64 range")]
    CostOverflow {
        /// The path source
        from: String,
        /// The node whose cost overflowed
        to: String,
        /// The failing operation
        operation: Operation,
    },

    /// An inner failure annotated with the operation that was running around it.
    #[error("{operation}: {source}")]
    Context {
        /// The outer operation
        operation: Operation,
        /// The underlying failure
        source: Box<Error>,
    },
}

impl Error {
    /// Returns the category of this error.
    ///
    /// For [`Error::Context`] the kind of the innermost cause is reported, so
    /// wrapping never hides what actually failed.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NodeNotFound { .. } => ErrorKind::NodeNotFound,
            Error::EdgeNotFound { .. } => ErrorKind::EdgeNotFound,
            Error::EmptyIterator { .. } => ErrorKind::EmptyIterator,
            Error::PathNotFound { .. } => ErrorKind::PathNotFound,
            Error::NegativeCycle { .. } => ErrorKind::NegativeCycle,
            Error::NegativeWeight { .. } => ErrorKind::NegativeWeight,
            Error::NotAcyclic { .. } => ErrorKind::NotAcyclic,
            Error::InvalidEdge { .. } => ErrorKind::InvalidEdge,
            Error::CostOverflow { .. } => ErrorKind::CostOverflow,
            Error::Context { source, .. } => source.kind(),
        }
    }

    /// Returns the operation that raised this error.
    ///
    /// For [`Error::Context`] this is the outermost operation.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Error::NodeNotFound { operation, .. }
            | Error::EdgeNotFound { operation, .. }
            | Error::EmptyIterator { operation }
            | Error::PathNotFound { operation, .. }
            | Error::NegativeCycle { operation, .. }
            | Error::NegativeWeight { operation, .. }
            | Error::NotAcyclic { operation }
            | Error::InvalidEdge { operation, .. }
            | Error::CostOverflow { operation, .. }
            | Error::Context { operation, .. } => *operation,
        }
    }

    /// Wraps this error in an [`Error::Context`] naming the surrounding operation.
    #[must_use]
    pub fn within(self, operation: Operation) -> Self {
        Error::Context {
            operation,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error of a [`Error::Context`] chain.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Error::Context { source, .. } = current {
            current = source;
        }
        current
    }
}
