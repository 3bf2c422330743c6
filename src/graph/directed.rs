//! Core directed graph implementation.
//!
//! This module provides [`Graph`], the arena that owns every node and edge. Nodes
//! and edges are stored in two slot vectors indexed by [`NodeId`] and [`EdgeId`];
//! deletion vacates a slot and the slot is never reused. Each node keeps its
//! outgoing edges in insertion order plus an index of its incoming edges, so
//! adjacency, degree and deletion are proportional to the node's degree.

use std::{
    collections::{HashMap, VecDeque},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    config::GraphConfig,
    graph::{
        algorithms::{self, BfsIterator, DfsIterator, PathTree, ShortestPath},
        edge::{Edge, EdgeId},
        node::{GraphTag, Node, NodeId},
        properties::{self, GraphProperties},
        traits::{GraphBase, Predecessors, Successors, WeightedSuccessors},
    },
    Error, Operation, Result,
};

/// A directed, integer-weighted multigraph with unique node values.
///
/// `Graph` supports:
///
/// - Unique node values of any type `T: Clone + Eq + Hash + Debug`; adding an
///   existing value returns the node that already holds it
/// - Directed edges with an `i64` weight, including self-loops and parallel edges
///   (both can be disabled through [`GraphConfig`])
/// - Undirected connections as pairs of independent directed edges
/// - Forward and backward traversal through the [`Successors`] and
///   [`Predecessors`] traits
///
/// # Memory Layout
///
/// - Nodes are stored as `Vec<Option<Node<T>>>`, edges as `Vec<Option<Edge>>`
/// - A `HashMap<T, NodeId>` maps each value to its node
/// - Every node lists its outgoing and incoming [`EdgeId`]s
///
/// # Identity
///
/// Each graph instance stamps its identifiers with a private tag. Every graph
/// built by [`Graph::new`], [`Clone::clone`] or [`Graph::copy_reachable`], and
/// every graph after [`Graph::clear`], uses a fresh tag and rejects identifiers
/// minted by any other instance. A clone keeps the slot layout, so an id of the
/// original can be carried over with [`Graph::node_id`] on the node's value.
///
/// # Thread Safety
///
/// `Graph<T>` is [`Send`] and [`Sync`] when `T` is. The graph does not support
/// concurrent modification; iterators borrow it immutably for their lifetime.
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, NodeId};
///
/// let mut graph: Graph<char> = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
///
/// graph.create_di_edge(a, b)?;
/// graph.create_bi_edge(b, c)?;
///
/// // Adding an existing value is a no-op
/// assert_eq!(graph.add_node('A'), a);
/// assert_eq!(graph.node_count(), 3);
///
/// let successors: Vec<NodeId> = graph.successors(b).collect();
/// assert_eq!(successors, vec![c]);
/// assert_eq!(graph.in_degree(b)?, 2);
/// # Ok::<(), graphmesh::Error>(())
/// ```
#[derive(Debug)]
pub struct Graph<T> {
    /// Identity stamped into every id this graph mints
    tag: GraphTag,
    /// Structural rules for edge creation
    config: GraphConfig,
    /// Node slots; `None` marks a deleted node
    nodes: Vec<Option<Node<T>>>,
    /// Edge slots; `None` marks a deleted edge
    edges: Vec<Option<Edge>>,
    /// Value to node lookup
    index: HashMap<T, NodeId>,
    live_nodes: usize,
    live_edges: usize,
}

impl<T: Clone + Eq + Hash> Clone for Graph<T> {
    /// Copies the graph under a fresh identity.
    ///
    /// Every stored identifier is re-stamped, so ids of the original are foreign
    /// to the clone and the other way round. Slot indices are unchanged.
    fn clone(&self) -> Self {
        let tag = GraphTag::fresh();
        Graph {
            tag,
            config: self.config,
            nodes: self
                .nodes
                .iter()
                .map(|slot| slot.as_ref().map(|node| node.restamped(tag)))
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|slot| slot.as_ref().map(|edge| edge.restamped(tag)))
                .collect(),
            index: self
                .index
                .iter()
                .map(|(value, node)| (value.clone(), node.restamp(tag)))
                .collect(),
            live_nodes: self.live_nodes,
            live_edges: self.live_edges,
        }
    }
}

impl<T: Clone + Eq + Hash + Debug> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash + Debug> Graph<T> {
    /// Creates a new empty graph with the default (permissive) configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphmesh::Graph;
    ///
    /// let graph: Graph<String> = Graph::new();
    /// assert!(graph.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates a new empty graph enforcing the given configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphmesh::{ErrorKind, Graph, GraphConfig};
    ///
    /// let mut graph: Graph<u8> = Graph::with_config(GraphConfig::simple());
    /// let a = graph.add_node(1);
    /// let err = graph.create_di_edge(a, a).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidEdge);
    /// ```
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            tag: GraphTag::fresh(),
            config,
            nodes: Vec::with_capacity(config.node_capacity),
            edges: Vec::with_capacity(config.edge_capacity),
            index: HashMap::with_capacity(config.node_capacity),
            live_nodes: 0,
            live_edges: 0,
        }
    }

    /// Returns the configuration this graph enforces.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn slot(&self, node: NodeId) -> Option<&Node<T>> {
        if node.owner != self.tag {
            return None;
        }
        self.nodes.get(node.index)?.as_ref()
    }

    fn slot_mut(&mut self, node: NodeId) -> Option<&mut Node<T>> {
        if node.owner != self.tag {
            return None;
        }
        self.nodes.get_mut(node.index)?.as_mut()
    }

    fn edge_slot(&self, edge: EdgeId) -> Option<&Edge> {
        if edge.owner != self.tag {
            return None;
        }
        self.edges.get(edge.index)?.as_ref()
    }

    /// Renders a node for error messages: its value when live, otherwise its id.
    fn describe_node(&self, node: NodeId) -> String {
        match self.slot(node) {
            Some(slot) => format!("{:?}", slot.value()),
            None => node.to_string(),
        }
    }

    fn require(&self, node: NodeId, operation: Operation) -> Result<&Node<T>> {
        self.slot(node).ok_or_else(|| Error::NodeNotFound {
            node: self.describe_node(node),
            operation,
        })
    }

    /// Adds a node holding `value`, or returns the node that already holds it.
    ///
    /// Node values are unique: when a live node already carries an equal value
    /// its identifier is returned and the graph is unchanged, so calling
    /// `add_node` twice with the same value is idempotent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphmesh::Graph;
    ///
    /// let mut graph: Graph<&str> = Graph::new();
    /// let a = graph.add_node("A");
    /// assert_eq!(graph.add_node("A"), a);
    /// assert_eq!(graph.node_count(), 1);
    /// ```
    pub fn add_node(&mut self, value: T) -> NodeId {
        if let Some(&existing) = self.index.get(&value) {
            return existing;
        }

        let id = NodeId::owned(self.tag, self.nodes.len());
        self.index.insert(value.clone(), id);
        self.nodes.push(Some(Node::new(value)));
        self.live_nodes += 1;

        tracing::trace!(node = %id, "added node");
        id
    }

    /// Returns `true` if `node` is a live node of this graph.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.slot(node).is_some()
    }

    /// Returns `true` if a live node holds `value`.
    #[must_use]
    pub fn contains_value(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Returns the node holding `value`.
    #[must_use]
    pub fn node_id(&self, value: &T) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    /// Returns the node record for `node`.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&Node<T>> {
        self.slot(node)
    }

    /// Returns the value held by `node`.
    ///
    /// There is no mutable counterpart: values are the keys of the value index.
    #[must_use]
    pub fn value(&self, node: NodeId) -> Option<&T> {
        self.slot(node).map(Node::value)
    }

    /// Returns the edge record for `edge`.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edge_slot(edge)
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// Returns the number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_nodes == 0
    }

    /// Returns an iterator over live node identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        let tag = self.tag;
        self.nodes
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.as_ref().map(|_| NodeId::owned(tag, i)))
    }

    /// Returns an iterator over `(id, node)` pairs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> + '_ {
        let tag = self.tag;
        self.nodes
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.as_ref().map(|node| (NodeId::owned(tag, i), node)))
    }

    /// Returns an iterator over live edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().flatten()
    }

    /// Returns the outgoing edges of `node` in insertion order.
    ///
    /// Empty if `node` is not a live node.
    pub fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.slot(node)
            .into_iter()
            .flat_map(|slot| slot.outgoing().iter())
            .filter_map(move |&edge| self.edge_slot(edge))
    }

    /// Returns the incoming edges of `node` in insertion order.
    ///
    /// Empty if `node` is not a live node.
    pub fn incoming_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.slot(node)
            .into_iter()
            .flat_map(|slot| slot.incoming().iter())
            .filter_map(move |&edge| self.edge_slot(edge))
    }

    /// Returns the targets of the outgoing edges of `node`, once per edge.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing_edges(node).map(Edge::target)
    }

    /// Returns the sources of the incoming edges of `node`, once per edge.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming_edges(node).map(Edge::source)
    }

    /// Returns every node without incoming edges.
    pub fn entry_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
            .filter(|(_, node)| node.in_degree() == 0)
            .map(|(id, _)| id)
    }

    /// Returns every node without outgoing edges.
    pub fn exit_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
            .filter(|(_, node)| node.out_degree() == 0)
            .map(|(id, _)| id)
    }

    /// Removes every node and edge.
    ///
    /// The configuration is kept. Identifiers issued before the call are no longer
    /// accepted by this graph.
    pub fn clear(&mut self) {
        self.tag = GraphTag::fresh();
        self.nodes.clear();
        self.edges.clear();
        self.index.clear();
        self.live_nodes = 0;
        self.live_edges = 0;
    }

    fn has_edge_between(&self, from: NodeId, to: NodeId) -> bool {
        self.successors(from).any(|succ| succ == to)
    }

    /// Validates both endpoints and the configuration rules for `from -> to`.
    fn check_edge(&self, from: NodeId, to: NodeId, operation: Operation) -> Result<()> {
        self.require(from, operation)?;
        self.require(to, operation)?;

        let reason = if from == to && !self.config.allow_self_loops {
            Some("self-loops are disabled")
        } else if !self.config.allow_parallel_edges && self.has_edge_between(from, to) {
            Some("parallel edges are disabled")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidEdge {
                from: self.describe_node(from),
                to: self.describe_node(to),
                reason,
                operation,
            }),
            None => Ok(()),
        }
    }

    /// Inserts `from -> to` without validation; both endpoints must be live.
    fn insert_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> EdgeId {
        let id = EdgeId::owned(self.tag, self.edges.len());
        self.edges.push(Some(Edge::new(id, from, to, weight)));
        if let Some(source) = self.slot_mut(from) {
            source.attach_outgoing(id);
        }
        if let Some(target) = self.slot_mut(to) {
            target.attach_incoming(id);
        }
        self.live_edges += 1;

        tracing::trace!(edge = %id, from = %from, to = %to, weight, "added edge");
        id
    }

    /// Vacates an edge slot and unlinks it from both endpoints.
    fn detach_edge(&mut self, edge: EdgeId) -> Option<Edge> {
        if edge.owner != self.tag {
            return None;
        }
        let removed = self.edges.get_mut(edge.index)?.take()?;
        if let Some(source) = self.slot_mut(removed.source()) {
            source.detach_outgoing(edge);
        }
        if let Some(target) = self.slot_mut(removed.target()) {
            target.detach_incoming(edge);
        }
        self.live_edges -= 1;
        Some(removed)
    }

    fn create_edge(&mut self, from: NodeId, to: NodeId, weight: i64, operation: Operation) -> Result<EdgeId> {
        self.check_edge(from, to, operation)?;
        Ok(self.insert_edge(from, to, weight))
    }

    fn create_pair(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: i64,
        operation: Operation,
    ) -> Result<(EdgeId, EdgeId)> {
        self.check_edge(a, b, operation)?;
        self.check_edge(b, a, operation)?;
        if a == b && !self.config.allow_parallel_edges {
            return Err(Error::InvalidEdge {
                from: self.describe_node(a),
                to: self.describe_node(b),
                reason: "a bidirectional self-loop needs parallel edges",
                operation,
            });
        }

        let forward = self.insert_edge(a, b, weight);
        let backward = self.insert_edge(b, a, weight);
        Ok((forward, backward))
    }

    /// Creates a directed edge `from -> to` with the configured default weight.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] naming the first endpoint (source before target)
    ///   that is not a live node of this graph
    /// - [`Error::InvalidEdge`] if the configuration forbids the edge
    ///
    /// Nothing is modified when an error is returned.
    pub fn create_di_edge(&mut self, from: NodeId, to: NodeId) -> Result<EdgeId> {
        let weight = self.config.default_weight;
        self.create_edge(from, to, weight, Operation::CreateDiEdge)
    }

    /// Creates a directed edge `from -> to` with the given weight.
    ///
    /// # Errors
    ///
    /// As [`create_di_edge`](Self::create_di_edge).
    pub fn create_weighted_di_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> Result<EdgeId> {
        self.create_edge(from, to, weight, Operation::CreateWeightedDiEdge)
    }

    /// Connects `a` and `b` in both directions with the configured default weight.
    ///
    /// Two independent directed edges are created, `a -> b` first. Deleting one of
    /// them leaves the other in place; remove both to sever the connection.
    ///
    /// # Errors
    ///
    /// As [`create_di_edge`](Self::create_di_edge); both directions are validated
    /// before either edge is inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphmesh::Graph;
    ///
    /// let mut graph: Graph<&str> = Graph::new();
    /// let a = graph.add_node("A");
    /// let b = graph.add_node("B");
    /// graph.create_bi_edge(a, b)?;
    ///
    /// graph.delete_edge(a, b)?;
    /// assert!(!graph.are_adjacent(a, b)?);
    /// assert!(graph.are_adjacent(b, a)?);
    /// # Ok::<(), graphmesh::Error>(())
    /// ```
    pub fn create_bi_edge(&mut self, a: NodeId, b: NodeId) -> Result<(EdgeId, EdgeId)> {
        let weight = self.config.default_weight;
        self.create_pair(a, b, weight, Operation::CreateBiEdge)
    }

    /// Connects `a` and `b` in both directions, each edge carrying `weight`.
    ///
    /// # Errors
    ///
    /// As [`create_bi_edge`](Self::create_bi_edge).
    pub fn create_weighted_bi_edge(&mut self, a: NodeId, b: NodeId, weight: i64) -> Result<(EdgeId, EdgeId)> {
        self.create_pair(a, b, weight, Operation::CreateWeightedBiEdge)
    }

    /// Removes `node` together with every edge entering or leaving it.
    ///
    /// Returns the value the node held. The node's slot is never reused, so `node`
    /// and the identifiers of the removed edges stay invalid.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `node` is not a live node of this graph.
    pub fn delete_node(&mut self, node: NodeId) -> Result<T> {
        self.require(node, Operation::DeleteNode)?;
        let Some(mut removed) = self.nodes.get_mut(node.index).and_then(Option::take) else {
            return Err(Error::NodeNotFound {
                node: node.to_string(),
                operation: Operation::DeleteNode,
            });
        };

        let incident: Vec<EdgeId> = removed
            .take_outgoing()
            .into_iter()
            .chain(removed.take_incoming())
            .collect();
        let mut dropped = 0;
        for edge in incident {
            // A self-loop appears in both lists but is detached once
            if self.detach_edge(edge).is_some() {
                dropped += 1;
            }
        }

        self.index.remove(removed.value());
        self.live_nodes -= 1;

        tracing::debug!(node = %node, edges = dropped, "deleted node");
        Ok(removed.into_value())
    }

    /// Removes the edge with identity `edge`.
    ///
    /// # Errors
    ///
    /// [`Error::EdgeNotFound`] if `edge` is not a live edge of this graph.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<Edge> {
        self.detach_edge(edge).ok_or_else(|| Error::EdgeNotFound {
            from: edge.to_string(),
            to: "?".to_string(),
            operation: Operation::RemoveEdge,
        })
    }

    fn first_edge(&self, from: NodeId, to: NodeId, operation: Operation) -> Result<EdgeId> {
        let source = self.require(from, operation)?;
        self.require(to, operation)?;

        source
            .outgoing()
            .iter()
            .copied()
            .find(|&edge| self.edge_slot(edge).is_some_and(|e| e.target() == to))
            .ok_or_else(|| Error::EdgeNotFound {
                from: self.describe_node(from),
                to: self.describe_node(to),
                operation,
            })
    }

    /// Returns the first edge (in insertion order) leading from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either node is not a live node
    /// - [`Error::EdgeNotFound`] if there is no `from -> to` edge
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Result<EdgeId> {
        self.first_edge(from, to, Operation::FindEdge)
    }

    /// Removes the first edge (in insertion order) leading from `from` to `to`.
    ///
    /// Only that direction is affected; the mirror edge of a bidirectional
    /// connection stays.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either node is not a live node
    /// - [`Error::EdgeNotFound`] if there is no `from -> to` edge
    pub fn delete_edge(&mut self, from: NodeId, to: NodeId) -> Result<Edge> {
        let edge = self.first_edge(from, to, Operation::DeleteEdge)?;
        self.detach_edge(edge).ok_or_else(|| Error::EdgeNotFound {
            from: self.describe_node(from),
            to: self.describe_node(to),
            operation: Operation::DeleteEdge,
        })
    }

    /// Returns `true` if there is an edge `from -> to`.
    ///
    /// Adjacency is directed: `are_adjacent(a, b)` does not look at `b -> a`.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if either node is not a live node.
    pub fn are_adjacent(&self, from: NodeId, to: NodeId) -> Result<bool> {
        self.require(from, Operation::AreAdjacent)?;
        self.require(to, Operation::AreAdjacent)?;
        Ok(self.has_edge_between(from, to))
    }

    /// Removes every outgoing edge of `node`, returning how many were removed.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `node` is not a live node.
    pub fn clear_edges(&mut self, node: NodeId) -> Result<usize> {
        self.require(node, Operation::ClearEdges)?;
        let outgoing = self
            .slot_mut(node)
            .map(Node::take_outgoing)
            .unwrap_or_default();

        Ok(outgoing
            .into_iter()
            .filter(|&edge| self.detach_edge(edge).is_some())
            .count())
    }

    /// Returns the number of edges entering `node`.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `node` is not a live node.
    pub fn in_degree(&self, node: NodeId) -> Result<usize> {
        Ok(self.require(node, Operation::InDegree)?.in_degree())
    }

    /// Returns the number of edges leaving `node`.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `node` is not a live node.
    pub fn out_degree(&self, node: NodeId) -> Result<usize> {
        Ok(self.require(node, Operation::OutDegree)?.out_degree())
    }

    /// Returns `true` if any edge starts and ends at the same node.
    #[must_use]
    pub fn has_loop(&self) -> bool {
        self.edges().any(Edge::is_self_loop)
    }

    /// Reverses the direction of every edge in place.
    ///
    /// Edge identities, weights and multiplicities are preserved and self-loops
    /// stay self-loops. Reversing twice restores the original graph exactly,
    /// including the order of every node's outgoing edges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphmesh::Graph;
    ///
    /// let mut graph: Graph<u32> = Graph::new();
    /// let a = graph.add_node(4);
    /// let b = graph.add_node(6);
    /// let edge = graph.create_weighted_di_edge(a, b, 2)?;
    ///
    /// graph.reverse();
    /// assert_eq!(graph.edge(edge).map(|e| e.endpoints()), Some((b, a)));
    /// assert_eq!(graph.edge(edge).map(|e| e.weight()), Some(2));
    /// # Ok::<(), graphmesh::Error>(())
    /// ```
    pub fn reverse(&mut self) {
        for edge in self.edges.iter_mut().flatten() {
            edge.flip();
        }
        for node in self.nodes.iter_mut().flatten() {
            node.swap_directions();
        }
        tracing::debug!(edges = self.live_edges, "reversed graph");
    }

    /// Copies `node` and everything reachable from it into a new graph.
    ///
    /// Edges between copied nodes are reproduced with their weights and
    /// multiplicities, in the same per-node order. The copy has its own identity
    /// and the same configuration. Returns the copy and the identifier of `node`
    /// inside it.
    ///
    /// The walk uses an explicit queue and a map from original to copied node that
    /// is filled before a node's neighbours are explored, so it terminates on
    /// cyclic graphs.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `node` is not a live node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphmesh::Graph;
    ///
    /// let mut graph: Graph<&str> = Graph::new();
    /// let a = graph.add_node("A");
    /// let b = graph.add_node("B");
    /// let c = graph.add_node("C");
    /// graph.create_di_edge(a, b)?;
    /// graph.create_di_edge(b, a)?;
    /// graph.create_di_edge(c, a)?;
    ///
    /// let (copy, root) = graph.copy_reachable(a)?;
    /// assert_eq!(copy.node_count(), 2);
    /// assert_eq!(copy.edge_count(), 2);
    /// assert_eq!(copy.value(root), Some(&"A"));
    /// assert!(!copy.contains_value(&"C"));
    /// # Ok::<(), graphmesh::Error>(())
    /// ```
    pub fn copy_reachable(&self, node: NodeId) -> Result<(Graph<T>, NodeId)> {
        let root = self.require(node, Operation::CopyReachable)?;

        let mut copy = Graph::with_config(self.config);
        let copied_root = copy.add_node(root.value().clone());
        let mut mapped: HashMap<NodeId, NodeId> = HashMap::from([(node, copied_root)]);
        let mut queue = VecDeque::from([(node, copied_root)]);

        while let Some((original, from)) = queue.pop_front() {
            for edge in self.outgoing_edges(original) {
                let target = edge.target();
                let to = match mapped.get(&target) {
                    Some(&to) => to,
                    None => {
                        let Some(value) = self.value(target) else {
                            continue;
                        };
                        let to = copy.add_node(value.clone());
                        mapped.insert(target, to);
                        queue.push_back((target, to));
                        to
                    }
                };
                copy.insert_edge(from, to, edge.weight());
            }
        }

        tracing::debug!(
            nodes = copy.node_count(),
            edges = copy.edge_count(),
            "copied reachable subgraph"
        );
        Ok((copy, copied_root))
    }

    /// Returns a breadth-first iterator over every node, component by component.
    pub fn bfs(&self) -> BfsIterator<'_, Self> {
        algorithms::bfs_all(self)
    }

    /// Returns a depth-first (pre-order) iterator over every node, component by component.
    pub fn dfs(&self) -> DfsIterator<'_, Self> {
        algorithms::dfs_all(self)
    }

    /// Returns a breadth-first iterator over the nodes reachable from `node`.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `node` is not a live node.
    pub fn bfs_from(&self, node: NodeId) -> Result<BfsIterator<'_, Self>> {
        self.require(node, Operation::BfsIterator)?;
        Ok(algorithms::bfs(self, node))
    }

    /// Returns a depth-first (pre-order) iterator over the nodes reachable from `node`.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `node` is not a live node.
    pub fn dfs_from(&self, node: NodeId) -> Result<DfsIterator<'_, Self>> {
        self.require(node, Operation::DfsIterator)?;
        Ok(algorithms::dfs(self, node))
    }

    /// Returns `true` if the graph contains a directed cycle.
    ///
    /// See [`algorithms::has_cycle`].
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// Returns one directed cycle as a closed walk, if any exists.
    ///
    /// See [`algorithms::find_cycle`].
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<NodeId>> {
        algorithms::find_cycle(self)
    }

    /// Returns the strongly connected components of the graph.
    ///
    /// Computed with Kosaraju's algorithm; see
    /// [`algorithms::strongly_connected_components`] for the ordering guarantees.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        algorithms::strongly_connected_components(self)
    }

    /// Returns the nodes in topological order.
    ///
    /// # Errors
    ///
    /// [`Error::NotAcyclic`] if the graph contains a directed cycle.
    pub fn topological_sort(&self) -> Result<Vec<NodeId>> {
        algorithms::topological_sort(self).ok_or(Error::NotAcyclic {
            operation: Operation::TopologicalSort,
        })
    }

    /// Classifies the structure of the graph.
    #[must_use]
    pub fn properties(&self) -> GraphProperties {
        properties::classify(self)
    }

    /// Hop-count shortest paths from `source`; see [`algorithms::bfs_tree`].
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `source` is not a live node.
    pub fn bfs_tree(&self, source: NodeId) -> Result<PathTree> {
        algorithms::bfs_tree(self, source)
    }

    /// Path with the fewest edges; see [`algorithms::shortest_path_unweighted`].
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] or [`Error::PathNotFound`].
    pub fn shortest_path_unweighted(&self, source: NodeId, target: NodeId) -> Result<ShortestPath> {
        algorithms::shortest_path_unweighted(self, source, target)
    }

    /// Shortest paths by relaxation in topological order; see [`algorithms::dag_tree`].
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`], or [`Error::NotAcyclic`] wrapped in [`Error::Context`].
    pub fn dag_tree(&self, source: NodeId) -> Result<PathTree> {
        algorithms::dag_tree(self, source)
    }

    /// Cheapest path on a DAG; see [`algorithms::shortest_path_dag`].
    ///
    /// # Errors
    ///
    /// As [`dag_tree`](Self::dag_tree), plus [`Error::PathNotFound`].
    pub fn shortest_path_dag(&self, source: NodeId, target: NodeId) -> Result<ShortestPath> {
        algorithms::shortest_path_dag(self, source, target)
    }

    /// Dijkstra shortest paths; see [`algorithms::dijkstra_tree`].
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] or [`Error::NegativeWeight`].
    pub fn dijkstra_tree(&self, source: NodeId) -> Result<PathTree> {
        algorithms::dijkstra_tree(self, source)
    }

    /// Cheapest path by Dijkstra's algorithm; see [`algorithms::shortest_path_dijkstra`].
    ///
    /// # Errors
    ///
    /// As [`dijkstra_tree`](Self::dijkstra_tree), plus [`Error::PathNotFound`].
    pub fn shortest_path_dijkstra(&self, source: NodeId, target: NodeId) -> Result<ShortestPath> {
        algorithms::shortest_path_dijkstra(self, source, target)
    }

    /// Bellman-Ford shortest paths; see [`algorithms::bellman_ford_tree`].
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] or [`Error::NegativeCycle`].
    pub fn bellman_ford_tree(&self, source: NodeId) -> Result<PathTree> {
        algorithms::bellman_ford_tree(self, source)
    }

    /// Cheapest path by Bellman-Ford; see [`algorithms::shortest_path_bellman_ford`].
    ///
    /// # Errors
    ///
    /// As [`bellman_ford_tree`](Self::bellman_ford_tree), plus [`Error::PathNotFound`].
    pub fn shortest_path_bellman_ford(&self, source: NodeId, target: NodeId) -> Result<ShortestPath> {
        algorithms::shortest_path_bellman_ford(self, source, target)
    }
}

impl<T: Clone + Eq + Hash + Debug> GraphBase for Graph<T> {
    fn node_count(&self) -> usize {
        self.live_nodes
    }

    fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        Graph::node_ids(self)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.contains(node)
    }

    fn describe(&self, node: NodeId) -> String {
        self.describe_node(node)
    }
}

impl<T: Clone + Eq + Hash + Debug> Successors for Graph<T> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        Graph::successors(self, node)
    }
}

impl<T: Clone + Eq + Hash + Debug> Predecessors for Graph<T> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        Graph::predecessors(self, node)
    }
}

impl<T: Clone + Eq + Hash + Debug> WeightedSuccessors for Graph<T> {
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, NodeId, i64)> {
        self.outgoing_edges(node)
            .map(|edge| (edge.id(), edge.target(), edge.weight()))
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edge_slot(edge).map(Edge::endpoints)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{
        config::GraphConfig,
        graph::{directed::Graph, edge::EdgeId, node::NodeId, traits::GraphBase},
        test::{
            cycle_graph, diamond_graph, edge_list, four_cycle_with_bridge, graph_from_edges,
            linear_graph, node, weighted_triangle,
        },
        Error, ErrorKind, Operation,
    };

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph<u32> = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_ids().count(), 0);
    }

    #[test]
    fn test_default_and_config() {
        let graph: Graph<u32> = Graph::default();
        assert_eq!(*graph.config(), GraphConfig::default());

        let config = GraphConfig::simple().with_capacity(8, 16);
        let graph: Graph<u32> = Graph::with_config(config);
        assert_eq!(*graph.config(), config);
    }

    #[test]
    fn test_add_node_sequential_ids() {
        let mut graph: Graph<&str> = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(graph.value(a), Some(&"A"));
        assert_eq!(graph.node(b).map(|n| *n.value()), Some("B"));
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph: Graph<String> = Graph::new();
        let a = graph.add_node("A".to_string());
        let again = graph.add_node("A".to_string());

        assert_eq!(a, again);
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_value(&"A".to_string()));
        assert_eq!(graph.node_id(&"A".to_string()), Some(a));
        assert_eq!(graph.node_id(&"B".to_string()), None);
    }

    #[test]
    fn test_contains_rejects_foreign_ids() {
        let mut first: Graph<u32> = Graph::new();
        let mut second: Graph<u32> = Graph::new();
        let a = first.add_node(0);
        let b = second.add_node(0);

        assert_eq!(a.index(), b.index());
        assert!(first.contains(a));
        assert!(!first.contains(b));
        assert!(!first.contains(NodeId::new(0)));
        assert!(!first.contains(NodeId::new(99)));
    }

    #[test]
    fn test_clone_has_own_identity() {
        let graph = linear_graph();
        let copy = graph.clone();
        let a = node(&graph, "A");

        assert!(!copy.contains(a));
        assert_eq!(copy.successors(a).count(), 0);
        assert_eq!(copy.out_degree(a).unwrap_err().kind(), ErrorKind::NodeNotFound);

        // Same layout, re-stamped ids
        let copied_a = node(&copy, "A");
        assert_eq!(copied_a.index(), a.index());
        assert_eq!(copy.successors(copied_a).collect::<Vec<_>>(), vec![node(&copy, "B")]);
        let edge = copy.find_edge(copied_a, node(&copy, "B")).unwrap();
        assert_eq!(copy.edge(edge).map(|e| e.endpoints()), Some((copied_a, node(&copy, "B"))));
        assert_eq!(copy.edge_count(), graph.edge_count());
    }

    #[test]
    fn test_adjacency_of_missing_node_is_empty() {
        use crate::graph::traits::{Predecessors, Successors, WeightedSuccessors};

        let mut graph = linear_graph();
        let b = node(&graph, "B");
        graph.delete_node(b).unwrap();

        for missing in [b, NodeId::new(0), NodeId::new(500)] {
            assert_eq!(Successors::successors(&graph, missing).count(), 0);
            assert_eq!(Predecessors::predecessors(&graph, missing).count(), 0);
            assert_eq!(graph.weighted_successors(missing).count(), 0);
        }
    }

    #[test]
    fn test_clones_diverge_without_aliasing() {
        let mut original: Graph<&str> = Graph::new();
        original.add_node("A");
        let mut copy = original.clone();

        let x = original.add_node("X");
        let y = copy.add_node("Y");
        assert_eq!(x.index(), y.index());

        assert!(!copy.contains(x));
        assert_eq!(copy.value(x), None);
        assert_eq!(copy.delete_node(x).unwrap_err().kind(), ErrorKind::NodeNotFound);
        assert!(!original.contains(y));

        assert_eq!(copy.value(y), Some(&"Y"));
        assert_eq!(original.value(x), Some(&"X"));
        assert_eq!(copy.node_count(), 2);
    }

    #[test]
    fn test_create_edges_and_degrees() {
        let graph = diamond_graph();
        let (a, b, c, d) = (
            node(&graph, "A"),
            node(&graph, "B"),
            node(&graph, "C"),
            node(&graph, "D"),
        );

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.out_degree(a).unwrap(), 2);
        assert_eq!(graph.in_degree(a).unwrap(), 0);
        assert_eq!(graph.in_degree(d).unwrap(), 2);
        assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(graph.predecessors(d).collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(graph.entry_nodes().collect::<Vec<_>>(), vec![a]);
        assert_eq!(graph.exit_nodes().collect::<Vec<_>>(), vec![d]);
    }

    #[test]
    fn test_default_weight_applies() {
        let mut graph: Graph<u32> = Graph::with_config(GraphConfig::default().with_default_weight(7));
        let a = graph.add_node(0);
        let b = graph.add_node(1);

        let edge = graph.create_di_edge(a, b).unwrap();
        assert_eq!(graph.edge(edge).unwrap().weight(), 7);

        let (forward, backward) = graph.create_weighted_bi_edge(a, b, 3).unwrap();
        assert_eq!(graph.edge(forward).unwrap().endpoints(), (a, b));
        assert_eq!(graph.edge(backward).unwrap().endpoints(), (b, a));
        assert_eq!(graph.edge(backward).unwrap().weight(), 3);
    }

    #[test]
    fn test_create_edge_missing_source_reported_first() {
        let mut graph: Graph<&str> = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        graph.delete_node(a).unwrap();

        let err = graph.create_di_edge(a, NodeId::new(5)).unwrap_err();
        assert_eq!(
            err,
            Error::NodeNotFound {
                node: "n0".to_string(),
                operation: Operation::CreateDiEdge,
            }
        );

        let err = graph.create_weighted_di_edge(b, a, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NodeNotFound);
        assert_eq!(err.operation(), Operation::CreateWeightedDiEdge);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_bi_edge_failure_mutates_nothing() {
        let mut graph: Graph<&str> = Graph::new();
        let a = graph.add_node("A");
        let err = graph.create_bi_edge(a, NodeId::new(1)).unwrap_err();

        assert_eq!(err.operation(), Operation::CreateBiEdge);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.out_degree(a).unwrap(), 0);
    }

    #[test]
    fn test_simple_config_rules() {
        let mut graph: Graph<&str> = Graph::with_config(GraphConfig::simple());
        let a = graph.add_node("A");
        let b = graph.add_node("B");

        let err = graph.create_di_edge(a, a).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidEdge {
                from: "\"A\"".to_string(),
                to: "\"A\"".to_string(),
                reason: "self-loops are disabled",
                operation: Operation::CreateDiEdge,
            }
        );

        graph.create_di_edge(a, b).unwrap();
        assert_eq!(
            graph.create_di_edge(a, b).unwrap_err().kind(),
            ErrorKind::InvalidEdge
        );

        // b -> a is new but a -> b already exists, so the pair is rejected whole
        assert!(graph.create_bi_edge(a, b).is_err());
        assert_eq!(graph.edge_count(), 1);
        graph.create_di_edge(b, a).unwrap();
    }

    #[test]
    fn test_bi_self_loop_needs_parallel_edges() {
        let config = GraphConfig::default().with_parallel_edges(false);
        let mut graph: Graph<u32> = Graph::with_config(config);
        let a = graph.add_node(0);
        assert_eq!(
            graph.create_bi_edge(a, a).unwrap_err().kind(),
            ErrorKind::InvalidEdge
        );

        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_node(0);
        graph.create_bi_edge(a, a).unwrap();
        assert_eq!(graph.in_degree(a).unwrap(), 2);
        assert_eq!(graph.out_degree(a).unwrap(), 2);
    }

    #[test]
    fn test_parallel_edges_are_distinct() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_node(0);
        let b = graph.add_node(1);
        let first = graph.create_weighted_di_edge(a, b, 1).unwrap();
        let second = graph.create_weighted_di_edge(a, b, 2).unwrap();

        assert_ne!(first, second);
        assert_eq!(graph.out_degree(a).unwrap(), 2);
        assert_eq!(graph.find_edge(a, b).unwrap(), first);

        let removed = graph.delete_edge(a, b).unwrap();
        assert_eq!(removed.id(), first);
        assert_eq!(graph.find_edge(a, b).unwrap(), second);
    }

    #[test]
    fn test_self_loop_degrees() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_node(0);
        assert!(!graph.has_loop());

        graph.create_di_edge(a, a).unwrap();
        assert!(graph.has_loop());
        assert_eq!(graph.in_degree(a).unwrap(), 1);
        assert_eq!(graph.out_degree(a).unwrap(), 1);
    }

    #[test]
    fn test_delete_node_removes_incident_edges() {
        let mut graph = diamond_graph();
        let (a, b, c, d) = (
            node(&graph, "A"),
            node(&graph, "B"),
            node(&graph, "C"),
            node(&graph, "D"),
        );

        assert_eq!(graph.delete_node(b).unwrap(), "B");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.contains(b));
        assert!(!graph.contains_value(&"B"));
        assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![c]);
        assert_eq!(graph.predecessors(d).collect::<Vec<_>>(), vec![c]);

        // Slots are not reused
        let e = graph.add_node("E");
        assert_eq!(e.index(), 4);
        assert_eq!(graph.node_bound(), 5);
    }

    #[test]
    fn test_delete_node_with_self_loop() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_node(0);
        let b = graph.add_node(1);
        graph.create_di_edge(a, a).unwrap();
        graph.create_bi_edge(a, b).unwrap();

        graph.delete_node(a).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.in_degree(b).unwrap(), 0);
        assert_eq!(graph.out_degree(b).unwrap(), 0);
    }

    #[test]
    fn test_delete_node_twice() {
        let mut graph = linear_graph();
        let b = node(&graph, "B");
        graph.delete_node(b).unwrap();

        let err = graph.delete_node(b).unwrap_err();
        assert_eq!(
            err,
            Error::NodeNotFound {
                node: "n1".to_string(),
                operation: Operation::DeleteNode,
            }
        );
    }

    #[test]
    fn test_readding_deleted_value_gets_new_id() {
        let mut graph = linear_graph();
        let b = node(&graph, "B");
        graph.delete_node(b).unwrap();

        let again = graph.add_node("B");
        assert_ne!(again, b);
        assert_eq!(graph.in_degree(again).unwrap(), 0);
    }

    #[test]
    fn test_delete_edge_errors() {
        let mut graph = linear_graph();
        let (a, b, c) = (node(&graph, "A"), node(&graph, "B"), node(&graph, "C"));

        let err = graph.delete_edge(a, c).unwrap_err();
        assert_eq!(
            err,
            Error::EdgeNotFound {
                from: "\"A\"".to_string(),
                to: "\"C\"".to_string(),
                operation: Operation::DeleteEdge,
            }
        );

        // Direction matters
        assert_eq!(graph.delete_edge(b, a).unwrap_err().kind(), ErrorKind::EdgeNotFound);

        let err = graph.delete_edge(a, NodeId::new(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NodeNotFound);

        let removed = graph.delete_edge(a, b).unwrap();
        assert_eq!(removed.endpoints(), (a, b));
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.are_adjacent(a, b).unwrap());
    }

    #[test]
    fn test_remove_edge_by_id() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_node(0);
        let b = graph.add_node(1);
        let edge = graph.create_di_edge(a, b).unwrap();

        let removed = graph.remove_edge(edge).unwrap();
        assert_eq!(removed.id(), edge);
        assert!(graph.edge(edge).is_none());

        let err = graph.remove_edge(edge).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EdgeNotFound);
        assert_eq!(err.operation(), Operation::RemoveEdge);
        assert!(graph.remove_edge(EdgeId::new(0)).is_err());
    }

    #[test]
    fn test_find_edge() {
        let graph = cycle_graph();
        let (a, b, c) = (node(&graph, "A"), node(&graph, "B"), node(&graph, "C"));

        let edge = graph.find_edge(c, a).unwrap();
        assert_eq!(graph.edge(edge).unwrap().endpoints(), (c, a));
        assert_eq!(
            graph.find_edge(a, c).unwrap_err(),
            Error::EdgeNotFound {
                from: "\"A\"".to_string(),
                to: "\"C\"".to_string(),
                operation: Operation::FindEdge,
            }
        );
        assert!(graph.find_edge(b, c).is_ok());
    }

    #[test]
    fn test_are_adjacent_is_directed() {
        let graph = linear_graph();
        let (a, b, c) = (node(&graph, "A"), node(&graph, "B"), node(&graph, "C"));

        assert!(graph.are_adjacent(a, b).unwrap());
        assert!(!graph.are_adjacent(b, a).unwrap());
        assert!(!graph.are_adjacent(a, c).unwrap());

        let err = graph.are_adjacent(a, NodeId::new(1)).unwrap_err();
        assert_eq!(err.operation(), Operation::AreAdjacent);
    }

    #[test]
    fn test_clear_edges() {
        let mut graph = diamond_graph();
        let (a, b, c) = (node(&graph, "A"), node(&graph, "B"), node(&graph, "C"));

        assert_eq!(graph.clear_edges(a).unwrap(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.in_degree(b).unwrap(), 0);
        assert_eq!(graph.in_degree(c).unwrap(), 0);
        assert_eq!(graph.clear_edges(a).unwrap(), 0);

        let err = graph.clear_edges(NodeId::new(0)).unwrap_err();
        assert_eq!(err.operation(), Operation::ClearEdges);
    }

    #[test]
    fn test_degree_errors() {
        let graph = linear_graph();
        assert_eq!(
            graph.in_degree(NodeId::new(0)).unwrap_err().operation(),
            Operation::InDegree
        );
        assert_eq!(
            graph.out_degree(NodeId::new(0)).unwrap_err().operation(),
            Operation::OutDegree
        );
    }

    #[test]
    fn test_degree_sum_counts_endpoints() {
        let graph = graph_from_edges(&[(0, 1, 1), (1, 1, 1), (1, 2, 1), (2, 1, 1), (0, 1, 1)]);
        for id in graph.node_ids() {
            let touching = graph
                .edges()
                .map(|e| usize::from(e.source() == id) + usize::from(e.target() == id))
                .sum::<usize>();
            assert_eq!(
                graph.in_degree(id).unwrap() + graph.out_degree(id).unwrap(),
                touching
            );
        }
    }

    #[test]
    fn test_reverse_weighted_triangle() {
        let mut graph = weighted_triangle();
        assert!(graph.has_cycle());

        graph.reverse();
        assert!(graph.has_cycle());
        assert_eq!(edge_list(&graph), vec![(4, 5, 4), (5, 6, 3), (6, 4, 2)]);
    }

    #[test]
    fn test_reverse_twice_restores_adjacency() {
        let mut graph = graph_from_edges(&[(0, 1, 5), (0, 1, 5), (1, 1, 2), (1, 2, -1), (2, 0, 3)]);
        let before: Vec<Vec<EdgeId>> = graph
            .nodes()
            .map(|(_, n)| n.outgoing().to_vec())
            .collect();
        let edges_before = edge_list(&graph);

        graph.reverse();
        assert_ne!(edge_list(&graph), edges_before);
        graph.reverse();

        let after: Vec<Vec<EdgeId>> = graph
            .nodes()
            .map(|(_, n)| n.outgoing().to_vec())
            .collect();
        assert_eq!(before, after);
        assert_eq!(edge_list(&graph), edges_before);
    }

    #[test]
    fn test_reverse_keeps_self_loop() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_node(0);
        let edge = graph.create_di_edge(a, a).unwrap();
        graph.reverse();
        assert!(graph.edge(edge).unwrap().is_self_loop());
        assert!(graph.has_loop());
    }

    #[test]
    fn test_copy_reachable_cyclic() {
        let graph = four_cycle_with_bridge();
        let zero = graph.node_id(&0).unwrap();

        let (copy, root) = graph.copy_reachable(zero).unwrap();
        assert_eq!(copy.node_count(), 4);
        assert_eq!(copy.edge_count(), graph.edge_count());
        assert_eq!(copy.value(root), Some(&0));
        assert_eq!(edge_list(&copy), edge_list(&graph));

        // The copy has its own identity
        assert!(!copy.contains(zero));
        assert!(!graph.contains(root));
    }

    #[test]
    fn test_copy_reachable_subset_and_multiplicity() {
        let graph = graph_from_edges(&[(0, 1, 2), (0, 1, 2), (1, 2, 1), (3, 0, 1), (2, 2, 4)]);
        let (copy, _) = graph.copy_reachable(graph.node_id(&1).unwrap()).unwrap();

        assert_eq!(copy.node_count(), 2);
        assert_eq!(edge_list(&copy), vec![(1, 2, 1), (2, 2, 4)]);

        let (copy, _) = graph.copy_reachable(graph.node_id(&0).unwrap()).unwrap();
        assert_eq!(edge_list(&copy), vec![(0, 1, 2), (0, 1, 2), (1, 2, 1), (2, 2, 4)]);
        assert!(!copy.contains_value(&3));
    }

    #[test]
    fn test_copy_reachable_rejects_foreign_ids() {
        let graph = linear_graph();
        let (copy, root) = graph.copy_reachable(node(&graph, "A")).unwrap();
        assert!(!graph.contains(root));
        assert_eq!(
            copy.copy_reachable(node(&graph, "A")).unwrap_err().operation(),
            Operation::CopyReachable
        );
    }

    #[test]
    fn test_clear_invalidates_ids() {
        let mut graph = linear_graph();
        let a = node(&graph, "A");
        graph.clear();

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        let fresh = graph.add_node("A");
        assert_eq!(fresh.index(), 0);
        assert_ne!(fresh, a);
        assert!(!graph.contains(a));
    }

    #[test]
    fn test_whole_graph_iterators_visit_every_node_once() {
        let mut graph = graph_from_edges(&[(0, 1, 1), (2, 3, 1), (3, 2, 1)]);
        graph.add_node(9);

        let all: HashSet<NodeId> = graph.node_ids().collect();
        let bfs: Vec<NodeId> = graph.bfs().collect();
        let dfs: Vec<NodeId> = graph.dfs().collect();

        assert_eq!(bfs.len(), all.len());
        assert_eq!(dfs.len(), all.len());
        assert_eq!(bfs.into_iter().collect::<HashSet<_>>(), all);
        assert_eq!(dfs.into_iter().collect::<HashSet<_>>(), all);
    }

    #[test]
    fn test_per_node_iterators() {
        let graph = tree_order_graph();
        let a = graph.node_id(&0).unwrap();

        let bfs: Vec<u32> = graph.bfs_from(a).unwrap().map(|n| *graph.value(n).unwrap()).collect();
        let dfs: Vec<u32> = graph.dfs_from(a).unwrap().map(|n| *graph.value(n).unwrap()).collect();
        assert_eq!(bfs, vec![0, 1, 2, 3]);
        assert_eq!(dfs, vec![0, 1, 3, 2]);

        let err = graph.bfs_from(NodeId::new(0)).err().unwrap();
        assert_eq!(err.operation(), Operation::BfsIterator);
        let err = graph.dfs_from(NodeId::new(0)).err().unwrap();
        assert_eq!(err.operation(), Operation::DfsIterator);
    }

    fn tree_order_graph() -> Graph<u32> {
        graph_from_edges(&[(0, 1, 1), (0, 2, 1), (1, 3, 1)])
    }

    #[test]
    fn test_has_cycle_and_find_cycle() {
        assert!(!linear_graph().has_cycle());
        assert!(four_cycle_with_bridge().has_cycle());

        let cycle = cycle_graph().find_cycle().unwrap();
        assert_eq!(cycle.first(), cycle.last());
        assert!(diamond_graph().find_cycle().is_none());
    }

    #[test]
    fn test_connected_components() {
        let graph = four_cycle_with_bridge();
        assert_eq!(graph.connected_components().len(), 1);

        let graph = linear_graph();
        assert_eq!(graph.connected_components().len(), 3);
    }

    #[test]
    fn test_topological_sort_result() {
        let graph = diamond_graph();
        let order = graph.topological_sort().unwrap();
        assert_eq!(order.first(), Some(&node(&graph, "A")));

        assert_eq!(
            cycle_graph().topological_sort().unwrap_err(),
            Error::NotAcyclic {
                operation: Operation::TopologicalSort,
            }
        );
    }

    #[test]
    fn test_shortest_path_methods() {
        let graph = graph_from_edges(&[(0, 1, 4), (0, 2, 1), (2, 1, 1), (1, 3, 1)]);
        let (s, t) = (graph.node_id(&0).unwrap(), graph.node_id(&3).unwrap());

        assert_eq!(graph.shortest_path_unweighted(s, t).unwrap().len(), 2);
        assert_eq!(graph.shortest_path_dag(s, t).unwrap().cost(), 3);
        assert_eq!(graph.shortest_path_dijkstra(s, t).unwrap().cost(), 3);
        assert_eq!(graph.shortest_path_bellman_ford(s, t).unwrap().cost(), 3);

        assert_eq!(graph.bfs_tree(s).unwrap().cost_to_reach(t), Some(2));
        assert_eq!(graph.dag_tree(s).unwrap().cost_to_reach(t), Some(3));
        assert_eq!(graph.dijkstra_tree(s).unwrap().cost_to_reach(t), Some(3));
        assert_eq!(graph.bellman_ford_tree(s).unwrap().cost_to_reach(t), Some(3));

        assert_eq!(
            graph.shortest_path_dijkstra(t, s).unwrap_err().kind(),
            ErrorKind::PathNotFound
        );
    }

    #[test]
    fn test_describe_uses_values() {
        let mut graph: Graph<&str> = Graph::new();
        let a = graph.add_node("A");
        assert_eq!(graph.describe(a), "\"A\"");
        assert_eq!(graph.describe(NodeId::new(3)), "n3");
    }
}
