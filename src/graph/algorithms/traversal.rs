//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal iterators and the
//! postorder (finish order) computation that Kosaraju's algorithm builds on.
//!
//! # Algorithms
//!
//! - [`dfs`] / [`dfs_all`] - Iterative depth-first search (pre-order)
//! - [`bfs`] / [`bfs_all`] - Breadth-first search
//! - [`postorder`] / [`postorder_all`] - Depth-first finish order
//!
//! The `*_all` variants cover the whole graph: when the nodes reachable from the
//! current root are exhausted, traversal restarts from the lowest-indexed node not
//! yet visited, so every connected component is visited.
//!
//! # Iteration Protocol
//!
//! [`DfsIterator`] and [`BfsIterator`] are lazy, finite and one-shot. Besides the
//! standard [`Iterator`] interface they expose an explicit external-iterator
//! protocol: [`has_next`](DfsIterator::has_next) and
//! [`try_next`](DfsIterator::try_next), the latter failing with
//! [`Error::EmptyIterator`] once the traversal is exhausted.
//!
//! Both iterators borrow the graph immutably for their whole lifetime, so the graph
//! cannot be mutated while a traversal is live.

use std::collections::VecDeque;

use crate::{
    graph::{NodeId, Successors},
    Error, Operation, Result,
};

/// Whole-graph traversal restarts from these roots, lowest index first.
struct Roots {
    remaining: std::vec::IntoIter<NodeId>,
}

impl Roots {
    fn none() -> Self {
        Roots {
            remaining: Vec::new().into_iter(),
        }
    }

    fn all<G: Successors>(graph: &G) -> Self {
        Roots {
            remaining: graph.node_ids().collect::<Vec<_>>().into_iter(),
        }
    }

    fn next_unvisited(&mut self, visited: &[bool]) -> Option<NodeId> {
        self.remaining.find(|node| !visited[node.index()])
    }
}

/// Depth-first search iterator over graph nodes.
///
/// Visits each reachable node exactly once in pre-order (a node before its
/// descendants), following outgoing edges in insertion order.
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, NodeId, graph::algorithms::dfs};
///
/// let mut graph: Graph<char> = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.create_di_edge(a, b)?;
/// graph.create_di_edge(a, c)?;
///
/// let visited: Vec<NodeId> = dfs(&graph, a).collect();
/// assert_eq!(visited, vec![a, b, c]);
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
    roots: Roots,
    peeked: Option<NodeId>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: Option<NodeId>, roots: Roots) -> Self {
        let mut stack = Vec::new();
        if let Some(start) = start.filter(|&node| graph.contains_node(node)) {
            stack.push(start);
        }

        DfsIterator {
            graph,
            stack,
            visited: vec![false; graph.node_bound()],
            roots,
            peeked: None,
        }
    }

    fn advance(&mut self) -> Option<NodeId> {
        loop {
            let node = match self.stack.pop() {
                Some(node) => node,
                None => self.roots.next_unvisited(&self.visited)?,
            };
            if self.visited[node.index()] {
                continue;
            }
            self.visited[node.index()] = true;

            // Push in reverse so successors are visited in insertion order
            let successors: Vec<NodeId> = self.graph.successors(node).collect();
            for &succ in successors.iter().rev() {
                if !self.visited[succ.index()] {
                    self.stack.push(succ);
                }
            }

            return Some(node);
        }
    }

    /// Returns `true` if another node remains to be visited.
    pub fn has_next(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.advance();
        }
        self.peeked.is_some()
    }

    /// Returns the next node in depth-first order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIterator`] once every reachable node has been yielded.
    pub fn try_next(&mut self) -> Result<NodeId> {
        self.next().ok_or(Error::EmptyIterator {
            operation: Operation::DfsIterator,
        })
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.peeked.take().or_else(|| self.advance())
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// Only nodes reachable from `start` are visited. If `start` is not a live node of
/// the graph the iterator is empty.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the visited set and stack
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, Some(start), Roots::none())
}

/// Returns a depth-first search iterator over every node of the graph.
///
/// Each connected component is traversed in turn, restarting from the
/// lowest-indexed unvisited node.
pub fn dfs_all<G: Successors>(graph: &G) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, None, Roots::all(graph))
}

/// Breadth-first search iterator over graph nodes.
///
/// Visits each reachable node exactly once, exploring all nodes at distance d
/// before any node at distance d+1.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
    roots: Roots,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: Option<NodeId>, roots: Roots) -> Self {
        let mut visited = vec![false; graph.node_bound()];
        let mut queue = VecDeque::new();
        if let Some(start) = start.filter(|&node| graph.contains_node(node)) {
            visited[start.index()] = true;
            queue.push_back(start);
        }

        BfsIterator {
            graph,
            queue,
            visited,
            roots,
        }
    }

    fn refill(&mut self) {
        if self.queue.is_empty() {
            if let Some(root) = self.roots.next_unvisited(&self.visited) {
                self.visited[root.index()] = true;
                self.queue.push_back(root);
            }
        }
    }

    /// Returns `true` if another node remains to be visited.
    pub fn has_next(&mut self) -> bool {
        self.refill();
        !self.queue.is_empty()
    }

    /// Returns the next node in breadth-first order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIterator`] once every reachable node has been yielded.
    pub fn try_next(&mut self) -> Result<NodeId> {
        self.next().ok_or(Error::EmptyIterator {
            operation: Operation::BfsIterator,
        })
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.refill();
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from the given node.
///
/// If `start` is not a live node of the graph the iterator is empty.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, NodeId, graph::algorithms::bfs};
///
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
/// let order: Vec<NodeId> = bfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c, d]);
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, Some(start), Roots::none())
}

/// Returns a breadth-first search iterator over every node of the graph.
pub fn bfs_all<G: Successors>(graph: &G) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, None, Roots::all(graph))
}

#[derive(Clone, Copy)]
enum Visit {
    Enter,
    Exit,
}

/// Iterative postorder from `start`, appending to `result` and sharing `visited`.
fn postorder_into<G: Successors>(
    graph: &G,
    start: NodeId,
    visited: &mut [bool],
    result: &mut Vec<NodeId>,
) {
    let mut stack = vec![(start, Visit::Enter)];

    while let Some((node, visit)) = stack.pop() {
        match visit {
            Visit::Enter => {
                if visited[node.index()] {
                    continue;
                }
                visited[node.index()] = true;

                // Exit is processed after all children
                stack.push((node, Visit::Exit));

                let successors: Vec<NodeId> = graph.successors(node).collect();
                for &succ in successors.iter().rev() {
                    if !visited[succ.index()] {
                        stack.push((succ, Visit::Enter));
                    }
                }
            }
            Visit::Exit => result.push(node),
        }
    }
}

/// Computes the postorder traversal of nodes reachable from the start.
///
/// In postorder a node is emitted when its exploration finishes, i.e. after all of
/// its descendants. Returns an empty vector if `start` is not a live node.
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, graph::algorithms::postorder};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.create_di_edge(a, b)?;
/// graph.create_di_edge(b, c)?;
///
/// assert_eq!(postorder(&graph, a), vec![c, b, a]);
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    if !graph.contains_node(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.node_bound()];
    let mut result = Vec::with_capacity(graph.node_count());
    postorder_into(graph, start, &mut visited, &mut result);
    result
}

/// Computes the finish order of a depth-first search covering the whole graph.
///
/// Roots are taken in ascending index order; every node appears exactly once. This
/// is the stack Kosaraju's algorithm pops in its second pass.
pub fn postorder_all<G: Successors>(graph: &G) -> Vec<NodeId> {
    let mut visited = vec![false; graph.node_bound()];
    let mut result = Vec::with_capacity(graph.node_count());

    for root in graph.node_ids() {
        if !visited[root.index()] {
            postorder_into(graph, root, &mut visited, &mut result);
        }
    }

    result
}
