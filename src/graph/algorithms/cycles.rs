//! Cycle detection algorithms for directed graphs.
//!
//! This module detects directed cycles using a three-state depth-first search.
//! Every node is *unvisited*, *pending* (on the active DFS path) or *done* (fully
//! explored without finding a cycle through it). An edge into a pending node is a
//! back-edge and closes a cycle; edges into done nodes are skipped.
//!
//! The search is iterative with an explicit frame stack, so deep graphs cannot
//! overflow the call stack.

use crate::graph::{NodeId, Successors};

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Unvisited,
    Pending,
    Done,
}

struct Frame {
    node: NodeId,
    successors: Vec<NodeId>,
    cursor: usize,
}

impl Frame {
    fn enter<G: Successors>(graph: &G, node: NodeId) -> Self {
        Frame {
            node,
            successors: graph.successors(node).collect(),
            cursor: 0,
        }
    }
}

/// Runs the three-state search from each root in turn, returning the first cycle.
fn search<G: Successors>(graph: &G, roots: impl IntoIterator<Item = NodeId>) -> Option<Vec<NodeId>> {
    let mut state = vec![State::Unvisited; graph.node_bound()];
    let mut stack: Vec<Frame> = Vec::new();

    for root in roots {
        if state[root.index()] != State::Unvisited {
            continue;
        }
        state[root.index()] = State::Pending;
        stack.push(Frame::enter(graph, root));

        while let Some(frame) = stack.last_mut() {
            let Some(&next) = frame.successors.get(frame.cursor) else {
                state[frame.node.index()] = State::Done;
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            match state[next.index()] {
                State::Done => {}
                State::Pending => {
                    // Back-edge: the cycle is the active path from `next` onwards
                    let start = stack.iter().position(|f| f.node == next)?;
                    let mut cycle: Vec<NodeId> = stack[start..].iter().map(|f| f.node).collect();
                    cycle.push(next);
                    return Some(cycle);
                }
                State::Unvisited => {
                    state[next.index()] = State::Pending;
                    stack.push(Frame::enter(graph, next));
                }
            }
        }
    }

    None
}

/// Checks if a directed graph contains any cycle.
///
/// Every node not yet marked done is used as a search root, so cycles in any
/// component are found. Self-loops are cycles of length one.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, graph::algorithms::has_cycle};
///
/// let mut dag: Graph<u32> = Graph::new();
/// let a = dag.add_node(0);
/// let b = dag.add_node(1);
/// dag.create_di_edge(a, b)?;
/// assert!(!has_cycle(&dag));
///
/// dag.create_di_edge(b, a)?;
/// assert!(has_cycle(&dag));
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    search(graph, graph.node_ids().collect::<Vec<_>>()).is_some()
}

/// Checks if a cycle is reachable from `start`.
///
/// Returns `false` if `start` is not a live node of the graph.
pub fn has_cycle_from<G: Successors>(graph: &G, start: NodeId) -> bool {
    graph.contains_node(start) && search(graph, [start]).is_some()
}

/// Finds a directed cycle if one exists.
///
/// The cycle is returned as a closed walk: it starts and ends with the same node,
/// and consecutive nodes are joined by an edge. A self-loop on `n` yields `[n, n]`.
///
/// # Examples
///
/// ```rust
/// use graphmesh::{Graph, graph::algorithms::find_cycle};
///
/// let mut graph: Graph<char> = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.create_di_edge(a, b)?;
/// graph.create_di_edge(b, c)?;
/// graph.create_di_edge(c, a)?;
///
/// assert_eq!(find_cycle(&graph), Some(vec![a, b, c, a]));
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub fn find_cycle<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    search(graph, graph.node_ids().collect::<Vec<_>>())
}
