//! Single-source shortest paths.
//!
//! Four policies are provided. They share one result type, [`PathTree`], which
//! holds the best known cost and the predecessor edge of every node for one
//! source; [`PathTree::path_to`] walks the predecessor chain back from a target
//! to build a [`ShortestPath`].
//!
//! | Policy | Weights | Function | Failure modes |
//! |--------|---------|----------|---------------|
//! | Breadth-first | ignored (hop count) | [`bfs_tree`] | - |
//! | DAG relaxation | any | [`dag_tree`] | [`Error::NotAcyclic`] |
//! | Dijkstra | non-negative | [`dijkstra_tree`] | [`Error::NegativeWeight`] |
//! | Bellman-Ford | any | [`bellman_ford_tree`] | [`Error::NegativeCycle`] |
//!
//! Every weighted policy can also fail with [`Error::CostOverflow`].
//!
//! Every policy also has a source-to-target form (`shortest_path_*`) that stops
//! as soon as the target's cost is final where the policy allows it, and fails
//! with [`Error::PathNotFound`] when the target is unreachable.
//!
//! Costs are reported as `i64` but accumulated in `i128`, which holds the sum of
//! any walk the algorithms follow exactly. A cost that does not fit back into
//! `i64` fails with [`Error::CostOverflow`]; it is never clamped.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use crate::{
    graph::{
        algorithms::topological_sort, EdgeId, GraphBase, NodeId, Predecessors, WeightedSuccessors,
    },
    Error, Operation, Result,
};

/// Shortest-path information for every node, relative to a single source.
///
/// Produced by [`bfs_tree`], [`dag_tree`], [`dijkstra_tree`] and
/// [`bellman_ford_tree`]. A `PathTree` is a snapshot: it refers to nodes and
/// edges by identifier and is not updated if the graph is mutated afterwards.
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
/// graph.create_weighted_di_edge(a, b, 4)?;
/// graph.create_weighted_di_edge(b, c, 1)?;
/// graph.create_weighted_di_edge(a, c, 9)?;
///
/// let tree = graph.dijkstra_tree(a)?;
/// assert_eq!(tree.cost_to_reach(c), Some(5));
///
/// let path = tree.path_to(&graph, c)?;
/// assert_eq!(path.nodes(), &[a, b, c]);
/// # Ok::<(), graphmesh::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree {
    source: NodeId,
    costs: Vec<Option<i128>>,
    predecessors: Vec<Option<EdgeId>>,
    operation: Operation,
}

impl PathTree {
    fn new(source: NodeId, node_bound: usize, operation: Operation) -> Self {
        let mut costs = vec![None; node_bound];
        costs[source.index()] = Some(0);
        PathTree {
            source,
            costs,
            predecessors: vec![None; node_bound],
            operation,
        }
    }

    fn cost(&self, node: NodeId) -> Option<i128> {
        self.costs[node.index()]
    }

    /// Lowers the cost of `target` through `edge` if that improves it.
    fn relax(&mut self, edge: EdgeId, target: NodeId, cost: i128) -> bool {
        let slot = &mut self.costs[target.index()];
        if slot.is_some_and(|current| current <= cost) {
            return false;
        }
        *slot = Some(cost);
        self.predecessors[target.index()] = Some(edge);
        true
    }

    fn narrow<G: GraphBase>(&self, graph: &G, node: NodeId, cost: i128) -> Result<i64> {
        i64::try_from(cost).map_err(|_| Error::CostOverflow {
            from: graph.describe(self.source),
            to: graph.describe(node),
            operation: self.operation,
        })
    }

    /// Fails if any reached node's cost lies outside the `i64` range.
    fn into_checked<G: GraphBase>(self, graph: &G) -> Result<Self> {
        for node in graph.node_ids() {
            if let Some(cost) = self.costs.get(node.index()).copied().flatten() {
                self.narrow(graph, node, cost)?;
            }
        }
        Ok(self)
    }

    /// The node all costs are measured from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The operation that computed this tree.
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the cost of the cheapest known path from the source to `node`.
    ///
    /// `None` means unreachable (or not a node of the graph this tree was built
    /// from). The source itself costs `0`.
    #[must_use]
    pub fn cost_to_reach(&self, node: NodeId) -> Option<i64> {
        // Trees handed out by the `*_tree` functions are range-checked
        self.costs
            .get(node.index())
            .copied()
            .flatten()
            .and_then(|cost| i64::try_from(cost).ok())
    }

    /// Returns the edge through which `node` is reached on its shortest path.
    ///
    /// `None` for the source and for unreachable nodes.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<EdgeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Returns `true` if the source reaches `node`.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.cost_to_reach(node).is_some()
    }

    /// Returns the number of nodes reached, the source included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.costs.iter().filter(|cost| cost.is_some()).count()
    }

    /// Reconstructs the path from the source to `target`.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph the tree was computed on, used to resolve edge endpoints
    /// * `target` - The node to reach
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if `target` is not a node of `graph`
    /// - [`Error::PathNotFound`] if the source does not reach `target`
    /// - [`Error::EdgeNotFound`] if a predecessor edge has since been removed from `graph`
    /// - [`Error::CostOverflow`] if the cost of the path does not fit in `i64`
    pub fn path_to<G: WeightedSuccessors>(&self, graph: &G, target: NodeId) -> Result<ShortestPath> {
        if !graph.contains_node(target) {
            return Err(Error::NodeNotFound {
                node: graph.describe(target),
                operation: self.operation,
            });
        }
        let Some(cost) = self.costs.get(target.index()).copied().flatten() else {
            return Err(Error::PathNotFound {
                from: graph.describe(self.source),
                to: graph.describe(target),
                operation: self.operation,
            });
        };

        let mut nodes = vec![target];
        let mut edges = Vec::new();
        let mut current = target;
        while current != self.source {
            let edge = self.predecessor(current).ok_or_else(|| Error::PathNotFound {
                from: graph.describe(self.source),
                to: graph.describe(target),
                operation: Operation::PathReconstruction,
            })?;
            let (from, _) = graph.edge_endpoints(edge).ok_or_else(|| Error::EdgeNotFound {
                from: edge.to_string(),
                to: graph.describe(current),
                operation: Operation::PathReconstruction,
            })?;

            // A chain longer than the node count can only come from a mutated graph
            if edges.len() >= self.costs.len() {
                return Err(Error::PathNotFound {
                    from: graph.describe(self.source),
                    to: graph.describe(target),
                    operation: Operation::PathReconstruction,
                });
            }

            edges.push(edge);
            nodes.push(from);
            current = from;
        }

        nodes.reverse();
        edges.reverse();
        Ok(ShortestPath {
            nodes,
            edges,
            cost: self.narrow(graph, target, cost)?,
        })
    }
}

/// A concrete path between two nodes together with its total cost.
///
/// `nodes` has one more element than `edges`; edge `i` leads from `nodes[i]` to
/// `nodes[i + 1]`. A path from a node to itself has a single node, no edges and
/// cost `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
    cost: i64,
}

impl ShortestPath {
    /// The nodes along the path, source first.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The edges along the path, in travel order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// The total cost of the path.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Number of edges on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the path has no edges (source equals target).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The first node of the path.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    /// The last node of the path.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }
}

fn require_node<G: WeightedSuccessors>(graph: &G, node: NodeId, operation: Operation) -> Result<()> {
    if graph.contains_node(node) {
        Ok(())
    } else {
        Err(Error::NodeNotFound {
            node: graph.describe(node),
            operation,
        })
    }
}

fn breadth_first<G: WeightedSuccessors>(graph: &G, source: NodeId, target: Option<NodeId>) -> PathTree {
    let mut tree = PathTree::new(source, graph.node_bound(), Operation::ShortestPathUnweighted);
    let mut queue = VecDeque::from([source]);

    while let Some(node) = queue.pop_front() {
        if Some(node) == target {
            break;
        }
        let hops = tree.cost(node).unwrap_or(0) + 1;
        for (edge, succ, _) in graph.weighted_successors(node) {
            // First discovery is final in level order
            if tree.costs[succ.index()].is_none() {
                tree.costs[succ.index()] = Some(hops);
                tree.predecessors[succ.index()] = Some(edge);
                queue.push_back(succ);
            }
        }
    }

    tracing::debug!(
        source = %source,
        reached = tree.reached_count(),
        "breadth-first shortest paths"
    );
    tree
}

/// Computes hop-count shortest paths from `source` by breadth-first search.
///
/// Edge weights are ignored; the cost of a node is the number of edges on the
/// shortest path to it. Each node's predecessor is the edge through which it was
/// first discovered.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if `source` is not a node of the graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn bfs_tree<G: WeightedSuccessors>(graph: &G, source: NodeId) -> Result<PathTree> {
    require_node(graph, source, Operation::ShortestPathUnweighted)?;
    Ok(breadth_first(graph, source, None))
}

/// Finds a path from `source` to `target` with the fewest edges.
///
/// The search stops as soon as `target` is dequeued.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if either endpoint is not a node of the graph
/// - [`Error::PathNotFound`] if the queue empties before `target` is reached
pub fn shortest_path_unweighted<G: WeightedSuccessors>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<ShortestPath> {
    require_node(graph, source, Operation::ShortestPathUnweighted)?;
    require_node(graph, target, Operation::ShortestPathUnweighted)?;
    breadth_first(graph, source, Some(target)).path_to(graph, target)
}

fn dag_relaxation<G>(graph: &G, source: NodeId) -> Result<PathTree>
where
    G: WeightedSuccessors + Predecessors,
{
    let order = topological_sort(graph).ok_or_else(|| {
        Error::NotAcyclic {
            operation: Operation::TopologicalSort,
        }
        .within(Operation::ShortestPathDag)
    })?;

    let mut tree = PathTree::new(source, graph.node_bound(), Operation::ShortestPathDag);
    // Nodes before the source in the order cannot be reached from it
    let start = order.iter().position(|&node| node == source).unwrap_or(0);
    for &node in &order[start..] {
        let Some(cost) = tree.cost(node) else {
            continue;
        };
        for (edge, succ, weight) in graph.weighted_successors(node) {
            tree.relax(edge, succ, cost + i128::from(weight));
        }
    }

    tracing::debug!(
        source = %source,
        reached = tree.reached_count(),
        "DAG shortest paths"
    );
    Ok(tree)
}

/// Computes shortest paths from `source` by relaxing edges in topological order.
///
/// The graph is sorted with [`topological_sort`] first; relaxation in that order
/// settles every node in a single pass, so negative weights are allowed.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `source` is not a node of the graph
/// - [`Error::Context`] wrapping [`Error::NotAcyclic`] if the graph has a directed cycle
/// - [`Error::CostOverflow`] if a reached node's cost does not fit in `i64`
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn dag_tree<G>(graph: &G, source: NodeId) -> Result<PathTree>
where
    G: WeightedSuccessors + Predecessors,
{
    require_node(graph, source, Operation::ShortestPathDag)?;
    dag_relaxation(graph, source)?.into_checked(graph)
}

/// Finds the cheapest path from `source` to `target` on a DAG.
///
/// # Errors
///
/// As [`dag_tree`], plus [`Error::NodeNotFound`] for `target` and
/// [`Error::PathNotFound`] if `target` is unreachable. Only the cost of the
/// returned path has to fit in `i64`.
pub fn shortest_path_dag<G>(graph: &G, source: NodeId, target: NodeId) -> Result<ShortestPath>
where
    G: WeightedSuccessors + Predecessors,
{
    require_node(graph, source, Operation::ShortestPathDag)?;
    require_node(graph, target, Operation::ShortestPathDag)?;
    dag_relaxation(graph, source)?.path_to(graph, target)
}

fn dijkstra<G: WeightedSuccessors>(
    graph: &G,
    source: NodeId,
    target: Option<NodeId>,
) -> Result<PathTree> {
    let mut tree = PathTree::new(source, graph.node_bound(), Operation::ShortestPathDijkstra);
    let mut settled = vec![false; graph.node_bound()];
    let mut heap = BinaryHeap::from([Reverse((0_i128, source))]);

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Lazy deletion: a node may sit in the heap several times, only the cheapest entry counts
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        tracing::trace!(node = %node, cost, "settled");

        if Some(node) == target {
            break;
        }

        for (edge, succ, weight) in graph.weighted_successors(node) {
            if weight < 0 {
                return Err(Error::NegativeWeight {
                    from: graph.describe(node),
                    to: graph.describe(succ),
                    weight,
                    operation: Operation::ShortestPathDijkstra,
                });
            }
            if settled[succ.index()] {
                continue;
            }
            let next = cost + i128::from(weight);
            if tree.relax(edge, succ, next) {
                heap.push(Reverse((next, succ)));
            }
        }
    }

    tracing::debug!(
        source = %source,
        reached = tree.reached_count(),
        "Dijkstra shortest paths"
    );
    Ok(tree)
}

/// Computes shortest paths from `source` with Dijkstra's algorithm.
///
/// Uses a binary min-heap with lazy deletion: relaxing a node pushes a new heap
/// entry instead of updating the old one, and entries of nodes that are already
/// settled are discarded when popped. Every node is therefore finalized exactly
/// once, with its cheapest cost.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `source` is not a node of the graph
/// - [`Error::NegativeWeight`] if a negative edge is reachable from `source`
/// - [`Error::CostOverflow`] if a reached node's cost does not fit in `i64`
///
/// # Complexity
///
/// - Time: O((V + E) log E)
/// - Space: O(V + E)
pub fn dijkstra_tree<G: WeightedSuccessors>(graph: &G, source: NodeId) -> Result<PathTree> {
    require_node(graph, source, Operation::ShortestPathDijkstra)?;
    dijkstra(graph, source, None)?.into_checked(graph)
}

/// Finds the cheapest path from `source` to `target` with Dijkstra's algorithm.
///
/// The search stops once `target` is settled.
///
/// # Errors
///
/// As [`dijkstra_tree`], plus [`Error::NodeNotFound`] for `target` and
/// [`Error::PathNotFound`] if `target` is unreachable.
pub fn shortest_path_dijkstra<G: WeightedSuccessors>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<ShortestPath> {
    require_node(graph, source, Operation::ShortestPathDijkstra)?;
    require_node(graph, target, Operation::ShortestPathDijkstra)?;
    dijkstra(graph, source, Some(target))?.path_to(graph, target)
}

/// Computes shortest paths from `source` with the Bellman-Ford algorithm.
///
/// Performs up to |V|-1 relaxation passes over every edge, stopping early once a
/// pass changes nothing, then one more pass: any edge that can still be relaxed
/// lies on or behind a negative cycle reachable from `source`. Negative cycles
/// the source cannot reach do not affect the result.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `source` is not a node of the graph
/// - [`Error::NegativeCycle`] if a negative cycle is reachable from `source`
/// - [`Error::CostOverflow`] if a reached node's cost does not fit in `i64`
///
/// # Complexity
///
/// - Time: O(V · E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphmesh::{ErrorKind, Graph};
///
/// let mut graph: Graph<u32> = Graph::new();
/// let n: Vec<_> = (0..5).map(|v| graph.add_node(v)).collect();
/// graph.create_weighted_di_edge(n[0], n[1], 2)?;
/// graph.create_weighted_di_edge(n[1], n[2], 2)?;
/// graph.create_weighted_di_edge(n[2], n[3], 3)?;
/// graph.create_weighted_di_edge(n[3], n[1], -6)?;
/// graph.create_weighted_di_edge(n[3], n[4], 4)?;
///
/// let err = graph.bellman_ford_tree(n[0]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NegativeCycle);
/// # Ok::<(), graphmesh::Error>(())
/// ```
pub fn bellman_ford_tree<G: WeightedSuccessors>(graph: &G, source: NodeId) -> Result<PathTree> {
    require_node(graph, source, Operation::ShortestPathBellmanFord)?;
    bellman_ford(graph, source)?.into_checked(graph)
}

fn bellman_ford<G: WeightedSuccessors>(graph: &G, source: NodeId) -> Result<PathTree> {
    let edges: Vec<(EdgeId, NodeId, NodeId, i64)> = graph
        .node_ids()
        .flat_map(|node| {
            graph
                .weighted_successors(node)
                .map(move |(edge, succ, weight)| (edge, node, succ, weight))
        })
        .collect();

    let mut tree = PathTree::new(source, graph.node_bound(), Operation::ShortestPathBellmanFord);
    let mut passes = 0;
    for _ in 1..graph.node_count() {
        passes += 1;
        let mut changed = false;
        for &(edge, from, to, weight) in &edges {
            if let Some(cost) = tree.cost(from) {
                changed |= tree.relax(edge, to, cost + i128::from(weight));
            }
        }
        if !changed {
            break;
        }
    }

    let improvable = edges.iter().any(|&(_, from, to, weight)| {
        tree.cost(from).is_some_and(|cost| {
            tree.cost(to).is_some_and(|current| cost + i128::from(weight) < current)
        })
    });
    if improvable {
        return Err(Error::NegativeCycle {
            from: graph.describe(source),
            operation: Operation::ShortestPathBellmanFord,
        });
    }

    tracing::debug!(
        source = %source,
        passes,
        reached = tree.reached_count(),
        "Bellman-Ford shortest paths"
    );
    Ok(tree)
}

/// Finds the cheapest path from `source` to `target` with the Bellman-Ford algorithm.
///
/// # Errors
///
/// As [`bellman_ford_tree`], plus [`Error::NodeNotFound`] for `target` and
/// [`Error::PathNotFound`] if `target` is unreachable.
pub fn shortest_path_bellman_ford<G: WeightedSuccessors>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<ShortestPath> {
    require_node(graph, source, Operation::ShortestPathBellmanFord)?;
    require_node(graph, target, Operation::ShortestPathBellmanFord)?;
    bellman_ford(graph, source)?.path_to(graph, target)
}
