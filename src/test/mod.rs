//! Shared graph fixtures for unit tests.
//!
//! Each builder returns a small graph with a known shape; the letter-valued
//! graphs are looked up by value with [`node`].

use crate::{Graph, NodeId};

/// Looks up the node holding `value`, panicking if it does not exist.
pub fn node(graph: &Graph<&'static str>, value: &str) -> NodeId {
    graph
        .nodes()
        .find(|(_, n)| *n.value() == value)
        .map(|(id, _)| id)
        .unwrap_or_else(|| panic!("no node holds {value:?}"))
}

/// Builds a graph of `&str` nodes from unweighted directed edges, adding nodes on first use.
fn letter_graph(nodes: &[&'static str], edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
    let mut graph = Graph::new();
    for &value in nodes {
        graph.add_node(value);
    }
    for &(from, to) in edges {
        let from = graph.add_node(from);
        let to = graph.add_node(to);
        graph.create_di_edge(from, to).unwrap();
    }
    graph
}

/// A -> B -> C
pub fn linear_graph() -> Graph<&'static str> {
    letter_graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")])
}

/// A -> B, A -> C, B -> D, C -> D
pub fn diamond_graph() -> Graph<&'static str> {
    letter_graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    )
}

/// A -> B -> C -> A
pub fn cycle_graph() -> Graph<&'static str> {
    letter_graph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")])
}

/// A -> B, A -> C, B -> D, B -> E, C -> F
pub fn tree_graph() -> Graph<&'static str> {
    letter_graph(
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("B", "E"), ("C", "F")],
    )
}

/// Builds a `u32`-valued graph from `(from, to, weight)` triples.
///
/// Nodes are added in order of first appearance.
pub fn graph_from_edges(edges: &[(u32, u32, i64)]) -> Graph<u32> {
    let mut graph = Graph::new();
    for &(from, to, weight) in edges {
        let from = graph.add_node(from);
        let to = graph.add_node(to);
        graph.create_weighted_di_edge(from, to, weight).unwrap();
    }
    graph
}

/// 0 -> 1 -> 2 -> 0 plus 2 <-> 3
pub fn four_cycle_with_bridge() -> Graph<u32> {
    let mut graph = graph_from_edges(&[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
    let two = graph.add_node(2);
    let three = graph.add_node(3);
    graph.create_bi_edge(two, three).unwrap();
    graph
}

/// 4 -> 6 (2), 6 -> 5 (3), 5 -> 4 (4)
pub fn weighted_triangle() -> Graph<u32> {
    graph_from_edges(&[(4, 6, 2), (6, 5, 3), (5, 4, 4)])
}

/// 0 -> 1 (2), 1 -> 2 (2), 2 -> 3 (3), 3 -> 1 (-6), 3 -> 4 (4)
pub fn negative_cycle_graph() -> Graph<u32> {
    graph_from_edges(&[(0, 1, 2), (1, 2, 2), (2, 3, 3), (3, 1, -6), (3, 4, 4)])
}

/// Every edge as `(source value, target value, weight)`, sorted.
pub fn edge_list(graph: &Graph<u32>) -> Vec<(u32, u32, i64)> {
    let mut edges: Vec<(u32, u32, i64)> = graph
        .edges()
        .map(|e| {
            (
                *graph.value(e.source()).unwrap(),
                *graph.value(e.target()).unwrap(),
                e.weight(),
            )
        })
        .collect();
    edges.sort_unstable();
    edges
}
