#![no_main]

use graphmesh::{Graph, NodeId};
use libfuzzer_sys::fuzz_target;

// Interprets the input as a stream of 3-byte commands and checks that the
// counters stay consistent with the arenas after every step.
fuzz_target!(|data: &[u8]| {
    let mut graph: Graph<u8> = Graph::new();
    let mut ids: Vec<NodeId> = Vec::new();

    for chunk in data.chunks_exact(3) {
        let (op, a, b) = (chunk[0], chunk[1], chunk[2]);
        let pick = |ids: &[NodeId], i: u8| ids.get(i as usize % ids.len().max(1)).copied();

        match op % 8 {
            0 | 1 => ids.push(graph.add_node(a % 32)),
            2 => {
                if let (Some(from), Some(to)) = (pick(&ids, a), pick(&ids, b)) {
                    let _ = graph.create_weighted_di_edge(from, to, i64::from(b as i8));
                }
            }
            3 => {
                if let (Some(from), Some(to)) = (pick(&ids, a), pick(&ids, b)) {
                    let _ = graph.delete_edge(from, to);
                }
            }
            4 => {
                if let Some(node) = pick(&ids, a) {
                    let _ = graph.delete_node(node);
                }
            }
            5 => graph.reverse(),
            6 => {
                if let (Some(from), Some(to)) = (pick(&ids, a), pick(&ids, b)) {
                    let _ = graph.shortest_path_bellman_ford(from, to);
                    let _ = graph.shortest_path_dag(from, to);
                }
            }
            _ => {
                let _ = graph.connected_components();
                let _ = graph.topological_sort();
            }
        }

        assert_eq!(graph.node_ids().count(), graph.node_count());
        assert_eq!(graph.edges().count(), graph.edge_count());
    }
});
