//! Whole-board properties of the adjacency table, graph and traversal

use hexboard_core::{
    bfs_order, build_graph, distances, get_node, neighbors_of, reset_all, toggle, traverse,
    AdjacencyTable, Graph, NodeId, NODE_COUNT, POSITIONS,
};
use std::collections::{HashSet, VecDeque};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn built_graph() -> Graph {
    build_graph(&POSITIONS, AdjacencyTable::standard()).unwrap()
}

/// Hop counts straight from the adjacency lists, marking on enqueue
fn reference_hops(start: usize) -> Vec<Option<usize>> {
    let mut hops = vec![None; NODE_COUNT];
    let mut queue = VecDeque::from([start]);
    hops[start] = Some(0);
    while let Some(i) = queue.pop_front() {
        let next = hops[i].unwrap() + 1;
        for &j in neighbors_of(i).unwrap() {
            if hops[j].is_none() {
                hops[j] = Some(next);
                queue.push_back(j);
            }
        }
    }
    hops
}

// ============================================================================
// ADJACENCY
// ============================================================================

#[test]
fn test_adjacency_symmetric() {
    for i in 0..NODE_COUNT {
        for &j in neighbors_of(i).unwrap() {
            assert!(neighbors_of(j).unwrap().contains(&i), "{} -> {} not mirrored", i, j);
        }
    }
}

#[test]
fn test_no_self_loops() {
    for i in 0..NODE_COUNT {
        assert!(!neighbors_of(i).unwrap().contains(&i));
    }
}

#[test]
fn test_concrete_neighbor_lists() {
    assert_eq!(neighbors_of(0).unwrap(), &[1, 2, 3]);
    assert_eq!(neighbors_of(12).unwrap(), &[6, 11, 13, 18, 19, 20]);
    assert_eq!(neighbors_of(30).unwrap(), &[23, 24, 31]);
}

// ============================================================================
// GRAPH
// ============================================================================

#[test]
fn test_slots_match_adjacency() {
    let graph = built_graph();
    for i in 0..NODE_COUNT {
        let node = get_node(&graph, i).unwrap();
        let slots: Vec<usize> = node.neighbor_ids().map(NodeId::index).collect();
        assert_eq!(slots, neighbors_of(i).unwrap());
        assert!(!slots.contains(&i));
        for id in node.neighbor_ids() {
            assert_eq!(graph.get(id).unwrap().index, id);
        }
    }
}

#[test]
fn test_center_node_neighbors() {
    let graph = built_graph();
    let node = get_node(&graph, 12).unwrap();
    let targets: HashSet<usize> = node.neighbor_ids().map(NodeId::index).collect();
    assert_eq!(targets, HashSet::from([6, 11, 13, 18, 19, 20]));
    assert_eq!(node.neighbors.len(), 6);
}

#[test]
fn test_get_node_out_of_range() {
    let graph = built_graph();
    assert!(get_node(&graph, 37).is_err());
}

// ============================================================================
// TRAVERSAL
// ============================================================================

#[test]
fn test_traverse_reaches_all_from_every_start() {
    let graph = built_graph();
    for start in 0..NODE_COUNT {
        let mut seen = Vec::new();
        traverse(&graph, start, |node| seen.push(node.index.index())).unwrap();
        assert_eq!(seen.len(), NODE_COUNT);
        assert_eq!(seen[0], start);
        let unique: HashSet<usize> = seen.iter().copied().collect();
        assert_eq!(unique.len(), NODE_COUNT);
    }
}

#[test]
fn test_traverse_is_level_order() {
    let graph = built_graph();
    for start in 0..NODE_COUNT {
        let hops = reference_hops(start);
        let order = bfs_order(&graph, start).unwrap();
        for pair in order.windows(2) {
            assert!(hops[pair[0]] <= hops[pair[1]], "start {}: {:?}", start, pair);
        }

        let dist = distances(&graph, start).unwrap();
        let expected: Vec<usize> = hops.iter().map(|h| h.unwrap()).collect();
        assert_eq!(dist, expected, "start {}", start);
    }

    let order = bfs_order(&graph, 0).unwrap();
    let mut first_ring = order[1..4].to_vec();
    first_ring.sort_unstable();
    assert_eq!(first_ring, vec![1, 2, 3]);
}

#[test]
fn test_rings_around_center() {
    let graph = built_graph();
    let dist = distances(&graph, 12).unwrap();
    let ring_sizes: Vec<usize> = (0..=3).map(|d| dist.iter().filter(|&&h| h == d).count()).collect();
    assert_eq!(ring_sizes, vec![1, 6, 12, 18]);
}

// ============================================================================
// SELECTION
// ============================================================================

#[test]
fn test_reset_twice_equals_once() {
    let mut graph = built_graph();
    toggle(&mut graph, 9).unwrap();
    reset_all(&mut graph);
    reset_all(&mut graph);
    assert_eq!(graph.nodes(), Graph::standard().nodes());
}
