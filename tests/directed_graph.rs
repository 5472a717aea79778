//! Scenario tests for the adjacency-matrix directed graph.

use dugraph::{DirectedGraph, Distance, Graph, GraphError};

const INF: Distance<i64> = Distance::Infinite;

fn d(values: &[Option<i64>]) -> Vec<Distance<i64>> {
    values.iter().map(|&v| Distance::from(v)).collect()
}

fn sample() -> DirectedGraph {
    DirectedGraph::from_edges([
        (0, 1, 10),
        (4, 0, 12),
        (1, 4, 15),
        (4, 3, 3),
        (3, 1, 5),
        (2, 1, 23),
        (3, 2, 7),
    ])
}

#[test]
fn test_build_by_add_vertex_and_add_edge() {
    let mut graph = DirectedGraph::<i64>::new();
    assert_eq!(graph.vertices(), Vec::<usize>::new());
    assert!(graph.edges().is_empty());

    for expected in 1..=5 {
        assert_eq!(graph.add_vertex(), expected);
    }
    for (src, dst, weight) in [(0, 1, 10), (4, 0, 12), (1, 4, 15), (4, 3, 3), (3, 1, 5), (2, 1, 23), (3, 2, 7)] {
        graph.add_edge(src, dst, weight);
    }

    assert_eq!(graph, sample());
    assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 4]);
    assert_eq!(
        graph.edges(),
        vec![
            (0, 1, 10),
            (1, 4, 15),
            (2, 1, 23),
            (3, 1, 5),
            (3, 2, 7),
            (4, 0, 12),
            (4, 3, 3),
        ]
    );
}

#[test]
fn test_self_loops_never_change_counts() {
    let mut graph = sample();
    let before = (graph.vertex_count(), graph.edge_count());
    for v in 0..5 {
        graph.add_edge(v, v, 9);
    }
    assert_eq!((graph.vertex_count(), graph.edge_count()), before);
}

#[test]
fn test_is_valid_path() {
    let graph = sample();
    let cases: [(&[usize], bool); 6] = [
        (&[0, 1, 4, 3], true),
        (&[1, 3, 2, 1], false),
        (&[0, 4], false),
        (&[4, 0], true),
        (&[], true),
        (&[2], true),
    ];
    for (path, expected) in cases {
        assert_eq!(graph.is_valid_path(path), expected, "path {path:?}");
    }
    assert!(!graph.is_valid_path(&[9]));
    assert!(!graph.is_valid_path(&[0, 9]));
    assert!(DirectedGraph::<i64>::new().is_valid_path(&[]));
}

#[test]
fn test_dfs_and_bfs_from_every_vertex() {
    let graph = sample();
    let expected = [
        (vec![0, 1, 4, 3, 2], vec![0, 1, 4, 3, 2]),
        (vec![1, 4, 0, 3, 2], vec![1, 4, 0, 3, 2]),
        (vec![2, 1, 4, 0, 3], vec![2, 1, 4, 0, 3]),
        (vec![3, 1, 4, 0, 2], vec![3, 1, 2, 4, 0]),
        (vec![4, 0, 1, 3, 2], vec![4, 0, 3, 1, 2]),
    ];
    for (start, (dfs, bfs)) in expected.into_iter().enumerate() {
        assert_eq!(graph.dfs(start, None), dfs, "dfs from {start}");
        assert_eq!(graph.bfs(start, None), bfs, "bfs from {start}");
    }
}

#[test]
fn test_traversal_stops_at_end_vertex() {
    let graph = sample();
    assert_eq!(graph.dfs(0, Some(3)), vec![0, 1, 4, 3]);
    assert_eq!(graph.bfs(3, Some(4)), vec![3, 1, 2, 4]);
    assert_eq!(graph.dfs(2, Some(2)), vec![2]);
    // An unreachable or missing end vertex means a full walk.
    assert_eq!(graph.bfs(0, Some(42)), vec![0, 1, 4, 3, 2]);
    assert_eq!(graph.dfs(7, Some(0)), Vec::<usize>::new());
}

#[test]
fn test_has_cycle_through_removals_and_additions() {
    let mut graph = sample();
    assert!(graph.has_cycle());

    let removals = [((3, 1), true), ((4, 0), true), ((3, 2), false)];
    for ((src, dst), expected) in removals {
        graph.remove_edge(src, dst);
        assert_eq!(graph.has_cycle(), expected, "after removing {src}->{dst}");
    }

    // 1 -> 3 and 1 -> 4 -> 3 reconverge but do not form a cycle.
    let additions = [((4, 3), false), ((2, 3), false), ((1, 3), false), ((4, 0), true)];
    for ((src, dst), expected) in additions {
        graph.add_unit_edge(src, dst);
        assert_eq!(graph.has_cycle(), expected, "after adding {src}->{dst}");
    }
    assert_eq!(
        graph.edges(),
        vec![
            (0, 1, 10),
            (1, 3, 1),
            (1, 4, 15),
            (2, 1, 23),
            (2, 3, 1),
            (4, 0, 1),
            (4, 3, 1),
        ]
    );
}

#[test]
fn test_dijkstra_from_every_vertex() {
    let mut graph = sample();
    let expected = [
        [0, 10, 35, 28, 25],
        [27, 0, 25, 18, 15],
        [50, 23, 0, 41, 38],
        [32, 5, 7, 0, 20],
        [12, 8, 10, 3, 0],
    ];
    for (src, row) in expected.iter().enumerate() {
        let row: Vec<_> = row.iter().map(|&w| Distance::Finite(w)).collect();
        assert_eq!(graph.dijkstra(src), row, "from {src}");
    }

    graph.remove_edge(4, 3);
    let expected = [
        d(&[Some(0), Some(10), None, None, Some(25)]),
        d(&[Some(27), Some(0), None, None, Some(15)]),
        d(&[Some(50), Some(23), Some(0), None, Some(38)]),
        d(&[Some(32), Some(5), Some(7), Some(0), Some(20)]),
        d(&[Some(12), Some(22), None, None, Some(0)]),
    ];
    for (src, row) in expected.iter().enumerate() {
        assert_eq!(&graph.dijkstra(src), row, "from {src} without 4->3");
    }
}

#[test]
fn test_dijkstra_on_sparse_graph() {
    let graph = DirectedGraph::from_edges([
        (0, 4, 10),
        (2, 3, 3),
        (2, 5, 13),
        (3, 7, 11),
        (3, 5, 8),
        (2, 12, 3),
        (5, 2, 15),
        (7, 4, 14),
        (7, 8, 19),
        (9, 4, 5),
        (10, 11, 17),
        (11, 6, 2),
    ]);
    assert_eq!(graph.vertex_count(), 13);

    let from_two = graph.dijkstra(2);
    let finite: Vec<_> = from_two
        .iter()
        .enumerate()
        .filter_map(|(v, dist)| dist.finite().map(|w| (v, w)))
        .collect();
    assert_eq!(
        finite,
        vec![(2, 0), (3, 3), (4, 28), (5, 11), (7, 14), (8, 33), (12, 3)]
    );

    assert_eq!(graph.dijkstra(10)[6], Distance::Finite(19));
    assert_eq!(graph.dijkstra(12).iter().filter(|x| x.is_infinite()).count(), 12);
    assert_eq!(graph.dijkstra(1)[0], INF);
}

#[test]
fn test_checked_mutations_leave_graph_untouched() {
    let mut graph = sample();
    let before = graph.clone();

    assert_eq!(graph.try_add_edge(3, 3, 1), Err(GraphError::SelfLoop));
    assert_eq!(graph.try_add_edge(0, 2, -1), Err(GraphError::NegativeWeight));
    assert_eq!(
        graph.try_add_edge(0, 5, 1),
        Err(GraphError::VertexOutOfRange { vertex: 5, count: 5 })
    );
    assert_eq!(graph.try_remove_edge(0, 2), Err(GraphError::MissingEdge));
    assert_eq!(graph, before);

    assert_eq!(graph.try_add_edge(0, 2, 4), Ok(()));
    assert_eq!(graph.edge_weight(&0, &2), Some(4));
}

#[test]
fn test_query_results_are_detached_copies() {
    let graph = sample();
    let mut edges = graph.edges();
    edges.clear();
    let mut vertices = graph.vertices();
    vertices.push(99);
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(graph.vertex_count(), 5);
}

#[test]
fn test_snapshot_round_trip() -> anyhow::Result<()> {
    let graph = sample();
    let json = serde_json::to_string(&graph)?;
    let back: DirectedGraph = serde_json::from_str(&json)?;
    assert_eq!(back, graph);

    let distances = serde_json::to_value(back.dijkstra(2))?;
    assert_eq!(distances[0], serde_json::json!({ "Finite": 50 }));

    let mut cut = back;
    cut.remove_edge(2, 1);
    let distances = serde_json::to_value(cut.dijkstra(2))?;
    assert_eq!(distances[0], serde_json::json!("Infinite"));
    Ok(())
}
