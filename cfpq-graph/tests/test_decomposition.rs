use cfpq_graph::*;
use test_case::test_case;

fn ones(matrix: &BoolMatrix) -> Vec<(usize, usize)> {
    matrix.iter_ones().collect()
}

#[test]
fn test_new_has_no_labels() {
    let decomposition = GraphBooleanDecomposition::new(3);
    assert_eq!(decomposition.matrices_size(), 3);
    assert_eq!(decomposition.labels().count(), 0);
    assert!(!decomposition.contains("a"));
}

#[test]
fn test_add_edge_within_bounds() {
    let mut decomposition = GraphBooleanDecomposition::new(3);
    decomposition.add_edge(0, 2, "a");
    decomposition.add_edge(0, 2, "a");
    decomposition.add_edge(1, 1, "b");

    assert_eq!(decomposition.matrices_size(), 3);
    assert_eq!(ones(decomposition.get("a").unwrap()), [(0, 2)]);
    assert_eq!(ones(decomposition.get("b").unwrap()), [(1, 1)]);
    assert_eq!(decomposition.get("a").unwrap().size(), (3, 3));
}

#[test_case(0, 0, 1 ; "first vertex")]
#[test_case(4, 1, 5 ; "large source")]
#[test_case(2, 7, 8 ; "large target")]
fn test_add_edge_grows(u: usize, v: usize, expected_size: usize) {
    let mut decomposition = GraphBooleanDecomposition::new(0);
    decomposition.add_edge(u, v, "x");
    assert_eq!(decomposition.matrices_size(), expected_size);
    assert_eq!(decomposition.get("x").unwrap().size(), (expected_size, expected_size));
    assert!(decomposition.get("x").unwrap().get(u, v));
}

#[test]
fn test_grow_keeps_entries_of_all_matrices() {
    let mut decomposition = GraphBooleanDecomposition::new(2);
    decomposition.add_edge(0, 1, "a");
    decomposition.add_edge(1, 0, "b");
    decomposition.add_edge(5, 3, "c");

    assert_eq!(decomposition.matrices_size(), 6);
    for (_, matrix) in decomposition.iter() {
        assert_eq!(matrix.size(), (6, 6));
    }
    assert_eq!(ones(decomposition.get("a").unwrap()), [(0, 1)]);
    assert_eq!(ones(decomposition.get("b").unwrap()), [(1, 0)]);
    assert_eq!(ones(decomposition.get("c").unwrap()), [(5, 3)]);
}

#[test]
fn test_grow_never_shrinks() {
    let mut decomposition = GraphBooleanDecomposition::new(4);
    decomposition.grow(2);
    assert_eq!(decomposition.matrices_size(), 4);
    decomposition.grow(6);
    assert_eq!(decomposition.matrices_size(), 6);
}

#[test]
fn test_unknown_label() {
    let mut decomposition = GraphBooleanDecomposition::new(1);
    decomposition.add_edge(0, 0, "a");
    assert_eq!(
        decomposition.get("b"),
        Err(DecompositionError::UnknownLabel {
            label: "b".to_string()
        })
    );
    assert!(decomposition.matrix("b").is_none());
    assert!(!decomposition.contains("b"));
    assert_eq!(decomposition.labels().collect::<Vec<_>>(), ["a"]);
}

#[test]
fn test_decompose_first_seen_order() {
    let mut graph = LabeledGraph::new();
    graph.add_vertex("z");
    graph.add_edge("x", "y", "a");
    graph.add_edge("y", "z", "b");
    graph.add_edge("y", "x", "a");

    let (decomposition, vertices) = decompose(&graph);

    assert_eq!(vertices, ["z", "x", "y"]);
    assert_eq!(decomposition.matrices_size(), 3);
    assert_eq!(ones(decomposition.get("a").unwrap()), [(1, 2), (2, 1)]);
    assert_eq!(ones(decomposition.get("b").unwrap()), [(2, 0)]);
}

#[test]
fn test_decompose_isolated_vertex() {
    let mut graph = LabeledGraph::from_edges([(0, 1, "a")]);
    graph.add_vertex(9);

    let (decomposition, vertices) = decompose(&graph);

    assert_eq!(vertices, [0, 1, 9]);
    assert_eq!(decomposition.matrices_size(), 3);
    assert_eq!(decomposition.get("a").unwrap().size(), (3, 3));
}

#[test]
fn test_decompose_empty_graph() {
    let graph: LabeledGraph<u32> = LabeledGraph::new();
    let (decomposition, vertices) = decompose(&graph);

    assert!(vertices.is_empty());
    assert_eq!(decomposition.matrices_size(), 0);
    assert_eq!(decomposition.labels().count(), 0);
}

#[test]
fn test_labeled_graph() {
    let graph = LabeledGraph::from_edges([(1, 2, "a"), (2, 1, "b"), (1, 2, "a")]);
    assert_eq!(graph.number_of_vertices(), 2);
    assert_eq!(graph.number_of_edges(), 3);
    assert!(!graph.is_empty());
    let edge = graph.edges().nth(1).unwrap();
    assert_eq!((edge.source, edge.target, edge.label.as_str()), (2, 1, "b"));
}
