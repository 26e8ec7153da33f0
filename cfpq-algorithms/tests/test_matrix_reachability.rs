use std::collections::HashSet;

use cfpq_algorithms::*;
use cfpq_grammar::{Cfg, GrammarError, Nonterminal, Wcnf};
use cfpq_graph::{DecompositionError, GraphBooleanDecomposition, LabeledGraph};
use test_case::test_case;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn solver(grammar: &str, edges: &[(u32, u32, &str)]) -> MatrixReachability<u32> {
    init_logger();
    let cfg = Cfg::load(grammar).unwrap();
    let graph = LabeledGraph::from_edges(edges.iter().copied());
    MatrixReachability::new(&cfg, &graph).unwrap()
}

fn pairs(list: &[(u32, u32)]) -> HashSet<(u32, u32)> {
    list.iter().copied().collect()
}

#[test]
fn test_path_closure_stats() {
    let solver = solver("S -> S S | a", &[(0, 1, "a"), (1, 2, "a")]);

    assert_eq!(solver.solve_all_pairs(), &pairs(&[(0, 1), (1, 2), (0, 2)]));
    let stats = solver.closure().stats();
    assert_eq!(stats.passes, 2);
    assert_eq!(stats.nnz_per_pass, [[2], [3], [3]]);
}

#[test]
fn test_memoized() {
    let solver = solver("S -> a S b | a b", &[(0, 1, "a"), (1, 2, "b")]);

    let first = solver.solve_all_pairs();
    let second = solver.solve_all_pairs();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(solver.closure(), solver.closure()));
    assert_eq!(first, &pairs(&[(0, 2)]));
}

#[test]
fn test_epsilon_reflexive() {
    let solver = solver("S -> a S b | $", &[(0, 1, "a"), (1, 2, "b")]);

    let start = Nonterminal::new("S");
    let matrix = solver.closure().get(&start).unwrap();
    for i in 0..3 {
        assert!(matrix.get(i, i));
    }
    assert_eq!(
        solver.solve_all_pairs(),
        &pairs(&[(0, 0), (1, 1), (2, 2), (0, 2)])
    );
}

#[test]
fn test_monotone_passes() {
    let solver = solver(
        "S -> a S b | a b",
        &[(0, 1, "a"), (1, 2, "a"), (2, 0, "a"), (0, 3, "b"), (3, 0, "b")],
    );
    let closure = solver.closure();
    let stats = closure.stats();

    assert_eq!(stats.nnz_per_pass.len(), stats.passes + 1);
    for variable in solver.wcnf().variables() {
        let history = closure.nnz_history(variable);
        assert_eq!(history.len(), stats.passes + 1);
        assert!(
            history.windows(2).all(|w| w[0] <= w[1]),
            "{}: {:?}",
            variable,
            history
        );
    }
    // The last pass changes nothing.
    let last = &stats.nnz_per_pass[stats.passes];
    let before_last = &stats.nnz_per_pass[stats.passes - 1];
    assert_eq!(last, before_last);
}

#[test_case("S -> S S | a", &[] ; "empty graph")]
#[test_case("S -> S S | a", &[(0, 1, "b"), (1, 2, "c")] ; "missing label")]
#[test_case("S -> S a", &[(0, 0, "a")] ; "unproductive start")]
#[test_case("A -> a", &[(0, 1, "a")] ; "start without rules")]
fn test_empty_result(grammar: &str, edges: &[(u32, u32, &str)]) {
    let solver = solver(grammar, edges);
    assert!(solver.solve_all_pairs().is_empty());
}

#[test]
fn test_start_without_matrix() {
    let solver = solver("S -> S a", &[(0, 1, "a")]);
    assert!(solver.wcnf().variables().is_empty());
    assert!(solver.closure().get(&Nonterminal::new("S")).is_none());
    assert!(solver.solve_all_pairs().is_empty());
}

#[test]
fn test_unary_skips_missing_label() {
    let solver = solver("S -> a | b", &[(0, 1, "a")]);
    assert!(solver.label_matrix("a").is_ok());
    assert_eq!(
        solver.label_matrix("b").unwrap_err(),
        Error::Decomposition(DecompositionError::UnknownLabel {
            label: "b".to_string()
        })
    );
    assert_eq!(solver.solve_all_pairs(), &pairs(&[(0, 1)]));
}

#[test]
fn test_from_parts() {
    let wcnf = Wcnf::from_text("S -> S S | a", "S").unwrap();
    let mut decomposition = GraphBooleanDecomposition::new(0);
    decomposition.add_edge(0, 1, "a");
    decomposition.add_edge(1, 2, "a");
    let solver = MatrixReachability::from_parts(wcnf, decomposition, vec!["x", "y", "z"]);

    let expected: HashSet<_> = [("x", "y"), ("y", "z"), ("x", "z")].into_iter().collect();
    assert_eq!(solver.solve_all_pairs(), &expected);
    assert_eq!(solver.vertices(), ["x", "y", "z"]);
    assert_eq!(solver.closure().dimension(), 3);
}

#[test]
fn test_table_covers_variables() {
    let solver = solver("S -> a S b | a b", &[(0, 1, "a")]);
    let closure = solver.closure();

    assert_eq!(closure.len(), solver.wcnf().variables().len());
    let names: Vec<_> = closure.iter().map(|(nt, _)| nt.to_text()).collect();
    assert_eq!(names, ["S", "T_a", "T_b", "g0"]);
    for (_, matrix) in closure.iter() {
        assert_eq!(matrix.size(), (2, 2));
    }
}

#[test]
fn test_error_conversion() {
    let error: Error = GrammarError::InvalidGrammarShape {
        rule: "S -> a b".to_string(),
    }
    .into();
    assert_eq!(
        error.to_string(),
        "rule `S -> a b` is not of the form `A -> ε`, `A -> a` or `A -> B C`"
    );
    assert!(Cfg::load("S a").is_err());
}
