#![allow(dead_code)]

use std::collections::HashSet;
use std::hash::Hash;

use cfpq::*;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn solve<V>(grammar: &str, edges: Vec<(V, V, &str)>) -> HashSet<(V, V)>
where
    V: Clone + Eq + Hash,
{
    init_logger();
    let cfg = Cfg::load(grammar).unwrap();
    let graph = LabeledGraph::from_edges(edges);
    let solver = MatrixReachability::new(&cfg, &graph).unwrap();
    solver.solve_all_pairs().clone()
}

pub fn pairs<V>(list: &[(V, V)]) -> HashSet<(V, V)>
where
    V: Clone + Eq + Hash,
{
    list.iter().cloned().collect()
}
