//! All-pairs reachability based on Boolean matrix multiplication.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::hash::Hash;

use cfpq_bool_matrix::BoolMatrix;
use cfpq_grammar::{Body, Cfg, Wcnf};
use cfpq_graph::{decompose, GraphBooleanDecomposition, LabeledGraph};
use log::{debug, trace};

use crate::error::Error;
use crate::nonterminal_matrices::NonterminalMatrices;
use crate::AllPairsReachability;

/// Solves the all-pairs query by computing, for every nonterminal `A`, the
/// matrix of vertex pairs connected by a word of `A`.
///
/// The matrices are computed on the first query and cached afterwards.
#[derive(Debug)]
pub struct MatrixReachability<V> {
    wcnf: Wcnf,
    decomposition: GraphBooleanDecomposition,
    vertices: Vec<V>,
    closure: OnceCell<NonterminalMatrices>,
    all_pairs: OnceCell<HashSet<(V, V)>>,
}

impl<V> MatrixReachability<V>
where
    V: Clone + Eq + Hash,
{
    /// Prepares the normal form of the grammar and the decomposition of the graph.
    pub fn new(grammar: &Cfg, graph: &LabeledGraph<V>) -> Result<Self, Error> {
        let wcnf = Wcnf::new(grammar.clone())?;
        let (decomposition, vertices) = decompose(graph);
        Ok(Self::from_parts(wcnf, decomposition, vertices))
    }

    /// Creates a solver from prepared parts. The vertex at position `i` of
    /// `vertices` is the identity of index `i` in the decomposition.
    pub fn from_parts(
        wcnf: Wcnf,
        decomposition: GraphBooleanDecomposition,
        vertices: Vec<V>,
    ) -> Self {
        MatrixReachability {
            wcnf,
            decomposition,
            vertices,
            closure: OnceCell::new(),
            all_pairs: OnceCell::new(),
        }
    }

    pub fn wcnf(&self) -> &Wcnf {
        &self.wcnf
    }

    pub fn decomposition(&self) -> &GraphBooleanDecomposition {
        &self.decomposition
    }

    /// Returns the vertex identities, by index.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the adjacency matrix of a label of the graph.
    pub fn label_matrix(&self, label: &str) -> Result<&BoolMatrix, Error> {
        Ok(self.decomposition.get(label)?)
    }

    /// Returns the matrix of every nonterminal at the fixed point.
    pub fn closure(&self) -> &NonterminalMatrices {
        self.closure.get_or_init(|| self.compute_closure())
    }

    fn compute_closure(&self) -> NonterminalMatrices {
        let n = self.decomposition.matrices_size();
        let mut table = NonterminalMatrices::new(self.wcnf.variables(), n);
        self.process_epsilon_productions(&mut table);
        self.process_unary_productions(&mut table);
        self.process_binary_productions(&mut table);
        table
    }

    /// Every vertex reaches itself with the empty word.
    fn process_epsilon_productions(&self, table: &mut NonterminalMatrices) {
        let n = table.dimension();
        for production in self.wcnf.epsilon_productions() {
            if let Some(pos) = table.position(&production.head) {
                *table.matrix_mut(pos) = BoolMatrix::identity(n);
            }
        }
    }

    /// A label that is absent from the graph contributes nothing.
    fn process_unary_productions(&self, table: &mut NonterminalMatrices) {
        for production in self.wcnf.unary_productions() {
            let Body::Terminal(terminal) = &production.body else {
                continue;
            };
            let (Some(pos), Some(label_matrix)) = (
                table.position(&production.head),
                self.decomposition.matrix(terminal.to_text()),
            ) else {
                trace!("skip {}: no edge with this label", production);
                continue;
            };
            table.matrix_mut(pos).union_with(label_matrix);
        }
    }

    /// Applies `T[A] |= T[B] · T[C]` for every production `A -> B C`, pass after
    /// pass, until a pass changes no count of set entries.
    fn process_binary_productions(&self, table: &mut NonterminalMatrices) {
        let productions: Vec<(usize, usize, usize)> = self
            .wcnf
            .binary_productions()
            .iter()
            .filter_map(|production| match &production.body {
                Body::Binary(left, right) => Some((
                    table.position(&production.head)?,
                    table.position(left)?,
                    table.position(right)?,
                )),
                _ => None,
            })
            .collect();

        // Counts recorded for each head, starting from zero.
        let mut nnz = vec![0; table.len()];
        let mut passes = 0;
        table.record_pass();
        loop {
            passes += 1;
            let mut changed = false;
            for &(head, left, right) in &productions {
                let new_nnz = table.accumulate_product(head, left, right);
                changed |= nnz[head] != new_nnz;
                nnz[head] = new_nnz;
            }
            table.record_pass();
            debug!(
                "pass {}: {} set entries over {} nonterminals",
                passes,
                nnz.iter().sum::<usize>(),
                table.len()
            );
            if !changed {
                break;
            }
        }
        table.set_passes(passes);
    }
}

impl<V> AllPairsReachability for MatrixReachability<V>
where
    V: Clone + Eq + Hash,
{
    type Vertex = V;

    fn solve_all_pairs(&self) -> &HashSet<(V, V)> {
        self.all_pairs.get_or_init(|| {
            let start = self.wcnf.start();
            let Some(matrix) = self.closure().get(start) else {
                debug!("start symbol {} has no matrix", start);
                return HashSet::new();
            };
            let result: HashSet<(V, V)> = matrix
                .iter_ones()
                .filter_map(|(i, j)| {
                    let u = self.vertices.get(i)?;
                    let v = self.vertices.get(j)?;
                    Some((u.clone(), v.clone()))
                })
                .collect();
            debug!("{} reachable pairs for {}", result.len(), start);
            result
        })
    }
}
