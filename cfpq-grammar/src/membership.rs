//! Word membership, with the CYK algorithm.

use std::collections::BTreeMap;

use bit_vec::BitVec;

use crate::local_prelude::*;
use crate::symbol_bit_matrix::NonterminalIndex;

impl Cfg {
    /// Checks whether the word is derived from the start symbol.
    pub fn contains(&self, word: &[Terminal]) -> bool {
        if word.is_empty() {
            return self.nullable_symbols().contains(self.start());
        }
        Cyk::new(&self.to_normal_form()).recognize(word)
    }
}

/// A recognizer for grammars where every rule has the form `A -> a` or `A -> B C`.
struct Cyk {
    num_nonterminals: usize,
    start: usize,
    unary: BTreeMap<Terminal, Vec<usize>>,
    binary: Vec<(usize, usize, usize)>,
}

impl Cyk {
    fn new(grammar: &Cfg) -> Self {
        let index = NonterminalIndex::new(grammar);
        let position = |nonterminal: &Nonterminal| {
            index
                .get(nonterminal)
                .expect("every nonterminal of the grammar is indexed")
        };
        let mut unary: BTreeMap<Terminal, Vec<usize>> = BTreeMap::new();
        let mut binary = vec![];
        for rule in grammar.rules() {
            match &rule.rhs[..] {
                [Symbol::Terminal(terminal)] => {
                    unary
                        .entry(terminal.clone())
                        .or_default()
                        .push(position(&rule.lhs));
                }
                [Symbol::Nonterminal(left), Symbol::Nonterminal(right)] => {
                    binary.push((position(&rule.lhs), position(left), position(right)));
                }
                _ => unreachable!("rule `{}` is not in normal form", rule),
            }
        }
        Cyk {
            num_nonterminals: index.len(),
            start: position(grammar.start()),
            unary,
            binary,
        }
    }

    fn recognize(&self, word: &[Terminal]) -> bool {
        let n = word.len();
        // `table[len - 1][i]` holds the nonterminals that derive `word[i..i + len]`.
        let mut table: Vec<Vec<BitVec>> = Vec::with_capacity(n);
        table.push(
            word.iter()
                .map(|terminal| {
                    let mut cell = BitVec::from_elem(self.num_nonterminals, false);
                    for &lhs in self.unary.get(terminal).into_iter().flatten() {
                        cell.set(lhs, true);
                    }
                    cell
                })
                .collect(),
        );
        for len in 2..=n {
            let mut row = Vec::with_capacity(n - len + 1);
            for i in 0..=n - len {
                let mut cell = BitVec::from_elem(self.num_nonterminals, false);
                for split in 1..len {
                    let left = &table[split - 1][i];
                    let right = &table[len - split - 1][i + split];
                    for &(lhs, b, c) in &self.binary {
                        if left[b] && right[c] {
                            cell.set(lhs, true);
                        }
                    }
                }
                row.push(cell);
            }
            table.push(row);
        }
        table[n - 1][0][self.start]
    }
}
