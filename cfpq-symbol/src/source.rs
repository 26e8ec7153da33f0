//! Source of fresh nonterminal names.

use std::collections::BTreeSet;

use crate::Nonterminal;

/// A source of nonterminal names that do not collide with any name already taken.
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    taken: BTreeSet<String>,
    next_id: usize,
}

impl SymbolSource {
    /// Creates a symbol source with an empty name space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a symbol source that avoids the given names.
    pub fn with_taken<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SymbolSource {
            taken: names.into_iter().map(Into::into).collect(),
            next_id: 0,
        }
    }

    /// Marks a name as taken.
    pub fn mark_taken(&mut self, name: impl Into<String>) {
        self.taken.insert(name.into());
    }

    /// Checks whether the name is taken.
    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Generates a new unique nonterminal. The name is the hint itself if it is
    /// free, otherwise the hint followed by `#` and a number.
    pub fn fresh(&mut self, hint: &str) -> Nonterminal {
        let mut name = hint.to_string();
        while self.taken.contains(&name) {
            name = format!("{}#{}", hint, self.next_id);
            self.next_id += 1;
        }
        self.taken.insert(name.clone());
        Nonterminal::new(name)
    }

    /// Generates a new unique nonterminal with a numbered gensym name.
    pub fn gensym(&mut self) -> Nonterminal {
        loop {
            let name = format!("g{}", self.next_id);
            self.next_id += 1;
            if self.taken.insert(name.clone()) {
                return Nonterminal::new(name);
            }
        }
    }

    /// Returns the number of names in use.
    pub fn num_taken(&self) -> usize {
        self.taken.len()
    }
}
