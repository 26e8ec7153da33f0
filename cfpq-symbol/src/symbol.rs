use std::cmp::Ordering;
use std::fmt;

/// A terminal symbol. Wraps the label of a graph edge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Terminal(String);

/// A nonterminal symbol, identified by its name.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Nonterminal(String);

/// A grammar symbol.
///
/// Symbols are ordered by their text form. A terminal and a nonterminal spelled
/// the same are told apart by kind, terminals first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum Symbol {
    /// A terminal.
    Terminal(Terminal),
    /// A nonterminal.
    Nonterminal(Nonterminal),
}

impl Terminal {
    /// Creates a terminal with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Terminal(label.into())
    }

    /// Returns the canonical text form, which is the label itself.
    pub fn to_text(&self) -> &str {
        &self.0
    }

    /// Wraps a copy of this terminal in a [`Symbol`].
    pub fn sym(&self) -> Symbol {
        Symbol::Terminal(self.clone())
    }
}

impl Nonterminal {
    /// Creates a nonterminal with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Nonterminal(name.into())
    }

    /// Returns the canonical text form, which is the name itself.
    pub fn to_text(&self) -> &str {
        &self.0
    }

    /// Wraps a copy of this nonterminal in a [`Symbol`].
    pub fn sym(&self) -> Symbol {
        Symbol::Nonterminal(self.clone())
    }
}

impl Symbol {
    /// Returns the canonical text form.
    pub fn to_text(&self) -> &str {
        match self {
            Symbol::Terminal(terminal) => terminal.to_text(),
            Symbol::Nonterminal(nonterminal) => nonterminal.to_text(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Symbol::Terminal(terminal) => Some(terminal),
            Symbol::Nonterminal(_) => None,
        }
    }

    pub fn as_nonterminal(&self) -> Option<&Nonterminal> {
        match self {
            Symbol::Terminal(_) => None,
            Symbol::Nonterminal(nonterminal) => Some(nonterminal),
        }
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_text()
            .cmp(other.to_text())
            .then_with(|| self.is_nonterminal().cmp(&other.is_nonterminal()))
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<Nonterminal> for Symbol {
    fn from(nonterminal: Nonterminal) -> Self {
        Symbol::Nonterminal(nonterminal)
    }
}

impl From<&str> for Terminal {
    fn from(label: &str) -> Self {
        Terminal::new(label)
    }
}

impl From<String> for Terminal {
    fn from(label: String) -> Self {
        Terminal(label)
    }
}

impl From<&str> for Nonterminal {
    fn from(name: &str) -> Self {
        Nonterminal::new(name)
    }
}

impl From<String> for Nonterminal {
    fn from(name: String) -> Self {
        Nonterminal(name)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_text())
    }
}
