//! Allows us to load context-free grammars from text.
//!
//! The text holds one group of alternatives per line:
//!
//! ```text
//! S -> a S b | a b
//! S -> S S | $
//! ```
//!
//! A body token that starts with an uppercase letter is a nonterminal, any other
//! token is a terminal. The prefixes `VAR:` and `TER:` force either kind. The
//! tokens `$`, `ε` and `epsilon` stand for the empty word.

use crate::error::LoadError;
use crate::local_prelude::*;

const NONTERMINAL_PREFIX: &str = "VAR:";
const TERMINAL_PREFIX: &str = "TER:";
const EPSILON_TOKENS: [&str; 3] = ["$", "ε", "epsilon"];

impl Cfg {
    /// Loads a grammar from text, with the given start symbol.
    pub fn from_text(text: &str, start: impl Into<Nonterminal>) -> Result<Cfg, LoadError> {
        let mut cfg = Cfg::new(start);
        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no as u32 + 1;
            if line.trim().is_empty() {
                continue;
            }
            let (head, bodies) = line.split_once("->").ok_or_else(|| LoadError {
                reason: format!("expected `->` in `{}`", line.trim()),
                line: line_no,
            })?;
            let head = head.trim();
            if head.is_empty() || head.contains(char::is_whitespace) {
                return Err(LoadError {
                    reason: format!("expected a single nonterminal before `->`, found `{}`", head),
                    line: line_no,
                });
            }
            let lhs = Nonterminal::new(head.strip_prefix(NONTERMINAL_PREFIX).unwrap_or(head));
            for body in bodies.split('|') {
                let rhs: Vec<Symbol> = body
                    .split_whitespace()
                    .filter(|token| !EPSILON_TOKENS.contains(token))
                    .map(read_symbol)
                    .collect();
                cfg.add_rule(CfgRule::new(lhs.clone(), rhs));
            }
        }
        Ok(cfg)
    }

    /// Loads a grammar from text, with the start symbol `S`.
    pub fn load(text: &str) -> Result<Cfg, LoadError> {
        Self::from_text(text, "S")
    }
}

fn read_symbol(token: &str) -> Symbol {
    if let Some(name) = token.strip_prefix(NONTERMINAL_PREFIX) {
        Nonterminal::new(name).into()
    } else if let Some(label) = token.strip_prefix(TERMINAL_PREFIX) {
        Terminal::new(label).into()
    } else if reads_as_nonterminal(token) {
        Nonterminal::new(token).into()
    } else {
        Terminal::new(token).into()
    }
}

/// Checks whether a bare token is read as a nonterminal.
pub(crate) fn reads_as_nonterminal(text: &str) -> bool {
    text.chars().next().map_or(false, char::is_uppercase) && is_plain(text)
}

/// Checks whether a bare token is read as a terminal.
pub(crate) fn reads_as_terminal(text: &str) -> bool {
    !text.chars().next().map_or(true, char::is_uppercase)
        && !EPSILON_TOKENS.contains(&text)
        && is_plain(text)
}

fn is_plain(text: &str) -> bool {
    !text.starts_with(NONTERMINAL_PREFIX)
        && !text.starts_with(TERMINAL_PREFIX)
        && !text.contains(|c: char| c.is_whitespace() || c == '|')
        && !text.contains("->")
}
