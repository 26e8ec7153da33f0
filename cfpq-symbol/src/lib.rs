//! Grammar symbols for context-free path querying. Symbols are distinguished by their
//! text: a terminal wraps an edge label, a nonterminal wraps a name.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod source;
mod symbol;

pub use self::source::SymbolSource;
pub use self::symbol::{Nonterminal, Symbol, Terminal};
