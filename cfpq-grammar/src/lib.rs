//! Context-free grammars for path querying, and their normalization to the weak
//! Chomsky normal form, where every rule has one of the shapes `A -> ε`, `A -> a`
//! or `A -> B C`.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod cfg;
pub mod error;
pub mod load;
pub mod membership;
pub mod normalize;
mod occurence_map;
pub mod production;
pub mod rule_builder;
pub mod symbol_bit_matrix;
pub mod wcnf;

pub use crate::cfg::{Cfg, CfgRule, RhsPropertyMode};
pub use crate::error::{GrammarError, LoadError};
pub use crate::production::{Body, Production};
pub use crate::wcnf::Wcnf;
pub use cfpq_symbol::{Nonterminal, Symbol, SymbolSource, Terminal};

pub(crate) mod local_prelude {
    pub use crate::cfg::{Cfg, CfgRule};
    pub use cfpq_symbol::{Nonterminal, Symbol, SymbolSource, Terminal};
}
