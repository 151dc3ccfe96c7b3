//! Size-expression engine: tokenizer and total parser.
//!
//! The grammar is tiny: a size expression is either a list of numeric weights
//! or a whitespace-separated token string where each token is `equal`, a bare
//! number, or a number suffixed `fr`. Parsing is total — malformed input
//! degrades to an equal split, never an error.

pub mod parse;
pub mod token;

pub use parse::{parse_units, parse_weights, SizeExpression};
