//! logos-based size-expression tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `1fr` as Fr beats `1` as Number)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Unlike a forgiving lexer, any unlexable character poisons the whole
//! expression: [`tokenize`] returns `None` so the caller can fall back to the
//! equal split.

use logos::Logos;

/// Size-expression token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// The literal `equal`: split evenly among the declared panel count.
    #[token("equal")]
    Equal,

    /// Flex weight: number with `fr` suffix like `1fr`, `2.5fr`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?fr")]
    Fr,

    /// Bare number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
}

/// Tokenize a size-expression string into `(Token, &str slice)` pairs.
///
/// Returns `None` if any part of the input fails to lex; a partially valid
/// expression is treated as wholly malformed.
pub fn tokenize(input: &str) -> Option<Vec<(Token, String)>> {
    let lexer = Token::lexer(input);
    let mut out = Vec::new();
    for (result, span) in lexer.spanned() {
        match result {
            Ok(token) => out.push((token, input[span].to_string())),
            Err(()) => return None,
        }
    }
    Some(out)
}
