//! Total size-expression parsing.
//!
//! [`parse_weights`] turns any size expression into exactly `count`
//! non-negative percentages summing to 100; [`parse_units`] does the same for
//! row-unit counts. Neither ever fails: malformed, mismatched, or degenerate
//! input degrades to the equal split (weights) or all-ones (units).

use crate::config::LayoutConfig;

use super::token::{tokenize, Token};

// ---------------------------------------------------------------------------
// SizeExpression
// ---------------------------------------------------------------------------

/// A declarative size specification for the panes of one split.
///
/// Either a pre-tokenized list of relative weights, or a token string in the
/// `equal` / `<number>` / `<number>fr` grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeExpression {
    /// Relative weights, normalized at parse time to sum 100.
    Weights(Vec<f64>),
    /// A whitespace-separated token string, e.g. `"1fr 2fr"` or `"equal"`.
    Tokens(String),
}

impl SizeExpression {
    /// The panel count this expression implies, if it implies one.
    ///
    /// `equal` (and malformed strings) imply no count: they adapt to whatever
    /// the tree declares.
    pub fn implied_len(&self) -> Option<usize> {
        match self {
            SizeExpression::Weights(v) => Some(v.len()),
            SizeExpression::Tokens(s) => {
                let tokens = tokenize(s)?;
                if tokens.is_empty() || tokens.iter().any(|(t, _)| *t == Token::Equal) {
                    None
                } else {
                    Some(tokens.len())
                }
            }
        }
    }
}

impl From<Vec<f64>> for SizeExpression {
    fn from(weights: Vec<f64>) -> Self {
        SizeExpression::Weights(weights)
    }
}

impl<const N: usize> From<[f64; N]> for SizeExpression {
    fn from(weights: [f64; N]) -> Self {
        SizeExpression::Weights(weights.to_vec())
    }
}

impl From<&str> for SizeExpression {
    fn from(s: &str) -> Self {
        SizeExpression::Tokens(s.to_owned())
    }
}

impl From<String> for SizeExpression {
    fn from(s: String) -> Self {
        SizeExpression::Tokens(s)
    }
}

// ---------------------------------------------------------------------------
// parse_weights
// ---------------------------------------------------------------------------

/// Parse a size expression into exactly `count` percentages summing to 100.
///
/// Rules, in priority order:
/// 1. missing/empty expression: equal split;
/// 2. the literal `equal`: equal split;
/// 3. a weight list: normalized by its sum (zero/negative sums degrade);
/// 4. a token string: fr coefficients are scaled against the fr sum; bare
///    numbers in a mixed string ride along as best-effort coefficients, and
///    the result is renormalized so the sum-to-100 contract always holds.
///
/// A token count that disagrees with `count` discards the expression.
pub fn parse_weights(expr: Option<&SizeExpression>, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let Some(expr) = expr else {
        return equal_split(count);
    };
    match expr {
        SizeExpression::Weights(weights) => normalize_weights(weights, count),
        SizeExpression::Tokens(s) => parse_token_weights(s, count),
    }
}

/// N equal percentages summing to 100.
fn equal_split(count: usize) -> Vec<f64> {
    vec![100.0 / count as f64; count]
}

/// Normalize a raw weight list to percentages, degrading on bad input.
fn normalize_weights(weights: &[f64], count: usize) -> Vec<f64> {
    if weights.len() != count {
        return equal_split(count);
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return equal_split(count);
    }
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return equal_split(count);
    }
    weights.iter().map(|w| w / sum * 100.0).collect()
}

/// Parse a token string per the fr-dominant rule.
fn parse_token_weights(s: &str, count: usize) -> Vec<f64> {
    let Some(tokens) = tokenize(s) else {
        return equal_split(count);
    };
    if tokens.is_empty() || tokens.iter().any(|(t, _)| *t == Token::Equal) {
        return equal_split(count);
    }
    if tokens.len() != count {
        return equal_split(count);
    }

    // (coefficient, is_fr) per token; any unparsable or negative coefficient
    // poisons the whole expression.
    let mut coefficients = Vec::with_capacity(tokens.len());
    for (token, text) in &tokens {
        let is_fr = *token == Token::Fr;
        let numeric = if is_fr { &text[..text.len() - 2] } else { text.as_str() };
        match numeric.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {
                coefficients.push((value, is_fr));
            }
            _ => return equal_split(count),
        }
    }

    let fr_sum: f64 = coefficients
        .iter()
        .filter(|(_, is_fr)| *is_fr)
        .map(|(v, _)| v)
        .sum();

    let raw: Vec<f64> = if fr_sum > 0.0 {
        // fr-dominant: every coefficient is scaled against the fr sum. Bare
        // numbers in a mixed string get a proportional approximation, not an
        // exact unit conversion.
        coefficients.iter().map(|(v, _)| v / fr_sum * 100.0).collect()
    } else {
        let sum: f64 = coefficients.iter().map(|(v, _)| v).sum();
        if sum <= 0.0 {
            return equal_split(count);
        }
        coefficients.iter().map(|(v, _)| v / sum * 100.0).collect()
    };

    // Renormalize so mixed fr/number strings still sum to exactly 100.
    let raw_sum: f64 = raw.iter().sum();
    if raw_sum <= 0.0 {
        return equal_split(count);
    }
    raw.iter().map(|v| v / raw_sum * 100.0).collect()
}

// ---------------------------------------------------------------------------
// parse_units
// ---------------------------------------------------------------------------

/// Parse a size expression into exactly `count` row-unit allocations.
///
/// Units are counts, not ratios: numeric values are rounded to whole units and
/// clamped to the configured `[min_row_units, max_row_units]` range. `equal`,
/// `fr` suffixes, token-count mismatches, and malformed tokens all degrade to
/// the minimum allocation per row.
pub fn parse_units(expr: Option<&SizeExpression>, count: usize, config: &LayoutConfig) -> Vec<u32> {
    let fallback = vec![config.min_row_units; count];
    if count == 0 {
        return Vec::new();
    }
    let Some(expr) = expr else {
        return fallback;
    };
    let values: Vec<f64> = match expr {
        SizeExpression::Weights(weights) => {
            if weights.len() != count {
                return fallback;
            }
            weights.clone()
        }
        SizeExpression::Tokens(s) => {
            let Some(tokens) = tokenize(s) else {
                return fallback;
            };
            if tokens.len() != count
                || tokens.iter().any(|(t, _)| !matches!(t, Token::Number))
            {
                return fallback;
            }
            let mut parsed = Vec::with_capacity(count);
            for (_, text) in &tokens {
                match text.parse::<f64>() {
                    Ok(v) => parsed.push(v),
                    Err(_) => return fallback,
                }
            }
            parsed
        }
    };
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return fallback;
    }
    values
        .iter()
        .map(|v| clamp_units(v.round() as i64, config))
        .collect()
}

/// Clamp a raw unit count into the configured range.
pub(crate) fn clamp_units(raw: i64, config: &LayoutConfig) -> u32 {
    let min = i64::from(config.min_row_units);
    let max = i64::from(config.max_row_units);
    raw.clamp(min, max) as u32
}

// ===========================================================================
// Tests
// ===========================================================================
