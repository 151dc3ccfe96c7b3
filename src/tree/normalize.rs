//! Tree normalization: raw split params to fully-specified build input.
//!
//! [`normalize`] fills every default, parses size expressions, resolves the
//! gutter/gap alias, and pads children to the implied count. It copies the
//! caller's input — mutating the raw tree after the call cannot corrupt an
//! in-progress build. Nested splits are left raw and normalized just-in-time
//! during the recursive build, so a malformed descendant never aborts an
//! ancestor.

use crate::config::LayoutConfig;
use crate::expr::{parse_units, parse_weights};
use crate::tree::node::{Direction, SplitNode, SplitParams};

// ---------------------------------------------------------------------------
// NormalizedParams
// ---------------------------------------------------------------------------

/// Fully-specified parameters for one split, ready to build.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedParams {
    /// Row or column.
    pub direction: Direction,
    /// Pane weights in percent, length = `children.len()`, summing to ~100,
    /// each at least the configured epsilon.
    pub sizes: Vec<f64>,
    /// Row-unit allocations, present only for column splits that declared
    /// `row_units`. Same length as `children`.
    pub row_units: Option<Vec<u32>>,
    /// Children, padded with default leaves to the declared count. Nested
    /// splits are still raw; they normalize lazily at build time.
    pub children: Vec<SplitNode>,
    /// Gutter size in pixels (never negative).
    pub gutter: f64,
    /// Minimum pane percentage during a drag, in `[epsilon, 50]`.
    pub min_size: f64,
    /// Explicit container height in pixels, if declared.
    pub height: Option<f64>,
    /// Whether gutters are draggable.
    pub interactive: bool,
    /// Whether unit rows track their content height.
    pub auto_fit: bool,
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

/// Normalize raw split params against the given config.
///
/// The child count is `max(children.len(), implied-by-expressions, 2)`; the
/// children list is padded with `config.default_leaf_tag` leaves. This is a
/// pure function of its inputs: normalizing the same params twice yields
/// identical output, and the caller's params are never mutated.
pub fn normalize(params: &SplitParams, config: &LayoutConfig) -> NormalizedParams {
    let implied = params
        .sizes
        .as_ref()
        .and_then(|e| e.implied_len())
        .max(params.row_units.as_ref().and_then(|e| e.implied_len()))
        .unwrap_or(0);
    let count = params.children.len().max(implied).max(2);

    let mut children = params.children.clone();
    while children.len() < count {
        children.push(SplitNode::Leaf(config.default_leaf_tag.clone()));
    }

    let sizes = clamp_weights(parse_weights(params.sizes.as_ref(), count), config);

    let row_units = if params.direction == Direction::Column && params.row_units.is_some() {
        Some(parse_units(params.row_units.as_ref(), count, config))
    } else {
        None
    };

    let gutter = params
        .gutter
        .or(params.gap)
        .unwrap_or(config.default_gutter)
        .max(0.0);

    let min_size = params
        .min_size
        .unwrap_or(config.default_min_size)
        .clamp(config.weight_epsilon, 50.0);

    let auto_fit = params.auto_fit.unwrap_or(row_units.is_some());

    NormalizedParams {
        direction: params.direction,
        sizes,
        row_units,
        children,
        gutter,
        min_size,
        height: params.height,
        interactive: params.interactive.unwrap_or(true),
        auto_fit,
    }
}

/// Clamp every weight to at least the configured epsilon, then renormalize so
/// the total stays at 100 and every pane stays measurable.
fn clamp_weights(weights: Vec<f64>, config: &LayoutConfig) -> Vec<f64> {
    if weights.iter().all(|w| *w >= config.weight_epsilon) {
        return weights;
    }
    let clamped: Vec<f64> = weights
        .iter()
        .map(|w| w.max(config.weight_epsilon))
        .collect();
    let sum: f64 = clamped.iter().sum();
    clamped.iter().map(|w| w / sum * 100.0).collect()
}

// ===========================================================================
// Tests
// ===========================================================================
