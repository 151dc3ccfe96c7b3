//! Layout style vocabulary: the only visual properties the engine ever sets.

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// A length the host can resolve, e.g. `Px(120.0)`, `Percent(50.0)`, `Auto`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Dimension {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the parent's extent.
    Percent(f64),
    /// Content-determined. Used transiently while auto-fit measures a row.
    Auto,
}

// ---------------------------------------------------------------------------
// LayoutStyle
// ---------------------------------------------------------------------------

/// A single layout-relevant property assignment.
///
/// Hosts apply these best-effort: a refused assignment (detached node, dead
/// surface) must be swallowed, never raised — a visual glitch beats aborting
/// an interactive session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutStyle {
    /// Horizontal extent.
    Width(Dimension),
    /// Vertical extent.
    Height(Dimension),
    /// Flex weighting relative to siblings.
    Grow(f64),
    /// Position offset from the parent's origin, in pixels.
    Offset { x: f64, y: f64 },
}

// ===========================================================================
// Tests
// ===========================================================================
