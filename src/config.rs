//! Layout configuration: the named constants behind normalization and auto-fit.
//!
//! Every implicit global (default gutter width, minimum pane percentage, the
//! row-unit cap) lives here and is threaded through normalization, so the
//! builder never hard-codes a magic number.

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Configuration shared by normalization, the builder, and auto-fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Gutter width/height in pixels when the tree specifies none.
    pub default_gutter: f64,
    /// Minimum pane size during a drag, as a percentage of the pair total.
    pub default_min_size: f64,
    /// Lower bound on a row's unit allocation.
    pub min_row_units: u32,
    /// Upper bound on a row's unit allocation. Caps the auto-fit feedback
    /// loop so a bad measurement cannot grow a row without bound.
    pub max_row_units: u32,
    /// Smallest weight a pane may be assigned, in percent. Keeps every pane
    /// measurable and its gutter draggable.
    pub weight_epsilon: f64,
    /// Leaf tag used when padding a split to its declared child count.
    pub default_leaf_tag: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_gutter: 4.0,
            default_min_size: 20.0,
            min_row_units: 1,
            max_row_units: 64,
            weight_epsilon: 0.01,
            default_leaf_tag: "leaf".to_owned(),
        }
    }
}

impl LayoutConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default gutter size (builder).
    pub fn with_default_gutter(mut self, gutter: f64) -> Self {
        self.default_gutter = gutter;
        self
    }

    /// Set the default minimum pane percentage (builder).
    pub fn with_default_min_size(mut self, min_size: f64) -> Self {
        self.default_min_size = min_size;
        self
    }

    /// Set the row-unit bounds (builder).
    pub fn with_row_unit_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_row_units = min.max(1);
        self.max_row_units = max.max(self.min_row_units);
        self
    }

    /// Set the leaf tag used for padding (builder).
    pub fn with_default_leaf_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_leaf_tag = tag.into();
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LayoutConfig::new();
        assert_eq!(config.default_gutter, 4.0);
        assert_eq!(config.default_min_size, 20.0);
        assert_eq!(config.min_row_units, 1);
        assert_eq!(config.max_row_units, 64);
        assert_eq!(config.default_leaf_tag, "leaf");
    }

    #[test]
    fn builder() {
        let config = LayoutConfig::new()
            .with_default_gutter(2.0)
            .with_default_min_size(10.0)
            .with_row_unit_bounds(2, 32)
            .with_default_leaf_tag("pane");
        assert_eq!(config.default_gutter, 2.0);
        assert_eq!(config.default_min_size, 10.0);
        assert_eq!(config.min_row_units, 2);
        assert_eq!(config.max_row_units, 32);
        assert_eq!(config.default_leaf_tag, "pane");
    }

    #[test]
    fn row_unit_bounds_stay_ordered() {
        let config = LayoutConfig::new().with_row_unit_bounds(8, 2);
        assert!(config.max_row_units >= config.min_row_units);
    }

    #[test]
    fn row_unit_bounds_floor_at_one() {
        let config = LayoutConfig::new().with_row_unit_bounds(0, 0);
        assert_eq!(config.min_row_units, 1);
        assert_eq!(config.max_row_units, 1);
    }
}
