//! Panel-group bookkeeping and the sizing math shared by build, drag-resize,
//! and auto-fit.
//!
//! Each internal split becomes one [`PanelGroup`]: a container surface, one
//! panel surface per child, and a gutter surface between each adjacent pair.
//! Groups live in a slotmap keyed by [`GroupId`]; child slots point either at
//! a leaf (by index into the engine's leaf table) or at a nested group.

use slotmap::new_key_type;

use crate::host::SurfaceId;
use crate::tree::Direction;

new_key_type! {
    /// Key of one panel group in the engine's group arena.
    pub struct GroupId;
}

// ---------------------------------------------------------------------------
// Basis
// ---------------------------------------------------------------------------

/// How a group divides its main axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Basis {
    /// Percentages summing to ~100. Panes flex with the container.
    Weights(Vec<f64>),
    /// Discrete layout-unit allocations. Rows have fixed pixel heights and
    /// the container height follows from the total.
    Units(Vec<u32>),
}

impl Basis {
    /// Number of panes this basis describes.
    pub fn len(&self) -> usize {
        match self {
            Basis::Weights(w) => w.len(),
            Basis::Units(u) => u.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// PanelSlot
// ---------------------------------------------------------------------------

/// What occupies one pane of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelSlot {
    /// Index into [`SplitLayout::leaves`](crate::layout::SplitLayout::leaves).
    Leaf(usize),
    /// A nested group whose container sits inside this pane.
    Group(GroupId),
}

// ---------------------------------------------------------------------------
// PanelGroup
// ---------------------------------------------------------------------------

/// One realized split: container, panes, gutters, and the live basis.
#[derive(Debug)]
pub struct PanelGroup {
    /// Row or column.
    pub direction: Direction,
    /// Current pane sizing. Mutated by drags and auto-fit.
    pub basis: Basis,
    /// Gutter thickness in pixels.
    pub gutter: f64,
    /// Minimum pane percentage enforced during weighted drags.
    pub min_size: f64,
    /// Whether gutters respond to pointer drags.
    pub interactive: bool,
    /// Container surface holding the panes and gutters.
    pub container: SurfaceId,
    /// Pane surfaces, one per child, in declaration order.
    pub panels: Vec<SurfaceId>,
    /// Gutter surfaces between adjacent panes (`panels.len() - 1` of them).
    pub gutters: Vec<SurfaceId>,
    /// What each pane holds.
    pub slots: Vec<PanelSlot>,
}

impl PanelGroup {
    /// Main-axis pixel extents of every pane, given the container's extent.
    ///
    /// Weighted panes share the extent left after gutters; unit panes are
    /// fixed multiples of `unit_px` regardless of the container.
    pub fn pane_extents(&self, container_extent: f64, unit_px: f64) -> Vec<f64> {
        match &self.basis {
            Basis::Weights(weights) => {
                let inner = inner_extent(container_extent, weights.len(), self.gutter);
                weights.iter().map(|w| w / 100.0 * inner).collect()
            }
            Basis::Units(units) => {
                units.iter().map(|u| f64::from(*u) * unit_px).collect()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sizing math
// ---------------------------------------------------------------------------

/// Extent available to panes once gutters are carved out. Never negative.
pub fn inner_extent(container_extent: f64, pane_count: usize, gutter: f64) -> f64 {
    let gutters = pane_count.saturating_sub(1) as f64;
    (container_extent - gutters * gutter).max(0.0)
}

/// Total container height implied by a unit column:
/// `sum(units) * unit_px + (rows - 1) * gutter`.
pub fn units_total_height(units: &[u32], unit_px: f64, gutter: f64) -> f64 {
    let rows: u64 = units.iter().map(|u| u64::from(*u)).sum();
    let gutters = units.len().saturating_sub(1) as f64;
    rows as f64 * unit_px + gutters * gutter
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_total_height_counts_internal_gutters_only() {
        // Rows of 2, 1, 1 units at 20px with a 4px gutter: 80 + 2*4 = 88.
        assert_eq!(units_total_height(&[2, 1, 1], 20.0, 4.0), 88.0);
        // A single row has no gutters at all.
        assert_eq!(units_total_height(&[3], 20.0, 4.0), 60.0);
        assert_eq!(units_total_height(&[], 20.0, 4.0), 0.0);
    }

    #[test]
    fn inner_extent_floors_at_zero() {
        assert_eq!(inner_extent(100.0, 3, 4.0), 92.0);
        assert_eq!(inner_extent(5.0, 4, 10.0), 0.0);
        assert_eq!(inner_extent(100.0, 1, 4.0), 100.0);
    }

    fn group(basis: Basis, gutter: f64) -> PanelGroup {
        PanelGroup {
            direction: Direction::Row,
            basis,
            gutter,
            min_size: 20.0,
            interactive: true,
            container: SurfaceId::default(),
            panels: Vec::new(),
            gutters: Vec::new(),
            slots: Vec::new(),
        }
    }

    #[test]
    fn weighted_extents_share_the_inner_extent() {
        let g = group(Basis::Weights(vec![25.0, 75.0]), 4.0);
        let extents = g.pane_extents(104.0, 20.0);
        assert_eq!(extents, vec![25.0, 75.0]);
    }

    #[test]
    fn unit_extents_ignore_the_container() {
        let g = group(Basis::Units(vec![2, 1]), 4.0);
        assert_eq!(g.pane_extents(999.0, 20.0), vec![40.0, 20.0]);
    }

    #[test]
    fn basis_len() {
        assert_eq!(Basis::Weights(vec![50.0, 50.0]).len(), 2);
        assert_eq!(Basis::Units(vec![1, 1, 1]).len(), 3);
    }
}
