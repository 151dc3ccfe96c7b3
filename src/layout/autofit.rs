//! Content-driven auto-fit: unit rows track their content's natural height.
//!
//! On every content notification for an auto-fitting leaf, the engine relaxes
//! the pane's fixed height, measures the content's intrinsic height, restores
//! the constraint, and re-quantizes the row's unit allocation. The whole
//! relax-measure-restore sequence is synchronous within one notification.

use crate::expr::parse::clamp_units;
use crate::host::{Dimension, HostSurface, LayoutStyle, SurfaceId};

use super::{Basis, SplitLayout};

impl<H: HostSurface> SplitLayout<H> {
    /// Deliver a box-size change observed on a leaf content surface.
    pub fn content_resized(&mut self, target: SurfaceId) {
        if self.disposed {
            return;
        }
        if let Some(&index) = self.leaf_index.get(&target) {
            self.autofit_leaf(index);
        }
    }

    /// Deliver a subtree mutation observed on a leaf content surface.
    /// Mounting or removing content re-fits the row just like a resize.
    pub fn children_changed(&mut self, target: SurfaceId) {
        if self.disposed {
            return;
        }
        if let Some(&index) = self.leaf_index.get(&target) {
            self.autofit_leaf(index);
        }
    }

    /// Deliver a box-size change observed on a group container. Re-flows the
    /// group so pane extents and gutter handles follow the new box.
    pub fn box_resized(&mut self, target: SurfaceId) {
        if self.disposed {
            return;
        }
        if let Some(&group) = self.container_index.get(&target) {
            self.relayout_group(group);
        }
    }

    /// Re-quantize one leaf's row allocation from its content height.
    fn autofit_leaf(&mut self, index: usize) {
        let Some(leaf) = self.leaves.get(index) else {
            return;
        };
        if !leaf.auto_fit || leaf.relaxing {
            return;
        }
        let (group_id, pane, surface) = (leaf.group, leaf.pane, leaf.surface);
        let Some(group) = self.groups.get(group_id) else {
            return;
        };
        let Basis::Units(units) = &group.basis else {
            return;
        };
        let current = units[pane];
        let gutter = group.gutter;
        let panel = group.panels[pane];
        let unit_px = self.host.unit_px();
        if unit_px <= 0.0 {
            return;
        }

        // Relax the fixed height so the measurement sees true content size,
        // then restore it. The latch swallows the notifications this step
        // itself provokes.
        self.leaves[index].relaxing = true;
        self.host
            .set_style(panel, LayoutStyle::Height(Dimension::Auto));
        let measured = self.host.natural_height(surface);
        self.host.set_style(
            panel,
            LayoutStyle::Height(Dimension::Px(f64::from(current) * unit_px)),
        );
        self.leaves[index].relaxing = false;

        if !measured.is_finite() {
            return;
        }
        let overhead = f64::from(current.saturating_sub(1)) * gutter;
        let raw = ((measured - overhead) / unit_px).ceil() as i64;
        let fitted = clamp_units(raw, &self.config);
        if fitted != current {
            if let Some(group) = self.groups.get_mut(group_id) {
                if let Basis::Units(units) = &mut group.basis {
                    units[pane] = fitted;
                }
            }
            self.relayout_group(group_id);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
