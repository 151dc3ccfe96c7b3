//! The split layout engine.
//!
//! [`SplitLayout`] realizes a declarative [`SplitNode`] tree as panel groups
//! on a [`HostSurface`], then keeps the realized layout live: gutters between
//! panes respond to pointer drags, unit-based rows track their content
//! height, and container resizes re-flow every pane.
//!
//! The engine is an event pump, not a callback sink. The host delivers
//! notifications by calling [`SplitLayout::pointer`],
//! [`SplitLayout::content_resized`], [`SplitLayout::children_changed`] and
//! [`SplitLayout::box_resized`]; every mutation happens synchronously inside
//! those calls.
//!
//! [`SplitNode`]: crate::tree::SplitNode

mod autofit;
mod build;
mod panels;
mod resize;

pub use panels::GroupId;
pub(crate) use panels::{units_total_height, Basis, PanelGroup, PanelSlot};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::config::LayoutConfig;
use crate::geometry::Axis;
use crate::host::{Dimension, HostSurface, LayoutStyle, SubscriptionId, SurfaceId};

use resize::DragGesture;

// ---------------------------------------------------------------------------
// LeafSlot
// ---------------------------------------------------------------------------

/// One mountable leaf of the realized layout.
#[derive(Debug)]
pub struct LeafSlot {
    /// Surface the caller mounts content into.
    pub surface: SurfaceId,
    /// Child-index path from the root split to this leaf, depth first.
    pub path: Vec<usize>,
    /// The leaf's category tag from the split tree.
    pub category: String,
    /// Group this leaf's pane belongs to.
    pub(crate) group: GroupId,
    /// Pane index within the group.
    pub(crate) pane: usize,
    /// Whether this leaf participates in content auto-fit.
    pub(crate) auto_fit: bool,
    /// Re-entrancy latch: set while auto-fit is measuring this leaf, so the
    /// size notifications that measurement itself provokes are ignored.
    pub(crate) relaxing: bool,
}

// ---------------------------------------------------------------------------
// SplitLayout
// ---------------------------------------------------------------------------

/// A realized split layout bound to one host surface tree.
///
/// Construct with [`SplitLayout::build`]; tear down with
/// [`SplitLayout::dispose`] (also run on drop). Between the two, the engine
/// owns every surface it created under the mount anchor and every
/// subscription it took out.
pub struct SplitLayout<H: HostSurface> {
    pub(crate) host: H,
    pub(crate) config: LayoutConfig,
    pub(crate) groups: SlotMap<GroupId, PanelGroup>,
    pub(crate) root_surface: SurfaceId,
    pub(crate) root_group: GroupId,
    pub(crate) leaves: Vec<LeafSlot>,
    /// Gutter surface -> (owning group, gutter index within it).
    pub(crate) gutter_index: HashMap<SurfaceId, (GroupId, usize)>,
    /// Group container surface -> group.
    pub(crate) container_index: HashMap<SurfaceId, GroupId>,
    /// Leaf content surface -> index into `leaves`.
    pub(crate) leaf_index: HashMap<SurfaceId, usize>,
    /// Every observation handle taken during build, released on dispose.
    pub(crate) subscriptions: Vec<SubscriptionId>,
    pub(crate) drag: Option<DragGesture>,
    pub(crate) disposed: bool,
}

impl<H: HostSurface> SplitLayout<H> {
    /// The leaves of the realized layout, depth first.
    pub fn leaves(&self) -> &[LeafSlot] {
        &self.leaves
    }

    /// Surface created directly under the mount anchor; everything the
    /// engine builds lives beneath it.
    pub fn root_surface(&self) -> SurfaceId {
        self.root_surface
    }

    /// Gutter surfaces of the root group, in order.
    pub fn root_gutters(&self) -> Vec<SurfaceId> {
        self.groups[self.root_group].gutters.clone()
    }

    /// Distinct leaf categories in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for leaf in &self.leaves {
            if !seen.contains(&leaf.category) {
                seen.push(leaf.category.clone());
            }
        }
        seen
    }

    /// Leaf surfaces carrying the given category tag, depth first.
    pub fn slots_by_category(&self, category: &str) -> Vec<SurfaceId> {
        self.leaves
            .iter()
            .filter(|leaf| leaf.category == category)
            .map(|leaf| leaf.surface)
            .collect()
    }

    /// Borrow the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Borrow the host mutably. Tests use this to feed the fake host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The config the layout was built with.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // -- teardown ----------------------------------------------------------

    /// Release every subscription and remove every surface the engine
    /// created. Idempotent; the layout is inert afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(gesture) = self.drag.take() {
            if let Some(capture) = gesture.capture {
                self.host.unsubscribe(capture);
            }
        }
        for sub in self.subscriptions.drain(..) {
            self.host.unsubscribe(sub);
        }
        self.host.remove_node(self.root_surface);
    }

    // -- relayout ----------------------------------------------------------

    /// Re-apply pane and gutter geometry for one group from its current
    /// basis and container size.
    pub(crate) fn relayout_group(&mut self, group_id: GroupId) {
        let Some(group) = self.groups.get(group_id) else {
            return;
        };
        let axis = group.direction.axis();
        let unit_px = self.host.unit_px();
        let container_extent = self.host.box_size(group.container).extent(axis);
        let extents = group.pane_extents(container_extent, unit_px);

        let mut ops: Vec<(SurfaceId, LayoutStyle)> = Vec::new();
        let mut cursor = 0.0;
        for (i, extent) in extents.iter().enumerate() {
            ops.push((group.panels[i], offset_along(axis, cursor)));
            ops.push((group.panels[i], extent_along(axis, *extent)));
            cursor += extent;
            if let Some(gutter) = group.gutters.get(i) {
                ops.push((*gutter, offset_along(axis, cursor)));
                ops.push((*gutter, extent_along(axis, group.gutter)));
                cursor += group.gutter;
            }
        }
        // A unit column dictates its own height; weighted groups follow
        // whatever extent the host gives their container.
        if let Basis::Units(units) = &group.basis {
            let total = units_total_height(units, unit_px, group.gutter);
            ops.push((group.container, LayoutStyle::Height(Dimension::Px(total))));
        }

        for (surface, style) in ops {
            self.host.set_style(surface, style);
        }
    }
}

/// Main-axis position as an offset style.
fn offset_along(axis: Axis, value: f64) -> LayoutStyle {
    match axis {
        Axis::Horizontal => LayoutStyle::Offset { x: value, y: 0.0 },
        Axis::Vertical => LayoutStyle::Offset { x: 0.0, y: value },
    }
}

/// Main-axis extent as a width/height style.
fn extent_along(axis: Axis, value: f64) -> LayoutStyle {
    match axis {
        Axis::Horizontal => LayoutStyle::Width(Dimension::Px(value)),
        Axis::Vertical => LayoutStyle::Height(Dimension::Px(value)),
    }
}

impl<H: HostSurface> Drop for SplitLayout<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
