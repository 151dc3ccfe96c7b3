//! Pilot: programmatic interaction with a headless layout.
//!
//! The `Pilot` builds a [`SplitLayout`] over a [`FakeHost`] and provides
//! methods to simulate gutter drags, content growth, and container resizes,
//! delivering each notification the way a real event loop would.

use crate::config::LayoutConfig;
use crate::host::{HostSurface, PointerEvent, PointerPhase, SurfaceId};
use crate::layout::SplitLayout;
use crate::tree::SplitNode;

use super::fake_host::FakeHost;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless layout driver for testing.
///
/// # Examples
///
/// ```
/// use splitgrid::testing::Pilot;
/// use splitgrid::SplitNode;
///
/// let mut pilot = Pilot::build(&SplitNode::row([
///     SplitNode::leaf("nav"),
///     SplitNode::leaf("main"),
/// ]));
/// pilot.drag_gutter(0, (100.0, 0.0), (150.0, 0.0));
/// assert_eq!(pilot.layout().leaves().len(), 2);
/// ```
pub struct Pilot {
    layout: SplitLayout<FakeHost>,
}

impl Pilot {
    /// Build a layout over a fresh 200x200 fake host with default config.
    pub fn build(tree: &SplitNode) -> Self {
        Self::build_with(tree, LayoutConfig::default())
    }

    /// Build with an explicit config.
    pub fn build_with(tree: &SplitNode, config: LayoutConfig) -> Self {
        let mut host = FakeHost::new();
        let anchor = host.add_root(200.0, 200.0);
        let layout = SplitLayout::build(host, anchor, tree, config)
            .expect("fake host anchor is always a valid mount target");
        Self { layout }
    }

    /// The layout under test.
    pub fn layout(&self) -> &SplitLayout<FakeHost> {
        &self.layout
    }

    /// Mutable access to the layout under test.
    pub fn layout_mut(&mut self) -> &mut SplitLayout<FakeHost> {
        &mut self.layout
    }

    /// The instrumented host.
    pub fn host(&self) -> &FakeHost {
        self.layout.host()
    }

    // ── Pointer simulation ───────────────────────────────────────────

    /// Press the pointer down on the root group's `index`-th gutter.
    pub fn press(&mut self, index: usize, at: (f64, f64)) {
        let gutter = self.gutter(index);
        self.layout
            .pointer(gutter, PointerEvent::new(PointerPhase::Down, at.0, at.1));
    }

    /// Move the pointer while a gesture is active. Delivered against the
    /// root surface, as a captured pointer would be.
    pub fn move_to(&mut self, at: (f64, f64)) {
        let root = self.layout.root_surface();
        self.layout
            .pointer(root, PointerEvent::new(PointerPhase::Move, at.0, at.1));
    }

    /// Release the pointer.
    pub fn release(&mut self, at: (f64, f64)) {
        let root = self.layout.root_surface();
        self.layout
            .pointer(root, PointerEvent::new(PointerPhase::Up, at.0, at.1));
    }

    /// Full down-move-up drag on the root group's `index`-th gutter.
    pub fn drag_gutter(&mut self, index: usize, from: (f64, f64), to: (f64, f64)) {
        self.press(index, from);
        self.move_to(to);
        self.release(to);
    }

    // ── Content and container simulation ─────────────────────────────

    /// Give the `leaf_index`-th leaf's content a new natural height and
    /// deliver the matching size notification.
    pub fn resize_content(&mut self, leaf_index: usize, natural_height: f64) {
        let surface = self.layout.leaves()[leaf_index].surface;
        self.layout
            .host_mut()
            .set_natural_height(surface, natural_height);
        self.layout.content_resized(surface);
    }

    /// Signal that the `leaf_index`-th leaf's mounted subtree changed.
    pub fn mutate_content(&mut self, leaf_index: usize) {
        let surface = self.layout.leaves()[leaf_index].surface;
        self.layout.children_changed(surface);
    }

    /// Resize the root container and deliver the box notification.
    pub fn resize_root(&mut self, width: f64, height: f64) {
        let root = self.layout.root_surface();
        self.layout.host_mut().set_box_size(root, width, height);
        self.layout.box_resized(root);
    }

    fn gutter(&self, index: usize) -> SurfaceId {
        self.layout.root_gutters()[index]
    }
}

// ===========================================================================
// Tests
// ===========================================================================
