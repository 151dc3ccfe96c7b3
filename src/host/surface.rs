//! The `HostSurface` trait: everything the engine requires from its
//! environment, and nothing more.

use slotmap::new_key_type;

use crate::geometry::Size;

use super::style::LayoutStyle;

new_key_type! {
    /// Unique identifier for a host surface node. Copy, lightweight (u64).
    pub struct SurfaceId;
}

/// Handle for one active observation, returned per `observe_*` call.
///
/// The engine collects every handle it takes and releases each exactly once
/// on dispose; there are no process-wide listener registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The rendering environment as seen by the engine.
///
/// Implementations route these calls to whatever retained visual tree they
/// own (a DOM, a terminal compositor, a scene graph). Notifications flow the
/// other way: the host's event loop delivers pointer events and size/children
/// changes by calling the corresponding pump methods on
/// [`SplitLayout`](crate::layout::SplitLayout).
///
/// All operations are best-effort. A call against a dead or detached node
/// must be a no-op, not a panic — the engine treats host refusals as visual
/// glitches, never as fatal errors.
pub trait HostSurface {
    /// Create a generic container node, optionally under `parent`.
    fn create_node(&mut self, parent: Option<SurfaceId>) -> SurfaceId;

    /// Remove a node and its whole subtree.
    fn remove_node(&mut self, node: SurfaceId);

    /// Whether `node` is a live container usable as a mount target.
    fn contains(&self, node: SurfaceId) -> bool;

    /// Apply one layout property to a node.
    fn set_style(&mut self, node: SurfaceId, style: LayoutStyle);

    /// The node's current box size in pixels. Zero if unmeasured.
    fn box_size(&self, node: SurfaceId) -> Size;

    /// The node's intrinsic content height in pixels, as currently laid out.
    ///
    /// Takes `&mut self` because measuring may force the host to flush
    /// pending layout work.
    fn natural_height(&mut self, node: SurfaceId) -> f64;

    /// Subscribe to box-size changes of `node`.
    fn observe_box_size(&mut self, node: SurfaceId) -> SubscriptionId;

    /// Subscribe to child-list changes of `node`'s subtree.
    fn observe_children(&mut self, node: SurfaceId) -> SubscriptionId;

    /// Subscribe to pointer down/move/up events targeting `node`.
    fn observe_pointer(&mut self, node: SurfaceId) -> SubscriptionId;

    /// Release a subscription handle. Releasing twice is a no-op.
    fn unsubscribe(&mut self, sub: SubscriptionId);

    /// The ambient layout-unit size in pixels, resolved once from the host's
    /// UI density setting.
    fn unit_px(&self) -> f64;
}
