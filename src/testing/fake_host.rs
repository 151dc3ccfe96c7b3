//! FakeHost: an instrumented in-memory host surface.
//!
//! Every node is a plain record of parent, children, style log, and sizes.
//! Box sizes never move on their own — tests set them explicitly and deliver
//! the matching notification through the engine's pump methods. New nodes
//! inherit their parent's box size at creation, which keeps build-time
//! geometry deterministic without a real layout pass.

use std::collections::HashSet;

use slotmap::SlotMap;

use crate::geometry::Size;
use crate::host::{Dimension, HostSurface, LayoutStyle, SubscriptionId, SurfaceId};

// ---------------------------------------------------------------------------
// FakeNode
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct FakeNode {
    parent: Option<SurfaceId>,
    children: Vec<SurfaceId>,
    styles: Vec<LayoutStyle>,
    box_size: Size,
    natural_height: f64,
}

// ---------------------------------------------------------------------------
// FakeHost
// ---------------------------------------------------------------------------

/// An in-memory host surface for tests.
pub struct FakeHost {
    nodes: SlotMap<SurfaceId, FakeNode>,
    live: HashSet<SubscriptionId>,
    next_subscription: u64,
    subscribe_calls: u64,
    unsubscribe_calls: u64,
    unit_px: f64,
}

impl FakeHost {
    /// Create a fake host with the default 20px layout unit.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            live: HashSet::new(),
            next_subscription: 0,
            subscribe_calls: 0,
            unsubscribe_calls: 0,
            unit_px: 20.0,
        }
    }

    /// Override the ambient unit size (builder).
    pub fn with_unit_px(mut self, unit_px: f64) -> Self {
        self.unit_px = unit_px;
        self
    }

    /// Create a detached root node with the given box size.
    pub fn add_root(&mut self, width: f64, height: f64) -> SurfaceId {
        let root = self.create_node(None);
        self.set_box_size(root, width, height);
        root
    }

    // ── Test controls ────────────────────────────────────────────────

    /// Set a node's measured box size. Does not notify anyone; tests call
    /// the engine's pump methods themselves.
    pub fn set_box_size(&mut self, node: SurfaceId, width: f64, height: f64) {
        if let Some(record) = self.nodes.get_mut(node) {
            record.box_size = Size::new(width, height);
        }
    }

    /// Set a node's intrinsic content height.
    pub fn set_natural_height(&mut self, node: SurfaceId, height: f64) {
        if let Some(record) = self.nodes.get_mut(node) {
            record.natural_height = height;
        }
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// Full style log of a node, in application order.
    pub fn styles(&self, node: SurfaceId) -> Vec<LayoutStyle> {
        self.nodes
            .get(node)
            .map(|record| record.styles.clone())
            .unwrap_or_default()
    }

    /// The most recent fixed width applied to a node.
    pub fn last_width(&self, node: SurfaceId) -> Option<f64> {
        self.styles(node).iter().rev().find_map(|style| match style {
            LayoutStyle::Width(Dimension::Px(value)) => Some(*value),
            _ => None,
        })
    }

    /// The most recent fixed height applied to a node.
    pub fn last_height(&self, node: SurfaceId) -> Option<f64> {
        self.styles(node).iter().rev().find_map(|style| match style {
            LayoutStyle::Height(Dimension::Px(value)) => Some(*value),
            _ => None,
        })
    }

    /// The most recent offset applied to a node.
    pub fn last_offset(&self, node: SurfaceId) -> Option<(f64, f64)> {
        self.styles(node).iter().rev().find_map(|style| match style {
            LayoutStyle::Offset { x, y } => Some((*x, *y)),
            _ => None,
        })
    }

    /// Children of a node, in creation order.
    pub fn children(&self, node: SurfaceId) -> Vec<SurfaceId> {
        self.nodes
            .get(node)
            .map(|record| record.children.clone())
            .unwrap_or_default()
    }

    /// Number of subscriptions taken out and not yet released.
    pub fn live_subscriptions(&self) -> usize {
        self.live.len()
    }

    /// Total `observe_*` calls seen.
    pub fn subscribe_calls(&self) -> u64 {
        self.subscribe_calls
    }

    /// Total `unsubscribe` calls seen.
    pub fn unsubscribe_calls(&self) -> u64 {
        self.unsubscribe_calls
    }

    /// Total live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn subscribe(&mut self) -> SubscriptionId {
        self.subscribe_calls += 1;
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.live.insert(id);
        id
    }

    fn remove_subtree(&mut self, node: SurfaceId) {
        let children = self.children(node);
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes.remove(node);
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSurface for FakeHost {
    fn create_node(&mut self, parent: Option<SurfaceId>) -> SurfaceId {
        let inherited = parent
            .and_then(|p| self.nodes.get(p))
            .map(|record| record.box_size)
            .unwrap_or(Size::ZERO);
        let node = self.nodes.insert(FakeNode {
            parent,
            box_size: inherited,
            ..FakeNode::default()
        });
        if let Some(parent) = parent {
            if let Some(record) = self.nodes.get_mut(parent) {
                record.children.push(node);
            }
        }
        node
    }

    fn remove_node(&mut self, node: SurfaceId) {
        let parent = self.nodes.get(node).and_then(|record| record.parent);
        if let Some(parent) = parent {
            if let Some(record) = self.nodes.get_mut(parent) {
                record.children.retain(|child| *child != node);
            }
        }
        self.remove_subtree(node);
    }

    fn contains(&self, node: SurfaceId) -> bool {
        self.nodes.contains_key(node)
    }

    fn set_style(&mut self, node: SurfaceId, style: LayoutStyle) {
        if let Some(record) = self.nodes.get_mut(node) {
            record.styles.push(style);
        }
    }

    fn box_size(&self, node: SurfaceId) -> Size {
        self.nodes
            .get(node)
            .map(|record| record.box_size)
            .unwrap_or(Size::ZERO)
    }

    fn natural_height(&mut self, node: SurfaceId) -> f64 {
        self.nodes
            .get(node)
            .map(|record| record.natural_height)
            .unwrap_or(0.0)
    }

    fn observe_box_size(&mut self, _node: SurfaceId) -> SubscriptionId {
        self.subscribe()
    }

    fn observe_children(&mut self, _node: SurfaceId) -> SubscriptionId {
        self.subscribe()
    }

    fn observe_pointer(&mut self, _node: SurfaceId) -> SubscriptionId {
        self.subscribe()
    }

    fn unsubscribe(&mut self, sub: SubscriptionId) {
        self.unsubscribe_calls += 1;
        self.live.remove(&sub);
    }

    fn unit_px(&self) -> f64 {
        self.unit_px
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_inherit_box_size() {
        let mut host = FakeHost::new();
        let root = host.add_root(120.0, 80.0);
        let child = host.create_node(Some(root));
        assert_eq!(host.box_size(child), Size::new(120.0, 80.0));
    }

    #[test]
    fn remove_node_takes_the_subtree() {
        let mut host = FakeHost::new();
        let root = host.add_root(10.0, 10.0);
        let child = host.create_node(Some(root));
        let grandchild = host.create_node(Some(child));

        host.remove_node(child);
        assert!(host.contains(root));
        assert!(!host.contains(child));
        assert!(!host.contains(grandchild));
        assert!(host.children(root).is_empty());
    }

    #[test]
    fn subscriptions_are_counted() {
        let mut host = FakeHost::new();
        let root = host.add_root(10.0, 10.0);
        let a = host.observe_box_size(root);
        let b = host.observe_pointer(root);
        assert_eq!(host.live_subscriptions(), 2);

        host.unsubscribe(a);
        host.unsubscribe(a);
        host.unsubscribe(b);
        assert_eq!(host.live_subscriptions(), 0);
        assert_eq!(host.subscribe_calls(), 2);
        assert_eq!(host.unsubscribe_calls(), 3);
    }

    #[test]
    fn style_log_preserves_order() {
        let mut host = FakeHost::new();
        let root = host.add_root(10.0, 10.0);
        host.set_style(root, LayoutStyle::Height(Dimension::Auto));
        host.set_style(root, LayoutStyle::Height(Dimension::Px(40.0)));
        assert_eq!(host.last_height(root), Some(40.0));
        assert_eq!(host.styles(root).len(), 2);
    }
}
