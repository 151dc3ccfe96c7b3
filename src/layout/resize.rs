//! Interactive gutter drags: Idle -> Dragging -> Idle, pairwise resize only.
//!
//! A drag captures the two adjacent panes' basis values at pointer-down and
//! keeps their sum fixed for the whole gesture. Every move updates the live
//! basis synchronously; nothing is persisted beyond the pane styling itself.

use crate::geometry::Point;
use crate::host::{HostSurface, PointerEvent, PointerPhase, SubscriptionId, SurfaceId};

use super::panels::inner_extent;
use super::{Basis, GroupId, SplitLayout};

// ---------------------------------------------------------------------------
// DragGesture
// ---------------------------------------------------------------------------

/// Basis values of the pane pair at pointer-down.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PairSnapshot {
    Weights { a0: f64, b0: f64 },
    Units { a0: u32, b0: u32 },
}

/// One in-flight gutter drag.
#[derive(Debug)]
pub(crate) struct DragGesture {
    /// Group owning the dragged gutter.
    pub group: GroupId,
    /// Gutter index; the gesture resizes panes `index` and `index + 1`.
    pub index: usize,
    /// Pointer position at drag start.
    pub origin: Point,
    /// Pane pair basis at drag start.
    pub start: PairSnapshot,
    /// Pointer capture taken for the duration of the gesture, so moves keep
    /// arriving after the pointer leaves the gutter itself.
    pub capture: Option<SubscriptionId>,
}

// ---------------------------------------------------------------------------
// Pointer pump
// ---------------------------------------------------------------------------

impl<H: HostSurface> SplitLayout<H> {
    /// Deliver a pointer event observed on `target`.
    ///
    /// Pointer-down on a gutter starts a drag; moves resize the adjacent pane
    /// pair; release (or a new down, anywhere) concludes the gesture.
    pub fn pointer(&mut self, target: SurfaceId, event: PointerEvent) {
        if self.disposed {
            return;
        }
        match event.phase {
            PointerPhase::Down => {
                self.end_drag();
                if let Some(&(group, index)) = self.gutter_index.get(&target) {
                    self.begin_drag(group, index, event.position());
                }
            }
            PointerPhase::Move => self.update_drag(event),
            PointerPhase::Up => {
                self.update_drag(event);
                self.end_drag();
            }
        }
    }

    fn begin_drag(&mut self, group_id: GroupId, index: usize, origin: Point) {
        let Some(group) = self.groups.get(group_id) else {
            return;
        };
        if !group.interactive {
            return;
        }
        let start = match &group.basis {
            Basis::Weights(weights) => PairSnapshot::Weights {
                a0: weights[index],
                b0: weights[index + 1],
            },
            Basis::Units(units) => PairSnapshot::Units {
                a0: units[index],
                b0: units[index + 1],
            },
        };
        let capture = self.host.observe_pointer(self.root_surface);
        self.drag = Some(DragGesture {
            group: group_id,
            index,
            origin,
            start,
            capture: Some(capture),
        });
    }

    fn update_drag(&mut self, event: PointerEvent) {
        let Some(gesture) = self.drag.as_ref() else {
            return;
        };
        let (group_id, index, origin, start) =
            (gesture.group, gesture.index, gesture.origin, gesture.start);
        let Some(group) = self.groups.get(group_id) else {
            return;
        };
        let axis = group.direction.axis();
        let delta = event.position().along(axis) - origin.along(axis);

        match start {
            PairSnapshot::Weights { a0, b0 } => {
                let container_extent = self.host.box_size(group.container).extent(axis);
                let inner = inner_extent(container_extent, group.basis.len(), group.gutter);
                if inner <= 0.0 {
                    return;
                }
                let total = a0 + b0;
                // If the pair cannot honor min_size on both sides, meet in
                // the middle instead of inverting the clamp range.
                let floor = group.min_size.min(total / 2.0);
                let a = (a0 + delta / inner * 100.0).clamp(floor, total - floor);
                let b = total - a;
                if let Some(group) = self.groups.get_mut(group_id) {
                    if let Basis::Weights(weights) = &mut group.basis {
                        weights[index] = a;
                        weights[index + 1] = b;
                    }
                }
                self.relayout_group(group_id);
            }
            PairSnapshot::Units { a0, b0 } => {
                let unit_px = self.host.unit_px();
                if unit_px <= 0.0 {
                    return;
                }
                let moved = snap_units(delta / unit_px);
                let min = i64::from(self.config.min_row_units.max(1));
                let total = i64::from(a0) + i64::from(b0);
                if total < 2 * min {
                    return;
                }
                let a = (i64::from(a0) + moved).clamp(min, total - min);
                let b = total - a;
                if let Some(group) = self.groups.get_mut(group_id) {
                    if let Basis::Units(units) = &mut group.basis {
                        units[index] = a as u32;
                        units[index + 1] = b as u32;
                    }
                }
                self.relayout_group(group_id);
            }
        }
    }

    /// Conclude any in-flight gesture and release its pointer capture.
    fn end_drag(&mut self) {
        if let Some(gesture) = self.drag.take() {
            if let Some(capture) = gesture.capture {
                self.host.unsubscribe(capture);
            }
        }
    }
}

/// Snap a fractional unit delta to whole units. Nearest wins; an exact
/// half-unit stays put, so a drag must clearly cross into the next unit
/// before a row changes size.
fn snap_units(fraction: f64) -> i64 {
    let snapped = (fraction.abs() - 0.5).ceil().max(0.0);
    (snapped.copysign(fraction)) as i64
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::testing::FakeHost;
    use crate::tree::{Direction, SplitNode, SplitParams};

    fn build(tree: &SplitNode) -> SplitLayout<FakeHost> {
        let mut host = FakeHost::new();
        let anchor = host.add_root(204.0, 204.0);
        SplitLayout::build(host, anchor, tree, LayoutConfig::default()).unwrap()
    }

    fn weights(layout: &SplitLayout<FakeHost>) -> Vec<f64> {
        match &layout.groups[layout.root_group].basis {
            Basis::Weights(w) => w.clone(),
            Basis::Units(_) => panic!("expected weighted basis"),
        }
    }

    fn units(layout: &SplitLayout<FakeHost>) -> Vec<u32> {
        match &layout.groups[layout.root_group].basis {
            Basis::Units(u) => u.clone(),
            Basis::Weights(_) => panic!("expected unit basis"),
        }
    }

    fn drag(layout: &mut SplitLayout<FakeHost>, gutter: SurfaceId, from: (f64, f64), to: (f64, f64)) {
        layout.pointer(gutter, PointerEvent::new(PointerPhase::Down, from.0, from.1));
        layout.pointer(gutter, PointerEvent::new(PointerPhase::Move, to.0, to.1));
        layout.pointer(gutter, PointerEvent::new(PointerPhase::Up, to.0, to.1));
    }

    // ── snap_units ───────────────────────────────────────────────────

    #[test]
    fn half_unit_threshold() {
        assert_eq!(snap_units(0.5), 0);
        assert_eq!(snap_units(-0.5), 0);
        assert_eq!(snap_units(0.6), 1);
        assert_eq!(snap_units(1.5), 1);
        assert_eq!(snap_units(1.6), 2);
        assert_eq!(snap_units(-1.5), -1);
        assert_eq!(snap_units(0.0), 0);
    }

    // ── Weighted drags ───────────────────────────────────────────────

    #[test]
    fn weighted_drag_moves_the_pair() {
        // 204px container, one 4px gutter: inner 200. +50px is +25%.
        let mut layout = build(&SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]));
        let gutter = layout.root_gutters()[0];
        drag(&mut layout, gutter, (100.0, 50.0), (150.0, 50.0));
        let w = weights(&layout);
        assert!((w[0] - 75.0).abs() < 1e-9);
        assert!((w[1] - 25.0).abs() < 1e-9);
    }

    #[test]
    fn weighted_drag_clamps_to_min_size() {
        let mut layout = build(&SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]));
        let gutter = layout.root_gutters()[0];
        drag(&mut layout, gutter, (100.0, 50.0), (10_000.0, 50.0));
        assert_eq!(weights(&layout), vec![80.0, 20.0]);
    }

    #[test]
    fn pair_sum_is_invariant_and_third_pane_untouched() {
        let tree = SplitParams::new(Direction::Row)
            .with_sizes([20.0, 30.0, 50.0])
            .into_node();
        let mut layout = build(&tree);
        let gutter = layout.root_gutters()[0];

        layout.pointer(gutter, PointerEvent::new(PointerPhase::Down, 40.0, 0.0));
        for x in [45.0, 60.0, 20.0, 80.0] {
            layout.pointer(gutter, PointerEvent::new(PointerPhase::Move, x, 0.0));
            let w = weights(&layout);
            assert!((w[0] + w[1] - 50.0).abs() < 1e-9);
            assert_eq!(w[2], 50.0);
        }
        layout.pointer(gutter, PointerEvent::new(PointerPhase::Up, 80.0, 0.0));
    }

    #[test]
    fn vertical_drag_uses_the_y_axis() {
        let tree = SplitParams::new(Direction::Column)
            .with_children([SplitNode::leaf("top"), SplitNode::leaf("bottom")])
            .into_node();
        let mut layout = build(&tree);
        let gutter = layout.root_gutters()[0];
        // Horizontal motion must not resize a column split.
        drag(&mut layout, gutter, (0.0, 100.0), (80.0, 100.0));
        assert_eq!(weights(&layout), vec![50.0, 50.0]);
    }

    #[test]
    fn zero_extent_container_makes_drag_a_no_op() {
        let mut layout = build(&SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]));
        let root = layout.root_surface();
        layout.host_mut().set_box_size(root, 0.0, 0.0);
        let gutter = layout.root_gutters()[0];
        drag(&mut layout, gutter, (100.0, 0.0), (150.0, 0.0));
        assert_eq!(weights(&layout), vec![50.0, 50.0]);
    }

    #[test]
    fn non_interactive_gutters_ignore_drags() {
        let tree = SplitParams::new(Direction::Row)
            .with_children([SplitNode::leaf("a"), SplitNode::leaf("b")])
            .interactive(false)
            .into_node();
        let mut layout = build(&tree);
        let gutter = layout.root_gutters()[0];
        drag(&mut layout, gutter, (100.0, 0.0), (150.0, 0.0));
        assert_eq!(weights(&layout), vec![50.0, 50.0]);
    }

    // ── Unit drags ───────────────────────────────────────────────────

    #[test]
    fn unit_drag_snaps_to_whole_units() {
        let tree = SplitParams::new(Direction::Column)
            .with_row_units("2 2")
            .into_node();
        let mut layout = build(&tree);
        let gutter = layout.root_gutters()[0];

        // 10px at unit_px 20 is half a unit: no change.
        drag(&mut layout, gutter, (0.0, 40.0), (0.0, 50.0));
        assert_eq!(units(&layout), vec![2, 2]);

        // 30px is one unit.
        drag(&mut layout, gutter, (0.0, 40.0), (0.0, 70.0));
        assert_eq!(units(&layout), vec![3, 1]);
    }

    #[test]
    fn unit_drag_keeps_both_sides_at_one_unit() {
        let tree = SplitParams::new(Direction::Column)
            .with_row_units("2 1")
            .into_node();
        let mut layout = build(&tree);
        let gutter = layout.root_gutters()[0];
        drag(&mut layout, gutter, (0.0, 40.0), (0.0, -500.0));
        assert_eq!(units(&layout), vec![1, 2]);
        drag(&mut layout, gutter, (0.0, 20.0), (0.0, 500.0));
        assert_eq!(units(&layout), vec![2, 1]);
    }

    #[test]
    fn unit_drag_restyles_panes_and_gutter() {
        let tree = SplitParams::new(Direction::Column)
            .with_row_units("2 2")
            .into_node();
        let mut layout = build(&tree);
        let gutter = layout.root_gutters()[0];
        drag(&mut layout, gutter, (0.0, 40.0), (0.0, 70.0));

        let group = &layout.groups[layout.root_group];
        let host = layout.host();
        assert_eq!(host.last_height(group.panels[0]), Some(60.0));
        assert_eq!(host.last_height(group.panels[1]), Some(20.0));
        assert_eq!(host.last_offset(group.gutters[0]), Some((0.0, 60.0)));
        // Total units are pair-invariant, so the column height is too.
        assert_eq!(host.last_height(group.container), Some(84.0));
    }

    // ── Capture lifecycle ────────────────────────────────────────────

    #[test]
    fn capture_is_taken_and_released_per_gesture() {
        let mut layout = build(&SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]));
        let gutter = layout.root_gutters()[0];
        let before = layout.host().live_subscriptions();

        layout.pointer(gutter, PointerEvent::new(PointerPhase::Down, 100.0, 0.0));
        assert_eq!(layout.host().live_subscriptions(), before + 1);

        layout.pointer(gutter, PointerEvent::new(PointerPhase::Up, 100.0, 0.0));
        assert_eq!(layout.host().live_subscriptions(), before);
    }

    #[test]
    fn moves_without_a_gesture_are_ignored() {
        let mut layout = build(&SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]));
        let gutter = layout.root_gutters()[0];
        layout.pointer(gutter, PointerEvent::new(PointerPhase::Move, 150.0, 0.0));
        assert_eq!(weights(&layout), vec![50.0, 50.0]);
    }
}
