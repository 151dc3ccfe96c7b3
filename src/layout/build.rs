//! Realizing a split tree: recursive construction of panel groups.

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::geometry::Axis;
use crate::host::{Dimension, HostSurface, LayoutStyle, SurfaceId};
use crate::tree::{normalize, Direction, NormalizedParams, SplitNode};

use super::{Basis, GroupId, LeafSlot, PanelGroup, PanelSlot, SplitLayout};

use std::collections::HashMap;

use slotmap::SlotMap;

impl<H: HostSurface> SplitLayout<H> {
    /// Realize `tree` under `anchor` on the given host.
    ///
    /// Fails only if `anchor` is not a live container; every other oddity in
    /// the tree degrades (missing parameters get defaults, malformed size
    /// expressions fall back to an equal split). A bare leaf at the root is
    /// wrapped in a single-pane column so the result is always a group.
    pub fn build(
        mut host: H,
        anchor: SurfaceId,
        tree: &SplitNode,
        config: LayoutConfig,
    ) -> Result<Self, LayoutError> {
        if !host.contains(anchor) {
            return Err(LayoutError::InvalidMountTarget);
        }

        let root_surface = host.create_node(Some(anchor));
        host.set_style(root_surface, LayoutStyle::Width(Dimension::Percent(100.0)));
        host.set_style(root_surface, LayoutStyle::Height(Dimension::Percent(100.0)));

        let mut layout = SplitLayout {
            host,
            config,
            groups: SlotMap::with_key(),
            root_surface,
            root_group: GroupId::default(),
            leaves: Vec::new(),
            gutter_index: HashMap::new(),
            container_index: HashMap::new(),
            leaf_index: HashMap::new(),
            subscriptions: Vec::new(),
            drag: None,
            disposed: false,
        };

        let root_params = match tree {
            SplitNode::Split(params) => normalize(params, &layout.config),
            SplitNode::Leaf(tag) => NormalizedParams {
                direction: Direction::Column,
                sizes: vec![100.0],
                row_units: None,
                children: vec![SplitNode::Leaf(tag.clone())],
                gutter: layout.config.default_gutter,
                min_size: layout.config.default_min_size,
                height: None,
                interactive: false,
                auto_fit: false,
            },
        };
        layout.root_group = layout.build_group(root_surface, &root_params, Vec::new());
        Ok(layout)
    }

    /// Build one group into `container`, recursing into nested splits.
    /// Nested raw params are normalized here, just in time.
    fn build_group(
        &mut self,
        container: SurfaceId,
        params: &NormalizedParams,
        path: Vec<usize>,
    ) -> GroupId {
        if let Some(height) = params.height {
            self.host
                .set_style(container, LayoutStyle::Height(Dimension::Px(height)));
        }

        let basis = match &params.row_units {
            Some(units) => Basis::Units(units.clone()),
            None => Basis::Weights(params.sizes.clone()),
        };
        let group_id = self.groups.insert(PanelGroup {
            direction: params.direction,
            basis,
            gutter: params.gutter,
            min_size: params.min_size,
            interactive: params.interactive,
            container,
            panels: Vec::new(),
            gutters: Vec::new(),
            slots: Vec::new(),
        });
        self.container_index.insert(container, group_id);
        let sub = self.host.observe_box_size(container);
        self.subscriptions.push(sub);

        let axis = params.direction.axis();
        let count = params.children.len();
        for (i, child) in params.children.iter().enumerate() {
            let panel = self.host.create_node(Some(container));
            self.host.set_style(panel, cross_fill(axis));

            let mut child_path = path.clone();
            child_path.push(i);
            let slot = match child {
                SplitNode::Leaf(tag) => {
                    let content = self.host.create_node(Some(panel));
                    self.host
                        .set_style(content, LayoutStyle::Width(Dimension::Percent(100.0)));
                    self.host
                        .set_style(content, LayoutStyle::Height(Dimension::Percent(100.0)));

                    let auto_fit = params.auto_fit && params.row_units.is_some();
                    let index = self.leaves.len();
                    self.leaves.push(LeafSlot {
                        surface: content,
                        path: child_path,
                        category: tag.clone(),
                        group: group_id,
                        pane: i,
                        auto_fit,
                        relaxing: false,
                    });
                    self.leaf_index.insert(content, index);
                    if auto_fit {
                        let size_sub = self.host.observe_box_size(content);
                        let children_sub = self.host.observe_children(content);
                        self.subscriptions.push(size_sub);
                        self.subscriptions.push(children_sub);
                    }
                    PanelSlot::Leaf(index)
                }
                SplitNode::Split(raw) => {
                    let nested = normalize(raw, &self.config);
                    let child_container = self.host.create_node(Some(panel));
                    self.host.set_style(
                        child_container,
                        LayoutStyle::Width(Dimension::Percent(100.0)),
                    );
                    self.host.set_style(
                        child_container,
                        LayoutStyle::Height(Dimension::Percent(100.0)),
                    );
                    PanelSlot::Group(self.build_group(child_container, &nested, child_path))
                }
            };
            self.groups[group_id].panels.push(panel);
            self.groups[group_id].slots.push(slot);

            if i + 1 < count {
                let gutter = self.host.create_node(Some(container));
                self.host.set_style(gutter, cross_fill(axis));
                let gutter_index = self.groups[group_id].gutters.len();
                self.gutter_index.insert(gutter, (group_id, gutter_index));
                self.groups[group_id].gutters.push(gutter);
                if params.interactive {
                    let pointer_sub = self.host.observe_pointer(gutter);
                    self.subscriptions.push(pointer_sub);
                }
            }
        }

        self.relayout_group(group_id);
        group_id
    }
}

/// Panels and gutters fill the group's cross axis.
fn cross_fill(main_axis: Axis) -> LayoutStyle {
    match main_axis {
        Axis::Horizontal => LayoutStyle::Height(Dimension::Percent(100.0)),
        Axis::Vertical => LayoutStyle::Width(Dimension::Percent(100.0)),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHost;
    use crate::tree::SplitParams;

    fn build(tree: &SplitNode) -> SplitLayout<FakeHost> {
        let mut host = FakeHost::new();
        let anchor = host.add_root(200.0, 200.0);
        SplitLayout::build(host, anchor, tree, LayoutConfig::default()).unwrap()
    }

    // ── Mount target ─────────────────────────────────────────────────

    #[test]
    fn dead_anchor_is_rejected() {
        let mut host = FakeHost::new();
        let anchor = host.add_root(200.0, 200.0);
        host.remove_node(anchor);
        let result = SplitLayout::build(
            host,
            anchor,
            &SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]),
            LayoutConfig::default(),
        );
        assert!(matches!(result, Err(LayoutError::InvalidMountTarget)));
    }

    // ── Shape ────────────────────────────────────────────────────────

    #[test]
    fn leaves_come_out_depth_first() {
        let tree = SplitNode::row([
            SplitNode::leaf("left"),
            SplitNode::column([SplitNode::leaf("top"), SplitNode::leaf("bottom")]),
            SplitNode::leaf("right"),
        ]);
        let layout = build(&tree);
        let categories: Vec<&str> = layout
            .leaves()
            .iter()
            .map(|l| l.category.as_str())
            .collect();
        assert_eq!(categories, ["left", "top", "bottom", "right"]);

        let paths: Vec<&[usize]> = layout.leaves().iter().map(|l| l.path.as_slice()).collect();
        assert_eq!(
            paths,
            [&[0][..], &[1, 0][..], &[1, 1][..], &[2][..]]
        );
    }

    #[test]
    fn gutters_sit_between_adjacent_panes() {
        let tree = SplitNode::row([
            SplitNode::leaf("a"),
            SplitNode::leaf("b"),
            SplitNode::leaf("c"),
        ]);
        let layout = build(&tree);
        assert_eq!(layout.root_gutters().len(), 2);
    }

    #[test]
    fn bare_leaf_root_is_wrapped() {
        let layout = build(&SplitNode::leaf("solo"));
        assert_eq!(layout.leaves().len(), 1);
        assert_eq!(layout.leaves()[0].category, "solo");
        assert_eq!(layout.root_gutters().len(), 0);
    }

    #[test]
    fn expressions_pad_missing_children() {
        let tree = SplitParams::new(Direction::Row)
            .with_sizes("1fr 2fr 1fr")
            .with_children([SplitNode::leaf("named")])
            .into_node();
        let layout = build(&tree);
        assert_eq!(layout.leaves().len(), 3);
        assert_eq!(layout.leaves()[0].category, "named");
        assert_eq!(layout.leaves()[1].category, "leaf");
    }

    // ── Geometry ─────────────────────────────────────────────────────

    #[test]
    fn weighted_row_positions_panes_and_gutter() {
        // 200px container, one 4px gutter: 196px inner, split 50/50.
        let tree = SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]);
        let layout = build(&tree);
        let group = &layout.groups[layout.root_group];

        let host = layout.host();
        assert_eq!(host.last_width(group.panels[0]), Some(98.0));
        assert_eq!(host.last_offset(group.panels[1]), Some((102.0, 0.0)));
        assert_eq!(host.last_offset(group.gutters[0]), Some((98.0, 0.0)));
        assert_eq!(host.last_width(group.gutters[0]), Some(4.0));
    }

    #[test]
    fn unit_column_fixes_row_heights_and_container() {
        // Rows of 2, 1, 1 units at unit_px 20, gutter 4:
        // heights 40/20/20, container 80 + 2*4 = 88.
        let tree = SplitParams::new(Direction::Column)
            .with_row_units("2 1 1")
            .into_node();
        let layout = build(&tree);
        let group = &layout.groups[layout.root_group];

        let host = layout.host();
        assert_eq!(host.last_height(group.panels[0]), Some(40.0));
        assert_eq!(host.last_height(group.panels[1]), Some(20.0));
        assert_eq!(host.last_height(group.panels[2]), Some(20.0));
        assert_eq!(host.last_height(group.container), Some(88.0));
        assert_eq!(host.last_offset(group.panels[1]), Some((0.0, 44.0)));
    }

    // ── Subscriptions ────────────────────────────────────────────────

    #[test]
    fn interactive_gutters_take_pointer_subscriptions() {
        let interactive = build(&SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]));
        let passive = {
            let tree = SplitParams::new(Direction::Row)
                .with_children([SplitNode::leaf("a"), SplitNode::leaf("b")])
                .interactive(false)
                .into_node();
            build(&tree)
        };
        assert_eq!(
            interactive.host().subscribe_calls(),
            passive.host().subscribe_calls() + 1
        );
    }

    #[test]
    fn auto_fit_leaves_observe_content() {
        let fitted = build(
            &SplitParams::new(Direction::Column)
                .with_row_units("1 1")
                .into_node(),
        );
        let plain = build(
            &SplitParams::new(Direction::Column)
                .with_row_units("1 1")
                .auto_fit(false)
                .into_node(),
        );
        // Two leaves, two extra subscriptions each (box size + children).
        assert_eq!(
            fitted.host().subscribe_calls(),
            plain.host().subscribe_calls() + 4
        );
    }
}
