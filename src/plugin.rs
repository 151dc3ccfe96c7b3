//! Host-framework integration: the three entry points a surrounding UI
//! framework consumes to adopt the engine as a plugin.
//!
//! [`accept`] decides whether a declarative node belongs to this engine,
//! [`build_controller`] realizes it with a disposable view, and [`build_api`]
//! derives the public query object handed to application code.

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::host::{HostSurface, SurfaceId};
use crate::layout::SplitLayout;
use crate::tree::{normalize, NormalizedParams, SplitNode};

// ---------------------------------------------------------------------------
// accept
// ---------------------------------------------------------------------------

/// Normalize a node if this engine can realize it.
///
/// Leaves are not splittable on their own, so they yield `None` and the host
/// framework falls through to its next candidate.
pub fn accept(node: &SplitNode, config: &LayoutConfig) -> Option<NormalizedParams> {
    node.as_split().map(|params| normalize(params, config))
}

// ---------------------------------------------------------------------------
// SplitPaneController
// ---------------------------------------------------------------------------

/// A realized layout wrapped for host-framework ownership.
pub struct SplitPaneController<H: HostSurface> {
    layout: SplitLayout<H>,
}

/// Realize `tree` under `anchor` and wrap it in a controller.
pub fn build_controller<H: HostSurface>(
    host: H,
    anchor: SurfaceId,
    tree: &SplitNode,
    config: LayoutConfig,
) -> Result<SplitPaneController<H>, LayoutError> {
    Ok(SplitPaneController {
        layout: SplitLayout::build(host, anchor, tree, config)?,
    })
}

impl<H: HostSurface> SplitPaneController<H> {
    /// The controller's live view.
    pub fn view(&self) -> &SplitLayout<H> {
        &self.layout
    }

    /// Mutable access to the live view, for delivering events.
    pub fn view_mut(&mut self) -> &mut SplitLayout<H> {
        &mut self.layout
    }

    /// Tear the view down. Also happens when the controller drops.
    pub fn dispose(&mut self) {
        self.layout.dispose();
    }
}

// ---------------------------------------------------------------------------
// PanelsApi
// ---------------------------------------------------------------------------

/// The query object exposed to application code: category tags and the leaf
/// surfaces carrying them, captured at build time.
#[derive(Debug, Clone)]
pub struct PanelsApi {
    categories: Vec<String>,
    slots: HashMap<String, Vec<SurfaceId>>,
}

/// Derive the public API object from a controller.
pub fn build_api<H: HostSurface>(controller: &SplitPaneController<H>) -> PanelsApi {
    let view = controller.view();
    let categories = view.categories();
    let slots = categories
        .iter()
        .map(|tag| (tag.clone(), view.slots_by_category(tag)))
        .collect();
    PanelsApi { categories, slots }
}

impl PanelsApi {
    /// Distinct leaf categories in first-appearance order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Leaf surfaces tagged with `category`, depth first. Unknown tags yield
    /// an empty slice.
    pub fn slots(&self, category: &str) -> &[SurfaceId] {
        self.slots
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHost;
    use crate::tree::{Direction, SplitParams};

    #[test]
    fn accept_rejects_bare_leaves() {
        let config = LayoutConfig::default();
        assert!(accept(&SplitNode::leaf("solo"), &config).is_none());

        let split = SplitParams::new(Direction::Row).into_node();
        let normalized = accept(&split, &config).unwrap();
        assert_eq!(normalized.children.len(), 2);
    }

    #[test]
    fn controller_round_trip() {
        let mut host = FakeHost::new();
        let anchor = host.add_root(200.0, 200.0);
        let tree = SplitNode::row([
            SplitNode::leaf("audio"),
            SplitNode::leaf("video"),
            SplitNode::leaf("audio"),
        ]);
        let mut controller =
            build_controller(host, anchor, &tree, LayoutConfig::default()).unwrap();

        let api = build_api(&controller);
        assert_eq!(api.categories(), ["audio", "video"]);
        assert_eq!(api.slots("audio").len(), 2);
        assert_eq!(api.slots("video").len(), 1);
        assert!(api.slots("unknown").is_empty());

        controller.dispose();
        assert_eq!(controller.view().host().live_subscriptions(), 0);
    }

    #[test]
    fn controller_reports_bad_anchor() {
        let mut host = FakeHost::new();
        let anchor = host.add_root(10.0, 10.0);
        host.remove_node(anchor);
        let result = build_controller(
            host,
            anchor,
            &SplitNode::row([SplitNode::leaf("a"), SplitNode::leaf("b")]),
            LayoutConfig::default(),
        );
        assert!(matches!(result, Err(LayoutError::InvalidMountTarget)));
    }
}
