//! Split-tree node types: Direction, SplitNode, SplitParams.
//!
//! A [`SplitNode`] is a tagged union: either a leaf tag (an opaque category
//! string the caller mounts content into) or an internal split carrying raw,
//! mostly-optional parameters. Raw parameters stay loose on purpose — every
//! hole is filled by [`normalize`](crate::tree::normalize::normalize).

use crate::expr::SizeExpression;
use crate::geometry::Axis;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Split direction of an internal node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Children side by side, left to right.
    #[default]
    Row,
    /// Children stacked, top to bottom.
    Column,
}

impl Direction {
    /// The axis panels are laid out along — and drags are measured along.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Row => Axis::Horizontal,
            Direction::Column => Axis::Vertical,
        }
    }
}

// ---------------------------------------------------------------------------
// SplitNode
// ---------------------------------------------------------------------------

/// One node of the declarative split tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitNode {
    /// A mountable slot tagged with its semantic category (e.g. `"audio"`).
    Leaf(String),
    /// An internal row/column split.
    Split(SplitParams),
}

impl SplitNode {
    /// Create a leaf with the given category tag.
    pub fn leaf(tag: impl Into<String>) -> Self {
        SplitNode::Leaf(tag.into())
    }

    /// Create a row split over the given children.
    pub fn row(children: impl IntoIterator<Item = SplitNode>) -> Self {
        SplitNode::Split(SplitParams::new(Direction::Row).with_children(children))
    }

    /// Create a column split over the given children.
    pub fn column(children: impl IntoIterator<Item = SplitNode>) -> Self {
        SplitNode::Split(SplitParams::new(Direction::Column).with_children(children))
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, SplitNode::Leaf(_))
    }

    /// Borrow the split parameters, if this is an internal node.
    pub fn as_split(&self) -> Option<&SplitParams> {
        match self {
            SplitNode::Split(params) => Some(params),
            SplitNode::Leaf(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SplitParams
// ---------------------------------------------------------------------------

/// Raw parameters of an internal split node, before normalization.
///
/// Every optional field has a documented default; see
/// [`normalize`](crate::tree::normalize::normalize).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitParams {
    /// Row or column.
    pub direction: Direction,
    /// Pane sizes as a size expression. Missing means equal split.
    pub sizes: Option<SizeExpression>,
    /// Row heights in layout units. Only meaningful for column splits.
    pub row_units: Option<SizeExpression>,
    /// Child nodes. Padded with default leaves up to the implied count.
    pub children: Vec<SplitNode>,
    /// Gutter size in pixels between adjacent panes.
    pub gutter: Option<f64>,
    /// Generic alias for `gutter`; `gutter` wins when both are set.
    pub gap: Option<f64>,
    /// Minimum pane percentage during a drag.
    pub min_size: Option<f64>,
    /// Explicit total height in pixels for this split's container.
    pub height: Option<f64>,
    /// Whether gutters between panes are draggable. Defaults to true.
    pub interactive: Option<bool>,
    /// Whether unit rows track their content height. Defaults to true when
    /// `row_units` is present.
    pub auto_fit: Option<bool>,
}

impl SplitParams {
    /// Create raw params with the given direction and no children.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Set the pane size expression (builder).
    pub fn with_sizes(mut self, sizes: impl Into<SizeExpression>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    /// Set the row-unit expression (builder).
    pub fn with_row_units(mut self, units: impl Into<SizeExpression>) -> Self {
        self.row_units = Some(units.into());
        self
    }

    /// Set the children (builder).
    pub fn with_children(mut self, children: impl IntoIterator<Item = SplitNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Append a child (builder).
    pub fn push_child(mut self, child: SplitNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the gutter size in pixels (builder).
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = Some(gutter);
        self
    }

    /// Set the gap alias (builder).
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set the minimum pane percentage (builder).
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    /// Set an explicit container height in pixels (builder).
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set whether gutters are draggable (builder).
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }

    /// Set whether unit rows auto-fit their content (builder).
    pub fn auto_fit(mut self, auto_fit: bool) -> Self {
        self.auto_fit = Some(auto_fit);
        self
    }

    /// Wrap into a [`SplitNode`].
    pub fn into_node(self) -> SplitNode {
        SplitNode::Split(self)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
