//! Snapshot helpers.
//!
//! [`layout_to_string`] renders a realized layout's structure and live basis
//! values as indented plain text, suitable for inline snapshot assertions.

use crate::host::HostSurface;
use crate::layout::{Basis, GroupId, PanelSlot, SplitLayout};
use crate::tree::Direction;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a layout's group tree as plain text.
///
/// One line per group or leaf, two-space indentation per depth level, no
/// trailing newline. Basis values are live, so a snapshot taken after a drag
/// reflects the dragged weights.
///
/// ```text
/// column units=[2, 1] gutter=4
///   leaf path=[0] category=audio
///   leaf path=[1] category=leaf
/// ```
pub fn layout_to_string<H: HostSurface>(layout: &SplitLayout<H>) -> String {
    let mut lines = Vec::new();
    write_group(layout, layout.root_group, 0, &mut lines);
    lines.join("\n")
}

fn write_group<H: HostSurface>(
    layout: &SplitLayout<H>,
    group_id: GroupId,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let group = &layout.groups[group_id];
    let direction = match group.direction {
        Direction::Row => "row",
        Direction::Column => "column",
    };
    let basis = match &group.basis {
        Basis::Weights(weights) => format!("weights={weights:?}"),
        Basis::Units(units) => format!("units={units:?}"),
    };
    lines.push(format!(
        "{}{direction} {basis} gutter={}",
        "  ".repeat(depth),
        group.gutter
    ));
    for slot in &group.slots {
        match slot {
            PanelSlot::Leaf(index) => {
                let leaf = &layout.leaves[*index];
                lines.push(format!(
                    "{}leaf path={:?} category={}",
                    "  ".repeat(depth + 1),
                    leaf.path,
                    leaf.category
                ));
            }
            PanelSlot::Group(nested) => write_group(layout, *nested, depth + 1, lines),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
