//! Pointer events, decoupled from any concrete input backend.
//!
//! The engine consumes [`PointerEvent`]s; where they come from is the host's
//! business. A conversion from crossterm mouse events is provided for
//! terminal hosts.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// PointerPhase
// ---------------------------------------------------------------------------

/// Phase of a pointer gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Primary button pressed.
    Down,
    /// Pointer moved (pressed or not).
    Move,
    /// Primary button released.
    Up,
}

// ---------------------------------------------------------------------------
// PointerEvent
// ---------------------------------------------------------------------------

/// A pointer event in host pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Down, move, or up.
    pub phase: PointerPhase,
    /// Horizontal position in pixels.
    pub x: f64,
    /// Vertical position in pixels.
    pub y: f64,
}

impl PointerEvent {
    /// Create a pointer event.
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }

    /// The event position as a [`Point`].
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Convert a crossterm mouse event into a pointer event, if it maps onto the
/// down/move/up vocabulary. Scroll and non-primary buttons yield `None`.
pub fn pointer_from_mouse(event: MouseEvent) -> Option<PointerEvent> {
    let phase = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerPhase::Down,
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerPhase::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerPhase::Up,
        _ => return None,
    };
    Some(PointerEvent::new(
        phase,
        f64::from(event.column),
        f64::from(event.row),
    ))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_button_maps_to_phases() {
        let down = pointer_from_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7));
        assert_eq!(down, Some(PointerEvent::new(PointerPhase::Down, 3.0, 7.0)));

        let drag = pointer_from_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 7));
        assert_eq!(drag.unwrap().phase, PointerPhase::Move);

        let up = pointer_from_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 4, 7));
        assert_eq!(up.unwrap().phase, PointerPhase::Up);
    }

    #[test]
    fn hover_maps_to_move() {
        let moved = pointer_from_mouse(mouse(MouseEventKind::Moved, 1, 2));
        assert_eq!(moved, Some(PointerEvent::new(PointerPhase::Move, 1.0, 2.0)));
    }

    #[test]
    fn scroll_and_secondary_buttons_ignored() {
        assert!(pointer_from_mouse(mouse(MouseEventKind::ScrollDown, 0, 0)).is_none());
        assert!(pointer_from_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)).is_none());
        assert!(pointer_from_mouse(mouse(MouseEventKind::Up(MouseButton::Middle), 0, 0)).is_none());
    }

    #[test]
    fn position_helper() {
        let event = PointerEvent::new(PointerPhase::Down, 10.0, 20.0);
        assert_eq!(event.position(), Point::new(10.0, 20.0));
    }
}
