//! Pointer-driven window moves for the frameless window.
//!
//! Used when the platform cannot run its own interactive move. Pointer
//! positions are relative to the window, window positions are in screen
//! coordinates, both in physical pixels.

use log::debug;
use slint::PhysicalPosition;

/// Mouse buttons as far as dragging is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Tracks the grab point of an ongoing drag.
#[derive(Debug, Default)]
pub struct DragState {
    grab: Option<PhysicalPosition>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag if `button` is the primary button.
    ///
    /// Returns whether a drag is now in progress.
    pub fn press(&mut self, button: PointerButton, pointer: PhysicalPosition) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        debug!("Drag started at ({}, {})", pointer.x, pointer.y);
        self.grab = Some(pointer);
        true
    }

    /// Computes where the window has to go so the grab point stays under
    /// the pointer. `None` when no drag is active or nothing has to move.
    pub fn motion(
        &self,
        window: PhysicalPosition,
        pointer: PhysicalPosition,
    ) -> Option<PhysicalPosition> {
        let grab = self.grab?;
        let (dx, dy) = (pointer.x - grab.x, pointer.y - grab.y);
        if dx == 0 && dy == 0 {
            return None;
        }
        Some(PhysicalPosition::new(window.x + dx, window.y + dy))
    }

    /// Ends the drag; the window stays where it is.
    pub fn release(&mut self) {
        if self.grab.take().is_some() {
            debug!("Drag finished");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> PhysicalPosition {
        PhysicalPosition::new(x, y)
    }

    #[test]
    fn primary_drag_moves_window_by_pointer_delta() {
        let mut drag = DragState::new();
        let origin = pos(300, 200);

        assert!(drag.press(PointerButton::Primary, pos(100, 50)));
        // The pointer moved by (40, -30) on screen while the window stayed put.
        let moved = drag.motion(origin, pos(140, 20)).unwrap();
        drag.release();

        assert_eq!(moved, pos(340, 170));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn incremental_motion_accumulates() {
        let mut drag = DragState::new();
        let mut window = pos(0, 0);
        drag.press(PointerButton::Primary, pos(10, 10));

        // Each step the pointer runs 5px ahead of the grab point, then the
        // window catches up and the pointer is back over the grab point.
        for _ in 0..4 {
            window = drag.motion(window, pos(15, 10)).unwrap();
            assert_eq!(drag.motion(window, pos(10, 10)), None);
        }
        drag.release();

        assert_eq!(window, pos(20, 0));
    }

    #[test]
    fn other_buttons_do_not_start_a_drag() {
        let mut drag = DragState::new();

        for button in [PointerButton::Secondary, PointerButton::Middle, PointerButton::Other] {
            assert!(!drag.press(button, pos(5, 5)));
            assert_eq!(drag.motion(pos(0, 0), pos(50, 50)), None);
        }
        assert!(!drag.is_dragging());
    }

    #[test]
    fn motion_after_release_is_ignored() {
        let mut drag = DragState::new();
        drag.press(PointerButton::Primary, pos(1, 1));
        drag.release();

        assert_eq!(drag.motion(pos(0, 0), pos(9, 9)), None);
    }
}
