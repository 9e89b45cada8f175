//! Moving the frameless window with the mouse.

use crate::state::PointerButton;
use i_slint_backend_winit::WinitWindowAccessor;
use log::debug;
use slint::PhysicalPosition;

impl From<crate::MouseButton> for PointerButton {
    fn from(button: crate::MouseButton) -> Self {
        match button {
            crate::MouseButton::Primary => PointerButton::Primary,
            crate::MouseButton::Secondary => PointerButton::Secondary,
            crate::MouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

/// Hands the move over to the platform's own interactive drag.
///
/// Returns `false` when the backend is not winit or the platform refuses,
/// in which case the caller tracks the pointer itself.
pub fn begin_native_drag(window: &slint::Window) -> bool {
    match window.with_winit_window(|winit_window| winit_window.drag_window()) {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            debug!("Native window drag unavailable: {}", e);
            false
        }
        None => false,
    }
}

/// Converts a logical pointer position inside the window to physical pixels.
pub fn to_physical(window: &slint::Window, x: f32, y: f32) -> PhysicalPosition {
    let scale = window.scale_factor();
    PhysicalPosition::new((x * scale).round() as i32, (y * scale).round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_left_maps_to_primary() {
        assert_eq!(PointerButton::from(crate::MouseButton::Primary), PointerButton::Primary);
        assert_eq!(PointerButton::from(crate::MouseButton::Secondary), PointerButton::Secondary);
        assert_eq!(PointerButton::from(crate::MouseButton::Middle), PointerButton::Middle);
        assert_eq!(PointerButton::from(crate::MouseButton::Other), PointerButton::Other);
    }
}
