//! Event handlers for UI callbacks.
//!
//! Registers the Logic callbacks: opening a file, closing the window and
//! the pointer events that drag the window around.

use crate::state::{AppState, PointerButton};
use crate::ui::window_drag;
use log::{debug, error, warn};
use slint::ComponentHandle;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) {
    let logic = ui.global::<crate::Logic>();

    // Open handler: dialog, decode and swap all happen before this returns.
    logic.on_open_file({
        let opener = state.opener.clone();
        move || {
            let Ok(mut opener) = opener.try_borrow_mut() else {
                warn!("Open request ignored, another one is still in progress");
                return;
            };
            let outcome = opener.open_with_picker();
            debug!(
                "Open finished with {:?}, showing {:?}",
                outcome,
                opener.current().map(|shown| &shown.path)
            );
        }
    });

    logic.on_close_window(|| {
        if let Err(e) = slint::quit_event_loop() {
            error!("Failed to quit event loop: {}", e);
        }
    });

    logic.on_pointer_pressed({
        let ui_handle = ui.as_weak();
        let drag = state.drag.clone();
        move |button, x, y| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let button = PointerButton::from(button);
            if button == PointerButton::Primary && window_drag::begin_native_drag(ui.window()) {
                return;
            }
            let pointer = window_drag::to_physical(ui.window(), x, y);
            drag.borrow_mut().press(button, pointer);
        }
    });

    logic.on_pointer_moved({
        let ui_handle = ui.as_weak();
        let drag = state.drag.clone();
        move |x, y| {
            if !drag.borrow().is_dragging() {
                return;
            }
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let window = ui.window();
            let pointer = window_drag::to_physical(window, x, y);
            if let Some(next) = drag.borrow().motion(window.position(), pointer) {
                window.set_position(next);
            }
        }
    });

    logic.on_pointer_released({
        let drag = state.drag.clone();
        move || drag.borrow_mut().release()
    });
}
