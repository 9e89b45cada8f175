//! UI module for handling user interactions and UI updates.
//!
//! Threading model: everything runs on the Slint event loop thread. The file
//! dialog, decoding and the message box block it until they finish.

pub mod handlers;
pub mod image_display;
pub mod notification;
pub mod window_drag;

pub use handlers::setup_handlers;
pub use image_display::{SlintPresenter, init_view_state};
pub use notification::MessageDialogNotifier;
