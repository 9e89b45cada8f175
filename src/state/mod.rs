//! State management for the image viewer application.

use crate::file_picker::NativeFilePicker;
use crate::services::OpenImageService;
use crate::ui::{MessageDialogNotifier, SlintPresenter};
use std::cell::RefCell;
use std::rc::Rc;

pub mod display_slot;
pub mod drag;

pub use display_slot::{DisplaySlot, ShownImage};
pub use drag::{DragState, PointerButton};

/// The open service as wired up for the real window.
pub type AppOpenService = OpenImageService<NativeFilePicker, MessageDialogNotifier, SlintPresenter>;

/// Application-wide state container.
///
/// Everything runs on the UI thread, so the callbacks share it through
/// `Rc<RefCell<_>>`.
#[derive(Clone)]
pub struct AppState {
    pub opener: Rc<RefCell<AppOpenService>>,
    pub drag: Rc<RefCell<DragState>>,
}

impl AppState {
    pub fn new(presenter: SlintPresenter) -> Self {
        Self {
            opener: Rc::new(RefCell::new(OpenImageService::new(
                NativeFilePicker,
                MessageDialogNotifier,
                presenter,
            ))),
            drag: Rc::new(RefCell::new(DragState::new())),
        }
    }
}
