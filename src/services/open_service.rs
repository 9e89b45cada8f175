//! Service for picking, decoding and displaying a single image.

use crate::config::LOAD_ERROR_PREFIX;
use crate::file_picker::{FilePicker, PickOutcome};
use crate::image_loader::{self, DecodedImage};
use crate::state::{DisplaySlot, ShownImage};
use log::{error, info};
use std::path::Path;

/// Puts a decoded image on screen.
pub trait Presenter {
    /// Takes ownership of the pixels; the previous image is released.
    fn present(&mut self, image: DecodedImage);
}

/// Tells the user something went wrong and waits for acknowledgement.
pub trait Notifier {
    fn notify_error(&self, message: &str);
}

/// What an open request ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Displayed(ShownImage),
    /// Loading failed; carries the notification text shown to the user.
    Failed(String),
    Cancelled,
}

/// Owns the display slot and the seams needed to fill it.
pub struct OpenImageService<F, N, P> {
    picker: F,
    notifier: N,
    presenter: P,
    slot: DisplaySlot,
}

impl<F, N, P> OpenImageService<F, N, P>
where
    F: FilePicker,
    N: Notifier,
    P: Presenter,
{
    /// Creates a service with an empty display slot.
    pub fn new(picker: F, notifier: N, presenter: P) -> Self {
        Self {
            picker,
            notifier,
            presenter,
            slot: DisplaySlot::new(),
        }
    }

    /// Asks the user for a file and loads it.
    ///
    /// Cancelling the dialog changes nothing and shows nothing.
    pub fn open_with_picker(&mut self) -> OpenOutcome {
        match self.picker.pick_image() {
            PickOutcome::Picked(path) => self.load_path(&path),
            PickOutcome::Cancelled => {
                info!("File selection cancelled");
                OpenOutcome::Cancelled
            }
        }
    }

    /// Decodes `path` and swaps it onto the screen.
    ///
    /// On failure the current image stays and exactly one notification is
    /// shown.
    pub fn load_path(&mut self, path: &Path) -> OpenOutcome {
        match image_loader::load_image_blocking(path) {
            Ok(image) => {
                let shown = ShownImage::from(&image);
                info!(
                    "Displaying {} ({}x{})",
                    shown.path.display(),
                    shown.width,
                    shown.height
                );
                self.presenter.present(image);
                self.slot.replace(shown.clone());
                OpenOutcome::Displayed(shown)
            }
            Err(e) => {
                let message = format!("{}: {}", LOAD_ERROR_PREFIX, e);
                error!("{} ({})", message, path.display());
                self.notifier.notify_error(&message);
                OpenOutcome::Failed(message)
            }
        }
    }

    /// The image currently on screen.
    pub fn current(&self) -> Option<&ShownImage> {
        self.slot.current()
    }
}
