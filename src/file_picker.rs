//! Native file selection.
//!
//! The picker only hands back a path; whether the file exists or decodes is
//! decided later by the image loader.

use crate::config::{
    ALL_FILES_FILTER_EXTENSIONS, ALL_FILES_FILTER_NAME, IMAGE_FILTER_EXTENSIONS,
    IMAGE_FILTER_NAME,
};
use log::debug;
use rfd::FileDialog;
use std::path::PathBuf;

/// Result of asking the user for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(PathBuf),
    Cancelled,
}

impl From<Option<PathBuf>> for PickOutcome {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => PickOutcome::Picked(path),
            None => PickOutcome::Cancelled,
        }
    }
}

/// Something that can ask the user to choose one image file.
pub trait FilePicker {
    /// Blocks until the user confirms a file or cancels.
    fn pick_image(&self) -> PickOutcome;
}

/// Named extension filters offered by the dialog, in display order.
pub fn file_filters() -> [(&'static str, &'static [&'static str]); 2] {
    [
        (IMAGE_FILTER_NAME, IMAGE_FILTER_EXTENSIONS),
        (ALL_FILES_FILTER_NAME, ALL_FILES_FILTER_EXTENSIONS),
    ]
}

/// Modal OS file dialog.
///
/// Runs synchronously on the calling thread, which must be the main thread
/// on macOS.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl FilePicker for NativeFilePicker {
    fn pick_image(&self) -> PickOutcome {
        let dialog = file_filters()
            .into_iter()
            .fold(FileDialog::new(), |dialog, (name, extensions)| {
                dialog.add_filter(name, extensions)
            });

        let outcome = PickOutcome::from(dialog.pick_file());
        debug!("File dialog closed: {:?}", outcome);
        outcome
    }
}
