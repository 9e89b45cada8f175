//! The single on-screen image slot.

use crate::image_loader::DecodedImage;
use std::path::PathBuf;

/// What is currently on screen, without the pixels themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl From<&DecodedImage> for ShownImage {
    fn from(image: &DecodedImage) -> Self {
        Self {
            path: image.path.clone(),
            width: image.width,
            height: image.height,
        }
    }
}

impl ShownImage {
    /// File name suitable for a window title.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Holds at most one current image.
#[derive(Debug, Default)]
pub struct DisplaySlot {
    current: Option<ShownImage>,
}

impl DisplaySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the image currently on screen, if any.
    pub fn current(&self) -> Option<&ShownImage> {
        self.current.as_ref()
    }

    /// Puts a new image in the slot and hands back the one it supersedes.
    pub fn replace(&mut self, shown: ShownImage) -> Option<ShownImage> {
        self.current.replace(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(path: &str, width: u32, height: u32) -> ShownImage {
        ShownImage {
            path: PathBuf::from(path),
            width,
            height,
        }
    }

    #[test]
    fn starts_empty() {
        assert!(DisplaySlot::new().current().is_none());
    }

    #[test]
    fn replace_returns_previous() {
        let mut slot = DisplaySlot::new();

        assert_eq!(slot.replace(shown("/a.png", 1, 1)), None);
        assert_eq!(slot.replace(shown("/b.png", 2, 2)), Some(shown("/a.png", 1, 1)));
        assert_eq!(slot.current(), Some(&shown("/b.png", 2, 2)));
    }

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(shown("/photos/cat.jpg", 1, 1).file_name(), "cat.jpg");
    }
}
