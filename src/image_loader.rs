use crate::error::{LoadError, Result};
use image::ImageReader;
use log::debug;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// A fully decoded image, detached from the file it came from.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row major, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Load an image from a file path and decode it into memory.
///
/// The whole file is read before decoding starts, so the handle is closed
/// by the time this returns whether or not decoding succeeds.
pub fn load_image_blocking(path: &Path) -> Result<DecodedImage> {
    if path.as_os_str().is_empty() {
        return Err(LoadError::EmptyPath);
    }

    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?
        .to_rgba8();

    let (width, height) = image.dimensions();
    Ok(DecodedImage {
        path: path.to_path_buf(),
        width,
        height,
        pixels: image.into_raw(),
    })
}

/// Convert decoded pixels into a Slint image, consuming the buffer.
pub fn create_slint_image(image: DecodedImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&image.pixels, image.width, image.height);
    Image::from_rgba8(buffer)
}
