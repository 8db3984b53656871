use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::ImageFormat;
use std::io;
use std::path::Path;

/// RGBA PNG writer backed by the `image` crate.
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let image = buffer.to_rgba_image().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "pixel buffer does not match its dimensions",
            )
        })?;

        image
            .save_with_format(filepath, ImageFormat::Png)
            .map_err(io::Error::other)
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
