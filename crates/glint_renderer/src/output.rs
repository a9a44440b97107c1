//! Writing rendered images to disk.
//!
//! Colors are clamped to [0, 1] and scaled to bytes without gamma
//! correction. `.ppm` paths get a binary P6 file; any other extension is
//! handed to the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ImageBuffer;
use glint_math::{Color, Interval};
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer holds {len} bytes, expected {width}x{height}x3")]
    BufferSize { width: u32, height: u32, len: usize },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Clamp every channel to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = clamp_color(color);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}

impl ImageBuffer {
    /// Convert to RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Write the image as binary PPM: `P6`, size, max value, then RGB triples.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()?;
    Ok(())
}

/// Save the image, choosing the format from the file extension.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("ppm"))
        .unwrap_or(false);

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        let bytes = image.to_rgb8();
        let len = bytes.len();
        let buffer = image::RgbImage::from_raw(image.width, image.height, bytes).ok_or(
            OutputError::BufferSize {
                width: image.width,
                height: image.height,
                len,
            },
        )?;
        buffer.save(path)?;
    }

    log::info!("Saved {}x{} image to {:?}", image.width, image.height, path);
    Ok(())
}
