//! PNG format support.
//!
//! Reads 8-bit grayscale, grayscale+alpha, RGB, and RGBA PNGs, normalizing
//! everything to RGBA8. Writes 8-bit RGBA.
//!
//! # Example
//!
//! ```rust,ignore
//! use cvd_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use cvd_core::{ImageBuf, Rgba8};

use crate::{IoError, IoResult};

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuf> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::Decode(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::Decode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let pixels: Vec<Rgba8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => data
            .chunks_exact(4)
            .map(|p| Rgba8::new(p[0], p[1], p[2], p[3]))
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => data
            .chunks_exact(3)
            .map(|p| Rgba8::opaque(p[0], p[1], p[2]))
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            data.iter().map(|&v| Rgba8::opaque(v, v, v)).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => data
            .chunks_exact(2)
            .map(|p| Rgba8::new(p[0], p[0], p[0], p[1]))
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "{color_type:?} {bit_depth:?}"
            )));
        }
    };

    ImageBuf::from_pixels(info.width, info.height, pixels)
        .map_err(|e| IoError::Decode(e.to_string()))
}

/// Writes an image to a PNG file as 8-bit RGBA.
///
/// The target file is created or truncated.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuf) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(e.to_string()))?;

    let bytes: Vec<u8> = image
        .pixels()
        .iter()
        .flat_map(|p| [p.r, p.g, p.b, p.a])
        .collect();
    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::Encode(e.to_string()))?;

    Ok(())
}
