//! paintfill-io - Image I/O for paintfill
//!
//! Rasterizes PNG files into [`PixelBuffer`]s and writes filled buffers
//! back out. Use [`read_png`] / [`write_png`] for in-memory streams and
//! [`read_image`] / [`write_image`] for files.

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use self::png::{read_png, write_png};

use paintfill_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

fn check_extension(path: &Path) -> IoResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(()),
        _ => Err(IoError::UnsupportedFormat(format!(
            "{}: only PNG files are supported",
            path.display()
        ))),
    }
}

/// Read an image from a file path
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] unless the path ends in `.png`.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    check_extension(path)?;
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write an image to a file path as 8-bit RGBA PNG
pub fn write_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> IoResult<()> {
    let path = path.as_ref();
    check_extension(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_png(buffer, &mut writer)?;
    writer.flush()?;
    Ok(())
}
