//! PNG image format support
//!
//! Every PNG is rasterized to a flat 8-bit RGBA [`PixelBuffer`], whatever
//! its color type or bit depth. Output is always 8-bit RGBA.

use crate::{IoError, IoResult};
use paintfill_core::{PixelBuffer, Rgba};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palettes and sub-byte gray are expanded by the decoder, `tRNS` chunks
/// become an alpha channel and 16-bit samples are reduced to their high
/// byte. Images without alpha come back fully opaque.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let (color_type, bit_depth) = reader.output_color_type();

    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpanded PNG palette at {:?}",
                bit_depth
            )));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let stride = channels * bytes_per_sample;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            // big-endian samples: the high byte comes first
            let sample = |c: usize| row[x * stride + c * bytes_per_sample];
            let pixel = match channels {
                1 => Rgba::rgb(sample(0), sample(0), sample(0)),
                2 => Rgba::new(sample(0), sample(0), sample(0), sample(1)),
                3 => Rgba::rgb(sample(0), sample(1), sample(2)),
                _ => Rgba::new(sample(0), sample(1), sample(2), sample(3)),
            };
            pixels.push(pixel);
        }
    }

    Ok(PixelBuffer::from_pixels(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&buffer.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(width: u32, height: u32, color: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_png_roundtrip_rgba() {
        let mut buf = PixelBuffer::new(5, 4, Rgba::WHITE).unwrap();
        buf.set_pixel(0, 0, Rgba::rgb(255, 0, 0)).unwrap();
        buf.set_pixel(1, 1, Rgba::new(0, 255, 0, 128)).unwrap();
        buf.set_pixel(4, 3, Rgba::TRANSPARENT).unwrap();

        let mut bytes = Vec::new();
        write_png(&buf, &mut bytes).unwrap();
        let back = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(back, buf);
    }

    #[test]
    fn test_read_gray_is_opaque() {
        let png = encode(3, 1, ColorType::Grayscale, BitDepth::Eight, &[0, 128, 255]);
        let buf = read_png(Cursor::new(png)).unwrap();
        assert_eq!(buf.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(buf.get_pixel(1, 0), Some(Rgba::rgb(128, 128, 128)));
        assert_eq!(buf.get_pixel(2, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_read_rgb16_keeps_high_byte() {
        let data = [0x12, 0x34, 0xab, 0xcd, 0xff, 0x00];
        let png = encode(1, 1, ColorType::Rgb, BitDepth::Sixteen, &data);
        let buf = read_png(Cursor::new(png)).unwrap();
        assert_eq!(buf.get_pixel(0, 0), Some(Rgba::rgb(0x12, 0xab, 0xff)));
    }

    #[test]
    fn test_read_garbage_fails() {
        let result = read_png(Cursor::new(b"not a png".to_vec()));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
