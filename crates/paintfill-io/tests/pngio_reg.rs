//! PNG I/O regression test
//!
//! Tests lossless read/write of RGBA buffers and rasterization of the
//! other PNG color types.
//!
//! Run with:
//! ```text
//! cargo test -p paintfill-io --test pngio_reg
//! ```

use paintfill_core::{PixelBuffer, Rgba};
use paintfill_io::{IoError, read_image, read_png, write_image, write_png};
use paintfill_test::{RegParams, load_test_image, regout_dir};
use png::{BitDepth, ColorType, Encoder};
use std::fs;
use std::io::Cursor;

fn make_pattern(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h, Rgba::TRANSPARENT).unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = x.wrapping_mul(31) ^ y.wrapping_mul(17);
            buf.set_pixel_unchecked(
                x,
                y,
                Rgba::new(v as u8, (v >> 3) as u8, (x * 8) as u8, (255 - y) as u8),
            );
        }
    }
    buf
}

fn encode_with(
    w: u32,
    h: u32,
    color: ColorType,
    depth: BitDepth,
    palette: Option<Vec<u8>>,
    trns: Option<Vec<u8>>,
    data: &[u8],
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, w, h);
        encoder.set_color(color);
        encoder.set_depth(depth);
        if let Some(p) = palette {
            encoder.set_palette(p);
        }
        if let Some(t) = trns {
            encoder.set_trns(t);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    out
}

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");

    // Test 1: RGBA buffer survives an in-memory round trip
    let pattern = make_pattern(37, 23);
    let mut bytes = Vec::new();
    write_png(&pattern, &mut bytes).unwrap();
    let back = read_png(Cursor::new(bytes)).unwrap();
    rp.compare_buffers(&pattern, &back);

    // Test 2: ... and a round trip through the file system
    let path = format!("{}/pngio_pattern.png", outdir);
    write_image(&pattern, &path).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_buffers(&pattern, &back);

    // Test 3: 1-bit indexed image with a transparent palette entry
    let palette = vec![255, 255, 255, 0, 0, 0];
    let png = encode_with(
        8,
        1,
        ColorType::Indexed,
        BitDepth::One,
        Some(palette),
        Some(vec![0]),
        &[0b0101_0101],
    );
    let buf = read_png(Cursor::new(png)).unwrap();
    rp.compare_values(8.0, buf.width() as f64, 0.0);
    rp.compare_values(
        1.0,
        (buf.get_pixel(0, 0) == Some(Rgba::new(255, 255, 255, 0))) as u8 as f64,
        0.0,
    );
    rp.compare_values(1.0, (buf.get_pixel(1, 0) == Some(Rgba::BLACK)) as u8 as f64, 0.0);
    rp.compare_values(4.0, buf.count_matching(Rgba::BLACK) as f64, 0.0);

    // Test 4: gray + alpha
    let png = encode_with(
        2,
        1,
        ColorType::GrayscaleAlpha,
        BitDepth::Eight,
        None,
        None,
        &[10, 255, 200, 40],
    );
    let buf = read_png(Cursor::new(png)).unwrap();
    let expected = PixelBuffer::from_pixels(
        2,
        1,
        vec![Rgba::new(10, 10, 10, 255), Rgba::new(200, 200, 200, 40)],
    )
    .unwrap();
    rp.compare_buffers(&expected, &buf);

    // Test 5: 4-bit gray is scaled to the full 8-bit range
    let png = encode_with(2, 1, ColorType::Grayscale, BitDepth::Four, None, None, &[0x0f]);
    let buf = read_png(Cursor::new(png)).unwrap();
    rp.compare_values(1.0, (buf.get_pixel(0, 0) == Some(Rgba::BLACK)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (buf.get_pixel(1, 0) == Some(Rgba::WHITE)) as u8 as f64, 0.0);

    // Test 6: the checked-in fixture decodes to opaque RGBA
    let shapes = load_test_image("shapes.png").unwrap();
    rp.compare_values(40.0, shapes.width() as f64, 0.0);
    rp.compare_values(30.0, shapes.height() as f64, 0.0);
    rp.compare_values(
        1.0,
        shapes.as_slice().iter().all(|c| c.alpha() == 255) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup());
}

#[test]
fn pngio_rejects_other_formats() {
    let buf = PixelBuffer::new(2, 2, Rgba::WHITE).unwrap();
    let path = format!("{}/pngio_reject.jpg", regout_dir());
    assert!(matches!(
        write_image(&buf, &path),
        Err(IoError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        read_image("missing.bmp"),
        Err(IoError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        read_image(format!("{}/does_not_exist.png", regout_dir())),
        Err(IoError::Io(_))
    ));
}
