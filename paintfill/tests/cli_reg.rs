//! Command-line regression test
//!
//! Runs the `paintfill` binary on files written to the regout directory.

use paintfill::{PixelBuffer, Rgba};
use paintfill_test::{RegParams, regout_dir, test_data_path};
use std::process::Command;

fn paintfill() -> Command {
    Command::new(env!("CARGO_BIN_EXE_paintfill"))
}

#[test]
fn cli_reg() {
    let mut rp = RegParams::new("cli");
    let dir = regout_dir();

    // Test 1: fill inside the fixture's first box
    let output = format!("{}/cli_shapes_filled.png", dir);
    let status = paintfill()
        .arg(test_data_path("shapes.png"))
        .arg(&output)
        .args(["--x", "5", "--y", "5", "--color", "#00ff00"])
        .status()
        .expect("run paintfill");
    rp.compare_values(1.0, status.success() as u8 as f64, 0.0);
    let filled = paintfill::io::read_image(&output).expect("read output");
    rp.compare_values(196.0, filled.count_matching(Rgba::rgb(0, 255, 0)) as f64, 0.0);

    // Test 2: a seed on an outline still succeeds and copies the image
    let input = format!("{}/cli_outline.png", dir);
    let output = format!("{}/cli_outline_out.png", dir);
    let mut canvas = PixelBuffer::new(6, 6, Rgba::WHITE).unwrap();
    canvas.set_pixel(2, 2, Rgba::BLACK).unwrap();
    paintfill::io::write_image(&canvas, &input).unwrap();
    let status = paintfill()
        .args([&input, &output])
        .args(["--x", "2", "--y", "2"])
        .status()
        .expect("run paintfill");
    rp.compare_values(1.0, status.success() as u8 as f64, 0.0);
    rp.compare_buffers(&canvas, &paintfill::io::read_image(&output).unwrap());

    // Test 3: a seed outside the image fails
    let status = paintfill()
        .args([&input, &output])
        .args(["--x", "6", "--y", "0"])
        .status()
        .expect("run paintfill");
    rp.compare_values(1.0, status.code().map_or(0.0, f64::from), 0.0);

    // Test 4: unreadable input fails
    let status = paintfill()
        .args([format!("{}/cli_missing.png", dir), output])
        .args(["--x", "0", "--y", "0"])
        .status()
        .expect("run paintfill");
    rp.compare_values(0.0, status.success() as u8 as f64, 0.0);

    assert!(rp.cleanup());
}
