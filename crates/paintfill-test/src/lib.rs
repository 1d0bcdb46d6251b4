//! paintfill-test - Regression test framework for paintfill
//!
//! Tracks numbered value and buffer checks over one regression run and
//! reports every failure at cleanup.
//!
//! # Usage
//!
//! ```ignore
//! use paintfill_test::RegParams;
//!
//! let mut rp = RegParams::new("floodfill");
//! rp.compare_values(48.0, outcome.pixels_filled() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

/// Load a test image from the test data directory
pub fn load_test_image(name: &str) -> TestResult<paintfill_core::PixelBuffer> {
    let path = test_data_path(name);
    paintfill_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // paintfill-test is at crates/paintfill-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
