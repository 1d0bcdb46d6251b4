//! Regression test parameters and operations

use crate::regout_dir;
use paintfill_core::PixelBuffer;
use std::fs;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current index
/// and success status.
pub struct RegParams {
    /// Name of the test (e.g., "floodfill")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Also creates the regout directory that tests write scratch files to.
    pub fn new(test_name: &str) -> Self {
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if `|expected - actual| <= delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two pixel buffers for exact equality
    ///
    /// On mismatch the first differing pixel is reported.
    pub fn compare_buffers(&mut self, buf1: &PixelBuffer, buf2: &PixelBuffer) -> bool {
        self.index += 1;

        if buf1.width() != buf2.width() || buf1.height() != buf2.height() {
            self.fail(format!(
                "Failure in {}_reg: buffer comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                buf1.width(),
                buf1.height(),
                buf2.width(),
                buf2.height()
            ));
            return false;
        }

        let mismatch = buf1
            .pixels()
            .zip(buf2.as_slice())
            .find(|((_, _, c1), c2)| c1 != *c2);
        if let Some(((x, y, c1), c2)) = mismatch {
            self.fail(format!(
                "Failure in {}_reg: buffer comparison for index {} - pixel mismatch at ({}, {}): \
                 {} vs {}",
                self.test_name, self.index, x, y, c1, c2
            ));
            return false;
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintfill_core::Rgba;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_buffers_reports_first_mismatch() {
        let mut rp = RegParams::new("test");
        let a = PixelBuffer::new(3, 2, Rgba::WHITE).unwrap();
        let mut b = a.clone();
        assert!(rp.compare_buffers(&a, &b));

        b.set_pixel(2, 1, Rgba::BLACK).unwrap();
        assert!(!rp.compare_buffers(&a, &b));
        assert!(rp.failures()[0].contains("(2, 1)"));

        let c = PixelBuffer::new(2, 3, Rgba::WHITE).unwrap();
        assert!(!rp.compare_buffers(&a, &c));
    }
}
