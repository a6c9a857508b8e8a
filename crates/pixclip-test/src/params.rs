//! Regression test parameters and comparisons

use pixclip_core::{ImageBuffer, Plane};

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison, and every
/// recorded failure.
pub struct RegParams {
    /// Name of the test (e.g., "pixclip_plane")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
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

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta || diff.is_nan() {
            self.record(format!(
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

    /// Compare two planes sample by sample
    ///
    /// Returns `true` if the dimensions match and every pair of samples
    /// differs by at most `delta`.
    pub fn compare_planes(&mut self, expected: &Plane, actual: &Plane, delta: f32) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            self.record(format!(
                "Failure in {}_reg: plane comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            ));
            return false;
        }

        let width = expected.width() as usize;
        self.compare_samples(expected.data(), actual.data(), delta, |i| {
            format!("({}, {})", i % width, i / width)
        })
    }

    /// Compare two buffers sample by sample
    ///
    /// Returns `true` if the shapes match and every pair of samples differs
    /// by at most `delta`.
    pub fn compare_buffers(&mut self, expected: &ImageBuffer, actual: &ImageBuffer, delta: f32) -> bool {
        self.index += 1;

        if expected.shape() != actual.shape() {
            self.record(format!(
                "Failure in {}_reg: buffer comparison for index {} - shape mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.shape(),
                actual.shape()
            ));
            return false;
        }

        self.compare_samples(expected.data(), actual.data(), delta, |i| {
            format!("sample {}", i)
        })
    }

    fn compare_samples(
        &mut self,
        expected: &[f32],
        actual: &[f32],
        delta: f32,
        locate: impl Fn(usize) -> String,
    ) -> bool {
        let mismatch = expected
            .iter()
            .zip(actual)
            .position(|(&e, &a)| !((e - a).abs() <= delta || (e.is_nan() && a.is_nan())));

        match mismatch {
            Some(i) => {
                self.record(format!(
                    "Failure in {}_reg: comparison for index {} - mismatch at {}: expected {}, got {}",
                    self.test_name,
                    self.index,
                    locate(i),
                    expected[i],
                    actual[i]
                ));
                false
            }
            None => true,
        }
    }

    fn record(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
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

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
