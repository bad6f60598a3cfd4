//! Shared test helpers compiled into every integration-test binary.
//! Items may not all be used in every binary, so dead_code is suppressed.
#![allow(dead_code)]

use radix_fft::{Complex64, PlotSink, Series};

/// Maximum absolute error tolerated between f64 transform results and analytical values.
pub const EPSILON: f64 = 1e-9;

pub fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

pub fn assert_approx(actual: Complex64, expected: Complex64, label: &str) {
    assert!(
        (actual - expected).norm() <= EPSILON,
        "{}: got {:.12}, expected {:.12}  (diff {:.2e})",
        label,
        actual,
        expected,
        (actual - expected).norm(),
    );
}

pub fn assert_slice_approx(actual: &[Complex64], expected: &[Complex64], label: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: length mismatch ({} vs {})",
        label,
        actual.len(),
        expected.len()
    );
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_approx(a, e, &format!("{label}[{i}]"));
    }
}

pub fn real(values: &[f64]) -> Vec<Complex64> {
    values.iter().map(|&v| c(v)).collect()
}

/// L2 distance between two equally long sequences.
pub fn l2_distance(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).norm_sqr())
        .sum::<f64>()
        .sqrt()
}

/// Owned copy of one plotted series.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub x: Vec<f64>,
    pub y: Vec<Complex64>,
    pub title: String,
    pub fraction: Option<f64>,
}

/// Sink that keeps everything it is asked to plot.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub series: Vec<Recorded>,
}

impl PlotSink for RecordingSink {
    fn plot(&mut self, series: &Series<'_>) {
        self.series.push(Recorded {
            x: series.x.to_vec(),
            y: series.y.to_vec(),
            title: series.title.to_string(),
            fraction: series.fraction,
        });
    }
}
