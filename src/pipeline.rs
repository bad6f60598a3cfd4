//! Discretize → FFT → truncate → IFFT, and hand-off to a plotting sink.

use num_complex::Complex64;

use crate::discretize::{sample, sample_count};
use crate::error::{FftError, FftResult};
use crate::fft::fft;
use crate::ifft::ifft;
use crate::truncate::truncate;

/// Sampling interval and truncation fraction for one [`analyze`] run.
///
/// The defaults sample `[0, 10)` every `0.1` and keep the full spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Exclusive upper end of the sampling interval.
    pub to: f64,
    /// Distance between consecutive samples.
    pub step: f64,
    /// Share of high-index spectral bins to zero before inverting, in `[0, 1)`.
    pub fraction: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            to: 10.0,
            step: 0.1,
            fraction: 0.0,
        }
    }
}

impl AnalysisConfig {
    /// Sets the exclusive end of the sampling interval.
    #[must_use]
    pub fn with_to(mut self, to: f64) -> Self {
        self.to = to;
        self
    }

    /// Sets the distance between samples.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the share of high-index bins zeroed before inverting.
    #[must_use]
    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    /// Checks the interval, grid size and fraction without sampling anything.
    pub fn validate(&self) -> FftResult<()> {
        sample_count(self.to, self.step)?;
        if !(0.0..1.0).contains(&self.fraction) {
            return Err(FftError::InvalidFraction(self.fraction));
        }
        Ok(())
    }
}

/// One named series handed to a [`PlotSink`].
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    pub x: &'a [f64],
    pub y: &'a [Complex64],
    pub title: &'a str,
    /// Truncation fraction the series was reconstructed with, if any.
    pub fraction: Option<f64>,
}

/// Rendering collaborator. Nothing is read back from it.
pub trait PlotSink {
    fn plot(&mut self, series: &Series<'_>);
}

/// Everything produced by one [`analyze`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub x: Vec<f64>,
    /// `f(x)`, unpadded.
    pub samples: Vec<Complex64>,
    /// Forward transform of the zero-padded samples.
    pub spectrum: Vec<Complex64>,
    /// `spectrum` with the tail zeroed.
    pub truncated: Vec<Complex64>,
    /// Inverse transform of `truncated`, cut back to `x.len()` samples.
    pub reconstruction: Vec<Complex64>,
    pub fraction: f64,
}

impl Analysis {
    /// L2 distance between `samples` and `reconstruction`.
    #[must_use]
    pub fn reconstruction_error(&self) -> f64 {
        self.samples
            .iter()
            .zip(&self.reconstruction)
            .map(|(a, b)| (a - b).norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Sends `"original {title}"` and `"fourier-transformed {title}"` to `sink`.
    pub fn plot<S: PlotSink + ?Sized>(&self, sink: &mut S, title: &str) {
        sink.plot(&Series {
            x: &self.x,
            y: &self.samples,
            title: &format!("original {title}"),
            fraction: None,
        });
        sink.plot(&Series {
            x: &self.x,
            y: &self.reconstruction,
            title: &format!("fourier-transformed {title}"),
            fraction: Some(self.fraction),
        });
    }
}

/// Samples `f` per `config`, transforms, truncates and reconstructs it.
///
/// Padding happens inside the forward transform; the padded tail of the
/// reconstruction is dropped so it lines up with `x`.
///
/// # Example
///
/// ```
/// use radix_fft::pipeline::{analyze, AnalysisConfig};
/// let analysis = analyze(f64::sin, &AnalysisConfig::default()).unwrap();
/// assert_eq!(analysis.x.len(), 100);
/// assert_eq!(analysis.spectrum.len(), 128);
/// assert!(analysis.reconstruction_error() < 1e-9);
/// ```
pub fn analyze<F, T>(f: F, config: &AnalysisConfig) -> FftResult<Analysis>
where
    F: Fn(f64) -> T,
    T: Into<Complex64>,
{
    config.validate()?;
    let (x, samples) = sample(f, config.to, config.step)?;
    let spectrum = fft(&samples)?;
    let truncated = truncate(&spectrum, config.fraction)?;
    let mut reconstruction = ifft(&truncated)?;
    reconstruction.truncate(x.len());

    let analysis = Analysis {
        x,
        samples,
        spectrum,
        truncated,
        reconstruction,
        fraction: config.fraction,
    };
    tracing::debug!(
        samples = analysis.x.len(),
        fraction = analysis.fraction,
        error = analysis.reconstruction_error(),
        "analysis complete"
    );
    Ok(analysis)
}
