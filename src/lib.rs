pub(crate) mod butterfly;
pub mod dft;
pub mod discretize;
pub mod error;
pub mod fft;
pub mod ifft;
pub mod padding;
pub mod pipeline;
pub mod truncate;
pub mod twiddles;

pub use error::{FftError, FftResult};
pub use num_complex::Complex64;
pub use pipeline::{analyze, Analysis, AnalysisConfig, PlotSink, Series};

/// Computes the Fast Fourier Transform (FFT) of the given signal.
///
/// This function takes real (`f64`) or complex (`Complex64`) samples and returns
/// the complex spectrum. Inputs whose length is not a power of two are zero-padded
/// to the next power of two first.
///
/// # Parameters
///
/// - `signal`: The input signal in the time domain.
///
/// # Returns
///
/// A vector of `Complex64` of length `signal.len().next_power_of_two()`, in standard
/// bin order (index 0 is DC, the upper half holds the negative frequencies).
///
/// # Errors
///
/// [`FftError::InvalidLength`] for an empty signal.
///
/// # Example
///
/// ```
/// use radix_fft::fft;
/// let input = vec![1.0f64, 1.0, 1.0, 1.0];
/// let spectrum = fft(&input).unwrap();
/// assert!((spectrum[0].re - 4.0).abs() < 1e-12);
/// ```
pub fn fft<T>(signal: &[T]) -> FftResult<Vec<Complex64>>
where
    T: Copy + Into<Complex64>,
{
    fft::fft(signal)
}

/// Computes the Inverse Fast Fourier Transform (IFFT) of the given spectrum.
///
/// # Parameters
///
/// - `spectrum`: The frequency domain signal; its length must be a power of two.
///
/// # Returns
///
/// The reconstructed time domain signal, scaled by `1/N`.
///
/// # Errors
///
/// [`FftError::InvalidLength`] if the spectrum length is not a power of two.
///
/// # Example
///
/// ```
/// use radix_fft::{fft, ifft};
/// let input = vec![1.0f64, 0.0, 0.0, 0.0];
/// let restored = ifft(&fft(&input).unwrap()).unwrap();
/// assert!((restored[0].re - 1.0).abs() < 1e-12);
/// ```
pub fn ifft(spectrum: &[Complex64]) -> FftResult<Vec<Complex64>> {
    ifft::ifft(spectrum)
}
