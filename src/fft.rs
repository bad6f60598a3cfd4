use num_complex::Complex64;

use crate::butterfly::transform;
use crate::error::FftResult;
use crate::padding::zero_pad;
use crate::twiddles::Direction;

/// Computes the recursive Cooley-Tukey radix-2 DIT FFT of `signal`.
///
/// If `signal.len()` is not a power of two the signal is **zero-padded** to the
/// next power of two, so the returned spectrum has length
/// `signal.len().next_power_of_two()`. Real (`f64`) and complex (`Complex64`)
/// samples are both accepted.
///
/// A single sample transforms to itself.
///
/// # Errors
///
/// [`FftError::InvalidLength`](crate::FftError::InvalidLength) for an empty signal.
///
/// # Example
///
/// ```
/// use radix_fft::fft::fft;
/// let spectrum = fft(&[1.0f64, 0.0, 0.0, 0.0]).unwrap();
/// assert!(spectrum.iter().all(|c| (c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12));
/// ```
pub fn fft<T>(signal: &[T]) -> FftResult<Vec<Complex64>>
where
    T: Copy + Into<Complex64>,
{
    let padded = zero_pad(signal)?;
    tracing::debug!(len = signal.len(), padded = padded.len(), "forward fft");
    transform(&padded, Direction::Forward)
}
