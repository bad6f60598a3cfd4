use num_complex::Complex64;

use crate::butterfly::transform;
use crate::error::{FftError, FftResult};
use crate::twiddles::Direction;

/// Computes the recursive Cooley-Tukey radix-2 DIT IFFT of `spectrum`.
///
/// `spectrum` must have a **power-of-two length** (the direct output of
/// [`fft`][crate::fft::fft]). The recursion runs with a positive twiddle angle
/// and the `1/N` scaling is applied once, to the finished top-level result.
/// Scaling at every level would shrink the output by a further factor at each
/// of the `log2(N)` levels.
///
/// # Errors
///
/// [`FftError::InvalidLength`] if the length is zero or not a power of two.
///
/// # Example
///
/// ```
/// use num_complex::Complex64;
/// use radix_fft::ifft::ifft;
/// let mut spectrum = vec![Complex64::new(0.0, 0.0); 4];
/// spectrum[0] = Complex64::new(4.0, 0.0);
/// let signal = ifft(&spectrum).unwrap();
/// assert!(signal.iter().all(|c| (c.re - 1.0).abs() < 1e-12));
/// ```
pub fn ifft(spectrum: &[Complex64]) -> FftResult<Vec<Complex64>> {
    let n = spectrum.len();
    if !n.is_power_of_two() {
        return Err(FftError::InvalidLength(n));
    }
    tracing::debug!(len = n, "inverse fft");

    let mut out = transform(spectrum, Direction::Inverse)?;
    let scale = (n as f64).recip();
    for v in &mut out {
        *v *= scale;
    }
    Ok(out)
}

/// Like [`ifft`] but keeps only the real part of each reconstructed sample.
///
/// Intended for round trips of real-valued signals, where the imaginary parts
/// are floating-point residue.
pub fn ifft_real(spectrum: &[Complex64]) -> FftResult<Vec<f64>> {
    Ok(ifft(spectrum)?.into_iter().map(|c| c.re).collect())
}
