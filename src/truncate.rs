use num_complex::Complex64;

use crate::error::{FftError, FftResult};

/// Number of trailing bins [`truncate`] zeroes in a spectrum of `n` bins: `floor(n · fraction)`.
///
/// # Errors
///
/// [`FftError::InvalidFraction`] unless `0 <= fraction < 1`.
///
/// ```
/// # use radix_fft::truncate::zeroed_bins;
/// assert_eq!(zeroed_bins(128, 0.25).unwrap(), 32);
/// assert_eq!(zeroed_bins(10, 0.33).unwrap(), 3);
/// ```
pub fn zeroed_bins(n: usize, fraction: f64) -> FftResult<usize> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(FftError::InvalidFraction(fraction));
    }
    Ok(((n as f64 * fraction).floor() as usize).min(n))
}

/// Returns a copy of `spectrum` with its highest-index `floor(N · fraction)` bins set to zero.
///
/// The length is preserved so the inverse transform runs at the same `N` as the
/// forward one. `fraction == 0` returns an unchanged copy; as `fraction` approaches
/// 1 the result approaches the all-zero spectrum.
///
/// # Errors
///
/// [`FftError::InvalidFraction`] unless `0 <= fraction < 1`.
pub fn truncate(spectrum: &[Complex64], fraction: f64) -> FftResult<Vec<Complex64>> {
    let n = spectrum.len();
    let zeroed = zeroed_bins(n, fraction)?;
    tracing::debug!(len = n, fraction, zeroed, "truncating spectrum");

    let mut out = spectrum.to_vec();
    for v in &mut out[n - zeroed..] {
        *v = Complex64::new(0.0, 0.0);
    }
    Ok(out)
}
