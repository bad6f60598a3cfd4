use num_complex::Complex64;

use crate::error::{FftError, FftResult};
use crate::padding::padded_len;

/// Largest grid [`sample_count`] accepts: 2^26 points, 1 GiB once transformed as `Complex64`.
pub const MAX_SAMPLES: usize = 1 << 26;

/// Number of points in [`grid`]`(to, step)`: `ceil(to / step)`.
///
/// # Errors
///
/// [`FftError::InvalidInterval`] unless both `to` and `step` are finite and strictly positive
/// and the point count is at most [`MAX_SAMPLES`].
///
/// ```
/// # use radix_fft::discretize::sample_count;
/// assert_eq!(sample_count(10.0, 0.1).unwrap(), 100);
/// assert!(sample_count(1e300, 1e-300).is_err());
/// ```
pub fn sample_count(to: f64, step: f64) -> FftResult<usize> {
    if !(to.is_finite() && step.is_finite() && to > 0.0 && step > 0.0) {
        return Err(FftError::InvalidInterval { to, step });
    }
    let count = (to / step).ceil();
    // the quotient overflows to infinity for tiny steps
    if !count.is_finite() || count > MAX_SAMPLES as f64 {
        return Err(FftError::InvalidInterval { to, step });
    }
    Ok(count as usize)
}

/// Returns the uniform sample grid `x_i = i * step` over `[0, to)`.
///
/// The grid has `ceil(to / step)` points, the same count as `numpy.arange(0, to, step)`.
/// No padding is applied; the transform pads on its own.
///
/// # Errors
///
/// [`FftError::InvalidInterval`] when [`sample_count`] rejects the interval.
///
/// # Example
///
/// ```
/// # use radix_fft::discretize::grid;
/// let x = grid(10.0, 0.1).unwrap();
/// assert_eq!(x.len(), 100);
/// assert_eq!(x[0], 0.0);
/// ```
pub fn grid(to: f64, step: f64) -> FftResult<Vec<f64>> {
    let count = sample_count(to, step)?;
    Ok((0..count).map(|i| i as f64 * step).collect())
}

/// Samples `f` on [`grid`]`(to, step)`.
///
/// Returns `(x, y)` with `y[i] = f(x[i])`. `f` may return real or complex values;
/// whatever it produces, NaN and infinities included, is passed through untouched.
///
/// # Example
///
/// ```
/// # use radix_fft::discretize::sample;
/// let (x, y) = sample(|x| x * x, 1.0, 0.25).unwrap();
/// assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75]);
/// assert_eq!(y[3].re, 0.5625);
/// ```
pub fn sample<F, T>(f: F, to: f64, step: f64) -> FftResult<(Vec<f64>, Vec<Complex64>)>
where
    F: Fn(f64) -> T,
    T: Into<Complex64>,
{
    let x = grid(to, step)?;
    let y = x.iter().map(|&xi| f(xi).into()).collect();
    Ok((x, y))
}

/// Samples `f` on a grid whose *positions* were zero-padded to a power of two first.
///
/// The padded positions are `0.0`, so the tail of `y` holds `f(0.0)` rather than zero.
/// This mirrors the older notebook behaviour and is kept for parity experiments;
/// [`sample`] plus the transform's own padding is the canonical path.
pub fn sample_padded<F, T>(f: F, to: f64, step: f64) -> FftResult<(Vec<f64>, Vec<Complex64>)>
where
    F: Fn(f64) -> T,
    T: Into<Complex64>,
{
    let mut x = grid(to, step)?;
    x.resize(padded_len(x.len())?, 0.0);
    let y = x.iter().map(|&xi| f(xi).into()).collect();
    Ok((x, y))
}
