use num_complex::Complex64;

use crate::error::{FftError, FftResult};

/// Transform length for a signal of `len` samples: `2^ceil(log2(len))`.
///
/// # Errors
///
/// [`FftError::InvalidLength`] for `len == 0` or when the next power of two overflows `usize`.
///
/// ```
/// # use radix_fft::padding::padded_len;
/// assert_eq!(padded_len(100).unwrap(), 128);
/// assert_eq!(padded_len(64).unwrap(), 64);
/// assert!(padded_len(0).is_err());
/// ```
pub fn padded_len(len: usize) -> FftResult<usize> {
    if len == 0 {
        return Err(FftError::InvalidLength(0));
    }
    len.checked_next_power_of_two()
        .ok_or(FftError::InvalidLength(len))
}

/// Copies `signal` into a new buffer of [`padded_len`] samples, appending zeros.
pub fn zero_pad<T>(signal: &[T]) -> FftResult<Vec<Complex64>>
where
    T: Copy + Into<Complex64>,
{
    let n = padded_len(signal.len())?;
    let mut out = Vec::with_capacity(n);
    out.extend(signal.iter().map(|&v| v.into()));
    out.resize(n, Complex64::new(0.0, 0.0));
    Ok(out)
}
