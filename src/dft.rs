use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{FftError, FftResult};
use crate::twiddles::Direction;

/// Direct O(N²) discrete Fourier transform, unnormalized.
///
/// `X[k] = Σ_n x[n] · exp(i · sign · 2π · k · n / N)`. Accepts any non-zero length
/// (no padding). Useful as a reference to check the recursive transform against.
///
/// # Errors
///
/// [`FftError::InvalidLength`] for empty input.
///
/// ```
/// # use num_complex::Complex64;
/// # use radix_fft::dft::dft;
/// # use radix_fft::twiddles::Direction;
/// let x = [Complex64::new(1.0, 0.0); 3];
/// let spectrum = dft(&x, Direction::Forward).unwrap();
/// assert!((spectrum[0].re - 3.0).abs() < 1e-12);
/// assert!(spectrum[1].norm() < 1e-12);
/// ```
pub fn dft(input: &[Complex64], direction: Direction) -> FftResult<Vec<Complex64>> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::InvalidLength(0));
    }
    let base = direction.sign() * 2.0 * PI / n as f64;
    Ok((0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                // reduce k·j mod n before scaling to keep the angle small
                .map(|(j, &x)| x * Complex64::from_polar(1.0, base * ((k * j) % n) as f64))
                .sum()
        })
        .collect())
}
