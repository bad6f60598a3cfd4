use num_complex::Complex64;
use std::f64::consts::PI;

/// Sign of the twiddle angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `angle = -2π/N`
    Forward,
    /// `angle = +2π/N`
    Inverse,
}

impl Direction {
    /// `-1.0` for [`Direction::Forward`], `+1.0` for [`Direction::Inverse`].
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Precomputes `ω_N^k = exp(i · 2π · sign · k / N)` for `k` in `0..N/2`.
///
/// A sub-transform of length `m` (a power of two dividing `n`) uses the same
/// table with stride `n / m`, since `ω_m^k = ω_N^(k·N/m)`. Each entry is built
/// with `from_polar` rather than by repeated multiplication so the error does
/// not accumulate along the table.
///
/// ```
/// # use radix_fft::twiddles::{twiddles, Direction};
/// let w = twiddles(4, Direction::Forward);
/// assert_eq!(w.len(), 2);
/// assert!((w[1].im + 1.0).abs() < 1e-15); // ω_4 = -i
/// ```
#[must_use]
pub fn twiddles(n: usize, direction: Direction) -> Vec<Complex64> {
    let angle = direction.sign() * 2.0 * PI / n as f64;
    (0..n / 2)
        .map(|k| Complex64::from_polar(1.0, angle * k as f64))
        .collect()
}
