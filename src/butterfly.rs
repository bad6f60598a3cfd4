// Recursive Cooley-Tukey decimation-in-time core shared by fft.rs and ifft.rs.
// The recursion never copies the even/odd halves: it walks the caller's buffer
// with a doubling stride and writes into one output buffer, split in place at
// each level. The only allocations are that output and the twiddle table.
use num_complex::Complex64;

use crate::error::{FftError, FftResult};
use crate::twiddles::{twiddles, Direction};

/// Unnormalized radix-2 DIT transform of `input` in the given direction.
///
/// `input.len()` must be a power of two; any level that is neither 1 nor even
/// yields [`FftError::InvalidLength`] with that level's length.
pub(crate) fn transform(input: &[Complex64], direction: Direction) -> FftResult<Vec<Complex64>> {
    let n = input.len();
    let table = twiddles(n, direction);
    let mut out = vec![Complex64::new(0.0, 0.0); n];
    recurse(input, 1, &table, &mut out)?;
    Ok(out)
}

/// Transforms the sub-sequence `input[0], input[stride], input[2·stride], …`
/// of length `out.len()` into `out`.
///
/// ```text
/// E    = transform(x[0], x[2s], x[4s], …)   → out[..n/2]
/// O    = transform(x[s], x[3s], x[5s], …)   → out[n/2..]
/// W    = table[k · s]                        (= ω_n^k, table built for N = n·s)
///
/// out[k]       = E[k] + W · O[k]
/// out[k + n/2] = E[k] - W · O[k]
/// ```
fn recurse(
    input: &[Complex64],
    stride: usize,
    table: &[Complex64],
    out: &mut [Complex64],
) -> FftResult<()> {
    let n = out.len();
    if n == 1 {
        out[0] = input[0];
        return Ok(());
    }
    if n == 0 || n % 2 != 0 {
        return Err(FftError::InvalidLength(n));
    }

    let half = n / 2;
    let (even, odd) = out.split_at_mut(half);
    recurse(input, stride * 2, table, even)?;
    recurse(&input[stride..], stride * 2, table, odd)?;

    for k in 0..half {
        let t = table[k * stride] * odd[k];
        let e = even[k];
        even[k] = e + t;
        odd[k] = e - t;
    }
    Ok(())
}
