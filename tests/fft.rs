use std::f64::consts::PI;

use proptest::prelude::*;
use radix_fft::dft::dft;
use radix_fft::padding::{padded_len, zero_pad};
use radix_fft::twiddles::Direction;
use radix_fft::{fft, Complex64, FftError};

mod common;
use common::{assert_approx, assert_slice_approx, c, real, EPSILON};

/// FFT of an impulse [1, 0, 0, …] must be all-ones real and all-zeros imaginary.
///
/// Proof: X[k] = Σ x[n]·e^{-j2πkn/N} = x[0]·e^0 = 1  for all k.
#[test]
fn test_fft_impulse() {
    let spectrum = fft(&[1.0f64, 0.0, 0.0, 0.0]).unwrap();
    assert_slice_approx(&spectrum, &real(&[1.0; 4]), "spectrum");

    let mut input = vec![0.0f64; 8];
    input[0] = 1.0;
    assert_slice_approx(&fft(&input).unwrap(), &real(&[1.0; 8]), "spectrum (N=8)");
}

/// FFT of a constant (DC) signal [1, 1, …, 1] must be [N, 0, 0, …].
///
/// Proof: X[0] = N·1 = N;  X[k≠0] = Σ e^{-j2πkn/N} = 0 (geometric sum).
#[test]
fn test_fft_dc_signal() {
    let spectrum = fft(&[1.0f64; 4]).unwrap();
    assert_slice_approx(&spectrum, &real(&[4.0, 0.0, 0.0, 0.0]), "spectrum");
}

/// FFT of x[n] = sin(2π·n/N), N=8, must have power only at bins 1 and N-1.
///
///   X[1]   = -jN/2
///   X[N-1] = +jN/2
///   X[k]   = 0  for all other k
#[test]
fn test_fft_single_frequency_sine() {
    let n = 8usize;
    let half_n = n as f64 / 2.0;
    let input: Vec<f64> = (0..n)
        .map(|i| (2.0 * PI * i as f64 / n as f64).sin())
        .collect();

    let spectrum = fft(&input).unwrap();

    assert_approx(spectrum[0], c(0.0), "X[0] (DC)");
    assert_approx(spectrum[1], Complex64::new(0.0, -half_n), "X[1]");
    for k in 2..n - 1 {
        assert_approx(spectrum[k], c(0.0), &format!("X[{k}]"));
    }
    assert_approx(spectrum[n - 1], Complex64::new(0.0, half_n), "X[N-1]");
}

/// The transform of a single sample is the sample itself.
#[test]
fn test_fft_single_sample_is_identity() {
    assert_eq!(fft(&[2.5f64]).unwrap(), vec![c(2.5)]);

    let z = Complex64::new(-1.25, 3.0);
    assert_eq!(fft(&[z]).unwrap(), vec![z]);
}

#[test]
fn test_fft_zero_input() {
    let spectrum = fft(&[0.0f64; 8]).unwrap();
    assert_slice_approx(&spectrum, &real(&[0.0; 8]), "spectrum");
}

#[test]
fn test_fft_empty_input_is_invalid_length() {
    let empty: [f64; 0] = [];
    assert_eq!(fft(&empty), Err(FftError::InvalidLength(0)));
}

/// Non-finite samples are not an error: the NaN reaches every bin and survives the inverse.
#[test]
fn test_fft_propagates_nan() {
    let spectrum = fft(&[f64::NAN, 1.0, 2.0, 3.0]).unwrap();
    assert!(spectrum.iter().all(|v| v.re.is_nan()));

    let output = radix_fft::ifft(&spectrum).unwrap();
    assert!(output.iter().all(|v| v.re.is_nan()));

    let spectrum = fft(&[1.0f64, f64::INFINITY]).unwrap();
    assert_eq!(spectrum[0].re, f64::INFINITY);
    assert_eq!(spectrum[1].re, f64::NEG_INFINITY);
}

/// A 3-sample signal is padded to 4 and transformed as [a, b, c, 0].
#[test]
fn test_fft_pads_to_next_power_of_two() {
    let spectrum = fft(&[1.0f64, 2.0, 3.0]).unwrap();
    assert_eq!(spectrum.len(), 4);

    let expected = fft(&[1.0f64, 2.0, 3.0, 0.0]).unwrap();
    assert_slice_approx(&spectrum, &expected, "padded spectrum");
    // X[0] = 6, X[1] = 1 - 3 + j(-2) = -2 - 2j, X[2] = 1 - 2 + 3 = 2, X[3] = -2 + 2j
    assert_slice_approx(
        &spectrum,
        &[
            c(6.0),
            Complex64::new(-2.0, -2.0),
            c(2.0),
            Complex64::new(-2.0, 2.0),
        ],
        "analytical",
    );
}

/// Complex input: a single complex exponential at bin 3 lands entirely in bin 3.
#[test]
fn test_fft_complex_exponential() {
    let n = 16usize;
    let input: Vec<Complex64> = (0..n)
        .map(|i| Complex64::from_polar(1.0, 2.0 * PI * 3.0 * i as f64 / n as f64))
        .collect();

    let spectrum = fft(&input).unwrap();
    for (k, &v) in spectrum.iter().enumerate() {
        let expected = if k == 3 { c(n as f64) } else { c(0.0) };
        assert_approx(v, expected, &format!("X[{k}]"));
    }
}

fn signal(max_len: usize) -> impl Strategy<Value = Vec<Complex64>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..=max_len)
        .prop_map(|v| v.into_iter().map(|(re, im)| Complex64::new(re, im)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Linearity: FFT(a·x + b·y) = a·FFT(x) + b·FFT(y).
    #[test]
    fn test_fft_linearity(
        pair in (1usize..=64).prop_flat_map(|n| (
            prop::collection::vec(-100.0f64..100.0, n),
            prop::collection::vec(-100.0f64..100.0, n),
        )),
        a in -10.0f64..10.0,
        b in -10.0f64..10.0,
    ) {
        let (x, y) = pair;
        let mixed: Vec<f64> = x.iter().zip(&y).map(|(&xi, &yi)| a * xi + b * yi).collect();

        let lhs = fft(&mixed).unwrap();
        let fx = fft(&x).unwrap();
        let fy = fft(&y).unwrap();

        for k in 0..lhs.len() {
            let rhs = fx[k] * a + fy[k] * b;
            // absolute error grows with the magnitude of the sums involved
            prop_assert!((lhs[k] - rhs).norm() <= 1e-6 * (1.0 + rhs.norm()));
        }
    }

    /// The recursive transform agrees with the direct O(N²) DFT of the padded signal.
    #[test]
    fn test_fft_matches_direct_dft(x in signal(64)) {
        let padded = zero_pad(&x).unwrap();
        let expected = dft(&padded, Direction::Forward).unwrap();
        let actual = fft(&x).unwrap();

        prop_assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(&expected) {
            prop_assert!((a - e).norm() <= EPSILON * (1.0 + e.norm()));
        }
    }

    /// Padded length is 2^ceil(log2(L)), at least L, and the tail is zero.
    #[test]
    fn test_fft_padding_invariant(x in signal(300)) {
        let l = x.len();
        let n = padded_len(l).unwrap();
        let expected = 1usize << (l as f64).log2().ceil() as u32;

        prop_assert_eq!(n, expected);
        prop_assert!(n >= l);
        prop_assert!(n.is_power_of_two());

        let padded = zero_pad(&x).unwrap();
        prop_assert_eq!(&padded[..l], &x[..]);
        prop_assert!(padded[l..].iter().all(|v| *v == Complex64::new(0.0, 0.0)));
        prop_assert_eq!(fft(&x).unwrap().len(), n);
    }
}
