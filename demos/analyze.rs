//! Samples a handful of functions, reconstructs them from a truncated spectrum
//! and draws both versions in the terminal.
//!
//! ```text
//! cargo run --example analyze -- --fraction 0 --fraction 0.1 --fraction 0.4
//! RUST_LOG=radix_fft=debug cargo run --example analyze
//! ```

use std::time::Instant;

use clap::Parser;
use radix_fft::{analyze, AnalysisConfig, FftResult, PlotSink, Series};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "analyze", about = "FFT → truncate → IFFT on sample functions")]
struct Cli {
    /// Exclusive end of the sampling interval
    #[arg(long, default_value_t = 10.0)]
    to: f64,

    /// Sampling step
    #[arg(long, default_value_t = 0.1)]
    step: f64,

    /// Share of high-index bins to drop (repeatable)
    #[arg(short, long, default_values_t = vec![0.0])]
    fraction: Vec<f64>,

    /// Plot height in rows
    #[arg(long, default_value_t = 16)]
    rows: usize,
}

/// Scatter plot of the real part, one column per sample.
struct TerminalSink {
    rows: usize,
}

impl PlotSink for TerminalSink {
    fn plot(&mut self, series: &Series<'_>) {
        match series.fraction {
            Some(d) => println!("── {} (D = {d}) ──", series.title),
            None => println!("── {} ──", series.title),
        }

        let values: Vec<f64> = series.y.iter().map(|c| c.re).collect();
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let lo = finite.clone().fold(f64::INFINITY, f64::min);
        let hi = finite.fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() || self.rows == 0 {
            println!("(nothing to draw)");
            return;
        }
        let span = if hi > lo { hi - lo } else { 1.0 };

        let mut canvas = vec![vec![' '; values.len()]; self.rows];
        for (col, v) in values.iter().enumerate() {
            if !v.is_finite() {
                continue;
            }
            let row = ((hi - v) / span * (self.rows - 1) as f64).round() as usize;
            canvas[row.min(self.rows - 1)][col] = '•';
        }

        println!("{hi:>10.4} ┤");
        for line in canvas {
            println!("           │{}", line.into_iter().collect::<String>());
        }
        println!("{lo:>10.4} ┤");
        if let (Some(first), Some(last)) = (series.x.first(), series.x.last()) {
            println!("           x ∈ [{first}, {last}]");
        }
        println!();
    }
}

type Function = (&'static str, fn(f64) -> f64);

fn main() -> FftResult<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let functions: [Function; 5] = [
        ("x", |x| x),
        ("x^2", |x| x * x),
        ("sin(x)", f64::sin),
        ("sin(x)/x", |x| x.sin() / (x + 1e-12)),
        ("sin(x^2)", |x| (x * x).sin()),
    ];

    let mut sink = TerminalSink { rows: cli.rows };
    for &fraction in &cli.fraction {
        let config = AnalysisConfig::default()
            .with_to(cli.to)
            .with_step(cli.step)
            .with_fraction(fraction);
        config.validate()?;

        for (title, f) in functions {
            let start_time = Instant::now();
            let analysis = analyze(f, &config)?;
            let elapsed_time = start_time.elapsed();

            analysis.plot(&mut sink, title);
            println!(
                "{title}: N = {}, L2 error = {:.6e}, {elapsed_time:?}\n",
                analysis.spectrum.len(),
                analysis.reconstruction_error()
            );
        }
    }
    Ok(())
}
