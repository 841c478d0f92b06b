//! Integrates a sweep of oscillator problems in parallel.
//!
//! # Usage
//!
//! ```text
//! cargo run --example sweep
//! cargo run --example sweep -- 10000 4
//! RUST_LOG=warn cargo run --example sweep
//! ```
//!
//! Arguments are the number of rows (default `1000`) and an optional worker
//! count. Every 100th row gets a negative step so the report shows how failed
//! rows are logged and skipped while the rest of the batch completes.

use std::{error::Error, f64::consts::PI, num::NonZeroUsize, time::Instant};

use stepwise_batch::{Options, Row, integrate_all};
use stepwise_core::OscillatorProblem;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let count = args
        .next()
        .as_deref()
        .map(str::parse::<u64>)
        .transpose()?
        .unwrap_or(1000);
    let threads = args
        .next()
        .as_deref()
        .map(str::parse::<NonZeroUsize>)
        .transpose()?;

    let rows: Vec<Row> = (0..count)
        .map(|id| Row {
            id,
            problem: OscillatorProblem {
                t0: 0.0,
                x0: 0.0,
                v0: 1.0 + id as f64 / count as f64,
                tmax: 12.0 * PI,
                dt: if id % 100 == 99 { -0.1 } else { 0.1 },
            },
        })
        .collect();

    let mut options = Options::new();
    if let Some(threads) = threads {
        options = options.with_threads(threads);
    }

    let start = Instant::now();
    let report = integrate_all(&rows, &options)?;
    let elapsed = start.elapsed();

    for output in report.outputs().take(5) {
        println!("{} {:.12} {:.12}", output.id, output.x, output.v);
    }
    println!("...");
    println!(
        "{} completed, {} failed in {elapsed:?}",
        report.outputs().count(),
        report.failures().count()
    );

    Ok(())
}
