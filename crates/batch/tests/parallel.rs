use std::{f64::consts::PI, num::NonZeroUsize};

use stepwise_batch::{Options, Outcome, Row, integrate_all, scatter};
use stepwise_core::OscillatorProblem;
use stepwise_solvers::rk4;

fn sweep(count: u64) -> Vec<Row> {
    (0..count)
        .map(|id| {
            let phase = id as f64 * 0.1;
            Row {
                id,
                problem: OscillatorProblem {
                    t0: 0.0,
                    x0: phase.sin(),
                    v0: phase.cos(),
                    tmax: 4.0 * PI,
                    dt: 0.05 + 0.001 * (id % 50) as f64,
                },
            }
        })
        .collect()
}

#[test]
fn parallel_batch_matches_sequential_integration() {
    let rows = sweep(400);
    let threads = NonZeroUsize::new(4).expect("non-zero");

    let report = integrate_all(&rows, &Options::new().with_threads(threads)).expect("pool built");

    assert_eq!(report.entries.len(), rows.len());
    for (entry, row) in report.entries.iter().zip(&rows) {
        let expected = rk4::integrate(row.problem).expect("valid problem");
        assert_eq!(entry.id, row.id);
        assert_eq!(entry.outcome, Outcome::Completed(expected));
    }
}

#[test]
fn repeated_batches_are_identical() {
    let rows = sweep(100);

    let first = integrate_all(&rows, &Options::default()).expect("pool available");
    let second = integrate_all(&rows, &Options::default()).expect("pool available");

    assert_eq!(first, second);
}

#[test]
fn energy_is_kept_across_the_batch() {
    let rows = sweep(200);

    let report = integrate_all(&rows, &Options::default()).expect("pool available");

    for output in report.outputs() {
        let energy = output.x * output.x + output.v * output.v;
        assert!((energy - 1.0).abs() < 1e-3, "row {}: energy {energy}", output.id);
    }
}

#[test]
fn scatter_maps_arbitrary_items() {
    let rates: Vec<f64> = (0..10).map(|k| k as f64 / 10.0).collect();

    let outcomes = scatter(
        &rates,
        |&rate| {
            rk4::integrate(OscillatorProblem {
                t0: 0.0,
                x0: 1.0,
                v0: -rate,
                tmax: 0.0,
                dt: 0.1,
            })
        },
        &Options::default(),
    )
    .expect("pool available");

    for (outcome, rate) in outcomes.iter().zip(&rates) {
        // A horizon at the start time returns the initial state untouched.
        assert_eq!(outcome.completed(), Some(&[1.0, -rate]));
    }
}
