use std::time::Instant;

use rayon::{ThreadPoolBuilder, prelude::*};

use crate::{Error, Options, Outcome};

/// Maps `f` over `items` in parallel and gathers the outcomes in input order.
///
/// Every item is processed independently. An `Err` from `f` becomes
/// [`Outcome::Failed`] for that item only. With a time budget, items that have
/// not started when the budget is spent become [`Outcome::Skipped`].
///
/// `f` should be pure: the outcomes are then identical to a sequential map,
/// whatever the pool size or scheduling order.
///
/// # Errors
///
/// Returns [`Error::ThreadPool`] if a dedicated pool was requested and could
/// not be built.
pub fn scatter<T, R, E, F>(items: &[T], f: F, options: &Options) -> Result<Vec<Outcome<R, E>>, Error>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync,
{
    let started = Instant::now();
    let budget = options.time_budget();

    let run = || -> Vec<Outcome<R, E>> {
        items
            .par_iter()
            .map(|item| {
                if budget.is_some_and(|budget| started.elapsed() >= budget) {
                    return Outcome::Skipped;
                }
                Outcome::from_result(f(item))
            })
            .collect()
    };

    match options.threads() {
        Some(threads) => {
            let pool = ThreadPoolBuilder::new().num_threads(threads.get()).build()?;
            Ok(pool.install(run))
        }
        None => Ok(run()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{num::NonZeroUsize, time::Duration};

    #[derive(Debug, PartialEq)]
    struct Odd(u32);

    fn halve(n: &u32) -> Result<u32, Odd> {
        if n % 2 == 0 { Ok(n / 2) } else { Err(Odd(*n)) }
    }

    #[test]
    fn preserves_input_order() {
        let items: Vec<u32> = (0..1000).map(|n| n * 2).collect();

        let outcomes = scatter(&items, halve, &Options::default()).expect("pool available");

        let values: Vec<u32> = outcomes
            .iter()
            .map(|o| *o.completed().expect("all even"))
            .collect();
        assert_eq!(values, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn failures_stay_with_their_item() {
        let items = [2, 3, 4, 5];

        let outcomes = scatter(&items, halve, &Options::default()).expect("pool available");

        assert_eq!(
            outcomes,
            vec![
                Outcome::Completed(1),
                Outcome::Failed(Odd(3)),
                Outcome::Completed(2),
                Outcome::Failed(Odd(5)),
            ]
        );
    }

    #[test]
    fn dedicated_pool_gives_same_outcomes() {
        let items: Vec<u32> = (0..257).collect();
        let threads = NonZeroUsize::new(3).expect("non-zero");

        let global = scatter(&items, halve, &Options::default()).expect("pool available");
        let dedicated = scatter(&items, halve, &Options::new().with_threads(threads))
            .expect("pool available");

        assert_eq!(global, dedicated);
    }

    #[test]
    fn spent_budget_skips_everything() {
        let items = [2, 4, 6];
        let options = Options::new().with_time_budget(Duration::ZERO);

        let outcomes = scatter(&items, halve, &options).expect("pool available");

        assert!(outcomes.iter().all(|o| *o == Outcome::Skipped));
    }

    #[test]
    fn empty_batch_is_fine() {
        let items: [u32; 0] = [];

        let outcomes = scatter(&items, halve, &Options::default()).expect("pool available");

        assert!(outcomes.is_empty());
    }
}
