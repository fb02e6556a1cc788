pub mod aggregator;

use log::{debug, info, trace, warn};

use crate::algorithm::Algorithm;
use crate::error::{BenchError, InvalidInput, Result};
use crate::timer::{time_sort, Clock};

pub use self::aggregator::{Aggregator, RankedReport};

/// Default cap on processed arrays.
pub const MAX_ARRAYS: usize = 2000;

#[derive(Debug, Clone)]
pub struct Config {
    pub max_arrays: usize,
    pub clock: Clock,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_arrays: MAX_ARRAYS, clock: Clock::default() }
    }
}

/// An array left out of the run, by 1-based line position.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    pub position: usize,
    pub reason: InvalidInput,
}

#[derive(Debug)]
pub struct RunSummary {
    pub report: RankedReport,
    pub processed: usize,
    pub skipped: Vec<Skipped>,
}

pub struct Bench<'a> {
    algorithms: &'a [Algorithm],
    config: Config,
}

impl<'a> Bench<'a> {
    pub fn new(algorithms: &'a [Algorithm], config: Config) -> Self {
        Self { algorithms, config }
    }

    /// Times every algorithm on every valid array of `source`.
    ///
    /// Invalid arrays are skipped for all algorithms so the means share one
    /// denominator. A read error aborts the run.
    pub fn run<I>(&self, source: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Result<(usize, Vec<i32>)>>,
    {
        info!("benchmarking {} algorithms, at most {} arrays, {:?} clock",
            self.algorithms.len(), self.config.max_arrays, self.config.clock);

        let mut aggregator = Aggregator::new(self.algorithms);
        let mut skipped = vec![];
        let mut processed = 0;
        let mut source = source.into_iter();

        while processed < self.config.max_arrays {
            let (position, arr) = match source.next() {
                None => break,
                Some(Ok(item)) => item,
                Some(Err(BenchError::InvalidInput { position, reason })) => {
                    warn!("skipping array #{}: {}", position, reason);
                    skipped.push(Skipped { position, reason });
                    continue;
                }
                Some(Err(e)) => return Err(e),
            };

            if let Err(reason) = self.validate(&arr) {
                warn!("skipping array #{}: {}", position, reason);
                skipped.push(Skipped { position, reason });
                continue;
            }

            processed += 1;
            debug!("array #{}: {} elements", position, arr.len());
            self.measure(&arr, &mut aggregator);
        }

        if processed == self.config.max_arrays {
            info!("stopped at the cap of {} arrays", processed);
        }

        for record in aggregator.records() {
            debug!("{}: {:.6}s in total", record.name, record.time);
        }

        let report = aggregator.finalize(processed)?.rank();
        info!("processed {} arrays, skipped {}", processed, skipped.len());
        Ok(RunSummary { report, processed, skipped })
    }

    fn validate(&self, arr: &[i32]) -> std::result::Result<(), InvalidInput> {
        self.algorithms.iter().try_for_each(|a| a.validate(arr))
    }

    fn measure(&self, arr: &[i32], aggregator: &mut Aggregator) {
        let expected = if cfg!(debug_assertions) {
            let mut expected = arr.to_vec();
            expected.sort_unstable();
            expected
        } else {
            vec![]
        };

        let mut scratch = Vec::with_capacity(arr.len());
        for algorithm in self.algorithms {
            scratch.clear();
            scratch.extend_from_slice(arr);
            let seconds = time_sort(*algorithm, &mut scratch, self.config.clock);
            debug_assert_eq!(scratch, expected, "{} is not a sorted permutation of its input", algorithm);
            trace!("{}: {:.9}s", algorithm, seconds);
            aggregator.accumulate(*algorithm, seconds);
        }
    }
}
