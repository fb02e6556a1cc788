use log::warn;

use crate::algorithm::Algorithm;
use crate::error::{BenchError, Result};
use crate::utils::mergesort;

#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRecord {
    pub algorithm: Algorithm,
    pub name: &'static str,
    /// Seconds: the running total while accumulating, the mean once finalized.
    pub time: f64,
}

impl AlgorithmRecord {
    fn new(algorithm: Algorithm) -> Self {
        Self { algorithm, name: algorithm.name(), time: 0.0 }
    }
}

/// Per-algorithm running totals for one benchmark run.
pub struct Aggregator {
    records: Vec<AlgorithmRecord>,
}

impl Aggregator {
    pub fn new(algorithms: &[Algorithm]) -> Self {
        Self { records: algorithms.iter().map(|a| AlgorithmRecord::new(*a)).collect() }
    }

    pub fn accumulate(&mut self, algorithm: Algorithm, seconds: f64) {
        match self.records.iter_mut().find(|r| r.algorithm == algorithm) {
            Some(record) => record.time += seconds,
            None => warn!("{} is not registered, dropping {:.6}s", algorithm, seconds),
        }
    }

    pub fn records(&self) -> &[AlgorithmRecord] {
        &self.records
    }

    /// Turns totals into means over `total_arrays`.
    pub fn finalize(mut self, total_arrays: usize) -> Result<Averages> {
        if total_arrays == 0 {
            return Err(BenchError::EmptyRun);
        }

        let count = total_arrays as f64;
        self.records.iter_mut().for_each(|r| r.time /= count);
        Ok(Averages { records: self.records })
    }
}

/// Mean time per algorithm, still in registration order.
pub struct Averages {
    records: Vec<AlgorithmRecord>,
}

impl Averages {
    pub fn rank(mut self) -> RankedReport {
        // stable: ties keep registration order
        mergesort(&mut self.records, |a, b| a.time < b.time);
        RankedReport { records: self.records }
    }
}

/// Records ordered from fastest to slowest mean time.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedReport {
    records: Vec<AlgorithmRecord>,
}

impl RankedReport {
    pub fn records(&self) -> &[AlgorithmRecord] {
        &self.records
    }

    pub fn best(&self) -> Option<&AlgorithmRecord> {
        self.records.first()
    }

    pub fn worst(&self) -> Option<&AlgorithmRecord> {
        self.records.last()
    }

    /// The record at `len / 2`.
    pub fn median(&self) -> Option<&AlgorithmRecord> {
        self.records.get(self.records.len() / 2)
    }
}
