//! Timing statistics helper.
//!
//! Wraps repeated invocations of a closure and accumulates elapsed-time
//! measurements, treating the measured operation as a black box. For
//! publication-grade measurements use the criterion harness in `benches/`;
//! this type is for lightweight in-process timing reports.

use std::time::Instant;

/// Accumulator of elapsed-time measurements in milliseconds.
///
/// # Example
///
/// ```
/// use roadplan::bench::Benchmark;
///
/// let mut benchmark = Benchmark::new();
/// benchmark.run(10, || {
///     let _ = (0..100).sum::<u64>();
/// });
/// assert_eq!(benchmark.count(), 10);
/// assert!(benchmark.average_ms() >= 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Benchmark {
    measurements: Vec<f64>,
}

impl Benchmark {
    /// Creates an empty benchmark.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the closure `iterations` times, recording one measurement per
    /// invocation. Returns the mean elapsed time of this run in
    /// milliseconds.
    pub fn run<F: FnMut()>(&mut self, iterations: usize, mut op: F) -> f64 {
        let mut sum = 0.0;
        for _ in 0..iterations {
            let start = Instant::now();
            op();
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            self.measurements.push(elapsed_ms);
            sum += elapsed_ms;
        }
        if iterations == 0 {
            0.0
        } else {
            sum / iterations as f64
        }
    }

    /// Records one externally measured value in milliseconds.
    pub fn record(&mut self, elapsed_ms: f64) {
        self.measurements.push(elapsed_ms);
    }

    /// Number of recorded measurements.
    pub fn count(&self) -> usize {
        self.measurements.len()
    }

    /// Mean of all measurements, 0.0 when empty.
    pub fn average_ms(&self) -> f64 {
        if self.measurements.is_empty() {
            return 0.0;
        }
        self.measurements.iter().sum::<f64>() / self.measurements.len() as f64
    }

    /// Smallest measurement, 0.0 when empty.
    pub fn min_ms(&self) -> f64 {
        if self.measurements.is_empty() {
            return 0.0;
        }
        self.measurements.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest measurement, 0.0 when empty.
    pub fn max_ms(&self) -> f64 {
        if self.measurements.is_empty() {
            return 0.0;
        }
        self.measurements
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Median measurement, 0.0 when empty.
    pub fn median_ms(&self) -> f64 {
        if self.measurements.is_empty() {
            return 0.0;
        }
        let mut sorted = self.measurements.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        }
    }

    /// Sample standard deviation, 0.0 with fewer than two measurements.
    pub fn std_dev_ms(&self) -> f64 {
        if self.measurements.len() < 2 {
            return 0.0;
        }
        let mean = self.average_ms();
        let variance = self
            .measurements
            .iter()
            .map(|m| (m - mean).powi(2))
            .sum::<f64>()
            / (self.measurements.len() - 1) as f64;
        variance.sqrt()
    }

    /// Discards all measurements.
    pub fn clear(&mut self) {
        self.measurements.clear();
    }
}
