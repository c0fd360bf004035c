//! Random workload generation.
//!
//! Produces process sets named `P0..Pn` with arrivals, bursts and
//! priorities drawn uniformly from configured inclusive ranges. Pass a
//! seeded RNG for reproducible workloads.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::workload::WorkloadGenerator;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = WorkloadGenerator::new(5)
//!     .with_burst_range(1, 8)
//!     .generate(&mut rng)
//!     .unwrap();
//! assert_eq!(processes.len(), 5);
//! assert_eq!(processes[0].id, "P0");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::validation::SchedulingError;

/// Random process-set generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Inclusive burst range; both ends must be positive.
    pub burst_range: (i64, i64),
    /// Inclusive priority range. `None` = processes get no priority.
    pub priority_range: Option<(i32, i32)>,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            burst_range: (1, 10),
            priority_range: Some((1, 5)),
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = Some((min, max));
        self
    }

    /// Generates processes without priorities.
    pub fn without_priorities(mut self) -> Self {
        self.priority_range = None;
        self
    }

    /// Draws a process set.
    ///
    /// # Errors
    /// [`SchedulingError::InvalidConfig`] for an empty or non-positive range.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<Process>, SchedulingError> {
        self.check()?;
        let (burst_min, burst_max) = self.burst_range;

        Ok((0..self.count)
            .map(|i| {
                let process = Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(burst_min..=burst_max),
                );
                match self.priority_range {
                    Some((lo, hi)) => process.with_priority(rng.random_range(lo..=hi)),
                    None => process,
                }
            })
            .collect())
    }

    fn check(&self) -> Result<(), SchedulingError> {
        let invalid = |msg: String| Err(SchedulingError::InvalidConfig(msg));
        let (burst_min, burst_max) = self.burst_range;
        if self.max_arrival < 0 {
            return invalid(format!("max arrival {} is negative", self.max_arrival));
        }
        if burst_min <= 0 || burst_min > burst_max {
            return invalid(format!("burst range {burst_min}..={burst_max} is invalid"));
        }
        if let Some((lo, hi)) = self.priority_range {
            if lo > hi {
                return invalid(format!("priority range {lo}..={hi} is empty"));
            }
        }
        Ok(())
    }
}
