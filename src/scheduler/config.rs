//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::validation::SchedulingError;

/// Round Robin time slice used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 3;

/// How non-preemptive SJF picks the next job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SjfOrdering {
    /// At each decision point, the shortest burst among arrived processes
    /// runs next (ties: earlier arrival, then input order).
    #[default]
    Online,
    /// One static ordering by `(arrival, burst)`, decided up front.
    ArrivalBatch,
}

/// Parameters shared by all policies of a [`Simulator`](super::Simulator).
///
/// # Example
///
/// ```
/// use cpu_schedule::scheduler::{SimulationConfig, SjfOrdering};
///
/// let config = SimulationConfig::default()
///     .with_quantum(4)
///     .with_sjf_ordering(SjfOrdering::ArrivalBatch)
///     .with_process_limit(3, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time slice. Must be positive.
    pub quantum: i64,
    /// Non-preemptive SJF selection mode.
    pub sjf_ordering: SjfOrdering,
    /// Inclusive `(min, max)` bounds on the number of processes. `None` = unbounded.
    pub process_limit: Option<(usize, usize)>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            sjf_ordering: SjfOrdering::Online,
            process_limit: None,
        }
    }
}

impl SimulationConfig {
    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the SJF selection mode.
    pub fn with_sjf_ordering(mut self, ordering: SjfOrdering) -> Self {
        self.sjf_ordering = ordering;
        self
    }

    /// Bounds the number of processes a run accepts.
    pub fn with_process_limit(mut self, min: usize, max: usize) -> Self {
        self.process_limit = Some((min, max));
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), SchedulingError> {
        if self.quantum <= 0 {
            return Err(SchedulingError::InvalidConfig(format!(
                "quantum must be positive, got {}",
                self.quantum
            )));
        }
        if let Some((min, max)) = self.process_limit {
            if min > max {
                return Err(SchedulingError::InvalidConfig(format!(
                    "process limit {min}..={max} is empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulationConfig::default();
        assert_eq!(c.quantum, 3);
        assert_eq!(c.sjf_ordering, SjfOrdering::Online);
        assert_eq!(c.process_limit, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_invalid_quantum() {
        for q in [0, -3] {
            let err = SimulationConfig::default().with_quantum(q).validate().unwrap_err();
            assert!(matches!(err, SchedulingError::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_inverted_process_limit() {
        let c = SimulationConfig::default().with_process_limit(10, 3);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let c: SimulationConfig = serde_json::from_str(r#"{"quantum": 2}"#).unwrap();
        assert_eq!(c.quantum, 2);
        assert_eq!(c.sjf_ordering, SjfOrdering::Online);

        let c: SimulationConfig =
            serde_json::from_str(r#"{"sjf_ordering": "ArrivalBatch", "process_limit": [3, 10]}"#)
                .unwrap();
        assert_eq!(c.quantum, DEFAULT_QUANTUM);
        assert_eq!(c.sjf_ordering, SjfOrdering::ArrivalBatch);
        assert_eq!(c.process_limit, Some((3, 10)));
    }
}
