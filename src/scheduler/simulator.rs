//! Configured entry point for running policies by name.
//!
//! [`Simulator`] turns a [`SimulationConfig`] into concrete policies and
//! runs one or all of them over the same process snapshot.

use log::debug;

use super::{
    Policy, PriorityNonPreemptive, RoundRobin, SchedulingPolicy, SimulationConfig,
    SjfNonPreemptive, SjfPreemptive,
};
use crate::models::{Process, RunResult};
use crate::validation::{validate_process_count, SchedulingError};

/// Runs scheduling policies under a shared configuration.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Policy, SimulationConfig, Simulator};
///
/// let processes = vec![
///     Process::new("P0", 0, 5).with_priority(2),
///     Process::new("P1", 1, 3).with_priority(1),
///     Process::new("P2", 2, 1).with_priority(3),
/// ];
/// let simulator = Simulator::new().with_config(SimulationConfig::default().with_quantum(2));
///
/// let rr = simulator.run(Policy::RoundRobin, &processes).unwrap();
/// assert_eq!(rr.makespan(), 9);
///
/// let all = simulator.run_all(&processes).unwrap();
/// assert_eq!(all.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the configured implementation of `policy`.
    pub fn policy(&self, policy: Policy) -> Result<Box<dyn SchedulingPolicy>, SchedulingError> {
        let built: Box<dyn SchedulingPolicy> = match policy {
            Policy::RoundRobin => Box::new(RoundRobin::new(self.config.quantum)?),
            Policy::SjfNonPreemptive => {
                Box::new(SjfNonPreemptive::new().with_ordering(self.config.sjf_ordering))
            }
            Policy::PriorityNonPreemptive => Box::new(PriorityNonPreemptive),
            Policy::SjfPreemptive => Box::new(SjfPreemptive),
        };
        Ok(built)
    }

    /// Runs one policy.
    ///
    /// # Errors
    /// - [`SchedulingError::InvalidConfig`] for an out-of-range configuration
    /// - [`SchedulingError::InvalidInput`] for a malformed process set or one
    ///   outside the configured process-count bounds
    pub fn run(
        &self,
        policy: Policy,
        processes: &[Process],
    ) -> Result<RunResult, SchedulingError> {
        self.config.validate()?;
        if let Some(limit) = self.config.process_limit {
            validate_process_count(processes.len(), limit)?;
        }
        self.policy(policy)?.run(processes)
    }

    /// Runs every applicable policy over the same processes.
    ///
    /// The priority policy is skipped when any process lacks a priority.
    pub fn run_all(
        &self,
        processes: &[Process],
    ) -> Result<Vec<(Policy, RunResult)>, SchedulingError> {
        let has_priorities = processes.iter().all(|p| p.priority.is_some());
        Policy::ALL
            .into_iter()
            .filter(|policy| {
                let applicable = has_priorities || !policy.requires_priority();
                if !applicable {
                    debug!("skipping {policy}: processes without priority");
                }
                applicable
            })
            .map(|policy| self.run(policy, processes).map(|result| (policy, result)))
            .collect()
    }
}
