//! Non-preemptive static priority scheduling.
//!
//! Whenever the CPU frees up, the arrived process with the lowest priority
//! value runs to completion. Ties go to the earlier arrival, then to input
//! order. Every process must carry a priority.

use super::non_preemptive::run_to_completion;
use super::{run_checked, SchedulingPolicy};
use crate::dispatching::RuleEngine;
use crate::models::{Process, RunResult};
use crate::validation::SchedulingError;

/// Priority scheduling, non-preemptive (lower value = more urgent).
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{PriorityNonPreemptive, SchedulingPolicy};
///
/// let processes = vec![
///     Process::new("P0", 0, 5).with_priority(2),
///     Process::new("P1", 0, 3).with_priority(1),
/// ];
/// let result = PriorityNonPreemptive.run(&processes).unwrap();
/// assert_eq!(result.timeline.to_string(), "[P1:0-3, P0:3-8]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityNonPreemptive;

impl SchedulingPolicy for PriorityNonPreemptive {
    fn name(&self) -> &'static str {
        "Priority Non-Preemptive"
    }

    fn requires_priority(&self) -> bool {
        true
    }

    fn run(&self, processes: &[Process]) -> Result<RunResult, SchedulingError> {
        run_checked(self.name(), self.requires_priority(), processes, |p| {
            run_to_completion(p, &RuleEngine::priority_first())
        })
    }
}
