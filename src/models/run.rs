//! Run result model.
//!
//! A [`RunResult`] is what a policy hands back to the caller: one
//! [`ProcessOutcome`] per input process (in input order), the consolidated
//! timeline, and fleet-wide averages.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessOutcome, ProcessState, Timeline};
use crate::validation::SchedulingError;

/// The outcome of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Per-process outcomes, in input order.
    pub outcomes: Vec<ProcessOutcome>,
    /// Consolidated execution timeline.
    pub timeline: Timeline,
    /// Mean waiting time over all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over all processes.
    pub avg_turnaround_time: f64,
}

impl RunResult {
    /// Assembles a result from outcomes and a consolidated timeline.
    pub fn new(outcomes: Vec<ProcessOutcome>, timeline: Timeline) -> Self {
        let n = outcomes.len();
        let (avg_waiting_time, avg_turnaround_time) = if n == 0 {
            (0.0, 0.0)
        } else {
            // Summed as f64: per-process times fit in i64, their total may not.
            let waiting: f64 = outcomes.iter().map(|o| o.waiting_time as f64).sum();
            let turnaround: f64 = outcomes.iter().map(|o| o.turnaround_time as f64).sum();
            (waiting / n as f64, turnaround / n as f64)
        };
        Self {
            outcomes,
            timeline,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }

    /// Builds a result from the final per-run states and the raw log.
    ///
    /// Fails with [`SchedulingError::InvariantViolation`] if any process
    /// never completed.
    pub(crate) fn from_states(
        processes: &[Process],
        states: &[ProcessState],
        raw: &Timeline,
    ) -> Result<Self, SchedulingError> {
        let outcomes = processes
            .iter()
            .zip(states)
            .map(|(process, state)| {
                ProcessOutcome::from_state(process, state).ok_or_else(|| {
                    SchedulingError::InvariantViolation(format!(
                        "process '{}' did not complete ({} units remaining)",
                        process.id, state.remaining_time
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(outcomes, raw.consolidate()))
    }

    /// Finds the outcome for a process id.
    pub fn outcome(&self, id: &str) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }

    /// Latest finish time across all processes.
    pub fn makespan(&self) -> i64 {
        self.outcomes
            .iter()
            .map(|o| o.finish_time)
            .max()
            .unwrap_or(0)
    }

    /// Process ids in the order they completed.
    pub fn completion_order(&self) -> Vec<&str> {
        let mut done: Vec<&ProcessOutcome> = self.outcomes.iter().collect();
        done.sort_by_key(|o| o.finish_time);
        done.into_iter().map(|o| o.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;

    fn sample() -> RunResult {
        let processes = vec![Process::new("P0", 0, 4), Process::new("P1", 1, 2)];
        let mut states: Vec<ProcessState> = processes
            .iter()
            .enumerate()
            .map(|(i, p)| ProcessState::new(i, p))
            .collect();
        let mut raw = Timeline::new();
        states[0].execute(0, 4);
        raw.push(TimelineEntry::process("P0", 0, 4));
        states[1].execute(4, 2);
        raw.push(TimelineEntry::process("P1", 4, 6));
        RunResult::from_states(&processes, &states, &raw).unwrap()
    }

    #[test]
    fn test_averages() {
        let r = sample();
        // P0: tat 4, wt 0. P1: tat 5, wt 3.
        assert!((r.avg_waiting_time - 1.5).abs() < 1e-10);
        assert!((r.avg_turnaround_time - 4.5).abs() < 1e-10);
        assert_eq!(r.makespan(), 6);
    }

    #[test]
    fn test_outcome_lookup_and_order() {
        let r = sample();
        assert_eq!(r.outcome("P1").unwrap().waiting_time, 3);
        assert!(r.outcome("P9").is_none());
        assert_eq!(r.completion_order(), vec!["P0", "P1"]);
    }

    #[test]
    fn test_unfinished_process_is_invariant_violation() {
        let processes = vec![Process::new("P0", 0, 4)];
        let states = vec![ProcessState::new(0, &processes[0])];
        let err = RunResult::from_states(&processes, &states, &Timeline::new()).unwrap_err();
        assert!(matches!(err, SchedulingError::InvariantViolation(_)));
    }

    #[test]
    fn test_empty_result() {
        let r = RunResult::new(Vec::new(), Timeline::new());
        assert_eq!(r.avg_waiting_time, 0.0);
        assert_eq!(r.makespan(), 0);
    }

    #[test]
    fn test_result_serializes() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"avg_waiting_time\":1.5"));
        let back: RunResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
