//! Non-preemptive Shortest Job First.
//!
//! # Algorithm
//!
//! [`SjfOrdering::Online`]: whenever the CPU frees up, run the arrived
//! process with the smallest burst (ties: earlier arrival, then input order)
//! to completion. If nothing has arrived, idle until the next arrival.
//!
//! [`SjfOrdering::ArrivalBatch`]: sort all processes once by
//! `(arrival, burst)` and run them in that order, idling whenever the next
//! process has not arrived yet.
//!
//! # Reference
//! Smith (1956), SPT minimizes mean flow time on a single machine.

use super::non_preemptive::run_to_completion;
use super::{run_checked, SchedulingPolicy, Simulation, SjfOrdering};
use crate::dispatching::{Candidate, RuleEngine};
use crate::models::{Process, RunResult};
use crate::validation::SchedulingError;

/// Shortest Job First, non-preemptive.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{SchedulingPolicy, SjfNonPreemptive};
///
/// let processes = vec![
///     Process::new("P0", 0, 7),
///     Process::new("P1", 2, 4),
///     Process::new("P2", 4, 1),
/// ];
/// let result = SjfNonPreemptive::new().run(&processes).unwrap();
/// assert_eq!(result.timeline.to_string(), "[P0:0-7, P2:7-8, P1:8-12]");
/// assert_eq!(result.outcome("P1").unwrap().waiting_time, 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SjfNonPreemptive {
    ordering: SjfOrdering,
}

impl SjfNonPreemptive {
    /// Creates the policy with [`SjfOrdering::Online`] selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection mode.
    pub fn with_ordering(mut self, ordering: SjfOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// The selection mode.
    pub fn ordering(&self) -> SjfOrdering {
        self.ordering
    }

    fn simulate<'a>(&self, processes: &'a [Process]) -> Simulation<'a> {
        match self.ordering {
            SjfOrdering::Online => {
                run_to_completion(processes, &RuleEngine::shortest_job_first())
            }
            SjfOrdering::ArrivalBatch => Self::simulate_batch(processes),
        }
    }

    fn simulate_batch(processes: &[Process]) -> Simulation<'_> {
        let mut sim = Simulation::new(processes);
        let candidates: Vec<Candidate> = processes
            .iter()
            .enumerate()
            .map(|(i, p)| Candidate::new(p, sim.state(i)))
            .collect();
        let mut now = 0;

        for pos in RuleEngine::arrival_then_burst().sort_indices(&candidates) {
            let i = candidates[pos].index;
            let process = &processes[i];
            if now < process.arrival_time {
                sim.idle(now, process.arrival_time);
                now = process.arrival_time;
            }
            now += sim.dispatch(i, now, process.burst_time);
        }

        sim
    }
}

impl SchedulingPolicy for SjfNonPreemptive {
    fn name(&self) -> &'static str {
        "SJF Non-Preemptive"
    }

    fn run(&self, processes: &[Process]) -> Result<RunResult, SchedulingError> {
        run_checked(self.name(), self.requires_priority(), processes, |p| self.simulate(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Vec<Process> {
        vec![
            Process::new("P0", 0, 7),
            Process::new("P1", 2, 4),
            Process::new("P2", 4, 1),
        ]
    }

    #[test]
    fn test_online_picks_shortest_arrived() {
        let r = SjfNonPreemptive::new().run(&example()).unwrap();
        assert_eq!(r.timeline.to_string(), "[P0:0-7, P2:7-8, P1:8-12]");

        let p1 = r.outcome("P1").unwrap();
        assert_eq!(p1.waiting_time, 6);
        assert_eq!(p1.turnaround_time, 10);
        assert_eq!(p1.finish_time, 12);
        assert_eq!(r.outcome("P2").unwrap().waiting_time, 3);
        // (0 + 6 + 3) / 3
        assert!((r.avg_waiting_time - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_arrival_batch_keeps_static_order() {
        let r = SjfNonPreemptive::new()
            .with_ordering(SjfOrdering::ArrivalBatch)
            .run(&example())
            .unwrap();
        assert_eq!(r.timeline.to_string(), "[P0:0-7, P1:7-11, P2:11-12]");
        assert_eq!(r.outcome("P1").unwrap().waiting_time, 5);
    }

    #[test]
    fn test_batch_breaks_arrival_ties_by_burst() {
        let processes = vec![
            Process::new("P0", 0, 6),
            Process::new("P1", 0, 2),
            Process::new("P2", 0, 4),
        ];
        for ordering in [SjfOrdering::Online, SjfOrdering::ArrivalBatch] {
            let r = SjfNonPreemptive::new()
                .with_ordering(ordering)
                .run(&processes)
                .unwrap();
            assert_eq!(r.timeline.to_string(), "[P1:0-2, P2:2-6, P0:6-12]");
        }
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let processes = vec![Process::new("P0", 3, 2), Process::new("P1", 10, 1)];
        for ordering in [SjfOrdering::Online, SjfOrdering::ArrivalBatch] {
            let r = SjfNonPreemptive::new()
                .with_ordering(ordering)
                .run(&processes)
                .unwrap();
            assert_eq!(
                r.timeline.to_string(),
                "[Idle:0-3, P0:3-5, Idle:5-10, P1:10-11]"
            );
            assert_eq!(r.outcome("P0").unwrap().waiting_time, 0);
        }
    }

    #[test]
    fn test_equal_bursts_prefer_earlier_arrival() {
        // P0 occupies 0-5; P1 (arr 3) and P2 (arr 1) both burst 2.
        let processes = vec![
            Process::new("P0", 0, 5),
            Process::new("P1", 3, 2),
            Process::new("P2", 1, 2),
        ];
        let r = SjfNonPreemptive::new().run(&processes).unwrap();
        assert_eq!(r.timeline.to_string(), "[P0:0-5, P2:5-7, P1:7-9]");
    }
}
