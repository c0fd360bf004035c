//! Scheduling policies and KPI evaluation.
//!
//! Four single-CPU policies share one contract ([`SchedulingPolicy`]):
//! take an immutable process snapshot, simulate to completion, return a
//! [`RunResult`]. Each run validates its input first and verifies the
//! finished schedule before handing it back.
//!
//! | Policy | Preemptive | Selection key |
//! |--------|-----------|---------------|
//! | [`RoundRobin`] | at quantum expiry | FIFO ready queue |
//! | [`SjfNonPreemptive`] | no | (burst, arrival) |
//! | [`PriorityNonPreemptive`] | no | (priority, arrival) |
//! | [`SjfPreemptive`] | every time unit | (remaining, arrival) |
//!
//! When nothing is ready the clock jumps straight to the next arrival and
//! the gap is logged as one idle interval.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod config;
mod kpi;
mod non_preemptive;
mod policy;
mod priority;
mod round_robin;
mod simulator;
mod sjf;
mod srtf;

pub use config::{SimulationConfig, SjfOrdering, DEFAULT_QUANTUM};
pub use kpi::RunMetrics;
pub use policy::Policy;
pub use priority::PriorityNonPreemptive;
pub use round_robin::RoundRobin;
pub use simulator::Simulator;
pub use sjf::SjfNonPreemptive;
pub use srtf::SjfPreemptive;

use log::{debug, info};
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::models::{Process, ProcessState, RunResult, Timeline};
use crate::validation::{validate_processes, verify_run, SchedulingError};

/// A single-CPU scheduling policy.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "Round Robin").
    fn name(&self) -> &'static str;

    /// Whether every process must carry a priority.
    fn requires_priority(&self) -> bool {
        false
    }

    /// Schedules the processes to completion.
    ///
    /// # Errors
    /// - [`SchedulingError::InvalidInput`] if the process set is empty or malformed
    /// - [`SchedulingError::InvariantViolation`] if the produced schedule is inconsistent
    fn run(&self, processes: &[Process]) -> Result<RunResult, SchedulingError>;
}

/// Mutable state of one run: per-process bookkeeping plus the raw log.
#[derive(Debug)]
pub(crate) struct Simulation<'a> {
    processes: &'a [Process],
    pub(crate) states: Vec<ProcessState>,
    pub(crate) log: Timeline,
}

impl<'a> Simulation<'a> {
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            states: processes
                .iter()
                .enumerate()
                .map(|(i, p)| ProcessState::new(i, p))
                .collect(),
            log: Timeline::new(),
        }
    }

    /// Runs process `index` for up to `units` from `now` and logs the slice.
    ///
    /// Returns the units consumed.
    pub(crate) fn dispatch(&mut self, index: usize, now: i64, units: i64) -> i64 {
        let ran = self.states[index].execute(now, units);
        let id = &self.processes[index].id;
        self.log.record(id, now, now + ran);
        if self.states[index].is_finished() {
            debug!("{id} ran {now}-{} and finished", now + ran);
        }
        ran
    }

    /// Logs `[from, to)` as idle.
    pub(crate) fn idle(&mut self, from: i64, to: i64) {
        debug!("cpu idle {from}-{to}");
        self.log.record_idle(from, to);
    }

    pub(crate) fn state(&self, index: usize) -> &ProcessState {
        &self.states[index]
    }
}

/// Processes not yet admitted, in arrival order (ties by input order).
#[derive(Debug)]
pub(crate) struct ArrivalQueue<'a> {
    processes: &'a [Process],
    pending: VecDeque<usize>,
}

impl<'a> ArrivalQueue<'a> {
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);
        Self {
            processes,
            pending: order.into(),
        }
    }

    /// Removes and returns the next process that has arrived by `now`.
    pub(crate) fn pop_arrived(&mut self, now: i64) -> Option<usize> {
        let &next = self.pending.front()?;
        if self.processes[next].arrival_time <= now {
            self.pending.pop_front()
        } else {
            None
        }
    }

    /// Arrival time of the next pending process.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.pending
            .front()
            .map(|&i| self.processes[i].arrival_time)
    }
}

/// Validates, simulates, assembles and verifies one run.
pub(crate) fn run_checked<'a, F>(
    name: &str,
    require_priority: bool,
    processes: &'a [Process],
    simulate: F,
) -> Result<RunResult, SchedulingError>
where
    F: FnOnce(&'a [Process]) -> Simulation<'a>,
{
    validate_processes(processes, require_priority)?;
    debug!("{name}: scheduling {} processes", processes.len());

    let sim = simulate(processes);
    let result = RunResult::from_states(processes, &sim.states, &sim.log)?;
    verify_run(processes, &result)?;

    info!(
        "{name}: makespan {}, avg waiting {:.2}, avg turnaround {:.2}",
        result.makespan(),
        result.avg_waiting_time,
        result.avg_turnaround_time
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_queue_order() {
        let processes = vec![
            Process::new("P0", 4, 1),
            Process::new("P1", 0, 1),
            Process::new("P2", 4, 1),
            Process::new("P3", 2, 1),
        ];
        let mut q = ArrivalQueue::new(&processes);
        assert_eq!(q.next_arrival(), Some(0));
        assert_eq!(q.pop_arrived(0), Some(1));
        assert_eq!(q.pop_arrived(0), None);
        assert_eq!(q.pop_arrived(5), Some(3));
        // Equal arrivals keep input order.
        assert_eq!(q.pop_arrived(5), Some(0));
        assert_eq!(q.pop_arrived(5), Some(2));
        assert_eq!(q.next_arrival(), None);
    }

    #[test]
    fn test_simulation_dispatch_and_idle() {
        let processes = vec![Process::new("P0", 1, 4)];
        let mut sim = Simulation::new(&processes);
        sim.idle(0, 1);
        assert_eq!(sim.dispatch(0, 1, 3), 3);
        assert_eq!(sim.dispatch(0, 4, 3), 1);
        assert!(sim.state(0).is_finished());
        assert_eq!(sim.log.consolidate().to_string(), "[Idle:0-1, P0:1-5]");
    }

    #[test]
    fn test_run_checked_rejects_empty() {
        let err = run_checked("test", false, &[], Simulation::new).unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidInput(_)));
    }
}
