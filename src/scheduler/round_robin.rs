//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= now` to the tail of a FIFO ready
//!    queue (arrival order, ties by input order).
//! 2. Run the head for `min(remaining, quantum)` units.
//! 3. If it still has work, first admit whatever arrived during the slice,
//!    then re-enqueue it at the tail. Late arrivals therefore run ahead of
//!    the process they interrupted.
//! 4. With nothing ready, jump to the next arrival.
//!
//! # Complexity
//! O(n log n + sum(burst) / quantum).

use log::debug;
use std::collections::VecDeque;

use super::{run_checked, ArrivalQueue, SchedulingPolicy, Simulation, DEFAULT_QUANTUM};
use crate::models::{Process, RunResult};
use crate::validation::SchedulingError;

/// Round Robin with a fixed time quantum.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{RoundRobin, SchedulingPolicy};
///
/// let processes = vec![
///     Process::new("P0", 0, 5),
///     Process::new("P1", 1, 3),
///     Process::new("P2", 2, 1),
/// ];
/// let result = RoundRobin::new(3).unwrap().run(&processes).unwrap();
/// assert_eq!(result.timeline.to_string(), "[P0:0-3, P1:3-6, P2:6-7, P0:7-9]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin policy.
    ///
    /// # Errors
    /// [`SchedulingError::InvalidConfig`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, SchedulingError> {
        if quantum <= 0 {
            return Err(SchedulingError::InvalidConfig(format!(
                "quantum must be positive, got {quantum}"
            )));
        }
        Ok(Self { quantum })
    }

    /// The time slice.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    fn simulate<'a>(&self, processes: &'a [Process]) -> Simulation<'a> {
        let mut sim = Simulation::new(processes);
        let mut arrivals = ArrivalQueue::new(processes);
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut now = 0;

        loop {
            while let Some(i) = arrivals.pop_arrived(now) {
                ready.push_back(i);
            }

            if let Some(i) = ready.pop_front() {
                now += sim.dispatch(i, now, self.quantum);
                if !sim.state(i).is_finished() {
                    while let Some(j) = arrivals.pop_arrived(now) {
                        ready.push_back(j);
                    }
                    debug!(
                        "{} quantum expired at {now}, {} left",
                        processes[i].id,
                        sim.state(i).remaining_time
                    );
                    ready.push_back(i);
                }
            } else if let Some(next) = arrivals.next_arrival() {
                sim.idle(now, next);
                now = next;
            } else {
                break;
            }
        }

        sim
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn run(&self, processes: &[Process]) -> Result<RunResult, SchedulingError> {
        run_checked(self.name(), self.requires_priority(), processes, |p| self.simulate(p))
    }
}
