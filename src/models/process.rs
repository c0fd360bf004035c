//! Process model.
//!
//! A process is one simulated task competing for a single CPU. The input
//! record ([`Process`]) is immutable; per-run bookkeeping lives in
//! [`ProcessState`] and the final figures in [`ProcessOutcome`].
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process submitted to the simulator.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
///
/// let p = Process::new("P0", 0, 5).with_priority(2);
/// assert_eq!(p.burst_time, 5);
/// assert_eq!(p.priority, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). Only the priority policy reads it.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Mutable per-run bookkeeping for one process.
///
/// Created fresh by every policy run from the input snapshot; callers never
/// see it mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// Index of the process in the input slice.
    pub index: usize,
    /// CPU time still owed. `0 <= remaining_time <= burst_time`.
    pub remaining_time: i64,
    /// Time of the first executed unit, once started.
    pub start_time: Option<i64>,
    /// Time at which `remaining_time` reached zero.
    pub finish_time: Option<i64>,
}

impl ProcessState {
    /// Creates the initial state for the process at `index`.
    pub fn new(index: usize, process: &Process) -> Self {
        Self {
            index,
            remaining_time: process.burst_time,
            start_time: None,
            finish_time: None,
        }
    }

    /// Whether the process has received any CPU time yet.
    #[inline]
    pub fn started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Executes the process for up to `units` starting at `now`.
    ///
    /// Returns the number of units actually consumed, which is
    /// `min(units, remaining_time)`. Records the start time on first
    /// execution and the finish time when the process completes.
    pub fn execute(&mut self, now: i64, units: i64) -> i64 {
        let ran = units.min(self.remaining_time).max(0);
        if ran == 0 {
            return 0;
        }
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
        self.remaining_time -= ran;
        if self.remaining_time == 0 {
            self.finish_time = Some(now + ran);
        }
        ran
    }
}

/// Final scheduling figures for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub id: String,
    /// Arrival time (copied from the input).
    pub arrival_time: i64,
    /// Burst time (copied from the input).
    pub burst_time: i64,
    /// Priority (copied from the input).
    pub priority: Option<i32>,
    /// Time of the first executed unit.
    pub start_time: i64,
    /// Completion time.
    pub finish_time: i64,
    /// `finish_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ProcessOutcome {
    /// Builds the outcome of a completed process.
    ///
    /// Returns `None` if the state never started or never finished.
    pub fn from_state(process: &Process, state: &ProcessState) -> Option<Self> {
        let start_time = state.start_time?;
        let finish_time = state.finish_time?;
        let turnaround_time = finish_time - process.arrival_time;
        Some(Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            finish_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        })
    }

    /// Time from arrival until the first executed unit.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}
