//! Selection rules and rule engine for ready-queue dispatching.
//!
//! Every non-FIFO policy boils down to "pick the ready process with the
//! smallest key": SJF keys on burst time, SRTF on remaining time, the
//! priority policy on priority, each falling back to arrival time and then
//! to input order. Rules express one key each; a [`RuleEngine`] chains them.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, Candidate, RuleEngine};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fcfs);
//!
//! let ready = [
//!     Candidate { index: 0, arrival_time: 0, burst_time: 7, remaining_time: 7, priority: None },
//!     Candidate { index: 2, arrival_time: 4, burst_time: 1, remaining_time: 1, priority: None },
//! ];
//! assert_eq!(engine.select_best(ready).map(|c| c.index), Some(2));
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::{Process, ProcessState};
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A read-only view of a ready process, as seen by selection rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Index of the process in the input slice.
    pub index: usize,
    /// Arrival time.
    pub arrival_time: i64,
    /// Original CPU demand.
    pub burst_time: i64,
    /// CPU time still owed.
    pub remaining_time: i64,
    /// Priority (lower = more urgent).
    pub priority: Option<i32>,
}

impl Candidate {
    /// Builds the view of a process and its current state.
    pub fn new(process: &Process, state: &ProcessState) -> Self {
        Self {
            index: state.index,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            remaining_time: state.remaining_time,
            priority: process.priority,
        }
    }
}

/// A rule that scores ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "SRT").
    fn name(&self) -> &'static str;

    /// Scores a candidate. Lower = dispatched first.
    fn evaluate(&self, candidate: &Candidate) -> RuleScore;
}
