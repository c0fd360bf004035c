//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{Candidate, RuleScore, SelectionRule};

/// First Come, First Served.
///
/// Prioritizes earlier arrivals. Used as the tie-breaker of every policy.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SelectionRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, candidate: &Candidate) -> RuleScore {
        candidate.arrival_time
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with the smaller total burst. Non-preemptive SJF.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl SelectionRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, candidate: &Candidate) -> RuleScore {
        candidate.burst_time
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion. Re-evaluated every time
/// unit, this is preemptive SJF.
#[derive(Debug, Clone, Copy)]
pub struct Srt;

impl SelectionRule for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, candidate: &Candidate) -> RuleScore {
        candidate.remaining_time
    }
}

/// Static priority (lower value = more urgent).
///
/// Processes without a priority sort last.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule;

impl SelectionRule for PriorityRule {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, candidate: &Candidate) -> RuleScore {
        candidate
            .priority
            .map(RuleScore::from)
            .unwrap_or(RuleScore::MAX)
    }
}
