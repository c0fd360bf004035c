//! Input validation and run verification.
//!
//! Checks process sets before scheduling and completed runs afterwards.
//!
//! Input checks ([`validate_processes`]) detect:
//! - Empty input
//! - Duplicate or empty IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities (when the policy needs them)
//! - Clock overflow (latest arrival plus total burst beyond `i64::MAX`)
//!
//! Run checks ([`verify_run`]) detect engine bugs: timeline gaps, broken
//! conservation (`turnaround = waiting + burst`), negative waiting times and
//! CPU time that does not add up to the burst.

use log::warn;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::models::{Process, RunResult};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a burst time of zero or less.
    NonPositiveBurst,
    /// The policy needs a priority and the process has none.
    MissingPriority,
    /// The number of processes is outside the configured bounds.
    ProcessCountOutOfRange,
    /// The simulation clock could run past `i64::MAX`.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors returned by scheduling operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// The process set failed validation. Carries every detected problem.
    InvalidInput(Vec<ValidationError>),
    /// A configuration parameter is out of range (e.g. quantum <= 0).
    InvalidConfig(String),
    /// A completed run broke a scheduling invariant. Indicates an engine bug.
    InvariantViolation(String),
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingError::InvalidInput(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            SchedulingError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            SchedulingError::InvariantViolation(msg) => {
                write!(f, "scheduling invariant violated: {msg}")
            }
        }
    }
}

impl std::error::Error for SchedulingError {}

impl From<Vec<ValidationError>> for SchedulingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulingError::InvalidInput(errors)
    }
}

/// Validates a process set before scheduling.
///
/// Checks:
/// 1. At least one process
/// 2. No empty or duplicate IDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
/// 5. Every process has a priority, if `require_priority` is set
/// 6. `max(arrival) + sum(burst)` fits in `i64`; no run can end later
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process], require_priority: bool) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process with empty ID",
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst time {}", p.id, p.burst_time),
            ));
        }

        if require_priority && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival.max(0), |t, p| t.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Latest arrival {latest_arrival} plus total burst time exceeds {}",
                i64::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        warn!("rejected process set: {} problem(s)", errors.len());
        Err(errors)
    }
}

/// Checks the number of processes against inclusive `(min, max)` bounds.
pub fn validate_process_count(count: usize, (min, max): (usize, usize)) -> ValidationResult {
    if (min..=max).contains(&count) {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::ProcessCountOutOfRange,
            format!("The number of processes must be between {min} and {max}, got {count}"),
        )])
    }
}

/// Verifies that a completed run is a correct single-CPU schedule.
///
/// Checks:
/// 1. One outcome per process, in input order
/// 2. `finish = arrival + turnaround`, `turnaround = waiting + burst`, `waiting >= 0`
/// 3. `arrival <= start` and `start + burst <= finish`
/// 4. Timeline starts at 0, is gapless, and has no neighbours sharing a label
/// 5. Timeline ends at the latest finish time
/// 6. Each process's timeline entries add up to its burst time and end at its finish
pub fn verify_run(processes: &[Process], result: &RunResult) -> Result<(), SchedulingError> {
    let violation = |msg: String| Err(SchedulingError::InvariantViolation(msg));

    if processes.len() != result.outcomes.len() {
        return violation(format!(
            "{} processes but {} outcomes",
            processes.len(),
            result.outcomes.len()
        ));
    }

    for (p, o) in processes.iter().zip(&result.outcomes) {
        if p.id != o.id {
            return violation(format!("outcome '{}' in place of '{}'", o.id, p.id));
        }
        if o.waiting_time.checked_add(p.burst_time) != Some(o.turnaround_time)
            || p.arrival_time.checked_add(o.turnaround_time) != Some(o.finish_time)
        {
            return violation(format!("conservation broken for '{}'", p.id));
        }
        if o.waiting_time < 0 {
            return violation(format!("'{}' has negative waiting time", p.id));
        }
        let latest_start = o.finish_time.checked_sub(p.burst_time);
        if o.start_time < p.arrival_time || latest_start.map_or(true, |t| o.start_time > t) {
            return violation(format!(
                "'{}' ran outside [{}, {}]",
                p.id, p.arrival_time, o.finish_time
            ));
        }
    }

    let timeline = &result.timeline;
    if !timeline.is_contiguous() {
        return violation(format!("timeline has a gap: {timeline}"));
    }
    if timeline
        .entries()
        .windows(2)
        .any(|w| w[0].label == w[1].label)
    {
        return violation(format!("timeline is not consolidated: {timeline}"));
    }
    if timeline.makespan() != result.makespan() {
        return violation(format!(
            "timeline ends at {} but last process finishes at {}",
            timeline.makespan(),
            result.makespan()
        ));
    }

    let mut cpu: HashMap<&str, (i64, i64)> = HashMap::new();
    for entry in timeline {
        if let Some(id) = entry.label.process_id() {
            let slot = cpu.entry(id).or_insert((0, 0));
            slot.0 += entry.duration();
            slot.1 = slot.1.max(entry.end_time);
        }
    }
    for o in &result.outcomes {
        match cpu.get(o.id.as_str()) {
            Some(&(ran, last_end)) if ran == o.burst_time && last_end == o.finish_time => {}
            Some(&(ran, _)) => {
                return violation(format!(
                    "'{}' ran {} units, burst is {}",
                    o.id, ran, o.burst_time
                ))
            }
            None => return violation(format!("'{}' never appears in the timeline", o.id)),
        }
    }
    if cpu.len() != result.outcomes.len() {
        return violation("timeline mentions unknown processes".to_string());
    }

    Ok(())
}
