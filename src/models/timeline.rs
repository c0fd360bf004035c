//! Execution timeline model.
//!
//! A timeline is an ordered sequence of [`TimelineEntry`] values, each
//! recording who held the CPU (a process or nobody) over a half-open interval
//! `[start_time, end_time)`. Policies append raw entries at slice or unit
//! granularity; [`Timeline::consolidate`] reduces them to maximal
//! same-label intervals for reporting.
//!
//! A complete run's timeline is contiguous: it starts at 0 and each entry
//! ends where the next one begins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who held the CPU during a timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimelineLabel {
    /// No process was runnable.
    Idle,
    /// The process with this id was executing.
    Process(String),
}

impl TimelineLabel {
    /// Whether this is the idle marker.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, TimelineLabel::Idle)
    }

    /// The process id, if this is not idle.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            TimelineLabel::Idle => None,
            TimelineLabel::Process(id) => Some(id),
        }
    }
}

impl fmt::Display for TimelineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineLabel::Idle => f.write_str("Idle"),
            TimelineLabel::Process(id) => f.write_str(id),
        }
    }
}

/// One interval of CPU ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process id or idle marker.
    pub label: TimelineLabel,
    /// Interval start (inclusive).
    pub start_time: i64,
    /// Interval end (exclusive).
    pub end_time: i64,
}

impl TimelineEntry {
    /// Creates an entry for a process.
    pub fn process(id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            label: TimelineLabel::Process(id.into()),
            start_time,
            end_time,
        }
    }

    /// Creates an idle entry.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            label: TimelineLabel::Idle,
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether this entry is idle time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.label.is_idle()
    }
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.label, self.start_time, self.end_time)
    }
}

/// An ordered, append-only sequence of timeline entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: TimelineEntry) {
        debug_assert!(
            entry.end_time > entry.start_time,
            "empty timeline entry {entry}"
        );
        self.entries.push(entry);
    }

    /// Appends a process entry.
    pub fn record(&mut self, id: &str, start_time: i64, end_time: i64) {
        self.push(TimelineEntry::process(id, start_time, end_time));
    }

    /// Appends an idle entry.
    pub fn record_idle(&mut self, start_time: i64, end_time: i64) {
        self.push(TimelineEntry::idle(start_time, end_time));
    }

    /// The entries in order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges adjacent, touching entries with the same label.
    ///
    /// Zero-length entries are dropped. The result has no two neighbouring
    /// entries sharing a label, and consolidating it again is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_schedule::models::{Timeline, TimelineEntry};
    ///
    /// let raw: Timeline = vec![
    ///     TimelineEntry::process("P0", 0, 1),
    ///     TimelineEntry::process("P0", 1, 2),
    ///     TimelineEntry::idle(2, 3),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(raw.consolidate().to_string(), "[P0:0-2, Idle:2-3]");
    /// ```
    pub fn consolidate(&self) -> Timeline {
        let mut merged: Vec<TimelineEntry> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.duration() <= 0 {
                continue;
            }
            match merged.last_mut() {
                Some(run) if run.label == entry.label && run.end_time == entry.start_time => {
                    run.end_time = entry.end_time;
                }
                _ => merged.push(entry.clone()),
            }
        }
        Timeline { entries: merged }
    }

    /// End of the last entry (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.is_idle())
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Total time any process was executing.
    pub fn busy_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| !e.is_idle())
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Entries belonging to the given process.
    pub fn entries_for(&self, id: &str) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.label.process_id() == Some(id))
            .collect()
    }

    /// Whether the entries start at 0 and each begins where the previous ended.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 0;
        for entry in &self.entries {
            if entry.start_time != expected || entry.end_time <= entry.start_time {
                return false;
            }
            expected = entry.end_time;
        }
        true
    }

    /// Number of hand-overs from one process to a different one.
    ///
    /// Idle gaps are ignored: `P0, Idle, P0` is not a switch.
    pub fn context_switches(&self) -> usize {
        let mut previous: Option<&str> = None;
        let mut switches = 0;
        for id in self.entries.iter().filter_map(|e| e.label.process_id()) {
            if previous.is_some_and(|p| p != id) {
                switches += 1;
            }
            previous = Some(id);
        }
        switches
    }
}

impl FromIterator<TimelineEntry> for Timeline {
    fn from_iter<I: IntoIterator<Item = TimelineEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_log(labels: &[&str]) -> Timeline {
        labels
            .iter()
            .enumerate()
            .map(|(t, &l)| {
                let t = t as i64;
                if l == "Idle" {
                    TimelineEntry::idle(t, t + 1)
                } else {
                    TimelineEntry::process(l, t, t + 1)
                }
            })
            .collect()
    }

    #[test]
    fn test_consolidate_units() {
        let raw = unit_log(&["P0", "P1", "P1", "P1", "P1", "P0", "P0"]);
        let c = raw.consolidate();
        assert_eq!(c.to_string(), "[P0:0-1, P1:1-5, P0:5-7]");
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_consolidate_slices_and_idle() {
        let raw: Timeline = vec![
            TimelineEntry::idle(0, 1),
            TimelineEntry::idle(1, 2),
            TimelineEntry::process("P0", 2, 5),
            TimelineEntry::process("P0", 5, 7),
            TimelineEntry::idle(7, 8),
            TimelineEntry::process("P0", 8, 9),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            raw.consolidate().to_string(),
            "[Idle:0-2, P0:2-7, Idle:7-8, P0:8-9]"
        );
    }

    #[test]
    fn test_consolidate_idempotent() {
        let raw = unit_log(&["Idle", "P0", "P0", "P2", "Idle", "Idle", "P2"]);
        let once = raw.consolidate();
        assert_eq!(once.consolidate(), once);
    }

    #[test]
    fn test_consolidate_empty() {
        assert!(Timeline::new().consolidate().is_empty());
    }

    #[test]
    fn test_queries() {
        let t = unit_log(&["Idle", "P0", "P0", "P1", "Idle", "P0"]).consolidate();
        assert_eq!(t.makespan(), 6);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.busy_time(), 4);
        assert_eq!(t.entries_for("P0").len(), 2);
        assert_eq!(t.entries_for("P9").len(), 0);
        assert!(t.is_contiguous());
        // P0 -> P1 -> P0
        assert_eq!(t.context_switches(), 2);
    }

    #[test]
    fn test_context_switch_ignores_idle_gap() {
        let t = unit_log(&["P0", "Idle", "P0"]).consolidate();
        assert_eq!(t.context_switches(), 0);
    }

    #[test]
    fn test_not_contiguous() {
        let gap: Timeline = vec![
            TimelineEntry::process("P0", 0, 2),
            TimelineEntry::process("P1", 3, 4),
        ]
        .into_iter()
        .collect();
        assert!(!gap.is_contiguous());

        let late_start: Timeline = vec![TimelineEntry::process("P0", 1, 2)]
            .into_iter()
            .collect();
        assert!(!late_start.is_contiguous());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(TimelineLabel::Idle.to_string(), "Idle");
        assert_eq!(TimelineEntry::process("P3", 4, 9).to_string(), "P3:4-9");
    }
}
