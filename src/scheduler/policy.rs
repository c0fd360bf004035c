//! Policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::SchedulingError;

/// The four supported policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// Round Robin with a fixed quantum.
    RoundRobin,
    /// Shortest Job First, non-preemptive.
    SjfNonPreemptive,
    /// Static priority, non-preemptive.
    PriorityNonPreemptive,
    /// Shortest Remaining Time First (preemptive SJF).
    SjfPreemptive,
}

impl Policy {
    /// Every policy, in presentation order.
    pub const ALL: [Policy; 4] = [
        Policy::RoundRobin,
        Policy::SjfNonPreemptive,
        Policy::PriorityNonPreemptive,
        Policy::SjfPreemptive,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::RoundRobin => "Round Robin",
            Policy::SjfNonPreemptive => "SJF Non-Preemptive",
            Policy::PriorityNonPreemptive => "Priority Non-Preemptive",
            Policy::SjfPreemptive => "SJF Preemptive",
        }
    }

    /// Whether the policy reads process priorities.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Policy::PriorityNonPreemptive)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SchedulingError;

    /// Accepts display names in any case/punctuation plus short aliases
    /// (`rr`, `sjf`, `priority`, `srtf`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "roundrobin" | "rr" => Ok(Policy::RoundRobin),
            "sjfnonpreemptive" | "sjf" | "spt" => Ok(Policy::SjfNonPreemptive),
            "prioritynonpreemptive" | "priority" => Ok(Policy::PriorityNonPreemptive),
            "sjfpreemptive" | "srtf" | "srt" => Ok(Policy::SjfPreemptive),
            _ => Err(SchedulingError::InvalidConfig(format!(
                "unknown policy '{s}'"
            ))),
        }
    }
}
