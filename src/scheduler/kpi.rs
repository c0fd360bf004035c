//! Run quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest finish time |
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Turnaround | Mean(finish - arrival) |
//! | Avg Response | Mean(first start - arrival) |
//! | Max Waiting | Largest single waiting time |
//! | Idle Time | Timeline time with no process running |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes / makespan |
//! | Context Switches | Hand-overs between different processes |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::RunResult;

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Latest finish time.
    pub makespan: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time (first start - arrival).
    pub avg_response_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// Total idle time.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of hand-overs between different processes.
    pub context_switches: usize,
}

impl RunMetrics {
    /// Computes KPIs from a completed run.
    pub fn calculate(result: &RunResult) -> Self {
        let n = result.outcomes.len();
        let makespan = result.makespan();
        let idle_time = result.timeline.idle_time();

        let avg_response_time = if n == 0 {
            0.0
        } else {
            let total: f64 = result
                .outcomes
                .iter()
                .map(|o| o.response_time() as f64)
                .sum();
            total / n as f64
        };

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                result.timeline.busy_time() as f64 / makespan as f64,
                n as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            avg_waiting_time: result.avg_waiting_time,
            avg_turnaround_time: result.avg_turnaround_time,
            avg_response_time,
            max_waiting_time: result
                .outcomes
                .iter()
                .map(|o| o.waiting_time)
                .max()
                .unwrap_or(0),
            idle_time,
            cpu_utilization,
            throughput,
            context_switches: result.timeline.context_switches(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, RunResult, Timeline};
    use crate::scheduler::{RoundRobin, SchedulingPolicy, SjfPreemptive};

    #[test]
    fn test_metrics_round_robin_example() {
        let processes = vec![
            Process::new("P0", 0, 5),
            Process::new("P1", 1, 3),
            Process::new("P2", 2, 1),
        ];
        let r = RoundRobin::default().run(&processes).unwrap();
        let m = RunMetrics::calculate(&r);

        assert_eq!(m.makespan, 9);
        assert_eq!(m.idle_time, 0);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 9.0).abs() < 1e-10);
        // responses: P0 0, P1 3-1=2, P2 6-2=4
        assert!((m.avg_response_time - 2.0).abs() < 1e-10);
        assert_eq!(m.max_waiting_time, 4);
        // P0 -> P1 -> P2 -> P0
        assert_eq!(m.context_switches, 3);
    }

    #[test]
    fn test_metrics_with_idle() {
        let processes = vec![Process::new("P0", 0, 2), Process::new("P1", 6, 2)];
        let r = SjfPreemptive.run(&processes).unwrap();
        let m = RunMetrics::calculate(&r);

        assert_eq!(m.makespan, 8);
        assert_eq!(m.idle_time, 4);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((m.avg_waiting_time - 0.0).abs() < 1e-10);
        assert_eq!(m.context_switches, 1);
    }

    #[test]
    fn test_metrics_empty() {
        let m = RunMetrics::calculate(&RunResult::new(Vec::new(), Timeline::new()));
        assert_eq!(m.makespan, 0);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((m.throughput - 0.0).abs() < 1e-10);
        assert_eq!(m.context_switches, 0);
    }
}
