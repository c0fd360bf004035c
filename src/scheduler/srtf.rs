//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! The clock advances one unit at a time. At each unit, arrivals join the
//! ready set, the process with the smallest `(remaining, arrival)` (then
//! input order) runs for one unit, and a finished process leaves the ready
//! set for good. A newly arrived process with less remaining work displaces
//! the running one at its arrival instant. With nothing ready, the clock
//! jumps to the next arrival.
//!
//! # Complexity
//! O(n * (sum(burst))) selections in the worst case.

use log::{debug, trace};

use super::{run_checked, ArrivalQueue, SchedulingPolicy, Simulation};
use crate::dispatching::{Candidate, RuleEngine};
use crate::models::{Process, RunResult};
use crate::validation::SchedulingError;

/// Shortest Remaining Time First.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{SchedulingPolicy, SjfPreemptive};
///
/// let processes = vec![Process::new("P0", 0, 8), Process::new("P1", 1, 4)];
/// let result = SjfPreemptive.run(&processes).unwrap();
/// assert_eq!(result.timeline.to_string(), "[P0:0-1, P1:1-5, P0:5-12]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SjfPreemptive;

impl SjfPreemptive {
    fn simulate(processes: &[Process]) -> Simulation<'_> {
        let engine = RuleEngine::shortest_remaining_first();
        let mut sim = Simulation::new(processes);
        let mut arrivals = ArrivalQueue::new(processes);
        let mut ready: Vec<usize> = Vec::new();
        let mut running: Option<usize> = None;
        let mut now = 0;

        loop {
            while let Some(i) = arrivals.pop_arrived(now) {
                ready.push(i);
            }

            let best = engine.select_best(
                ready
                    .iter()
                    .map(|&i| Candidate::new(&processes[i], sim.state(i))),
            );

            let Some(chosen) = best else {
                match arrivals.next_arrival() {
                    Some(next) => {
                        sim.idle(now, next);
                        now = next;
                        running = None;
                        continue;
                    }
                    None => break,
                }
            };

            let i = chosen.index;
            if let Some(prev) = running.filter(|&prev| prev != i) {
                debug!(
                    "{} preempts {} at {now} ({} < {} remaining)",
                    processes[i].id,
                    processes[prev].id,
                    chosen.remaining_time,
                    sim.state(prev).remaining_time
                );
            }
            if !sim.state(i).started() {
                debug!("{} starts at {now}", processes[i].id);
            }

            now += sim.dispatch(i, now, 1);
            trace!(
                "{} ran to {now}, {} left",
                processes[i].id,
                sim.state(i).remaining_time
            );

            if sim.state(i).is_finished() {
                ready.retain(|&j| j != i);
                running = None;
            } else {
                running = Some(i);
            }
        }

        sim
    }
}

impl SchedulingPolicy for SjfPreemptive {
    fn name(&self) -> &'static str {
        "SJF Preemptive"
    }

    fn run(&self, processes: &[Process]) -> Result<RunResult, SchedulingError> {
        run_checked(self.name(), self.requires_priority(), processes, Self::simulate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorter_arrival_preempts() {
        let processes = vec![Process::new("P0", 0, 8), Process::new("P1", 1, 4)];
        let r = SjfPreemptive.run(&processes).unwrap();

        assert_eq!(r.timeline.to_string(), "[P0:0-1, P1:1-5, P0:5-12]");
        let p0 = r.outcome("P0").unwrap();
        assert_eq!(p0.start_time, 0);
        assert_eq!(p0.finish_time, 12);
        assert_eq!(p0.waiting_time, 4);
        let p1 = r.outcome("P1").unwrap();
        assert_eq!(p1.start_time, 1);
        assert_eq!(p1.waiting_time, 0);
        assert_eq!(r.timeline.context_switches(), 2);
    }

    #[test]
    fn test_equal_remaining_does_not_preempt() {
        // At t=2 P0 has 3 left and P1 arrives with 3: earlier arrival keeps the CPU.
        let processes = vec![Process::new("P0", 0, 5), Process::new("P1", 2, 3)];
        let r = SjfPreemptive.run(&processes).unwrap();
        assert_eq!(r.timeline.to_string(), "[P0:0-5, P1:5-8]");
    }

    #[test]
    fn test_classic_workload() {
        // Silberschatz et al. SRTF example.
        let processes = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
            Process::new("P4", 3, 5),
        ];
        let r = SjfPreemptive.run(&processes).unwrap();
        assert_eq!(
            r.timeline.to_string(),
            "[P1:0-1, P2:1-5, P4:5-10, P1:10-17, P3:17-26]"
        );
        // (9 + 0 + 15 + 2) / 4
        assert!((r.avg_waiting_time - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_idle_then_arrival() {
        let processes = vec![Process::new("P0", 0, 1), Process::new("P1", 4, 2)];
        let r = SjfPreemptive.run(&processes).unwrap();
        assert_eq!(r.timeline.to_string(), "[P0:0-1, Idle:1-4, P1:4-6]");
    }

    #[test]
    fn test_priority_ignored() {
        let processes = vec![
            Process::new("P0", 0, 3).with_priority(9),
            Process::new("P1", 0, 1).with_priority(1),
            Process::new("P2", 0, 2),
        ];
        let r = SjfPreemptive.run(&processes).unwrap();
        assert_eq!(r.timeline.to_string(), "[P1:0-1, P2:1-3, P0:3-6]");
    }
}
