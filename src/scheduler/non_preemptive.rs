//! Shared run-to-completion loop for non-preemptive policies.

use log::debug;

use super::{ArrivalQueue, Simulation};
use crate::dispatching::{Candidate, RuleEngine};
use crate::models::Process;

/// Repeatedly dispatches the best arrived process (per `engine`) until all
/// processes have run to completion.
///
/// With nothing ready, the clock jumps to the next arrival.
pub(crate) fn run_to_completion<'a>(
    processes: &'a [Process],
    engine: &RuleEngine,
) -> Simulation<'a> {
    let mut sim = Simulation::new(processes);
    let mut arrivals = ArrivalQueue::new(processes);
    let mut ready: Vec<usize> = Vec::new();
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

        match best {
            Some(chosen) => {
                let i = chosen.index;
                ready.retain(|&j| j != i);
                debug!(
                    "{} selected at {now} over {} waiting",
                    processes[i].id,
                    ready.len()
                );
                now += sim.dispatch(i, now, processes[i].burst_time);
            }
            None => match arrivals.next_arrival() {
                Some(next) => {
                    sim.idle(now, next);
                    now = next;
                }
                None => break,
            },
        }
    }

    sim
}
