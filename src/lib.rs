//! CPU scheduling simulation.
//!
//! Simulates a single CPU under four classic policies and reports, per
//! process, waiting, turnaround and finish times, plus a consolidated
//! execution timeline and fleet-wide averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessState`, `ProcessOutcome`,
//!   `Timeline`, `TimelineEntry`, `RunResult`
//! - **`dispatching`**: Selection rules (FCFS, SPT, SRT, priority) and the
//!   rule engine that chains them into tie-breaking orders
//! - **`scheduler`**: The policies (Round Robin, SJF, Priority, SRTF), the
//!   configured `Simulator`, and `RunMetrics`
//! - **`validation`**: Input checks before a run, invariant checks after it
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{Policy, RunMetrics, Simulator};
//!
//! let processes = vec![
//!     Process::new("P0", 0, 8),
//!     Process::new("P1", 1, 4),
//! ];
//! let result = Simulator::new().run(Policy::SjfPreemptive, &processes).unwrap();
//! assert_eq!(result.timeline.to_string(), "[P0:0-1, P1:1-5, P0:5-12]");
//!
//! let kpi = RunMetrics::calculate(&result);
//! assert_eq!(kpi.makespan, 12);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use validation::SchedulingError;
