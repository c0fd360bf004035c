//! CPU scheduling domain models.
//!
//! Provides the data types exchanged between callers and the scheduling
//! policies: the immutable process input, the per-run state the engine
//! mutates, the outcome it reports, and the execution timeline.
//!
//! # Lifecycle
//!
//! | Type | Owner | Mutability |
//! |------|-------|-----------|
//! | `Process` | caller | immutable input |
//! | `ProcessState` | running policy | mutated during one run |
//! | `ProcessOutcome` | caller | computed once on completion |
//! | `Timeline` | running policy, then caller | append-only, then consolidated |
//! | `RunResult` | caller | read-only |

mod process;
mod run;
mod timeline;

pub use process::{Process, ProcessOutcome, ProcessState};
pub use run::RunResult;
pub use timeline::{Timeline, TimelineEntry, TimelineLabel};
