mod engine;
mod signal;

pub use engine::{FuzzRunner, RunOutcome, RunSummary};
pub use signal::{StopSignal, wait_for_stop};
