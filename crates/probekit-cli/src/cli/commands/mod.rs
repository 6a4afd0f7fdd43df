//! CLI command handlers.

mod completions;
mod hex;
mod probe;

pub use completions::{run_completions, run_manpage};
pub use hex::run_hex;
pub use probe::run_probes;
