pub mod config;
pub mod error;
pub mod hexcode;
pub mod logging;
pub mod probe;

pub use error::ProbeError;
pub use probe::{ProbeFailure, ProbeKind, Report};
