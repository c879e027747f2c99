//! Recruiting status, phase progression, and school fit scoring.
//!
//! Every function under [`engine`] is pure: inputs are plain records supplied
//! by the caller and results are plain records handed back. Nothing here owns
//! state or performs IO, apart from the CSV school-list importer and the
//! process-level config/telemetry helpers used by the service binary.

pub mod config;
pub mod engine;
pub mod error;
pub mod telemetry;
