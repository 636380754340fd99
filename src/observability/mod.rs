//! Observability for blogd
//!
//! Structured JSON logging for server lifecycle and store mutations.

mod logger;

pub use logger::{Logger, Severity};
