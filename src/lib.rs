//! blogd - a minimal in-memory blog post API
//!
//! The post collection lives in memory for the lifetime of the process;
//! there is no persistence and no teardown step.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
