//! Soller catalog server library.
//!
//! Exposed as a library so integration tests can build the router
//! in-process; the `soller` binary is a thin wrapper around this.

pub mod api;
pub mod metrics;
pub mod state;
