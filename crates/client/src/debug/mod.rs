//! Debugging support for the client
//!
//! The HTTP connection keeps an in-memory operation log (ring buffer) of
//! its most recent requests.

pub mod operation_log;

pub use operation_log::{OperationEntry, OperationLog};
