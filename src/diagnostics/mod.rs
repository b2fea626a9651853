// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the feedback widgets.
//!
//! Widget activity (form opened, submission requested, succeeded or failed)
//! is kept in a memory-bounded ring buffer so an operator can inspect what
//! happened to feedback that never reached the backend. Failures are also
//! reported through `tracing` at the point they are handled.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: generic ring buffer with bounded capacity
//! - [`DiagnosticEvent`]: timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsLog`]: the log owned by the host application

mod buffer;
mod events;
mod log;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
pub use log::DiagnosticsLog;
