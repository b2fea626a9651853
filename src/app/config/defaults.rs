// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

// ==========================================================================
// Feedback Submission
// ==========================================================================

/// Default HTTP request timeout for feedback submissions (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Logging
// ==========================================================================

/// Default `tracing` filter directive when neither `RUST_LOG` nor the config
/// file provide one.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
};
