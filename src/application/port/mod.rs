// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`feedback`]: Submitting feedback payloads to a backend
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so one adapter can serve every widget
//! - Methods return a boxed `'static` future; callers run it through Iced's
//!   `Task::perform`
//!
//! # Example
//!
//! ```
//! use message_feedback::application::port::{FeedbackSubmitter, SubmissionError};
//! use message_feedback::domain::feedback::{FeedbackPayload, MessageId};
//!
//! let reject_all = |_id: MessageId, _payload: FeedbackPayload| async {
//!     Err::<(), _>(SubmissionError::Rejected("read-only mode".into()))
//! };
//! let _future = reject_all.submit(MessageId::new("m-1"), FeedbackPayload::positive());
//! ```

pub mod feedback;

pub use feedback::{FeedbackSubmitter, SubmissionError, SubmissionResult};
