// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`feedback`]: Feedback vocabulary ([`RatingCriterion`](feedback::RatingCriterion),
//!   [`StarRating`](feedback::StarRating), [`CategoryTag`](feedback::CategoryTag))
//!   and the validated [`FeedbackPayload`](feedback::FeedbackPayload)

pub mod diagnostics;
pub mod feedback;
