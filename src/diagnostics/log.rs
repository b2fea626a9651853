// SPDX-License-Identifier: MPL-2.0
//! In-memory feedback event log.

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::domain::feedback::MessageId;

/// Bounded log of feedback events, oldest first.
///
/// Nothing here touches the disk; [`DiagnosticsLog::to_json`] lets the host
/// hand the events to whatever reporting it has.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: CircularBuffer<DiagnosticEvent>,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
        }
    }

    /// Records an event stamped with the current time.
    pub fn record(&mut self, message_id: &MessageId, kind: DiagnosticEventKind) {
        self.push(DiagnosticEvent::new(message_id, kind));
    }

    pub fn push(&mut self, event: DiagnosticEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Number of submission failures still in the log.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.events.iter().filter(|e| e.kind.is_failure()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serializes the retained events as a pretty JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.events.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}
