// SPDX-License-Identifier: MPL-2.0
//! Chat transcript shown by the host window.
//!
//! A transcript file is TOML:
//!
//! ```toml
//! conversation_id = "conv-42"   # optional
//!
//! [[messages]]
//! id = "m1"
//! role = "user"
//! text = "How do I reverse a Vec?"
//!
//! [[messages]]
//! id = "m2"
//! role = "assistant"
//! text = "Call `v.reverse()` to reverse in place."
//! ```

use crate::domain::feedback::{ConversationId, MessageId};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub conversation_id: Option<ConversationId>,
    pub messages: Vec<Entry>,
}

#[derive(Deserialize)]
struct RawTranscript {
    #[serde(default)]
    conversation_id: Option<String>,
    #[serde(default)]
    messages: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    role: Role,
    text: String,
}

impl Transcript {
    /// Reads and validates a transcript file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses transcript TOML.
    ///
    /// Message ids must be non-empty and unique, since each assistant message
    /// keys its own feedback widget.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawTranscript =
            toml::from_str(content).map_err(|err| Error::Transcript(err.to_string()))?;

        let mut seen = HashSet::new();
        let mut messages = Vec::with_capacity(raw.messages.len());
        for entry in raw.messages {
            let id = entry.id.trim();
            if id.is_empty() {
                return Err(Error::Transcript("message id must not be empty".into()));
            }
            if !seen.insert(id.to_string()) {
                return Err(Error::Transcript(format!("duplicate message id: {id}")));
            }
            messages.push(Entry {
                id: MessageId::new(id),
                role: entry.role,
                text: entry.text,
            });
        }

        let conversation_id = raw
            .conversation_id
            .filter(|id| !id.trim().is_empty())
            .map(ConversationId::new);

        Ok(Self {
            conversation_id,
            messages,
        })
    }

    /// Built-in two-turn conversation used when no file is given.
    #[must_use]
    pub fn sample() -> Self {
        let entry = |id: &str, role, text: &str| Entry {
            id: MessageId::new(id),
            role,
            text: text.to_string(),
        };

        Self {
            conversation_id: Some(ConversationId::new("sample-conversation")),
            messages: vec![
                entry(
                    "sample-1",
                    Role::User,
                    "What is the difference between `String` and `&str` in Rust?",
                ),
                entry(
                    "sample-2",
                    Role::Assistant,
                    "`String` is an owned, growable UTF-8 buffer allocated on the heap. \
                     `&str` is a borrowed view into UTF-8 data owned by something else, \
                     such as a `String` or a string literal baked into the binary.",
                ),
                entry(
                    "sample-3",
                    Role::User,
                    "When should a function take `&str` instead of `String`?",
                ),
                entry(
                    "sample-4",
                    Role::Assistant,
                    "Take `&str` when the function only reads the text. Callers can then \
                     pass literals and borrowed `String`s without allocating. Take \
                     `String` when the function needs to keep or modify the value.",
                ),
            ],
        }
    }

    /// Assistant messages, in transcript order.
    pub fn assistant_messages(&self) -> impl Iterator<Item = &Entry> {
        self.messages
            .iter()
            .filter(|entry| entry.role == Role::Assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_messages_and_conversation() {
        let transcript = Transcript::parse(
            r#"
            conversation_id = "conv-1"

            [[messages]]
            id = "u1"
            role = "user"
            text = "hi"

            [[messages]]
            id = "a1"
            role = "assistant"
            text = "hello"
            "#,
        )
        .expect("parse");

        assert_eq!(
            transcript.conversation_id,
            Some(ConversationId::new("conv-1"))
        );
        assert_eq!(transcript.messages.len(), 2);
        assert_eq!(transcript.messages[1].role, Role::Assistant);
        assert_eq!(
            transcript
                .assistant_messages()
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>(),
            vec!["a1"]
        );
    }

    #[test]
    fn blank_conversation_id_is_dropped() {
        let transcript = Transcript::parse("conversation_id = \"  \"\n").expect("parse");
        assert_eq!(transcript.conversation_id, None);
        assert!(transcript.messages.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Transcript::parse(
            r#"
            [[messages]]
            id = "a1"
            role = "assistant"
            text = "one"

            [[messages]]
            id = "a1"
            role = "assistant"
            text = "two"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Transcript(msg) if msg.contains("a1")));
    }

    #[test]
    fn empty_ids_are_rejected() {
        let err = Transcript::parse(
            "[[messages]]\nid = \"\"\nrole = \"user\"\ntext = \"x\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Transcript(_)));
    }

    #[test]
    fn unknown_role_is_a_transcript_error() {
        let err = Transcript::parse(
            "[[messages]]\nid = \"s\"\nrole = \"system\"\ntext = \"x\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Transcript(_)));
    }

    #[test]
    fn sample_has_assistant_messages_with_unique_ids() {
        let sample = Transcript::sample();
        let ids: HashSet<_> = sample.messages.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids.len(), sample.messages.len());
        assert_eq!(sample.assistant_messages().count(), 2);
    }
}
