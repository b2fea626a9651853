// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::feedback::MessageId;
use crate::ui::feedback;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the feedback widget mounted under `message_id`.
    Feedback {
        message_id: MessageId,
        message: feedback::Message,
    },
    /// Copy the diagnostics log to the clipboard as JSON.
    CopyDiagnostics,
}

impl Message {
    /// Tags a widget message with the id of the widget that produced it.
    pub fn feedback(message_id: &MessageId) -> impl Fn(feedback::Message) -> Message + '_ {
        move |message| Message::Feedback {
            message_id: message_id.clone(),
            message,
        }
    }
}

/// Runtime flags passed in from the launcher (command line).
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
    /// Endpoint template overriding `[feedback].endpoint`.
    pub endpoint: Option<String>,
    /// Conversation id overriding the transcript's own.
    pub conversation: Option<String>,
    /// Transcript file to display; the built-in sample when absent.
    pub transcript: Option<PathBuf>,
}
