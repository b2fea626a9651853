// SPDX-License-Identifier: MPL-2.0
//! Application root: a chat transcript with one feedback widget under each
//! assistant message.
//!
//! The `App` owns every widget's state, the submitter chosen from the
//! config and CLI, and the diagnostics log. Widget events are translated into
//! side effects here: a submission becomes a `Task` running the submitter,
//! whose outcome is routed back to the widget that asked for it.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
pub mod transcript;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::FeedbackSubmitter;
use crate::diagnostics::DiagnosticsLog;
use crate::domain::feedback::{ConversationId, MessageId};
use crate::infrastructure::feedback_api::{DryRunSubmitter, EndpointTemplate, HttpFeedbackSubmitter};
use crate::ui::feedback::{self, Labels};
use crate::ui::theming::ThemeMode;
use i18n::fluent::I18n;
use iced::{window, Element, Task, Theme};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use transcript::Transcript;

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 820.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Where submissions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitterKind {
    /// Logged locally, never sent.
    DryRun,
    /// Posted to the configured endpoint.
    Http,
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    labels: Labels,
    theme_mode: ThemeMode,
    transcript: Transcript,
    widgets: BTreeMap<MessageId, feedback::State>,
    submitter: Arc<dyn FeedbackSubmitter>,
    submitter_kind: SubmitterKind,
    diagnostics: DiagnosticsLog,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("messages", &self.transcript.messages.len())
            .field("submitter", &self.submitter_kind)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: config::Config) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the inputs are consumed once
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(flags, &config), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Builds the widget labels from the active locale.
#[must_use]
pub fn feedback_labels(i18n: &I18n) -> Labels {
    Labels {
        helpful_tooltip: i18n.tr("feedback-helpful-tooltip"),
        needs_improvement_tooltip: i18n.tr("feedback-needs-improvement-tooltip"),
        form_title: i18n.tr("feedback-form-title"),
        cancel: i18n.tr("feedback-cancel"),
        submit: i18n.tr("feedback-submit"),
        thanks: i18n.tr("feedback-thanks"),
    }
}

/// Picks the submitter for this session.
///
/// An endpoint (CLI first, then config) selects the HTTP adapter; without one,
/// or when the HTTP client cannot be built, feedback is only logged.
fn build_submitter(
    endpoint: Option<String>,
    conversation_id: Option<ConversationId>,
    feedback_config: &config::FeedbackConfig,
) -> (Arc<dyn FeedbackSubmitter>, SubmitterKind) {
    let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) else {
        tracing::info!("no feedback endpoint configured, using dry run");
        return (Arc::new(DryRunSubmitter), SubmitterKind::DryRun);
    };

    match HttpFeedbackSubmitter::new(
        EndpointTemplate::new(endpoint),
        conversation_id,
        feedback_config.request_timeout(),
    ) {
        Ok(submitter) => {
            tracing::info!(endpoint = %submitter.endpoint().as_str(), "submitting feedback over HTTP");
            (Arc::new(submitter), SubmitterKind::Http)
        }
        Err(error) => {
            tracing::error!(%error, "failed to build HTTP client, using dry run");
            (Arc::new(DryRunSubmitter), SubmitterKind::DryRun)
        }
    }
}

impl App {
    /// Loads the transcript, picks the submitter and mounts the widgets.
    pub fn new(flags: Flags, config: &config::Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);

        let mut transcript = match &flags.transcript {
            Some(path) => Transcript::load(path).unwrap_or_else(|error| {
                tracing::error!(path = %path.display(), %error, "failed to load transcript, showing sample");
                Transcript::sample()
            }),
            None => Transcript::sample(),
        };
        if let Some(conversation) = flags.conversation.filter(|c| !c.trim().is_empty()) {
            transcript.conversation_id = Some(ConversationId::new(conversation));
        }

        let endpoint = flags.endpoint.or_else(|| config.feedback.endpoint.clone());
        let (submitter, submitter_kind) =
            build_submitter(endpoint, transcript.conversation_id.clone(), &config.feedback);

        let mut app = Self::with_submitter(i18n, transcript, submitter);
        app.submitter_kind = submitter_kind;
        app.theme_mode = config.general.theme_mode;
        app
    }

    /// Assembles an app around an explicit submitter.
    pub fn with_submitter(
        i18n: I18n,
        transcript: Transcript,
        submitter: Arc<dyn FeedbackSubmitter>,
    ) -> Self {
        let widgets = transcript
            .assistant_messages()
            .map(|entry| {
                (
                    entry.id.clone(),
                    feedback::State::new(entry.id.clone(), transcript.conversation_id.clone()),
                )
            })
            .collect();

        Self {
            labels: feedback_labels(&i18n),
            i18n,
            theme_mode: ThemeMode::default(),
            transcript,
            widgets,
            submitter,
            submitter_kind: SubmitterKind::DryRun,
            diagnostics: DiagnosticsLog::default(),
        }
    }

    /// Routes a message and returns the follow-up task.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feedback {
                message_id,
                message,
            } => update::handle_feedback(
                update::FeedbackContext {
                    widgets: &mut self.widgets,
                    diagnostics: &mut self.diagnostics,
                    submitter: &self.submitter,
                },
                message_id,
                message,
            ),
            Message::CopyDiagnostics => update::handle_copy_diagnostics(&self.diagnostics),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.transcript.conversation_id {
            Some(conversation) => format!("{conversation} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            labels: &self.labels,
            transcript: &self.transcript,
            widgets: &self.widgets,
            submitter_kind: self.submitter_kind,
            failure_count: self.diagnostics.failure_count(),
        })
    }

    /// State of the widget mounted under `message_id`.
    #[must_use]
    pub fn widget(&self, message_id: &MessageId) -> Option<&feedback::State> {
        self.widgets.get(message_id)
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    #[must_use]
    pub fn submitter_kind(&self) -> SubmitterKind {
        self.submitter_kind
    }
}
