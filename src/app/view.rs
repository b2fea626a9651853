// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The transcript is a scrollable column of message bubbles. Each assistant
//! bubble carries its feedback widget; a footer states where feedback goes.

use super::i18n::fluent::I18n;
use super::transcript::{Entry, Role, Transcript};
use super::{Message, SubmitterKind};
use crate::domain::feedback::MessageId;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::feedback::{self, Labels};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::collections::BTreeMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub labels: &'a Labels,
    pub transcript: &'a Transcript,
    pub widgets: &'a BTreeMap<MessageId, feedback::State>,
    pub submitter_kind: SubmitterKind,
    pub failure_count: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.i18n.tr("transcript-heading")).size(typography::TITLE_MD);

    let messages: Element<'_, Message> = if ctx.transcript.messages.is_empty() {
        Text::new(ctx.i18n.tr("transcript-empty"))
            .size(typography::BODY)
            .style(styles::text::muted)
            .into()
    } else {
        ctx.transcript
            .messages
            .iter()
            .fold(Column::new().spacing(spacing::LG), |column, entry| {
                column.push(message_block(&ctx, entry))
            })
            .into()
    };

    let body = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::TRANSCRIPT_WIDTH)
        .push(heading)
        .push(messages);

    let content = Container::new(body)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Column::new()
        .push(scrollable(content).height(Length::Fill))
        .push(footer(&ctx))
        .into()
}

fn message_block<'a>(ctx: &ViewContext<'a>, entry: &'a Entry) -> Element<'a, Message> {
    let (role_key, bubble_style): (_, fn(&iced::Theme) -> iced::widget::container::Style) =
        match entry.role {
            Role::User => ("role-user", styles::container::user_bubble),
            Role::Assistant => ("role-assistant", styles::container::message_bubble),
        };

    let role = Text::new(ctx.i18n.tr(role_key))
        .size(typography::CAPTION)
        .style(styles::text::muted);

    let bubble = Container::new(Text::new(entry.text.as_str()).size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(bubble_style);

    let mut block = Column::new().spacing(spacing::XXS).push(role).push(bubble);

    if let Some(widget) = ctx.widgets.get(&entry.id) {
        block = block.push(
            widget
                .view(feedback::ViewContext { labels: ctx.labels })
                .map(Message::feedback(&entry.id)),
        );
    }

    block.into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let status_key = match ctx.submitter_kind {
        SubmitterKind::DryRun => "status-dry-run",
        SubmitterKind::Http => "status-endpoint",
    };

    let mut status = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr(status_key))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    if ctx.failure_count > 0 {
        status = status.push(
            Text::new(format!(
                "{} {}",
                ctx.failure_count,
                ctx.i18n.tr("diagnostics-failed-submissions")
            ))
            .size(typography::CAPTION)
            .style(styles::text::error),
        );
    }

    let copy = button(Text::new(ctx.i18n.tr("diagnostics-copy")).size(typography::BODY_SM))
        .on_press(Message::CopyDiagnostics)
        .style(styles::button::outlined);

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(status)
            .push(Space::new().width(Length::Fill))
            .push(copy),
    )
    .padding([spacing::XS, spacing::LG])
    .width(Length::Fill)
    .into()
}
