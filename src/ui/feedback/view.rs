// SPDX-License-Identifier: MPL-2.0
//! Rendering of the feedback widget.
//!
//! The view is a pure function of [`State`]: acknowledgment when submitted,
//! otherwise the quick-action row (collapsed) or the detailed form (expanded).

use super::state::{Message, State, Surface};
use super::Labels;
use crate::domain::feedback::{star_bounds, CategoryTag, RatingCriterion};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, tooltip, Column, Container, Row, Text},
    Element, Length,
};

/// Width of the criterion label column in the form.
const CRITERION_LABEL_WIDTH: f32 = 100.0;

/// Contextual data needed to render a feedback widget.
pub struct ViewContext<'a> {
    pub labels: &'a Labels,
}

impl State {
    /// Render the widget for its current state.
    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match self.surface() {
            Surface::Acknowledgment => acknowledgment(ctx.labels),
            Surface::Form => detail_form(self, ctx.labels),
            Surface::QuickActions => quick_actions(ctx.labels),
        }
    }
}

fn acknowledgment(labels: &Labels) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::check_circle(), sizing::ICON_SM).style(styles::svg::success))
        .push(
            Text::new(labels.thanks.as_str())
                .size(typography::CAPTION)
                .style(styles::text::success),
        )
        .into()
}

fn quick_actions(labels: &Labels) -> Element<'_, Message> {
    let thumbs_up = button(icons::sized(icons::thumb_up(), sizing::ICON_SM).style(styles::svg::tinted))
        .on_press(Message::ThumbsUp)
        .padding(spacing::XXS)
        .style(styles::button::quick_action(styles::button::Intent::Positive));

    let thumbs_down =
        button(icons::sized(icons::thumb_down(), sizing::ICON_SM).style(styles::svg::tinted))
            .on_press(Message::ThumbsDown)
            .padding(spacing::XXS)
            .style(styles::button::quick_action(styles::button::Intent::Negative));

    Row::new()
        .spacing(spacing::XS)
        .push(styles::tooltip::styled(
            thumbs_up,
            labels.helpful_tooltip.as_str(),
            tooltip::Position::Top,
        ))
        .push(styles::tooltip::styled(
            thumbs_down,
            labels.needs_improvement_tooltip.as_str(),
            tooltip::Position::Top,
        ))
        .into()
}

fn detail_form<'a>(state: &'a State, labels: &'a Labels) -> Element<'a, Message> {
    let title = Text::new(labels.form_title.as_str()).size(typography::BODY);

    let ratings = RatingCriterion::ALL.into_iter().fold(
        Column::new().spacing(spacing::SM),
        |column, criterion| column.push(rating_row(state, criterion)),
    );

    let chips = Row::with_children(
        CategoryTag::ALL
            .into_iter()
            .map(|tag| category_chip(tag, state.is_selected(tag))),
    )
    .spacing(spacing::XS)
    .wrap();

    let cancel = button(Text::new(labels.cancel.as_str()).size(typography::BODY_SM))
        .on_press(Message::Cancel)
        .style(styles::button::outlined);

    let submit = button(Text::new(labels.submit.as_str()).size(typography::BODY_SM))
        .on_press_maybe(state.can_submit().then_some(Message::SubmitDetailed))
        .style(styles::button::primary);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(cancel)
        .push(submit);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(ratings)
        .push(chips)
        .push(
            Container::new(actions)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::form_panel)
        .into()
}

fn rating_row(state: &State, criterion: RatingCriterion) -> Element<'_, Message> {
    let current = state.rating(criterion).map_or(0, |stars| stars.value());

    let stars = (star_bounds::MIN..=star_bounds::MAX).fold(
        Row::new().spacing(spacing::XXS),
        |row, value| {
            let filled = i64::from(current) >= value;
            // Clicking the current value clears it, which the widget ignores.
            let next = if i64::from(current) == value {
                None
            } else {
                Some(value)
            };
            row.push(
                button(Text::new(if filled { "★" } else { "☆" }).size(typography::BODY_LG))
                    .on_press(Message::RatingChanged(criterion, next))
                    .padding(0.0)
                    .style(styles::button::star(filled)),
            )
        },
    );

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(criterion.label())
                .size(typography::CAPTION)
                .width(Length::Fixed(CRITERION_LABEL_WIDTH)),
        )
        .push(stars)
        .into()
}

fn category_chip<'a>(tag: CategoryTag, selected: bool) -> Element<'a, Message> {
    let chip = button(Text::new(tag.label()).size(typography::CAPTION))
        .on_press(Message::CategoryToggled(tag))
        .padding([spacing::XXS, spacing::SM]);

    if selected {
        chip.style(styles::button::chip_selected).into()
    } else {
        chip.style(styles::button::chip).into()
    }
}
