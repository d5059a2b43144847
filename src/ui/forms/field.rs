// SPDX-License-Identifier: MPL-2.0
//! Iced widget for a validated text field.
//!
//! Draws the label, the input framed in a border that reflects the field's
//! status, and the error message underneath when the field is invalid.

use super::validator::{FieldStatus, FormEvent, FormValidator};
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use iced::widget::{container, text, text_input, Column, Container};
use iced::{Color, Element, Length, Theme};

/// A plain text field bound to `name` in the validator's form.
pub fn field<'a>(label: &'a str, name: &'a str, validator: &'a FormValidator) -> Element<'a, FormEvent> {
    build(label, name, validator, false)
}

/// Same as [`field`] with the value masked.
pub fn secure_field<'a>(
    label: &'a str,
    name: &'a str,
    validator: &'a FormValidator,
) -> Element<'a, FormEvent> {
    build(label, name, validator, true)
}

fn build<'a>(
    label: &'a str,
    name: &'a str,
    validator: &'a FormValidator,
    secure: bool,
) -> Element<'a, FormEvent> {
    let value = validator.form().value(name).unwrap_or_default();
    let status = validator.status(name);
    let accent = status_color(status);

    let input = text_input(label, value)
        .on_input(move |value| FormEvent::Input {
            field: name.to_string(),
            value,
        })
        .on_submit(FormEvent::Submit)
        .secure(secure)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(
            Container::new(input)
                .width(Length::Fill)
                .style(move |theme: &Theme| field_container_style(theme, accent)),
        );

    if let Some(message) = status.error_message() {
        column = column.push(
            text(message)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    column.into()
}

/// Border color for a field; untouched fields use the theme's default.
fn status_color(status: &FieldStatus) -> Option<Color> {
    match status {
        FieldStatus::Untouched => None,
        FieldStatus::Valid => Some(palette::SUCCESS_500),
        FieldStatus::Invalid(_) => Some(palette::ERROR_500),
    }
}

fn field_container_style(theme: &Theme, accent: Option<Color>) -> container::Style {
    let neutral = theme.extended_palette().background.strong.color;

    container::Style {
        border: iced::Border {
            color: accent.unwrap_or(neutral),
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
