// SPDX-License-Identifier: MPL-2.0
//! Iced overlay that draws toasts.
//!
//! `Overlay` is a [`Renderer`]: the manager pushes toasts into it, and the
//! application's view function calls [`Overlay::view`] to lay them out as
//! cards in the top-right corner, newest at the bottom.

use super::manager::Message;
use super::notification::{Toast, ToastId};
use super::render::Renderer;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::font::Weight;
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Toasts currently drawn, in the order they were shown.
#[derive(Debug, Default)]
pub struct Overlay {
    toasts: Vec<Toast>,
}

impl Overlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Renders every toast, positioned in the top-right corner.
    ///
    /// `now` drives the countdown bars; pass the instant of the last tick.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        if self.toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let cards: Vec<Element<'_, Message>> =
            self.toasts.iter().map(|toast| card(toast, now)).collect();

        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

impl Renderer for Overlay {
    fn render(&mut self, toast: &Toast) {
        self.toasts.push(toast.clone());
    }

    fn destroy(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id() != id);
    }
}

/// Renders a single toast card: `[icon] [title / message] [close]`, with an
/// optional countdown bar underneath.
fn card(toast: &Toast, now: Instant) -> Element<'_, Message> {
    let severity = toast.severity();
    let accent_color = severity.color();

    let icon = Text::new(severity.icon())
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent_color),
        });

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = toast.title() {
        body = body.push(Text::new(title).size(typography::BODY).font(Font {
            weight: Weight::Bold,
            ..Font::default()
        }));
    }
    body = body.push(
        Text::new(toast.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if toast.is_closable() {
        row = row.push(
            button(Text::new("×").size(typography::BODY_LG))
                .on_press(Message::Dismiss(toast.id()))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );
    }

    let mut content = Column::new().spacing(spacing::XS).push(row);
    if toast.shows_progress() {
        if let Some(fraction) = toast.remaining_fraction(now) {
            content = content.push(progress_bar(0.0..=1.0, fraction));
        }
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{ManualClock, Manager, Severity, ToastOptions};
    use std::time::Duration;

    #[test]
    fn overlay_mirrors_the_active_set() {
        let clock = ManualClock::new();
        let mut manager = Manager::new(Overlay::new()).with_clock(clock.clone());

        let first = manager.success("Saved", "", ToastOptions::default());
        manager.info("Synced", "", ToastOptions::new().duration(Duration::from_secs(1)));
        assert_eq!(manager.renderer().len(), 2);

        manager.remove(first);
        assert_eq!(manager.renderer().len(), 1);

        clock.advance(Duration::from_secs(1));
        manager.expire();
        assert!(manager.renderer().is_empty());
    }

    #[test]
    fn overlay_keeps_show_order() {
        let mut manager = Manager::new(Overlay::new());
        manager.show("one", Severity::Info, ToastOptions::default());
        manager.show("two", Severity::Warning, ToastOptions::default());

        let messages: Vec<&str> = manager.renderer().toasts().map(Toast::message).collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_only_fills_on_interaction() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn views_build_for_every_severity() {
        let mut overlay = Overlay::new();
        let now = Instant::now();
        for severity in [
            Severity::Success,
            Severity::Error,
            Severity::Warning,
            Severity::Info,
        ] {
            overlay.render(
                &Toast::new(severity, "msg", "Title", Duration::from_secs(5), now)
                    .with_closable(severity != Severity::Info),
            );
        }
        let _ = overlay.view(now);
        let _ = Overlay::new().view(now);
    }
}
