// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct, the `Severity` enum and the
//! `ToastOptions` callers use to override per-toast defaults.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a toast. Doubles as the handle returned by `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines styling, icon and default display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Something failed (red, lingers longer).
    Error,
    /// Worth a look but nothing failed (orange).
    Warning,
    /// Neutral information (blue). Also the fallback for unknown names.
    #[default]
    Info,
}

impl Severity {
    /// Parses a severity name, falling back to `Info` for anything unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the glyph drawn next to the message.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "i",
        }
    }

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Per-toast overrides. Unset fields take the manager's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Heading shown above the message. Defaults to none.
    pub title: Option<String>,
    /// Display time; zero keeps the toast until it is closed.
    /// Defaults to 5s, or 7s for errors.
    pub duration: Option<Duration>,
    /// Whether a close button is drawn. Defaults to `true`.
    pub closable: Option<bool>,
    /// Whether a countdown bar is drawn. Defaults to `true`.
    pub show_progress: Option<bool>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the toast on screen until it is removed explicitly.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = Some(show_progress);
        self
    }
}

/// A toast on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    message: String,
    title: String,
    duration: Duration,
    closable: bool,
    show_progress: bool,
    shown_at: Instant,
}

impl Toast {
    /// Creates a toast shown at `shown_at`.
    ///
    /// Callers normally go through [`super::Manager::show`], which resolves
    /// `duration`, `closable` and `show_progress` from its defaults.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        title: impl Into<String>,
        duration: Duration,
        shown_at: Instant,
    ) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            message: message.into(),
            title: title.into(),
            duration,
            closable: true,
            show_progress: true,
            shown_at,
        }
    }

    #[must_use]
    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the title, or `None` when it is empty.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        if self.title.is_empty() {
            None
        } else {
            Some(&self.title)
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn shows_progress(&self) -> bool {
        self.show_progress
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Returns when the toast should disappear, or `None` if it persists.
    ///
    /// A duration too long to represent as an `Instant` also persists.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        if self.duration.is_zero() {
            None
        } else {
            self.shown_at.checked_add(self.duration)
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at().is_some_and(|deadline| now >= deadline)
    }

    /// Fraction of the display time still left, in `[0, 1]`.
    ///
    /// Persistent toasts have no countdown and return `None`.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> Option<f32> {
        self.expires_at()?;
        let elapsed = now.saturating_duration_since(self.shown_at);
        let remaining = self.duration.saturating_sub(elapsed);
        Some(remaining.as_secs_f32() / self.duration.as_secs_f32())
    }
}
