// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the active toasts, hands them to a [`Renderer`] and
//! removes them when their display time runs out, when they are dismissed,
//! or when everything is cleared.

use super::clock::{Clock, SystemClock};
use super::notification::{Severity, Toast, ToastId, ToastOptions};
use super::render::Renderer;
use crate::config::{self, Config};
use crate::error::Error;
use iced::{time, Subscription};
use std::time::{Duration, Instant};

const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID (close button).
    Dismiss(ToastId),
    /// Periodic tick for expiring toasts.
    Tick(Instant),
}

/// Values used for any option a caller leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDefaults {
    pub duration: Duration,
    pub error_duration: Duration,
    pub closable: bool,
    pub show_progress: bool,
    /// Period of the expiry tick while any toast can expire.
    pub tick_interval: Duration,
}

impl ToastDefaults {
    /// Display time for a toast of the given severity.
    #[must_use]
    pub fn duration_for(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Error => self.error_duration,
            Severity::Success | Severity::Warning | Severity::Info => self.duration,
        }
    }
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(config::DEFAULT_TOAST_DURATION_MS),
            error_duration: Duration::from_millis(config::DEFAULT_ERROR_TOAST_DURATION_MS),
            closable: config::DEFAULT_TOAST_CLOSABLE,
            show_progress: config::DEFAULT_TOAST_PROGRESS,
            tick_interval: Duration::from_millis(config::DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl From<&Config> for ToastDefaults {
    fn from(config: &Config) -> Self {
        Self {
            duration: config.toast_duration(),
            error_duration: config.error_toast_duration(),
            closable: config
                .toast_closable
                .unwrap_or(config::DEFAULT_TOAST_CLOSABLE),
            show_progress: config
                .toast_progress
                .unwrap_or(config::DEFAULT_TOAST_PROGRESS),
            tick_interval: config.tick_interval(),
        }
    }
}

/// Manages the active toasts.
///
/// Built once at start-up and passed to whatever needs to notify the user.
pub struct Manager<R = ()> {
    /// Toasts on screen, oldest first.
    active: Vec<Toast>,
    renderer: R,
    clock: Box<dyn Clock>,
    defaults: ToastDefaults,
}

impl Manager<()> {
    /// Creates a manager with nowhere to draw. Scheduling still works.
    #[must_use]
    pub fn headless() -> Self {
        Self::new(())
    }
}

impl<R: Renderer> Manager<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            active: Vec::new(),
            renderer,
            clock: Box::new(SystemClock),
            defaults: ToastDefaults::default(),
        }
    }

    #[must_use]
    pub fn from_config(renderer: R, config: &Config) -> Self {
        Self::new(renderer).with_defaults(ToastDefaults::from(config))
    }

    #[must_use]
    pub fn with_defaults(mut self, defaults: ToastDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replaces the time source, mainly so tests can drive expiry.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Shows a toast and returns its handle.
    ///
    /// Unset options take the manager's defaults. A zero duration keeps the
    /// toast until it is removed; any other duration expires it on the first
    /// tick at or after `now + duration`.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        options: ToastOptions,
    ) -> ToastId {
        let severity = severity.into();
        let duration = options
            .duration
            .unwrap_or_else(|| self.defaults.duration_for(severity));
        let toast = Toast::new(
            severity,
            message,
            options.title.unwrap_or_default(),
            duration,
            self.clock.now(),
        )
        .with_closable(options.closable.unwrap_or(self.defaults.closable))
        .with_progress(options.show_progress.unwrap_or(self.defaults.show_progress));

        let id = toast.id();
        tracing::debug!(?id, severity = severity.name(), ?duration, "showing toast");
        self.renderer.render(&toast);
        self.active.push(toast);
        id
    }

    pub fn success(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show(message, Severity::Success, with_title(options, title))
    }

    /// Shows an error toast. Errors default to a longer display time.
    pub fn error(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show(message, Severity::Error, with_title(options, title))
    }

    pub fn warning(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show(message, Severity::Warning, with_title(options, title))
    }

    pub fn info(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show(message, Severity::Info, with_title(options, title))
    }

    /// Surfaces a failed operation as an error toast.
    pub fn report(&mut self, err: &Error) -> ToastId {
        tracing::warn!(%err, "reporting failure to the user");
        if err.is_network() {
            self.error(NETWORK_ERROR_MESSAGE, "Connection Error", ToastOptions::default())
        } else {
            self.error(GENERIC_ERROR_MESSAGE, "Error", ToastOptions::default())
        }
    }

    /// Shows a warning about input the user needs to fix.
    pub fn validation_error(&mut self, message: impl Into<String>) -> ToastId {
        self.warning(message, "Validation Error", ToastOptions::default())
    }

    /// Removes a toast by its handle.
    ///
    /// Returns `true` if the toast was still active. Unknown or already
    /// removed handles are ignored.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.active.iter().position(|t| t.id() == id) else {
            return false;
        };
        self.active.remove(pos);
        self.renderer.destroy(id);
        tracing::debug!(?id, "removed toast");
        true
    }

    /// Removes every active toast.
    pub fn clear(&mut self) {
        for toast in self.active.drain(..) {
            self.renderer.destroy(toast.id());
        }
    }

    /// Removes every toast whose display time has run out by `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<ToastId> = self
            .active
            .iter()
            .filter(|t| t.is_expired(now))
            .map(Toast::id)
            .collect();

        for id in expired {
            self.remove(id);
        }
    }

    /// Runs [`Self::tick`] against the manager's own clock.
    pub fn expire(&mut self) {
        let now = self.clock.now();
        self.tick(now);
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Earliest instant at which a toast is due to expire.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.iter().filter_map(Toast::expires_at).min()
    }

    /// Emits [`Message::Tick`] every `tick_interval` while any toast can expire.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.next_deadline().is_some() {
            time::every(self.defaults.tick_interval).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Returns the active toasts, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.active.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn defaults(&self) -> &ToastDefaults {
        &self.defaults
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

/// An explicit `title` in the options wins over the positional one.
fn with_title(mut options: ToastOptions, title: impl Into<String>) -> ToastOptions {
    if options.title.is_none() {
        options.title = Some(title.into());
    }
    options
}
