// SPDX-License-Identifier: MPL-2.0
//! User-facing feedback components.
//!
//! Both components follow the Elm-style "state down, messages up" pattern:
//! state lives in plain structs, iced views read it and emit messages that
//! are fed back through `handle_message` / `handle_event`.
//!
//! # Components
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`forms`] - Live form validation with per-field status
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod forms;
pub mod notifications;
