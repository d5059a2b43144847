// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Toasts appear temporarily to inform users
//! about actions (article saved, request failed, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Toast` struct, `Severity` levels and `ToastOptions`
//! - [`manager`] - `Manager` for lifecycle management and expiry
//! - [`render`] - `Renderer` port the manager draws through
//! - [`clock`] - Time source, swappable for tests
//! - [`toast`] - Iced `Overlay` that implements the port
//!
//! # Usage
//!
//! ```ignore
//! use pslv_ui::ui::notifications::{Manager, Overlay, ToastOptions};
//!
//! // Create the manager once at start-up
//! let mut toasts = Manager::from_config(Overlay::new(), &config::load().unwrap_or_default());
//!
//! // Show a toast
//! toasts.success("Article saved to your reading list", "Saved", ToastOptions::default());
//!
//! // Drive expiry from the subscription and draw the overlay in your view
//! let subscription = toasts.subscription();
//! let overlay = toasts.renderer().view(last_tick).map(Message::Toast);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 5s by default, 7s for errors, zero keeps a toast until closed
//! - Every toast shown is drawn; there is no queue
//! - Position: top-right corner

mod clock;
mod manager;
mod notification;
mod render;
mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{Manager, Message as ToastMessage, ToastDefaults};
pub use notification::{Severity, Toast, ToastId, ToastOptions};
pub use render::Renderer;
pub use toast::Overlay;
