// SPDX-License-Identifier: MPL-2.0
//! `pslv_ui` holds the feedback layer of the PSLVNews dashboard and reader
//! site: transient toast notifications and live form validation.
//!
//! The toast manager draws through a small rendering port, so its
//! scheduling works headless as well as behind the bundled iced overlay.
//! Forms are validated field by field as the user types, and submission is
//! held back until every rule passes. A thin JSON client for the backend
//! reports its failures as error toasts.

#![doc(html_root_url = "https://docs.rs/pslv_ui/0.3.0")]

pub mod api;
pub mod config;
pub mod error;
pub mod ui;
