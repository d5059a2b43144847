// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Display durations and affordances
//! - **Ticks**: Expiry polling period
//! - **API**: Backend location

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default display time for success, info and warning toasts (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

/// Default display time for error toasts (in milliseconds).
pub const DEFAULT_ERROR_TOAST_DURATION_MS: u64 = 7_000;

/// Longest configurable toast duration (in milliseconds).
///
/// A duration of zero keeps a toast until it is closed, so there is no
/// lower bound.
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Whether toasts get a close button unless told otherwise.
pub const DEFAULT_TOAST_CLOSABLE: bool = true;

/// Whether toasts draw a countdown bar unless told otherwise.
pub const DEFAULT_TOAST_PROGRESS: bool = true;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Period of the expiry tick while toasts are on screen (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick period.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum tick period.
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend origin used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(DEFAULT_ERROR_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(DEFAULT_ERROR_TOAST_DURATION_MS > DEFAULT_TOAST_DURATION_MS);
    assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
};
