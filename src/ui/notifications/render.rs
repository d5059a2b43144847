// SPDX-License-Identifier: MPL-2.0
//! Rendering port between the manager and whatever draws toasts.

use super::notification::{Toast, ToastId};

/// Draws and removes toasts on some surface.
///
/// The manager calls `render` once per toast when it is shown and `destroy`
/// once when it leaves the active set, whether by expiry, manual removal or
/// `clear`.
pub trait Renderer {
    fn render(&mut self, toast: &Toast);
    fn destroy(&mut self, id: ToastId);
}

/// No surface: every call is a no-op.
impl Renderer for () {
    fn render(&mut self, _toast: &Toast) {}
    fn destroy(&mut self, _id: ToastId) {}
}
