// SPDX-License-Identifier: MPL-2.0
//! Declarative, live form validation.
//!
//! # Components
//!
//! - [`form`] - `Form`, the field values a validator is bound to
//! - [`rules`] - `Rule` and the built-in predicates
//! - [`validator`] - `FormValidator`, field statuses and form events
//! - [`presets`] - Rule sets for the login and registration forms
//! - [`field`] - Iced text field that shows a field's status
//!
//! # Usage
//!
//! ```
//! use pslv_ui::ui::forms::{rules, Form, FormEvent, FormOutcome, FormValidator};
//!
//! let mut validator = FormValidator::bind(Form::new().with_field("email", ""));
//! validator
//!     .add_rule("email", rules::required, "Email is required")
//!     .add_rule("email", rules::email, "Please enter a valid email address");
//!
//! assert_eq!(validator.handle_event(FormEvent::Submit), FormOutcome::Blocked);
//! assert_eq!(validator.error_message("email"), Some("Email is required"));
//! ```

pub mod field;
pub mod form;
pub mod presets;
pub mod rules;
pub mod validator;

pub use form::Form;
pub use rules::Rule;
pub use validator::{FieldStatus, FormEvent, FormOutcome, FormValidator};
