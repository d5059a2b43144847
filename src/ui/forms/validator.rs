// SPDX-License-Identifier: MPL-2.0
//! Live validation bound to a single form.
//!
//! Rules are registered per field and evaluated in insertion order; the
//! first failing rule decides the message. Input and change events
//! revalidate the edited field, blur revalidates the field losing focus,
//! and submit is only let through when every field passes.

use super::form::Form;
use super::rules::Rule;
use std::collections::HashMap;

static UNTOUCHED: FieldStatus = FieldStatus::Untouched;

/// What a field currently displays.
///
/// A single value per field, so a field can never be marked both errored
/// and succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not validated yet.
    #[default]
    Untouched,
    /// Every rule passed on the last run.
    Valid,
    /// The first failing rule's message.
    Invalid(String),
}

impl FieldStatus {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FieldStatus::Invalid(message) => Some(message),
            FieldStatus::Untouched | FieldStatus::Valid => None,
        }
    }
}

/// Interaction with the bound form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user typed into a field.
    Input { field: String, value: String },
    /// A field's value was committed (select, checkbox, paste...).
    Change { field: String, value: String },
    /// A field lost focus.
    Blur { field: String },
    /// The user asked to submit the form.
    Submit,
}

/// Result of handling a [`FormEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// A field was revalidated; carries whether it passed.
    Validated(bool),
    /// Every field passed; carries the submitted values.
    Submitted(Form),
    /// At least one field failed and the submit was cancelled.
    Blocked,
}

/// Per-field rules bound to one form.
#[derive(Debug, Default)]
pub struct FormValidator {
    form: Form,
    /// Field name to its rules, in registration order.
    rules: Vec<(String, Vec<Rule>)>,
    statuses: HashMap<String, FieldStatus>,
}

impl FormValidator {
    /// Binds a validator to `form`. No rules are registered yet.
    #[must_use]
    pub fn bind(form: Form) -> Self {
        Self {
            form,
            rules: Vec::new(),
            statuses: HashMap::new(),
        }
    }

    /// Appends a rule to `field`. Rules run in the order they are added.
    pub fn add_rule(
        &mut self,
        field: impl Into<String>,
        predicate: impl Fn(&str) -> bool + 'static,
        message: impl Into<String>,
    ) -> &mut Self {
        let field = field.into();
        let rule = Rule::new(predicate, message);
        match self.rules.iter_mut().find(|(name, _)| *name == field) {
            Some((_, rules)) => rules.push(rule),
            None => self.rules.push((field, vec![rule])),
        }
        self
    }

    /// Runs `field`'s rules against its current value and updates its status.
    ///
    /// Fields without rules, and rules naming a field the form does not
    /// have, pass without touching any status.
    pub fn validate_field(&mut self, field: &str) -> bool {
        let Some((_, rules)) = self.rules.iter().find(|(name, _)| name == field) else {
            return true;
        };
        let Some(value) = self.form.value(field) else {
            tracing::debug!(field, "rules registered for a field the form does not have");
            return true;
        };

        let status = match rules.iter().find(|rule| !rule.check(value)) {
            Some(rule) => FieldStatus::Invalid(rule.message().to_string()),
            None => FieldStatus::Valid,
        };
        let valid = status.is_valid();
        self.statuses.insert(field.to_string(), status);
        valid
    }

    /// Validates every field with rules. Does not stop at the first failure,
    /// so every field shows its current state.
    pub fn validate_all(&mut self) -> bool {
        let fields: Vec<String> = self.rules.iter().map(|(name, _)| name.clone()).collect();
        let mut all_valid = true;
        for field in &fields {
            all_valid &= self.validate_field(field);
        }
        all_valid
    }

    /// Applies an event to the form and runs the matching validation.
    pub fn handle_event(&mut self, event: FormEvent) -> FormOutcome {
        match event {
            FormEvent::Input { field, value } | FormEvent::Change { field, value } => {
                self.form.set_value(field.as_str(), value);
                FormOutcome::Validated(self.validate_field(&field))
            }
            FormEvent::Blur { field } => FormOutcome::Validated(self.validate_field(&field)),
            FormEvent::Submit => {
                if self.validate_all() {
                    FormOutcome::Submitted(self.form.clone())
                } else {
                    tracing::debug!(
                        invalid = self.invalid_fields().count(),
                        "submit blocked by validation"
                    );
                    FormOutcome::Blocked
                }
            }
        }
    }

    /// Updates a value without validating it.
    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    #[must_use]
    pub fn status(&self, field: &str) -> &FieldStatus {
        self.statuses.get(field).unwrap_or(&UNTOUCHED)
    }

    #[must_use]
    pub fn error_message(&self, field: &str) -> Option<&str> {
        self.status(field).error_message()
    }

    /// Fields currently showing an error, in rule registration order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| self.status(name).is_invalid())
    }

    #[must_use]
    pub fn rule_count(&self, field: &str) -> usize {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map_or(0, |(_, rules)| rules.len())
    }

    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::forms::rules::{email, min_length, password, required};

    fn input(field: &str, value: &str) -> FormEvent {
        FormEvent::Input {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn email_validator(value: &str) -> FormValidator {
        let mut validator = FormValidator::bind(Form::new().with_field("email", value));
        validator
            .add_rule("email", required, "Email is required")
            .add_rule("email", email, "Please enter a valid email address");
        validator
    }

    #[test]
    fn first_failing_rule_wins() {
        let mut validator = email_validator("");

        assert!(!validator.validate_field("email"));
        assert_eq!(validator.error_message("email"), Some("Email is required"));
    }

    #[test]
    fn later_rule_reports_when_earlier_ones_pass() {
        let mut validator = email_validator("not-an-email");

        assert!(!validator.validate_field("email"));
        assert_eq!(
            validator.error_message("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn passing_field_clears_previous_error() {
        let mut validator = email_validator("");
        validator.validate_field("email");
        assert!(validator.status("email").is_invalid());

        validator.set_value("email", "reader@pslvnews.in");
        assert!(validator.validate_field("email"));
        assert_eq!(validator.status("email"), &FieldStatus::Valid);
        assert_eq!(validator.error_message("email"), None);
    }

    #[test]
    fn fields_start_untouched() {
        let validator = email_validator("");
        assert_eq!(validator.status("email"), &FieldStatus::Untouched);
        assert_eq!(validator.status("unknown"), &FieldStatus::Untouched);
    }

    #[test]
    fn field_without_rules_passes_and_stays_untouched() {
        let mut validator = FormValidator::bind(Form::new().with_field("newsletter", ""));

        assert!(validator.validate_field("newsletter"));
        assert!(validator.validate_all());
        assert_eq!(validator.status("newsletter"), &FieldStatus::Untouched);
        assert_eq!(validator.rule_count("newsletter"), 0);
    }

    #[test]
    fn rules_for_missing_fields_are_skipped() {
        let mut validator = FormValidator::bind(Form::new());
        validator.add_rule("ghost", required, "Ghost is required");

        assert!(validator.validate_field("ghost"));
        assert!(validator.validate_all());
        assert_eq!(validator.status("ghost"), &FieldStatus::Untouched);
    }

    #[test]
    fn validate_all_checks_every_field() {
        let form = Form::new()
            .with_field("email", "bad")
            .with_field("password", "short");
        let mut validator = FormValidator::bind(form);
        validator
            .add_rule("email", email, "Please enter a valid email address")
            .add_rule("password", password, "Password is too weak");

        assert!(!validator.validate_all());
        assert!(validator.status("email").is_invalid());
        assert!(validator.status("password").is_invalid());
        let invalid: Vec<&str> = validator.invalid_fields().collect();
        assert_eq!(invalid, vec!["email", "password"]);
    }

    #[test]
    fn validate_all_passes_when_every_field_passes() {
        let form = Form::new()
            .with_field("email", "a@b.co")
            .with_field("password", "Abcdefg1")
            .with_field("comment", "");
        let mut validator = FormValidator::bind(form);
        validator
            .add_rule("email", email, "Please enter a valid email address")
            .add_rule("password", password, "Password is too weak");

        assert!(validator.validate_all());
    }

    #[test]
    fn input_events_update_value_and_validate_live() {
        let mut validator = email_validator("");

        assert_eq!(
            validator.handle_event(input("email", "reader@")),
            FormOutcome::Validated(false)
        );
        assert_eq!(validator.form().value("email"), Some("reader@"));

        assert_eq!(
            validator.handle_event(input("email", "reader@pslvnews.in")),
            FormOutcome::Validated(true)
        );
        assert!(validator.status("email").is_valid());
    }

    #[test]
    fn change_and_blur_events_validate() {
        let mut validator = FormValidator::bind(Form::new().with_field("role", ""));
        validator.add_rule("role", required, "Please select a role");

        assert_eq!(
            validator.handle_event(FormEvent::Blur {
                field: "role".to_string()
            }),
            FormOutcome::Validated(false)
        );
        assert_eq!(
            validator.handle_event(FormEvent::Change {
                field: "role".to_string(),
                value: "news_reporter".to_string()
            }),
            FormOutcome::Validated(true)
        );
    }

    #[test]
    fn submit_is_blocked_until_valid() {
        let mut validator = email_validator("");
        validator.add_rule("email", min_length(6), "Too short");

        assert_eq!(validator.handle_event(FormEvent::Submit), FormOutcome::Blocked);

        validator.handle_event(input("email", "a@b.co"));
        match validator.handle_event(FormEvent::Submit) {
            FormOutcome::Submitted(form) => assert_eq!(form.value("email"), Some("a@b.co")),
            other => panic!("expected submission, got {other:?}"),
        }
    }

    #[test]
    fn rules_accumulate_per_field() {
        let validator = email_validator("");
        assert_eq!(validator.rule_count("email"), 2);
    }
}
