// SPDX-License-Identifier: MPL-2.0
//! Rule sets for the site's account forms.

use super::form::Form;
use super::rules::{email, integer_between, password, required};
use super::validator::FormValidator;

pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 120;

/// Sign-in form: `email`, `password`.
#[must_use]
pub fn login(form: Form) -> FormValidator {
    let mut validator = FormValidator::bind(form);
    validator
        .add_rule("email", email, "Please enter a valid email address")
        .add_rule("password", required, "Password is required");
    validator
}

/// Sign-up form: `first_name`, `last_name`, `email`, `password`, `age`,
/// `location`, `role`.
#[must_use]
pub fn registration(form: Form) -> FormValidator {
    let mut validator = FormValidator::bind(form);
    validator
        .add_rule("first_name", required, "First name is required")
        .add_rule("last_name", required, "Last name is required")
        .add_rule("email", email, "Please enter a valid email address")
        .add_rule(
            "password",
            password,
            "Password must be at least 8 characters with uppercase, lowercase, and number",
        )
        .add_rule(
            "age",
            integer_between(MIN_AGE, MAX_AGE),
            format!("Age must be between {MIN_AGE} and {MAX_AGE}"),
        )
        .add_rule("location", required, "Location is required")
        .add_rule("role", required, "Please select a role");
    validator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::forms::FormOutcome;
    use crate::ui::forms::FormEvent;

    fn complete_registration() -> Form {
        Form::new()
            .with_field("first_name", "Asha")
            .with_field("last_name", "Rao")
            .with_field("email", "asha@pslvnews.in")
            .with_field("password", "Abcdefg1")
            .with_field("age", "29")
            .with_field("location", "Bengaluru")
            .with_field("role", "user")
    }

    #[test]
    fn login_requires_email_and_password() {
        let mut validator = login(Form::new().with_field("email", "").with_field("password", ""));

        assert_eq!(validator.handle_event(FormEvent::Submit), FormOutcome::Blocked);
        assert_eq!(
            validator.error_message("email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(validator.error_message("password"), Some("Password is required"));
    }

    #[test]
    fn complete_registration_submits() {
        let mut validator = registration(complete_registration());
        assert!(validator.validate_all());
    }

    #[test]
    fn registration_rejects_out_of_range_age() {
        let mut form = complete_registration();
        form.set_value("age", "12");
        let mut validator = registration(form);

        assert!(!validator.validate_all());
        assert_eq!(
            validator.error_message("age"),
            Some("Age must be between 13 and 120")
        );
        let invalid: Vec<&str> = validator.invalid_fields().collect();
        assert_eq!(invalid, vec!["age"]);
    }

    #[test]
    fn registration_covers_every_field() {
        let validator = registration(Form::new());
        for field in [
            "first_name",
            "last_name",
            "email",
            "password",
            "age",
            "location",
            "role",
        ] {
            assert_eq!(validator.rule_count(field), 1, "{field} should have a rule");
        }
    }
}
