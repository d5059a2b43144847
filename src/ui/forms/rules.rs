// SPDX-License-Identifier: MPL-2.0
//! Field rules and the built-in predicates.
//!
//! A predicate is any `Fn(&str) -> bool`. The built-ins are pure functions
//! (or return pure closures) so they can be shared between forms.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Boxed predicate over a field's current value.
pub type Predicate = Box<dyn Fn(&str) -> bool>;

/// Minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols accepted in passwords besides ASCII letters and digits.
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// `local@domain.tld`, no whitespace and a single `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// A predicate plus the message shown when it fails.
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    pub fn new(predicate: impl Fn(&str) -> bool + 'static, message: impl Into<String>) -> Self {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// Returns `true` when `value` satisfies the rule.
    #[must_use]
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Non-empty after trimming whitespace.
#[must_use]
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

#[must_use]
pub fn email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// At least eight characters drawn from ASCII letters, digits and
/// `@$!%*?&`, including a lowercase letter, an uppercase letter and a digit.
#[must_use]
pub fn password(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));

    allowed
        && value.chars().count() >= PASSWORD_MIN_LENGTH
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// At least `min` characters (untrimmed).
pub fn min_length(min: usize) -> impl Fn(&str) -> bool + Clone {
    move |value: &str| value.chars().count() >= min
}

/// At most `max` characters (untrimmed).
pub fn max_length(max: usize) -> impl Fn(&str) -> bool + Clone {
    move |value: &str| value.chars().count() <= max
}

/// An integer within `min..=max`. Anything that does not parse fails.
pub fn integer_between(min: i64, max: i64) -> impl Fn(&str) -> bool + Clone {
    move |value: &str| {
        value
            .trim()
            .parse::<i64>()
            .is_ok_and(|n| (min..=max).contains(&n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        assert!(required("x"));
        assert!(required("  padded  "));
        assert!(!required(""));
        assert!(!required("   \t\n"));
    }

    #[test]
    fn email_accepts_local_at_domain_dot_tld() {
        assert!(email("reader@pslvnews.in"));
        assert!(email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in [
            "",
            "plainaddress",
            "@missing-local.com",
            "missing-domain@",
            "no-tld@domain",
            "two@@signs.com",
            "spa ce@domain.com",
            "trailing@domain.",
        ] {
            assert!(!email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn password_requires_case_mix_and_digit() {
        assert!(password("Abcdefg1"));
        assert!(!password("abcdefg1"), "no uppercase");
        assert!(!password("Abcdefg"), "no digit, too short");
        assert!(!password("Abcdefgh"), "no digit");
        assert!(!password("ABCDEFG1"), "no lowercase");
        assert!(!password("Abcde1"), "too short");
    }

    #[test]
    fn password_limits_symbols() {
        assert!(password("Abcdef1!"));
        assert!(password("P@$$w0rd&"));
        assert!(!password("Abcdef1 "), "space is not allowed");
        assert!(!password("Abcdef1#"), "# is not allowed");
        assert!(!password("Äbcdefg1"), "non-ASCII is not allowed");
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let at_least_three = min_length(3);
        assert!(!at_least_three("ab"));
        assert!(at_least_three("abc"));

        let at_most_three = max_length(3);
        assert!(at_most_three("abc"));
        assert!(!at_most_three("abcd"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(max_length(4)("नमस्"));
        assert!(min_length(2)("éé"));
        assert!(!min_length(3)("éé"));
    }

    #[test]
    fn integer_between_parses_and_bounds() {
        let age = integer_between(13, 120);
        assert!(age("13"));
        assert!(age(" 120 "));
        assert!(!age("12"));
        assert!(!age("121"));
        assert!(!age("abc"));
        assert!(!age(""));
        assert!(!age("18.5"));
    }

    #[test]
    fn rule_reports_its_message() {
        let rule = Rule::new(required, "Location is required");
        assert!(!rule.check(""));
        assert!(rule.check("Chennai"));
        assert_eq!(rule.message(), "Location is required");
    }
}
