use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)+$")
        .expect("compile email regex")
});

pub const PASSWORD_MIN: usize = 8;

/// Characters accepted by the special-character password rule.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_WEAK: &str =
    "Must contain at least 8 characters with both letters and numbers";
pub const MSG_PASSWORD_NO_SPECIAL: &str = "Add at least 1 special character for better security";

/// Requires a syntactically plausible `local@domain` address where
/// the domain has at least one dot. Anything stricter belongs to the
/// server, which owns the authoritative check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email) && email.len() <= 254
}

struct PasswordRule {
    message: &'static str,
    satisfied: fn(&str) -> bool,
}

// Each rule is an independent predicate; failing several rules
// reports several messages. Reordering entries only reorders the
// messages.
const PASSWORD_RULES: &[PasswordRule] = &[
    PasswordRule {
        message: MSG_PASSWORD_WEAK,
        satisfied: has_minimum_strength,
    },
    PasswordRule {
        message: MSG_PASSWORD_NO_SPECIAL,
        satisfied: has_special_char,
    },
];

fn has_minimum_strength(pass: &str) -> bool {
    pass.chars().count() >= PASSWORD_MIN
        && pass.chars().any(|c| c.is_ascii_digit())
        && pass.chars().any(char::is_alphabetic)
}

fn has_special_char(pass: &str) -> bool {
    pass.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

/// Declarative password-complexity policy.
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Evaluates `candidate` against every rule and returns the
    /// messages of the ones it fails. An empty list means the
    /// password is acceptable.
    ///
    /// The empty string is special-cased: running strength rules
    /// over nothing would only produce confusing noise, so it yields
    /// the single "required" message and nothing else.
    #[must_use]
    pub fn evaluate(candidate: &str) -> Vec<Cow<'static, str>> {
        if candidate.is_empty() {
            return vec![Cow::Borrowed(MSG_PASSWORD_REQUIRED)];
        }

        PASSWORD_RULES
            .iter()
            .filter(|rule| !(rule.satisfied)(candidate))
            .map(|rule| Cow::Borrowed(rule.message))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("gush@gmail.com"));
        assert!(is_valid_email("first.last@sub.example.org"));

        assert!(!is_valid_email("nada_neutho"));
        assert!(!is_valid_email("no-dot@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("spaced out@example.com"));
    }

    #[test]
    fn empty_password_reports_required_only() {
        assert_eq!(PasswordPolicy::evaluate(""), [MSG_PASSWORD_REQUIRED]);
    }

    #[test]
    fn short_passwords_fail_the_strength_rule() {
        for pass in ["a1!", "abc123!", "1234567"] {
            let violations = PasswordPolicy::evaluate(pass);
            assert!(
                violations.contains(&Cow::Borrowed(MSG_PASSWORD_WEAK)),
                "expected strength violation for {pass:?}"
            );
        }
    }

    #[test]
    fn strength_rule_needs_both_letters_and_numbers() {
        assert!(PasswordPolicy::evaluate("12345678!").contains(&Cow::Borrowed(MSG_PASSWORD_WEAK)));
        assert!(PasswordPolicy::evaluate("abcdefgh!").contains(&Cow::Borrowed(MSG_PASSWORD_WEAK)));
        assert!(
            !PasswordPolicy::evaluate("abcdefg1!").contains(&Cow::Borrowed(MSG_PASSWORD_WEAK))
        );
    }

    #[test]
    fn special_character_rule_is_independent() {
        // Fails both rules at once, in declaration order.
        assert_eq!(
            PasswordPolicy::evaluate("short"),
            [MSG_PASSWORD_WEAK, MSG_PASSWORD_NO_SPECIAL]
        );

        // Strong but no special character.
        assert_eq!(
            PasswordPolicy::evaluate("abcdefg1"),
            [MSG_PASSWORD_NO_SPECIAL]
        );

        // Every character in the set satisfies the rule on its own.
        for special in PASSWORD_SPECIAL_CHARS.chars() {
            let pass = format!("abcdefg1{special}");
            assert!(
                PasswordPolicy::evaluate(&pass).is_empty(),
                "expected {pass:?} to pass"
            );
        }
    }
}
