// ============================================================================
// VALIDATION - Client-side form checks run before any network call
// ============================================================================

use std::fmt;

use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern");
}

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
}

impl PasswordRequirement {
    pub const ALL: [PasswordRequirement; 4] = [
        PasswordRequirement::MinLength,
        PasswordRequirement::Uppercase,
        PasswordRequirement::Lowercase,
        PasswordRequirement::Digit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::Uppercase => "One uppercase letter",
            Self::Lowercase => "One lowercase letter",
            Self::Digit => "One number",
        }
    }

    pub fn is_met_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LEN,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

/// Requirements the password does not satisfy yet, in display order
pub fn password_requirements(password: &str) -> Vec<PasswordRequirement> {
    PasswordRequirement::ALL
        .into_iter()
        .filter(|req| !req.is_met_by(password))
        .collect()
}

/// Every requirement with whether `password` meets it, for the live checklist
pub fn password_checklist(password: &str) -> Vec<(PasswordRequirement, bool)> {
    PasswordRequirement::ALL
        .into_iter()
        .map(|req| (req, req.is_met_by(password)))
        .collect()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required(&'static str),
    InvalidEmail,
    WeakPassword(Vec<PasswordRequirement>),
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(what) => write!(f, "{} required", what),
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
            Self::WeakPassword(missing) => {
                let labels: Vec<&str> = missing.iter().map(|r| r.label()).collect();
                write!(f, "Password must contain: {}", labels.join(", "))
            }
            Self::PasswordMismatch => f.write_str("New passwords do not match"),
        }
    }
}

pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    let missing = password_requirements(password);
    if !missing.is_empty() {
        return Err(ValidationError::WeakPassword(missing));
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Sign-in form: both fields present and the email well formed
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::Required("Email and password are"));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_needs_both_fields() {
        assert_eq!(
            validate_login("", "secret").unwrap_err().to_string(),
            "Email and password are required"
        );
        assert_eq!(validate_login("a@b", "secret"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_login(" a@b.com ", "secret"), Ok(()));
    }

    #[test]
    fn short_lowercase_password_misses_everything_but_lowercase() {
        assert_eq!(
            password_requirements("abc"),
            vec![
                PasswordRequirement::MinLength,
                PasswordRequirement::Uppercase,
                PasswordRequirement::Digit,
            ]
        );
    }

    #[test]
    fn empty_password_misses_all_four() {
        assert_eq!(password_requirements("").len(), 4);
    }

    #[test]
    fn checklist_marks_rules_as_they_are_met() {
        assert_eq!(
            password_checklist("abc1"),
            vec![
                (PasswordRequirement::MinLength, false),
                (PasswordRequirement::Uppercase, false),
                (PasswordRequirement::Lowercase, true),
                (PasswordRequirement::Digit, true),
            ]
        );
        assert!(password_checklist("Abcdef12").iter().all(|(_, met)| *met));
    }

    #[test]
    fn strong_password_meets_everything() {
        assert!(password_requirements("Abcdef12").is_empty());
    }

    #[test]
    fn weak_password_message_lists_labels() {
        let err = validate_new_password("abcdefgh", "abcdefgh").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must contain: One uppercase letter, One number"
        );
    }

    #[test]
    fn mismatch_is_reported_after_strength() {
        assert_eq!(
            validate_new_password("Abcdef12", "Abcdef13"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(validate_new_password("Abcdef12", "Abcdef12"), Ok(()));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("  ops.lead@warehouse.example.org "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("no spaces@b.com"));
        assert!(!is_valid_email("@b.com"));
    }
}
