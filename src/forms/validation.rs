//! Pure field validators shared by every form.
//!
//! Validators never touch presentation state; callers map the returned
//! [`ValidationResult`] onto [`crate::ui::FieldErrors`].

use regex::Regex;
use std::fmt;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9_]{3,20}$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Form fields addressed by validators and error slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    AcceptTerms,
}

impl Field {
    /// Element identifier of the input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::AcceptTerms => "acceptTerms",
        }
    }

    /// Element identifier of the inline error next to the input.
    #[must_use]
    pub const fn error_id(self) -> &'static str {
        match self {
            Field::Username => "usernameError",
            Field::Email => "emailError",
            Field::Password => "passwordError",
            Field::ConfirmPassword => "confirmPasswordError",
            Field::AcceptTerms => "acceptTermsError",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    UsernameRequired,
    UsernameFormat,
    EmailRequired,
    EmailFormat,
    PasswordRequired,
    PasswordTooShort,
    PasswordComposition,
    PasswordMismatch,
    TermsNotAccepted,
}

impl FieldError {
    /// User-facing message shown inline.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            FieldError::UsernameRequired => "Username is required",
            FieldError::UsernameFormat => {
                "Username must be 3-20 characters and contain only letters, numbers, and underscores"
            }
            FieldError::EmailRequired => "Email is required",
            FieldError::EmailFormat => "Please enter a valid email address",
            FieldError::PasswordRequired => "Password is required",
            FieldError::PasswordTooShort => "Password must be at least 8 characters long",
            FieldError::PasswordComposition => {
                "Password must contain at least one letter and one number"
            }
            FieldError::PasswordMismatch => "Passwords do not match",
            FieldError::TermsNotAccepted => "You must accept the terms and conditions",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

pub type ValidationResult = Result<(), FieldError>;

fn matches(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|regex| regex.is_match(value))
}

pub fn validate_username(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(FieldError::UsernameRequired);
    }
    if !matches(USERNAME_PATTERN, value) {
        return Err(FieldError::UsernameFormat);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !matches(EMAIL_PATTERN, value) {
        return Err(FieldError::EmailFormat);
    }
    Ok(())
}

/// Length first, then composition: at least one ASCII letter and one digit.
pub fn validate_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::PasswordTooShort);
    }
    let has_letter = value.chars().any(|ch| ch.is_ascii_alphabetic());
    let has_digit = value.chars().any(|ch| ch.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(FieldError::PasswordComposition);
    }
    Ok(())
}

pub fn validate_confirm_password(password: &str, confirmation: &str) -> ValidationResult {
    if password == confirmation {
        Ok(())
    } else {
        Err(FieldError::PasswordMismatch)
    }
}

pub fn validate_terms(accepted: bool) -> ValidationResult {
    if accepted {
        Ok(())
    } else {
        Err(FieldError::TermsNotAccepted)
    }
}

/// Presence check used where the format rules do not apply (login password).
pub fn validate_required(field: Field, value: &str) -> ValidationResult {
    if !value.is_empty() {
        return Ok(());
    }
    match field {
        Field::Username => Err(FieldError::UsernameRequired),
        Field::Email => Err(FieldError::EmailRequired),
        Field::Password | Field::ConfirmPassword => Err(FieldError::PasswordRequired),
        Field::AcceptTerms => Err(FieldError::TermsNotAccepted),
    }
}
