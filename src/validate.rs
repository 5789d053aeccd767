//! Pure per-field validators and the submit-time identifier check
//!
//! Every function here is side-effect free: raw text in, `Option<FieldError>`
//! out. The assembled-identifier check runs only at submit time over the
//! final `local@domain` string, never per keystroke.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inline, non-fatal validation failure for a single field
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("this field is required")]
    Empty,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("age must be a number")]
    AgeNotNumeric,
    #[error("not a valid MBTI type")]
    UnknownMbti,
}

/// Opt-in strictness for the age and MBTI fields, which are otherwise only
/// checked for blankness. Defaults are lenient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Require the age field to parse as an unsigned integer
    pub numeric_age: bool,
    /// Require the MBTI field to be one of the 16 canonical codes
    pub known_mbti: bool,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_name(value: &str) -> Option<FieldError> {
    is_blank(value).then_some(FieldError::Empty)
}

pub fn validate_age(value: &str, policy: &ValidationPolicy) -> Option<FieldError> {
    if is_blank(value) {
        return Some(FieldError::Empty);
    }
    if policy.numeric_age && value.trim().parse::<u32>().is_err() {
        return Some(FieldError::AgeNotNumeric);
    }
    None
}

pub fn validate_mbti(value: &str, policy: &ValidationPolicy) -> Option<FieldError> {
    if is_blank(value) {
        return Some(FieldError::Empty);
    }
    if policy.known_mbti && !is_known_mbti(value) {
        return Some(FieldError::UnknownMbti);
    }
    None
}

pub fn validate_local_id(value: &str) -> Option<FieldError> {
    is_blank(value).then_some(FieldError::Empty)
}

pub fn validate_password(value: &str) -> Option<FieldError> {
    is_blank(value).then_some(FieldError::Empty)
}

/// Checked against the current password value; re-run whenever either
/// password field changes.
pub fn validate_password_confirm(value: &str, password: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some(FieldError::Empty)
    } else if value != password {
        Some(FieldError::PasswordMismatch)
    } else {
        None
    }
}

/// Per-keystroke the email field is only checked for blankness; its shape is
/// validated at submit time as part of the assembled identifier.
pub fn validate_email(value: &str) -> Option<FieldError> {
    is_blank(value).then_some(FieldError::Empty)
}

/// `localpart@domain.tld` where local part and domain body are alphanumeric
/// runs with single `-`, `_` or `.` separators and the top-level label is
/// 2-3 ASCII letters.
static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zA-Z]([-_.]?[0-9a-zA-Z])*@[0-9a-zA-Z]([-_.]?[0-9a-zA-Z])*\.[a-zA-Z]{2,3}$")
        .expect("identifier pattern compiles")
});

/// Submit-time shape check over the fully assembled identifier
pub fn assembled_id_is_valid(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

fn is_known_mbti(value: &str) -> bool {
    let mut chars = value.trim().chars().map(|c| c.to_ascii_uppercase());
    let (Some(a), Some(b), Some(c), Some(d), None) = (
        chars.next(),
        chars.next(),
        chars.next(),
        chars.next(),
        chars.next(),
    ) else {
        return false;
    };
    matches!(a, 'E' | 'I')
        && matches!(b, 'S' | 'N')
        && matches!(c, 'T' | 'F')
        && matches!(d, 'J' | 'P')
}
