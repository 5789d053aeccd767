//! Provider selection, entry mode, and published form snapshots

use serde::{Deserialize, Serialize};

use super::field::FieldKind;
use crate::validate::FieldError;

/// Where the identifier's domain portion comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProviderMode {
    /// Nothing picked yet; submit stays disabled
    #[default]
    Unselected,
    /// The user types the domain tail into the Email field
    Manual,
    Gmail,
    Naver,
    Kakao,
}

impl ProviderMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unselected => "Select a provider",
            Self::Manual => "Enter directly",
            Self::Gmail => "gmail.com",
            Self::Naver => "naver.com",
            Self::Kakao => "kakao.com",
        }
    }

    /// Fixed domain for the well-known providers
    pub fn domain(&self) -> Option<&'static str> {
        match self {
            Self::Gmail => Some("gmail.com"),
            Self::Naver => Some("naver.com"),
            Self::Kakao => Some("kakao.com"),
            Self::Unselected | Self::Manual => None,
        }
    }

    /// Whether the Email field is visible and required
    pub fn requires_manual_email(&self) -> bool {
        matches!(self, Self::Manual)
    }

    /// Infer the mode for an existing identifier from its domain portion.
    /// Identifiers without an `@` or with an unknown domain fall back to
    /// manual entry.
    pub fn from_identifier(id: &str) -> Self {
        match id.split_once('@').map(|(_, domain)| domain) {
            Some("gmail.com") => Self::Gmail,
            Some("naver.com") => Self::Naver,
            Some("kakao.com") => Self::Kakao,
            _ => Self::Manual,
        }
    }
}

/// Whether the form creates a new member or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryType {
    #[default]
    Create,
    Update,
}

/// Published view of a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub kind: FieldKind,
    pub value: String,
    pub error: Option<FieldError>,
}

impl FieldSnapshot {
    /// Inline error message for the host to render, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

/// Aggregate of all field states plus the derived readiness signal.
/// Recomputed from scratch on every controller call; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub fields: Vec<FieldSnapshot>,
    pub provider: ProviderMode,
    pub submit_enabled: bool,
}

impl FormSnapshot {
    pub fn field(&self, kind: FieldKind) -> Option<&FieldSnapshot> {
        self.fields.iter().find(|f| f.kind == kind)
    }

    pub fn error_for(&self, kind: FieldKind) -> Option<FieldError> {
        self.field(kind).and_then(|f| f.error)
    }
}
