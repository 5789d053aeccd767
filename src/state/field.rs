//! Form field identities and per-field state

use serde::{Deserialize, Serialize};

use crate::validate::FieldError;

/// The seven fields of the sign-up form. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Name,
    Age,
    Mbti,
    LocalId,
    Password,
    PasswordConfirm,
    Email,
}

impl FieldKind {
    /// All fields in form order. Email comes last; it is only shown when the
    /// provider is set to manual entry.
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Name,
        FieldKind::Age,
        FieldKind::Mbti,
        FieldKind::LocalId,
        FieldKind::Password,
        FieldKind::PasswordConfirm,
        FieldKind::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Mbti => "MBTI",
            Self::LocalId => "ID",
            Self::Password => "Password",
            Self::PasswordConfirm => "Password check",
            Self::Email => "Email",
        }
    }
}

/// Raw value and current validation result for a single field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
}

impl FieldState {
    /// Create a field state with an initial value and no error
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    /// Whether the value is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Owned collection of all seven field states, indexed by [`FieldKind`]
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub name: FieldState,
    pub age: FieldState,
    pub mbti: FieldState,
    pub local_id: FieldState,
    pub password: FieldState,
    pub password_confirm: FieldState,
    pub email: FieldState,
}

impl FormFields {
    pub fn get(&self, kind: FieldKind) -> &FieldState {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Age => &self.age,
            FieldKind::Mbti => &self.mbti,
            FieldKind::LocalId => &self.local_id,
            FieldKind::Password => &self.password,
            FieldKind::PasswordConfirm => &self.password_confirm,
            FieldKind::Email => &self.email,
        }
    }

    pub fn get_mut(&mut self, kind: FieldKind) -> &mut FieldState {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Age => &mut self.age,
            FieldKind::Mbti => &mut self.mbti,
            FieldKind::LocalId => &mut self.local_id,
            FieldKind::Password => &mut self.password,
            FieldKind::PasswordConfirm => &mut self.password_confirm,
            FieldKind::Email => &mut self.email,
        }
    }
}
