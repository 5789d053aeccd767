//! Form controller: field values, readiness signal, and submit

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directory::MemberDirectory;
use crate::state::{
    EntryType, FieldKind, FieldSnapshot, FieldState, FormFields, FormSnapshot, MemberRecord,
    ProviderMode,
};
use crate::validate::{self, ValidationPolicy};

/// Submit-time failure, reported to the host as a single message
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Assembled identifier failed the shape check
    #[error("ID must look like name@domain with a 2-3 letter top-level domain")]
    InvalidIdFormat,
    /// Submit was driven while the readiness signal was off
    #[error("form is not complete yet")]
    FormIncomplete,
}

/// Successful submit result handed to the host for navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    /// Finalized login identifier
    pub member_id: String,
    pub password: String,
    /// Identifier the member was stored under before a profile update
    pub previous_id: Option<String>,
}

/// Drives the seven sign-up fields and the submit-readiness signal.
///
/// Field values are owned here and mutated only through
/// [`on_field_changed`](Self::on_field_changed); every state-changing call
/// returns a fresh [`FormSnapshot`] for the host to render. All transitions
/// are synchronous; only [`submit`](Self::submit) is async because it crosses
/// the directory boundary.
pub struct FormController<D> {
    fields: FormFields,
    provider: ProviderMode,
    /// Identifier of the record being edited; `Some` means Update mode
    original_id: Option<String>,
    policy: ValidationPolicy,
    pub directory: D,
}

impl<D: MemberDirectory> FormController<D> {
    /// Controller for a blank sign-up form (Create mode)
    pub fn new(directory: D) -> Self {
        Self {
            fields: FormFields::default(),
            provider: ProviderMode::Unselected,
            original_id: None,
            policy: ValidationPolicy::default(),
            directory,
        }
    }

    /// Controller prefilled from an existing member (Update mode).
    ///
    /// The provider is inferred from the identifier's domain portion and
    /// only the local part lands in the ID field. The email and
    /// password-check fields start blank either way, so the form is not
    /// ready until the password is confirmed again.
    pub fn for_update(directory: D, member: &MemberRecord) -> Self {
        let provider = ProviderMode::from_identifier(&member.id);
        tracing::debug!(id = %member.id, ?provider, "inferred provider from existing identifier");

        let fields = FormFields {
            name: FieldState::with_value(member.name.clone()),
            age: FieldState::with_value(member.age.clone()),
            mbti: FieldState::with_value(member.mbti.clone()),
            local_id: FieldState::with_value(member.local_part()),
            password: FieldState::with_value(member.password.clone()),
            password_confirm: FieldState::default(),
            email: FieldState::default(),
        };

        Self {
            fields,
            provider,
            original_id: Some(member.id.clone()),
            policy: ValidationPolicy::default(),
            directory,
        }
    }

    /// Attach an opt-in validation policy
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn entry_type(&self) -> EntryType {
        if self.original_id.is_some() {
            EntryType::Update
        } else {
            EntryType::Create
        }
    }

    pub fn provider(&self) -> ProviderMode {
        self.provider
    }

    /// Store a new raw value, re-validate the field, and publish the result.
    /// The password-check field is re-validated whenever either password
    /// field changes.
    pub fn on_field_changed(&mut self, kind: FieldKind, value: impl Into<String>) -> FormSnapshot {
        self.fields.get_mut(kind).value = value.into();
        self.revalidate(kind);
        if kind == FieldKind::Password {
            self.revalidate(FieldKind::PasswordConfirm);
        }
        self.snapshot()
    }

    /// Switch the provider selection and publish the result
    pub fn on_provider_changed(&mut self, mode: ProviderMode) -> FormSnapshot {
        self.provider = mode;
        self.snapshot()
    }

    /// Current published state, recomputed in full
    pub fn snapshot(&self) -> FormSnapshot {
        let fields = FieldKind::ALL
            .iter()
            .map(|kind| {
                let state = self.fields.get(*kind);
                FieldSnapshot {
                    kind: *kind,
                    value: state.value.clone(),
                    error: state.error,
                }
            })
            .collect();

        FormSnapshot {
            fields,
            provider: self.provider,
            submit_enabled: self.submit_enabled(),
        }
    }

    /// True iff a provider is selected and every required field has a
    /// non-blank value and no error. Email is required only for manual
    /// entry.
    pub fn submit_enabled(&self) -> bool {
        if self.provider == ProviderMode::Unselected {
            return false;
        }
        FieldKind::ALL
            .iter()
            .filter(|kind| **kind != FieldKind::Email || self.provider.requires_manual_email())
            .all(|kind| {
                let field = self.fields.get(*kind);
                field.error.is_none() && !field.is_blank()
            })
    }

    /// Validate the assembled identifier and hand the member record to the
    /// directory. Field values are left untouched on failure.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        if !self.submit_enabled() {
            return Err(SubmitError::FormIncomplete.into());
        }

        let id = self.assembled_id();
        if !validate::assembled_id_is_valid(&id) {
            tracing::debug!(%id, "assembled identifier failed the shape check");
            return Err(SubmitError::InvalidIdFormat.into());
        }

        let password = self.fields.get(FieldKind::Password).value.clone();
        let member = MemberRecord::new(
            id.clone(),
            password.clone(),
            self.fields.get(FieldKind::Name).value.clone(),
            self.fields.get(FieldKind::Age).value.clone(),
            self.fields.get(FieldKind::Mbti).value.clone(),
        );

        let previous_id = if let Some(previous) = self.original_id.clone() {
            self.directory.update_member(&previous, member).await?;
            // Further submits edit the record under its new identifier.
            self.original_id = Some(id.clone());
            Some(previous)
        } else {
            self.directory.create_member(member).await?;
            None
        };
        tracing::info!(id = %id, updated = previous_id.is_some(), "member submitted");

        Ok(SubmitOutcome {
            member_id: id,
            password,
            previous_id,
        })
    }

    fn revalidate(&mut self, kind: FieldKind) {
        let value = self.fields.get(kind).value.as_str();
        let error = match kind {
            FieldKind::Name => validate::validate_name(value),
            FieldKind::Age => validate::validate_age(value, &self.policy),
            FieldKind::Mbti => validate::validate_mbti(value, &self.policy),
            FieldKind::LocalId => validate::validate_local_id(value),
            FieldKind::Password => validate::validate_password(value),
            FieldKind::PasswordConfirm => validate::validate_password_confirm(
                value,
                &self.fields.get(FieldKind::Password).value,
            ),
            FieldKind::Email => validate::validate_email(value),
        };
        self.fields.get_mut(kind).error = error;
    }

    /// Final identifier per the current provider selection
    fn assembled_id(&self) -> String {
        let local = &self.fields.get(FieldKind::LocalId).value;
        match self.provider {
            ProviderMode::Unselected => local.clone(),
            // No separator here: manual entry expects the full `@domain`
            // tail in the email field.
            ProviderMode::Manual => {
                format!("{local}{}", self.fields.get(FieldKind::Email).value)
            }
            mode => format!("{local}@{}", mode.domain().unwrap_or_default()),
        }
    }
}
