//! Signup Form - field validation and form-readiness engine
//!
//! Converts raw per-field input from a sign-up / profile-edit screen into
//! inline error states and an aggregate submit-enabled signal, and hands
//! finished member records to an injected member directory.

pub mod config;
pub mod controller;
pub mod directory;
pub mod state;
pub mod validate;

pub use config::FormConfig;
pub use controller::{FormController, SubmitError, SubmitOutcome};
pub use directory::{InMemoryDirectory, MemberDirectory};
pub use state::{
    EntryType, FieldKind, FieldSnapshot, FieldState, FormFields, FormSnapshot, MemberRecord,
    ProviderMode,
};
pub use validate::{FieldError, ValidationPolicy};
