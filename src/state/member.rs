//! Member record handed to the directory on successful submit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member information as stored in the member directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Full login identifier (`local@domain`)
    pub id: String,
    pub password: String,
    pub name: String,
    /// Kept exactly as entered; numeric shape is an opt-in policy check
    pub age: String,
    pub mbti: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MemberRecord {
    /// Create a record with fresh timestamps
    pub fn new(
        id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
        mbti: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            password: password.into(),
            name: name.into(),
            age: age.into(),
            mbti: mbti.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Local part of the identifier (everything before the first `@`).
    /// Identifiers without an `@` are returned whole.
    pub fn local_part(&self) -> &str {
        self.id.split_once('@').map(|(local, _)| local).unwrap_or(&self.id)
    }
}
