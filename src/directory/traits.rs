//! Trait abstraction for the member directory to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

use crate::state::MemberRecord;

/// Operations the form controller needs from the member directory.
/// Mutations must each be treated as a single atomic step per submit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Add a newly signed-up member
    async fn create_member(&mut self, member: MemberRecord) -> Result<()>;

    /// Replace the member previously stored under `previous_id`
    async fn update_member(&mut self, previous_id: &str, member: MemberRecord) -> Result<()>;

    /// Look up a member by identifier
    async fn find_member(&self, id: &str) -> Result<Option<MemberRecord>>;

    /// List all stored members
    async fn list_members(&self) -> Result<Vec<MemberRecord>>;
}
