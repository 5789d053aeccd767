//! In-memory member directory
//!
//! Keeps members in a plain in-process list, mirroring the app-wide member
//! list the sign-up screen writes into. Suitable for hosts without real
//! persistence and for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::traits::MemberDirectory;
use crate::state::MemberRecord;

/// In-process member store
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    members: Vec<MemberRecord>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory prepopulated with existing members
    pub fn with_members(members: Vec<MemberRecord>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[async_trait]
impl MemberDirectory for InMemoryDirectory {
    async fn create_member(&mut self, member: MemberRecord) -> Result<()> {
        // Identifier uniqueness is not enforced; sign-up appends unconditionally.
        if self.members.iter().any(|m| m.id == member.id) {
            tracing::warn!(id = %member.id, "member id already present, appending anyway");
        }
        tracing::info!(id = %member.id, "member created");
        self.members.push(member);
        Ok(())
    }

    async fn update_member(&mut self, previous_id: &str, mut member: MemberRecord) -> Result<()> {
        let slot = self
            .members
            .iter_mut()
            .find(|m| m.id == previous_id)
            .ok_or_else(|| anyhow!("no member stored under id {previous_id}"))?;

        // The join date survives profile edits.
        member.created_at = slot.created_at;
        tracing::info!(previous_id, id = %member.id, "member updated");
        *slot = member;
        Ok(())
    }

    async fn find_member(&self, id: &str) -> Result<Option<MemberRecord>> {
        Ok(self.members.iter().find(|m| m.id == id).cloned())
    }

    async fn list_members(&self) -> Result<Vec<MemberRecord>> {
        Ok(self.members.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn member(id: &str) -> MemberRecord {
        MemberRecord::new(id, "Secret1!", "Alice", "30", "INTJ")
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let mut directory = InMemoryDirectory::new();
        directory.create_member(member("alice@gmail.com")).await.unwrap();

        let found = directory.find_member("alice@gmail.com").await.unwrap();
        assert_eq!(found.map(|m| m.id), Some("alice@gmail.com".to_string()));
        assert_eq!(directory.len(), 1);
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let directory = InMemoryDirectory::new();
        assert!(directory.find_member("nobody@naver.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_create_still_appends() {
        let mut directory = InMemoryDirectory::new();
        directory.create_member(member("alice@gmail.com")).await.unwrap();
        directory.create_member(member("alice@gmail.com")).await.unwrap();
        assert_eq!(directory.len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_record_under_previous_id() {
        let mut directory = InMemoryDirectory::with_members(vec![member("bob@naver.com")]);

        let replacement = MemberRecord::new("bob@kakao.com", "NewPw1!", "Bob", "26", "ENFP");
        directory
            .update_member("bob@naver.com", replacement)
            .await
            .unwrap();

        assert!(directory.find_member("bob@naver.com").await.unwrap().is_none());
        let updated = directory.find_member("bob@kakao.com").await.unwrap().unwrap();
        assert_eq!(updated.name, "Bob");
        assert_eq!(directory.len(), 1);
    }

    #[tokio::test]
    async fn test_update_preserves_join_date() {
        let original = member("bob@naver.com");
        let joined = original.created_at;
        let mut directory = InMemoryDirectory::with_members(vec![original]);

        let replacement = MemberRecord::new("bob@naver.com", "NewPw1!", "Bob", "26", "ENFP");
        directory
            .update_member("bob@naver.com", replacement)
            .await
            .unwrap();

        let updated = directory.find_member("bob@naver.com").await.unwrap().unwrap();
        assert_eq!(updated.created_at, joined);
    }

    #[tokio::test]
    async fn test_update_unknown_id_errors() {
        let mut directory = InMemoryDirectory::new();
        let result = directory
            .update_member("ghost@gmail.com", member("ghost@gmail.com"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_returns_members_in_insertion_order() {
        let mut directory = InMemoryDirectory::new();
        directory.create_member(member("a@gmail.com")).await.unwrap();
        directory.create_member(member("b@naver.com")).await.unwrap();

        let ids: Vec<String> = directory
            .list_members()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["a@gmail.com".to_string(), "b@naver.com".to_string()]);
    }
}
