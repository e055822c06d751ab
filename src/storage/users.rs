//! User store backing the listing and profile pages.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::cursor::{CursorEntry, CursorIndex};
use crate::error::{ErrorCode, ServiceError, ServiceResult};
use crate::models::UserDetail;

/// Trait for user record access.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Total number of users.
    async fn count(&self) -> u64;

    /// Returns up to `limit` users starting at `offset`, together with the
    /// total count observed by the same read.
    async fn page(&self, offset: u64, limit: u64) -> (Vec<UserDetail>, u64);

    /// Returns a user and its navigation neighbors.
    async fn profile(&self, id: u64) -> ServiceResult<(UserDetail, CursorEntry)>;

    /// Replaces the whole record set.
    async fn refresh(&self, users: Vec<UserDetail>) -> ServiceResult<()>;
}

/// An ordered record set with its cursor index.
#[derive(Debug, Default)]
pub struct Dataset {
    users: Vec<UserDetail>,
    positions: HashMap<u64, usize>,
    cursor: CursorIndex,
}

impl Dataset {
    /// Builds the dataset. The order of `users` defines navigation order.
    pub fn new(users: Vec<UserDetail>) -> ServiceResult<Self> {
        let cursor = CursorIndex::build(users.iter().map(|u| u.id))?;
        let positions = users
            .iter()
            .enumerate()
            .map(|(pos, u)| (u.id, pos))
            .collect();

        Ok(Self {
            users,
            positions,
            cursor,
        })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Slice of users in `[offset, offset + limit)`, empty past the end.
    pub fn slice(&self, offset: u64, limit: u64) -> &[UserDetail] {
        let len = self.users.len();
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(offset.saturating_add(limit))
            .unwrap_or(usize::MAX)
            .min(len);
        &self.users[start..end]
    }

    pub fn get(&self, id: u64) -> ServiceResult<&UserDetail> {
        self.positions
            .get(&id)
            .map(|&pos| &self.users[pos])
            .ok_or_else(|| ServiceError::new(ErrorCode::UserNotFound))
    }

    pub fn cursor(&self) -> &CursorIndex {
        &self.cursor
    }
}

/// In-memory user store.
///
/// Readers take a cheap `Arc` snapshot; `refresh` builds the replacement
/// dataset completely before swapping it in.
pub struct MemoryUserStore {
    dataset: RwLock<Arc<Dataset>>,
}

impl MemoryUserStore {
    /// Creates a store over the given ordered users.
    pub fn new(users: Vec<UserDetail>) -> ServiceResult<Self> {
        Ok(Self {
            dataset: RwLock::new(Arc::new(Dataset::new(users)?)),
        })
    }

    /// Creates a store with no users.
    pub fn empty() -> Self {
        Self {
            dataset: RwLock::new(Arc::new(Dataset::default())),
        }
    }

    /// Returns the current dataset.
    pub fn snapshot(&self) -> Arc<Dataset> {
        self.dataset.read().clone()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn count(&self) -> u64 {
        self.snapshot().len() as u64
    }

    async fn page(&self, offset: u64, limit: u64) -> (Vec<UserDetail>, u64) {
        let dataset = self.snapshot();
        (dataset.slice(offset, limit).to_vec(), dataset.len() as u64)
    }

    async fn profile(&self, id: u64) -> ServiceResult<(UserDetail, CursorEntry)> {
        let dataset = self.snapshot();
        let user = dataset.get(id)?.clone();
        let entry = dataset
            .cursor()
            .lookup(id)
            .map_err(|_| ServiceError::new(ErrorCode::UserNotFound))?;
        Ok((user, entry))
    }

    async fn refresh(&self, users: Vec<UserDetail>) -> ServiceResult<()> {
        let dataset = Arc::new(Dataset::new(users)?);
        let count = dataset.len();
        *self.dataset.write() = dataset;
        info!("User dataset refreshed with {} records", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::generate_users;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn users(n: u64) -> Vec<UserDetail> {
        generate_users(n, &mut StdRng::seed_from_u64(3))
    }

    #[tokio::test]
    async fn test_page_slices_and_counts() {
        let store = MemoryUserStore::new(users(23)).unwrap();
        let (page, total) = store.page(20, 10).await;
        assert_eq!(total, 23);
        assert_eq!(page.iter().map(|u| u.id).collect::<Vec<_>>(), vec![20, 21, 22]);

        let (page, _) = store.page(100, 10).await;
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_profile_wraps_around() {
        let store = MemoryUserStore::new(users(5)).unwrap();
        let (user, entry) = store.profile(0).await.unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(entry.prev_id, 4);
        assert_eq!(entry.next_id, 1);
    }

    #[tokio::test]
    async fn test_profile_unknown_user() {
        let store = MemoryUserStore::new(users(5)).unwrap();
        let err = store.profile(5).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn test_refresh_swaps_whole_dataset() {
        let store = MemoryUserStore::new(users(5)).unwrap();
        let before = store.snapshot();

        store.refresh(users(3)).await.unwrap();
        assert_eq!(store.count().await, 3);
        let (_, entry) = store.profile(2).await.unwrap();
        assert_eq!(entry.next_id, 0);

        // Earlier snapshots stay intact.
        assert_eq!(before.len(), 5);
        assert_eq!(before.cursor().lookup(4).unwrap().next_id, 0);
    }

    #[tokio::test]
    async fn test_refresh_rejects_duplicates_and_keeps_old_data() {
        let store = MemoryUserStore::new(users(4)).unwrap();
        let mut dup = users(2);
        dup[1].id = 0;

        assert!(store.refresh(dup).await.is_err());
        assert_eq!(store.count().await, 4);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryUserStore::empty();
        assert_eq!(store.count().await, 0);
        assert!(store.profile(0).await.is_err());
    }
}
