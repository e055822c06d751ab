//! Cyclic prev/next navigation over a fixed record ordering.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ErrorCode, ServiceError, ServiceResult};

/// Neighbors of one record in the navigation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorEntry {
    pub id: u64,
    pub prev_id: u64,
    pub next_id: u64,
}

/// Immutable id -> neighbors mapping built from an ordered id sequence.
///
/// The last id links forward to the first and the first links back to the
/// last, so following `next_id` from any entry visits every entry once
/// before returning. A single-record index is a self-loop.
#[derive(Debug, Clone, Default)]
pub struct CursorIndex {
    entries: HashMap<u64, CursorEntry>,
}

impl CursorIndex {
    /// Builds the index. Fails on duplicate ids without returning a partial
    /// index.
    pub fn build<I>(ordered_ids: I) -> ServiceResult<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let ids: Vec<u64> = ordered_ids.into_iter().collect();
        let n = ids.len();
        let mut entries = HashMap::with_capacity(n);

        for (i, &id) in ids.iter().enumerate() {
            let prev_id = if i > 0 { ids[i - 1] } else { ids[n - 1] };
            let next_id = if i + 1 < n { ids[i + 1] } else { ids[0] };

            let entry = CursorEntry {
                id,
                prev_id,
                next_id,
            };
            if entries.insert(id, entry).is_some() {
                return Err(ServiceError::invalid_argument(format!(
                    "duplicate record id {} in cursor ordering",
                    id
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Returns the neighbors of `id`.
    pub fn lookup(&self, id: u64) -> ServiceResult<CursorEntry> {
        self.entries.get(&id).copied().ok_or_else(|| {
            ServiceError::with_message(
                ErrorCode::ResourceNotFound,
                format!("no cursor entry for id {}", id),
            )
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
