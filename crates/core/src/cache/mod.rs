//! Process-wide in-memory cache with daily expiration.
//!
//! The gateway caches exactly two things: the raw forex rate table and the
//! bullion snapshot. Each lives in its own [`Slot`] inside a [`MarketCache`]
//! that is constructed once per process and passed by `Arc` to the services
//! (no globals). Stale payloads are ignored, not deleted; a refresh simply
//! overwrites them.
//!
//! Concurrency: a slot's lock guards a clone-in/clone-out critical section
//! and is never held across an await. Two concurrent misses may both fetch
//! and both write; last write wins with equivalent fresh data.

pub mod expiry;

pub use expiry::{next_boundary, BOUNDARY_HOUR, BOUNDARY_TZ};

use chrono::{DateTime, Utc};
use paisa_feeds::{BullionSnapshot, RateRecord};
use std::sync::RwLock;

use crate::errors::{Result, ToolError};

struct Entry<T> {
    payload: T,
    expires_at: DateTime<Utc>,
}

/// One named cache slot holding a payload and its expiration instant.
///
/// The payload and `expires_at` are set together: `expires_at` is computed
/// with [`next_boundary`] at write time, so a non-empty slot always carries
/// the boundary that was current when it was written.
pub struct Slot<T> {
    entry: RwLock<Option<Entry<T>>>,
}

impl<T: Clone> Slot<T> {
    pub fn new() -> Self {
        Self {
            entry: RwLock::new(None),
        }
    }

    /// True iff the slot holds a payload that has not expired at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> Result<bool> {
        let guard = self.entry.read().map_err(|e| ToolError::Cache {
            message: e.to_string(),
        })?;
        Ok(guard.as_ref().is_some_and(|entry| now < entry.expires_at))
    }

    /// The payload, if still valid at `now`. Stale data is left in place.
    pub fn get_at(&self, now: DateTime<Utc>) -> Result<Option<T>> {
        let guard = self.entry.read().map_err(|e| ToolError::Cache {
            message: e.to_string(),
        })?;
        Ok(guard
            .as_ref()
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.payload.clone()))
    }

    /// Store `payload`, unconditionally overwriting whatever was there.
    ///
    /// Returns the expiration instant computed for this write.
    pub fn set_at(&self, payload: T, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let expires_at = next_boundary(now);
        let mut guard = self.entry.write().map_err(|e| ToolError::Cache {
            message: e.to_string(),
        })?;
        *guard = Some(Entry {
            payload,
            expires_at,
        });
        Ok(expires_at)
    }

    /// Clear the slot.
    pub fn invalidate(&self) -> Result<()> {
        let mut guard = self.entry.write().map_err(|e| ToolError::Cache {
            message: e.to_string(),
        })?;
        *guard = None;
        Ok(())
    }
}

impl<T: Clone> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The two cache slots shared by all concurrent requests for the lifetime
/// of the process. Both start empty; cold starts have no pre-population.
#[derive(Default)]
pub struct MarketCache {
    pub forex: Slot<Vec<RateRecord>>,
    pub bullion: Slot<BullionSnapshot>,
}

impl MarketCache {
    pub fn new() -> Self {
        Self::default()
    }
}
