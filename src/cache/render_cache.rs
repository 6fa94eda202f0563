// ABOUTME: Thread-safe memo of rendered project-structure previews
// ABOUTME: Keyed by project fingerprint plus viewport size, with TTL expiry and bounded size

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};
use tracing::debug;

use super::fingerprint::project_fingerprint;
use crate::models::ProjectConfig;

pub const DEFAULT_MAX_ENTRIES: usize = 50;
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub fingerprint: String,
    pub width: u16,
    pub height: u16,
}

impl CacheKey {
    pub fn new(project: &ProjectConfig, width: u16, height: u16) -> Self {
        Self {
            fingerprint: project_fingerprint(project),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    content: String,
    inserted_at: Instant,
    hits: u64,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.duration_since(self.inserted_at) > ttl
    }
}

/// Read-only snapshot of the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub total_hits: u64,
    pub expired: usize,
    pub max_size: usize,
    pub ttl: Duration,
}

/// Cloning shares the underlying store, so a clone can be handed to a
/// background cleanup task.
#[derive(Debug, Clone)]
pub struct RenderCache {
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
    max_size: usize,
    ttl: Duration,
}

impl RenderCache {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            max_size: max_size.max(1),
            ttl,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, project: &ProjectConfig, width: u16, height: u16) -> Option<String> {
        self.get_by_key(&CacheKey::new(project, width, height))
    }

    pub fn get_by_key(&self, key: &CacheKey) -> Option<String> {
        let now = Instant::now();
        let (content, expired) = {
            let entries = self.read();
            let entry = entries.get(key)?;
            (entry.content.clone(), entry.is_expired(self.ttl, now))
        };

        let mut entries = self.write();
        if expired {
            // A concurrent set may have refreshed the entry since the read
            if entries.get(key).is_some_and(|e| e.is_expired(self.ttl, now)) {
                entries.remove(key);
                debug!(width = key.width, height = key.height, "Render cache entry expired");
            }
            return None;
        }

        if let Some(entry) = entries.get_mut(key) {
            entry.hits += 1;
        }
        Some(content)
    }

    pub fn set(&self, project: &ProjectConfig, width: u16, height: u16, content: String) {
        self.set_by_key(CacheKey::new(project, width, height), content);
    }

    pub fn set_by_key(&self, key: CacheKey, content: String) {
        let mut entries = self.write();
        if !entries.contains_key(&key) && entries.len() >= self.max_size {
            Self::evict_least_used(&mut entries);
        }
        entries.insert(
            key,
            CacheEntry {
                content,
                inserted_at: Instant::now(),
                hits: 0,
            },
        );
    }

    /// Returns the cached rendering or computes, stores and returns a fresh one
    pub fn get_or_render<F>(&self, project: &ProjectConfig, width: u16, height: u16, render: F) -> String
    where
        F: FnOnce(&ProjectConfig, u16, u16) -> String,
    {
        let key = CacheKey::new(project, width, height);
        if let Some(content) = self.get_by_key(&key) {
            return content;
        }
        let content = render(project, width, height);
        self.set_by_key(key, content.clone());
        content
    }

    /// Lowest hit count goes first; ties go to the oldest insertion
    fn evict_least_used(entries: &mut HashMap<CacheKey, CacheEntry>) {
        let victim = entries
            .iter()
            .min_by(|(_, a), (_, b)| a.hits.cmp(&b.hits).then(a.inserted_at.cmp(&b.inserted_at)))
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            entries.remove(&key);
            debug!(width = key.width, height = key.height, "Evicted render cache entry");
        }
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    /// Removes every expired entry, returning how many were dropped
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.ttl, now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, "Cleaned up expired render cache entries");
        }
        removed
    }

    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let entries = self.read();
        CacheStats {
            entries: entries.len(),
            total_hits: entries.values().map(|e| e.hits).sum(),
            expired: entries.values().filter(|e| e.is_expired(self.ttl, now)).count(),
            max_size: self.max_size,
            ttl: self.ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }
}
