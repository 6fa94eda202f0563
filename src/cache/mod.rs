// ABOUTME: Render cache for the project-structure preview and its content fingerprint

pub mod fingerprint;
pub mod render_cache;

pub use fingerprint::project_fingerprint;
pub use render_cache::{CacheKey, CacheStats, RenderCache, DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
