//! Response Cache Tags
//!
//! Process-wide registry associating cached view responses with the view
//! path that produced them. Aggregators return the tags to invalidate as
//! explicit data; the presentation layer applies them to this registry
//! without ever delaying the response on it. A response-cache executor (or
//! the rendering surface) consults freshness before reusing a stored view.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Identifier associating cached response data with the view path it backs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheTag(Cow<'static, str>);

impl CacheTag {
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    pub fn new(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The only cross-request shared state in the gateway
///
/// Entries are created implicitly the first time a view is served and
/// flipped invalid whenever a request is known to have refreshed or mutated
/// upstream state.
#[derive(Debug, Default)]
pub struct CacheTagRegistry {
    entries: RwLock<HashMap<String, bool>>,
}

impl CacheTagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a view was rebuilt and served; creates the tag on first
    /// read
    pub fn mark_fresh(&self, tag: &CacheTag) {
        let mut entries = self
            .entries
            .write()
            .expect("cache tag registry lock poisoned");
        entries.insert(tag.path().to_string(), true);
    }

    /// Flip a tag invalid; unknown tags are recorded already-invalid
    pub fn invalidate(&self, tag: &CacheTag) {
        let mut entries = self
            .entries
            .write()
            .expect("cache tag registry lock poisoned");
        entries.insert(tag.path().to_string(), false);

        tracing::debug!(tag = %tag, "Cache tag invalidated");
    }

    /// Whether a stored response under this tag may still be served
    ///
    /// Unknown tags are not fresh: nothing was ever cached under them.
    pub fn is_fresh(&self, tag: &CacheTag) -> bool {
        let entries = self
            .entries
            .read()
            .expect("cache tag registry lock poisoned");
        entries.get(tag.path()).copied().unwrap_or(false)
    }
}

/// Apply invalidations without delaying the response
///
/// Invalidation is fire-and-forget relative to the response being built:
/// the tags are flipped in a background task and the caller returns
/// immediately.
pub fn apply_invalidations(registry: Arc<CacheTagRegistry>, tags: Vec<CacheTag>) {
    if tags.is_empty() {
        return;
    }

    tokio::spawn(async move {
        for tag in tags {
            registry.invalidate(&tag);
        }
    });
}
