use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;

use super::rules::Scope;

/// Which entry point produced a decision. Kept in the key so identical paths
/// queried through different entry points never share a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    File,
    Folder,
    Path,
}

impl QueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::File => "file",
            QueryKind::Folder => "folder",
            QueryKind::Path => "path",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: QueryKind,
    pub scope: Scope,
    pub path: String,
}

impl CacheKey {
    pub fn new(kind: QueryKind, scope: Scope, normalized_path: impl Into<String>) -> Self {
        Self {
            kind,
            scope,
            path: normalized_path.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind.as_str(), self.scope, self.path)
    }
}

/// Unbounded memo of filter decisions. Entries live until the owning
/// generation is replaced or `clear` is called.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<CacheKey, bool>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<bool> {
        self.entries.read().get(key).copied()
    }

    pub fn insert(&self, key: CacheKey, included: bool) {
        self.entries.write().insert(key, included);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
