use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use super::cache::{CacheKey, QueryKind, ResultCache};
use super::index::ScopedIndexes;
use super::path::normalize_path;
use super::rules::{FileFilterConfig, FilterMode, ResolvedScopes, Scope, ScopeControls};

/// Anything the host hands over for a decision. Only the vault-relative path
/// is ever read.
pub trait IndexedPath {
    fn path(&self) -> &str;
}

impl IndexedPath for str {
    fn path(&self) -> &str {
        self
    }
}

impl IndexedPath for String {
    fn path(&self) -> &str {
        self.as_str()
    }
}

impl<T: IndexedPath + ?Sized> IndexedPath for &T {
    fn path(&self) -> &str {
        (**self).path()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub cache_size: usize,
    /// Enabled rules only.
    pub rules_count: usize,
    pub enabled: bool,
}

/// One configuration together with the indexes built from it and the
/// decisions cached against them. Never mutated apart from the cache.
#[derive(Debug)]
struct Generation {
    config: FileFilterConfig,
    scopes: ResolvedScopes,
    indexes: ScopedIndexes,
    cache: ResultCache,
}

impl Generation {
    fn build(config: FileFilterConfig) -> Self {
        let scopes = ScopeControls::resolve(config.scope_controls.as_ref());
        let indexes = ScopedIndexes::build(&config.rules);
        Self {
            config,
            scopes,
            indexes,
            cache: ResultCache::new(),
        }
    }

    fn decide(&self, kind: QueryKind, path: &str, scope: Scope) -> bool {
        if !self.scopes.is_enabled(scope) {
            return false;
        }
        if !self.config.enabled {
            return true;
        }

        let normalized = normalize_path(path);
        let key = CacheKey::new(kind, scope, normalized);
        if let Some(included) = self.cache.get(&key) {
            return included;
        }

        let matched = self.indexes.matches(&key.path, scope);
        let included = match self.config.mode {
            FilterMode::Whitelist => matched,
            FilterMode::Blacklist => !matched,
        };
        log::trace!("{} -> {}", key, included);
        self.cache.insert(key, included);
        included
    }
}

/// Decides whether vault files and folders take part in task indexing.
///
/// Configuration changes build a complete new generation (indexes plus an
/// empty cache) and swap it in under a single write lock, so a query always
/// sees an index and a cache that belong together. Queries only hold the lock
/// long enough to clone the current generation handle.
#[derive(Debug)]
pub struct FileFilterManager {
    current: RwLock<Arc<Generation>>,
}

impl FileFilterManager {
    pub fn new(config: FileFilterConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(Generation::build(config))),
        }
    }

    /// Replaces the configuration wholesale. Indexes are rebuilt and the
    /// cache starts out empty.
    pub fn update_config(&self, config: FileFilterConfig) {
        let next = Arc::new(Generation::build(config));
        *self.current.write() = next;
        log::debug!("Filter configuration replaced; cache cleared");
    }

    pub fn should_include_file<F>(&self, file: &F, scope: Scope) -> bool
    where
        F: IndexedPath + ?Sized,
    {
        self.snapshot().decide(QueryKind::File, file.path(), scope)
    }

    pub fn should_include_folder<F>(&self, folder: &F, scope: Scope) -> bool
    where
        F: IndexedPath + ?Sized,
    {
        self.snapshot().decide(QueryKind::Folder, folder.path(), scope)
    }

    pub fn should_include_path(&self, path: &str, scope: Scope) -> bool {
        self.snapshot().decide(QueryKind::Path, path, scope)
    }

    pub fn stats(&self) -> FilterStats {
        let generation = self.snapshot();
        FilterStats {
            cache_size: generation.cache.len(),
            rules_count: generation.config.enabled_rules().count(),
            enabled: generation.config.enabled,
        }
    }

    pub fn clear_cache(&self) {
        self.snapshot().cache.clear();
        log::debug!("Filter cache cleared");
    }

    fn snapshot(&self) -> Arc<Generation> {
        Arc::clone(&*self.current.read())
    }
}
