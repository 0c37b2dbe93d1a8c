//! Path filtering engine deciding which vault paths take part in task indexing.

pub mod cache;
pub mod error;
pub mod glob;
pub mod index;
pub mod manager;
pub mod path;
pub mod rules;
pub mod trie;

pub use self::error::FilterError;
pub use self::manager::{FileFilterManager, FilterStats, IndexedPath};
pub use self::rules::{FileFilterConfig, FilterMode, FilterRule, RuleKind, Scope, ScopeControls};
