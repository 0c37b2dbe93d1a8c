pub mod app;
pub mod filter;

pub use filter::{
    FileFilterConfig, FileFilterManager, FilterError, FilterMode, FilterRule, FilterStats,
    IndexedPath, RuleKind, Scope, ScopeControls,
};
