use std::path::PathBuf;

use crate::filter::{FileFilterConfig, IndexedPath, Scope};

/// Represents the final configuration after merging config file, presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub filter: FileFilterConfig,
    pub query_scope: Scope,
    pub show_excluded: bool,
    pub show_stats: bool,
}

/// Per-scope outcome for a single vault entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryDecision {
    /// Decision for the scope requested on the command line.
    pub included: bool,
    pub inline: bool,
    pub file: bool,
}

/// Represents a single file or folder discovered during the scan.
#[derive(Debug)]
pub struct VaultEntry {
    pub path: PathBuf,
    pub relative_path: String,
    pub depth: usize,
    pub is_dir: bool,
    pub decision: EntryDecision,
}

impl IndexedPath for VaultEntry {
    fn path(&self) -> &str {
        &self.relative_path
    }
}
