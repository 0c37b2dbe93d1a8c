use crate::app::models::{EntryDecision, VaultEntry};
use crate::filter::{FileFilterManager, Scope};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::path::{Path, PathBuf};

/// Walks a vault the way the indexing pipeline would and asks the filter
/// about every file and folder it meets.
pub struct Scanner<'a> {
    root: PathBuf,
    manager: &'a FileFilterManager,
    scope: Scope,
}

impl<'a> Scanner<'a> {
    pub fn new(root: PathBuf, manager: &'a FileFilterManager, scope: Scope) -> Self {
        Self {
            root,
            manager,
            scope,
        }
    }

    pub fn scan(&self) -> Vec<VaultEntry> {
        let mut entries = Vec::new();

        // Standard ignore walker (handles .gitignore automatically)
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    if let Some(processed) = self.process_entry(entry.path()) {
                        entries.push(processed);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }

    fn process_entry(&self, path: &Path) -> Option<VaultEntry> {
        if path == self.root {
            return None;
        }

        // Hidden entries are walked, so the .git directory has to be skipped by hand.
        if path.components().any(|c| c.as_os_str() == ".git") {
            return None;
        }

        let relative = diff_paths(path, &self.root)?;
        let relative_path = relative.to_string_lossy().replace('\\', "/");
        let depth = relative.components().count();

        let mut entry = VaultEntry {
            path: path.to_path_buf(),
            relative_path,
            depth,
            is_dir: path.is_dir(),
            decision: EntryDecision::default(),
        };
        entry.decision = self.decide(&entry);
        Some(entry)
    }

    fn decide(&self, entry: &VaultEntry) -> EntryDecision {
        let ask = |scope: Scope| {
            if entry.is_dir {
                self.manager.should_include_folder(entry, scope)
            } else {
                self.manager.should_include_file(entry, scope)
            }
        };

        EntryDecision {
            included: ask(self.scope),
            inline: ask(Scope::Inline),
            file: ask(Scope::File),
        }
    }
}
