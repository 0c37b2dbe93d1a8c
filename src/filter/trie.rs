use std::collections::HashMap;

use super::path::{normalize_path, segments};

#[derive(Debug, Default)]
struct PathTrieNode {
    children: HashMap<String, PathTrieNode>,
    is_end_of_path: bool,
    is_folder: bool,
}

/// Prefix tree keyed by path segment, used for folder rules.
///
/// A registered folder matches wherever its segment chain appears in a queried
/// path, not only when anchored at the root: a rule for `archive` hits
/// `archive/old.md` and `notes/archive/old.md` alike.
#[derive(Debug, Default)]
pub struct PathTrie {
    root: PathTrieNode,
    len: usize,
}

impl PathTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, is_folder: bool) {
        let normalized = normalize_path(path);
        let mut current = &mut self.root;

        for part in segments(&normalized) {
            current = current.children.entry(part.to_string()).or_default();
        }

        if !current.is_end_of_path {
            self.len += 1;
        }
        current.is_end_of_path = true;
        current.is_folder = is_folder;
    }

    /// Returns true when a folder terminal is reached while walking from any
    /// segment offset of `path`.
    pub fn contains(&self, path: &str) -> bool {
        let normalized = normalize_path(path);
        let parts: Vec<&str> = segments(&normalized).collect();

        (0..parts.len()).any(|start| {
            let mut current = &self.root;
            for part in &parts[start..] {
                match current.children.get(*part) {
                    Some(next) => current = next,
                    None => return false,
                }
                if current.is_end_of_path && current.is_folder {
                    return true;
                }
            }
            false
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of distinct terminals registered.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
