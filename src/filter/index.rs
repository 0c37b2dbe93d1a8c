use std::collections::HashSet;

use regex::Regex;

use super::glob::compile_glob;
use super::path::normalize_path;
use super::rules::{FilterRule, RuleKind, Scope};
use super::trie::PathTrie;

/// File set, folder trie and compiled patterns for a single scope.
#[derive(Debug, Default)]
pub struct RuleIndex {
    file_set: HashSet<String>,
    folder_trie: PathTrie,
    patterns: Vec<Regex>,
}

impl RuleIndex {
    fn add(&mut self, rule: &FilterRule, compiled: Option<&Regex>) {
        match rule.kind {
            RuleKind::File => {
                self.file_set.insert(normalize_path(&rule.path));
            }
            RuleKind::Folder => self.folder_trie.insert(&rule.path, true),
            RuleKind::Pattern => {
                if let Some(regex) = compiled {
                    self.patterns.push(regex.clone());
                }
            }
        }
    }

    /// Exact file, then folder containment, then pattern scan.
    pub fn matches(&self, normalized_path: &str) -> bool {
        self.file_set.contains(normalized_path)
            || self.folder_trie.contains(normalized_path)
            || self.patterns.iter().any(|re| re.is_match(normalized_path))
    }

    pub fn file_count(&self) -> usize {
        self.file_set.len()
    }

    pub fn folder_count(&self) -> usize {
        self.folder_trie.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

/// The three per-scope bundles built from one rule list.
///
/// The `both` bundle doubles as the global index. Rules without an explicit
/// scope land in every bundle so scoped queries still see them.
#[derive(Debug, Default)]
pub struct ScopedIndexes {
    both: RuleIndex,
    inline: RuleIndex,
    file: RuleIndex,
}

impl ScopedIndexes {
    pub fn build(rules: &[FilterRule]) -> Self {
        let mut indexes = Self::default();

        for rule in rules.iter().filter(|rule| rule.enabled) {
            let compiled = match rule.kind {
                RuleKind::Pattern => match compile_glob(&rule.path) {
                    Ok(regex) => Some(regex),
                    Err(err) => {
                        log::warn!("Skipping rule: {}", err);
                        continue;
                    }
                },
                RuleKind::File | RuleKind::Folder => None,
            };

            match rule.effective_scope() {
                Scope::Both => {
                    indexes.both.add(rule, compiled.as_ref());
                    indexes.inline.add(rule, compiled.as_ref());
                    indexes.file.add(rule, compiled.as_ref());
                }
                Scope::Inline => indexes.inline.add(rule, compiled.as_ref()),
                Scope::File => indexes.file.add(rule, compiled.as_ref()),
            }
        }

        log::debug!(
            "Built filter indexes: both={}/{}/{} inline={}/{}/{} file={}/{}/{} (files/folders/patterns)",
            indexes.both.file_count(),
            indexes.both.folder_count(),
            indexes.both.pattern_count(),
            indexes.inline.file_count(),
            indexes.inline.folder_count(),
            indexes.inline.pattern_count(),
            indexes.file.file_count(),
            indexes.file.folder_count(),
            indexes.file.pattern_count(),
        );

        indexes
    }

    pub fn for_scope(&self, scope: Scope) -> &RuleIndex {
        match scope {
            Scope::Both => &self.both,
            Scope::Inline => &self.inline,
            Scope::File => &self.file,
        }
    }

    pub fn matches(&self, normalized_path: &str, scope: Scope) -> bool {
        self.for_scope(scope).matches(normalized_path)
    }
}
