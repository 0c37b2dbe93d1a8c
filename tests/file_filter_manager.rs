use std::sync::Arc;
use std::thread;

use vault_filter::{
    FileFilterConfig, FileFilterManager, FilterMode, FilterRule, IndexedPath, Scope, ScopeControls,
};

struct MockFile {
    path: String,
}

impl MockFile {
    fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl IndexedPath for MockFile {
    fn path(&self) -> &str {
        &self.path
    }
}

fn manager(mode: FilterMode, rules: Vec<FilterRule>) -> FileFilterManager {
    FileFilterManager::new(FileFilterConfig::new(mode, rules))
}

#[test]
fn allows_everything_when_disabled() {
    for mode in [FilterMode::Blacklist, FilterMode::Whitelist] {
        let config = FileFilterConfig {
            enabled: false,
            mode,
            rules: vec![FilterRule::folder(".obsidian"), FilterRule::pattern("*")],
            scope_controls: None,
        };
        let manager = FileFilterManager::new(config);
        for path in [".obsidian/config.json", "notes/a.md", ""] {
            assert!(manager.should_include_file(&MockFile::new(path), Scope::Both));
            assert!(manager.should_include_folder(path, Scope::Inline));
            assert!(manager.should_include_path(path, Scope::File));
        }
    }
}

#[test]
fn blacklist_excludes_matches() {
    let manager = manager(
        FilterMode::Blacklist,
        vec![FilterRule::folder(".obsidian"), FilterRule::file("temp.md")],
    );

    assert!(!manager.should_include_file(&MockFile::new(".obsidian/config.json"), Scope::Both));
    assert!(!manager.should_include_file(&MockFile::new("temp.md"), Scope::Both));
    assert!(manager.should_include_file(&MockFile::new("notes/my-note.md"), Scope::Both));
}

#[test]
fn whitelist_includes_only_matches() {
    let manager = manager(
        FilterMode::Whitelist,
        vec![FilterRule::folder("notes"), FilterRule::file("important.md")],
    );

    assert!(manager.should_include_file(&MockFile::new("notes/my-note.md"), Scope::Both));
    assert!(manager.should_include_file(&MockFile::new("important.md"), Scope::Both));
    assert!(!manager.should_include_file(&MockFile::new("other/file.md"), Scope::Both));
}

#[test]
fn matches_wildcard_patterns() {
    let manager = manager(
        FilterMode::Blacklist,
        vec![FilterRule::pattern("*.tmp"), FilterRule::pattern("temp/*")],
    );

    assert!(!manager.should_include_file(&MockFile::new("cache.tmp"), Scope::Both));
    assert!(!manager.should_include_file(&MockFile::new("temp/data.json"), Scope::Both));
    assert!(manager.should_include_file(&MockFile::new("notes/note.md"), Scope::Both));
}

#[test]
fn matches_nested_folders() {
    let manager = manager(FilterMode::Blacklist, vec![FilterRule::folder("archive")]);

    assert!(!manager.should_include_file(&MockFile::new("archive/old.md"), Scope::Both));
    assert!(!manager.should_include_file(&MockFile::new("archive/2023/old.md"), Scope::Both));
    assert!(manager.should_include_file(&MockFile::new("notes/current.md"), Scope::Both));
}

#[test]
fn folder_rules_match_below_the_root() {
    let manager = manager(FilterMode::Blacklist, vec![FilterRule::folder("archive")]);
    assert!(!manager.should_include_path("notes/archive/x.md", Scope::Both));
    assert!(!manager.should_include_folder("notes/archive", Scope::Both));
}

#[test]
fn disabled_rules_are_inert() {
    let manager = manager(
        FilterMode::Blacklist,
        vec![
            FilterRule::folder(".obsidian").disabled(),
            FilterRule::folder(".trash"),
        ],
    );
    assert!(manager.should_include_file(&MockFile::new(".obsidian/config.json"), Scope::Both));
    assert!(!manager.should_include_file(&MockFile::new(".trash/deleted.md"), Scope::Both));

    let whitelist = self::manager(
        FilterMode::Whitelist,
        vec![FilterRule::folder("notes").disabled()],
    );
    assert!(!whitelist.should_include_path("notes/a.md", Scope::Both));
}

#[test]
fn updates_configuration_and_clears_cache() {
    let manager = manager(FilterMode::Blacklist, vec![FilterRule::folder(".obsidian")]);
    let file = MockFile::new(".obsidian/config.json");

    assert!(!manager.should_include_file(&file, Scope::Both));
    assert!(manager.stats().cache_size > 0);

    manager.update_config(FileFilterConfig {
        enabled: false,
        mode: FilterMode::Blacklist,
        rules: vec![],
        scope_controls: None,
    });

    assert_eq!(manager.stats().cache_size, 0);
    assert!(manager.should_include_file(&file, Scope::Both));
    assert_eq!(manager.stats().cache_size, 0);
}

#[test]
fn update_rebuilds_indexes_from_scratch() {
    let manager = manager(FilterMode::Blacklist, vec![FilterRule::folder("old")]);
    assert!(!manager.should_include_path("old/a.md", Scope::Both));

    manager.update_config(FileFilterConfig::new(
        FilterMode::Blacklist,
        vec![FilterRule::folder("new")],
    ));
    assert!(manager.should_include_path("old/a.md", Scope::Both));
    assert!(!manager.should_include_path("new/a.md", Scope::Both));
}

#[test]
fn caches_results() {
    let manager = manager(FilterMode::Blacklist, vec![FilterRule::folder(".obsidian")]);
    let file = MockFile::new(".obsidian/config.json");

    let first = manager.should_include_file(&file, Scope::Both);
    let size = manager.stats().cache_size;
    let second = manager.should_include_file(&file, Scope::Both);

    assert_eq!(first, second);
    assert!(!first);
    assert_eq!(size, 1);
    assert_eq!(manager.stats().cache_size, size);
}

#[test]
fn provides_statistics() {
    let manager = manager(
        FilterMode::Blacklist,
        vec![
            FilterRule::folder(".obsidian"),
            FilterRule::file("temp.md").disabled(),
            FilterRule::pattern("*.tmp"),
        ],
    );
    let stats = manager.stats();
    assert!(stats.enabled);
    assert_eq!(stats.rules_count, 2);
    assert_eq!(stats.cache_size, 0);
}

#[test]
fn scope_gating_is_absolute() {
    for mode in [FilterMode::Blacklist, FilterMode::Whitelist] {
        let mut config = FileFilterConfig::new(mode, vec![FilterRule::folder("notes")]);
        config.scope_controls = Some(ScopeControls {
            inline_tasks_enabled: Some(false),
            file_tasks_enabled: Some(true),
        });
        let manager = FileFilterManager::new(config);

        for path in ["notes/a.md", "other/b.md"] {
            assert!(!manager.should_include_path(path, Scope::Inline));
            assert!(!manager.should_include_file(&MockFile::new(path), Scope::Inline));
        }

        let mut config = FileFilterConfig::new(mode, vec![]);
        config.scope_controls = Some(ScopeControls {
            inline_tasks_enabled: None,
            file_tasks_enabled: Some(false),
        });
        manager.update_config(config);
        assert!(!manager.should_include_folder("notes", Scope::File));
    }
}

#[test]
fn unscoped_rules_apply_to_every_scope() {
    let manager = manager(FilterMode::Blacklist, vec![FilterRule::pattern("*.tmp")]);
    for scope in Scope::ALL {
        assert!(!manager.should_include_path("cache.tmp", scope), "scope {}", scope);
        assert!(manager.should_include_path("note.md", scope), "scope {}", scope);
    }
}

#[test]
fn scoped_rules_only_affect_their_scope() {
    let manager = manager(
        FilterMode::Blacklist,
        vec![FilterRule::folder("Daily").with_scope(Scope::Inline)],
    );
    assert!(!manager.should_include_path("Daily/2024-01-01.md", Scope::Inline));
    assert!(manager.should_include_path("Daily/2024-01-01.md", Scope::File));
    assert!(manager.should_include_path("Daily/2024-01-01.md", Scope::Both));
}

#[test]
fn invalid_patterns_do_not_break_construction() {
    let manager = manager(
        FilterMode::Blacklist,
        vec![FilterRule::pattern("bad["), FilterRule::folder("archive")],
    );
    assert!(manager.should_include_path("bad[.md", Scope::Both));
    assert!(!manager.should_include_path("archive/a.md", Scope::Both));
    assert_eq!(manager.stats().rules_count, 2);
}

#[test]
fn queries_and_updates_from_many_threads() {
    let manager = Arc::new(manager(FilterMode::Blacklist, vec![FilterRule::folder("a")]));

    let readers: Vec<_> = (0..4)
        .map(|i| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for n in 0..200 {
                    let path = format!("b/{}-{}.md", i, n);
                    assert!(manager.should_include_path(&path, Scope::Both));
                }
            })
        })
        .collect();

    for _ in 0..20 {
        manager.update_config(FileFilterConfig::new(
            FilterMode::Blacklist,
            vec![FilterRule::folder("a")],
        ));
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert!(!manager.should_include_path("a/x.md", Scope::Both));
}

#[test]
fn brace_patterns_are_matched_literally() {
    let manager = manager(
        FilterMode::Blacklist,
        vec![FilterRule::pattern("*{{date}}*"), FilterRule::pattern("{draft}.md")],
    );
    assert!(!manager.should_include_path("Templates/{{date}} daily.md", Scope::Both));
    assert!(!manager.should_include_path("{draft}.md", Scope::Both));
    assert!(manager.should_include_path("draft.md", Scope::Both));
}
