use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of task scanning a rule or query applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Both,
    Inline,
    File,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Both, Scope::Inline, Scope::File];

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Both => "both",
            Scope::Inline => "inline",
            Scope::File => "file",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Only matched paths are included.
    Whitelist,
    /// Matched paths are excluded, everything else is included.
    #[default]
    Blacklist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    File,
    Folder,
    Pattern,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterRule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub path: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

impl FilterRule {
    pub fn new(kind: RuleKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            enabled: true,
            scope: None,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(RuleKind::File, path)
    }

    pub fn folder(path: impl Into<String>) -> Self {
        Self::new(RuleKind::Folder, path)
    }

    pub fn pattern(path: impl Into<String>) -> Self {
        Self::new(RuleKind::Pattern, path)
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Unset scope means the rule applies to both kinds of scanning.
    pub fn effective_scope(&self) -> Scope {
        self.scope.unwrap_or_default()
    }
}

/// Per-scope switches. Anything other than an explicit `false` keeps a scope on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScopeControls {
    #[serde(default, alias = "inlineTasksEnabled", skip_serializing_if = "Option::is_none")]
    pub inline_tasks_enabled: Option<bool>,
    #[serde(default, alias = "fileTasksEnabled", skip_serializing_if = "Option::is_none")]
    pub file_tasks_enabled: Option<bool>,
}

impl ScopeControls {
    pub fn resolve(controls: Option<&ScopeControls>) -> ResolvedScopes {
        ResolvedScopes {
            inline: controls.and_then(|c| c.inline_tasks_enabled) != Some(false),
            file: controls.and_then(|c| c.file_tasks_enabled) != Some(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedScopes {
    pub inline: bool,
    pub file: bool,
}

impl ResolvedScopes {
    pub fn is_enabled(&self, scope: Scope) -> bool {
        match scope {
            Scope::Inline => self.inline,
            Scope::File => self.file,
            Scope::Both => self.inline || self.file,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileFilterConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mode: FilterMode,
    #[serde(default)]
    pub rules: Vec<FilterRule>,
    #[serde(default, alias = "scopeControls", skip_serializing_if = "Option::is_none")]
    pub scope_controls: Option<ScopeControls>,
}

impl FileFilterConfig {
    pub fn new(mode: FilterMode, rules: Vec<FilterRule>) -> Self {
        Self {
            enabled: true,
            mode,
            rules,
            scope_controls: None,
        }
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = &FilterRule> {
        self.rules.iter().filter(|rule| rule.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_controls_fail_open() {
        let all_on = ScopeControls::resolve(None);
        assert!(all_on.inline && all_on.file);

        let partial = ScopeControls {
            inline_tasks_enabled: Some(true),
            file_tasks_enabled: None,
        };
        assert_eq!(
            ScopeControls::resolve(Some(&partial)),
            ResolvedScopes { inline: true, file: true }
        );

        let inline_off = ScopeControls {
            inline_tasks_enabled: Some(false),
            file_tasks_enabled: None,
        };
        let resolved = ScopeControls::resolve(Some(&inline_off));
        assert!(!resolved.is_enabled(Scope::Inline));
        assert!(resolved.is_enabled(Scope::File));
        assert!(resolved.is_enabled(Scope::Both));
    }

    #[test]
    fn both_scope_needs_one_sub_scope() {
        let none = ResolvedScopes { inline: false, file: false };
        assert!(!none.is_enabled(Scope::Both));
    }

    #[test]
    fn rule_scope_defaults_to_both() {
        assert_eq!(FilterRule::folder("archive").effective_scope(), Scope::Both);
        assert_eq!(
            FilterRule::folder("archive").with_scope(Scope::Inline).effective_scope(),
            Scope::Inline
        );
    }

    #[test]
    fn parses_toml_with_camel_case_aliases() {
        let config: FileFilterConfig = toml::from_str(
            r#"
            enabled = true
            mode = "whitelist"

            [scopeControls]
            fileTasksEnabled = false

            [[rules]]
            type = "folder"
            path = "Projects"

            [[rules]]
            type = "pattern"
            path = "*.tmp"
            enabled = false
            scope = "inline"
            "#,
        )
        .unwrap();

        assert!(config.enabled);
        assert_eq!(config.mode, FilterMode::Whitelist);
        assert_eq!(config.rules[0], FilterRule::folder("Projects"));
        assert_eq!(
            config.rules[1],
            FilterRule::pattern("*.tmp").with_scope(Scope::Inline).disabled()
        );
        assert_eq!(config.enabled_rules().count(), 1);
        let scopes = ScopeControls::resolve(config.scope_controls.as_ref());
        assert!(scopes.inline && !scopes.file);
    }

    #[test]
    fn default_config_is_disabled_blacklist() {
        let config = FileFilterConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.mode, FilterMode::Blacklist);
        assert!(config.rules.is_empty());
    }
}
