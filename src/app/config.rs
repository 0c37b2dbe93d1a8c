use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use crate::filter::{FileFilterConfig, FilterMode, FilterRule, RuleKind, ScopeControls};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

/// Partial filter configuration stored under a preset name.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PresetConfig {
    pub enabled: Option<bool>,
    pub mode: Option<FilterMode>,
    pub rules: Option<Vec<FilterRule>>,
    #[serde(alias = "scopeControls")]
    pub scope_controls: Option<ScopeControls>,
}

impl PresetConfig {
    fn with_rules(mode: FilterMode, rules: Vec<FilterRule>) -> Self {
        Self {
            enabled: None,
            mode: Some(mode),
            rules: Some(rules),
            scope_controls: None,
        }
    }

    /// One-line summary used by `--list-presets`.
    pub fn describe(&self) -> String {
        let mode = match self.mode {
            Some(FilterMode::Whitelist) => "whitelist",
            Some(FilterMode::Blacklist) => "blacklist",
            None => "inherit",
        };
        let rules: Vec<String> = self
            .rules
            .iter()
            .flatten()
            .map(|rule| {
                let kind = match rule.kind {
                    RuleKind::File => "file",
                    RuleKind::Folder => "folder",
                    RuleKind::Pattern => "pattern",
                };
                format!("{}:{}", kind, rule.path)
            })
            .collect();
        format!("{} [{}]", mode, rules.join(", "))
    }
}

/// Recommended configurations offered out of the box.
fn builtin_presets() -> HashMap<String, PresetConfig> {
    HashMap::from([
        (
            "exclude-temp".to_string(),
            PresetConfig::with_rules(
                FilterMode::Blacklist,
                vec![
                    FilterRule::pattern("*.tmp"),
                    FilterRule::pattern(".DS_Store"),
                    FilterRule::pattern("*~"),
                ],
            ),
        ),
        (
            "exclude-archive".to_string(),
            PresetConfig::with_rules(FilterMode::Blacklist, vec![FilterRule::folder("Archive")]),
        ),
        (
            "focus-projects".to_string(),
            PresetConfig::with_rules(
                FilterMode::Whitelist,
                vec![FilterRule::folder("Projects"), FilterRule::folder("Work")],
            ),
        ),
    ])
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("vault_filter")
        .join("presets.toml"))
}

fn load_presets_file(config_path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(config_path)
        .context(format!("Failed to read presets at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

/// Built-in presets overlaid with the user's presets.toml.
pub fn available_presets() -> Result<BTreeMap<String, PresetConfig>> {
    let mut presets: BTreeMap<String, PresetConfig> = builtin_presets().into_iter().collect();
    presets.extend(load_presets_file(&presets_path()?)?);
    Ok(presets)
}

/// Loads a standalone filter config. As with presets, a file carrying rules
/// but no `enabled` key turns filtering on.
pub fn load_config_file(path: &Path) -> Result<FileFilterConfig> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read filter config at {:?}", path))?;
    let parsed: PresetConfig =
        toml::from_str(&content).context(format!("Failed to parse filter config {:?}", path))?;

    let rules = parsed.rules.unwrap_or_default();
    let config = FileFilterConfig {
        enabled: parsed.enabled.unwrap_or(!rules.is_empty()),
        mode: parsed.mode.unwrap_or_default(),
        rules,
        scope_controls: parsed.scope_controls,
    };
    if !config.enabled && config.enabled_rules().next().is_some() {
        log::warn!("Filter config {:?} has rules but filtering is disabled", path);
    }
    Ok(config)
}

/// Appends rules, dropping duplicates while keeping order.
fn merge_rules(base: Vec<FilterRule>, extra: Vec<FilterRule>) -> Vec<FilterRule> {
    let mut combined = base;
    combined.extend(extra);
    let mut seen = HashSet::new();
    combined.retain(|rule| seen.insert(rule.clone()));
    combined
}

fn cli_rules(cli: &Cli) -> Vec<FilterRule> {
    let groups = [
        (RuleKind::Folder, &cli.folder),
        (RuleKind::File, &cli.file),
        (RuleKind::Pattern, &cli.pattern),
    ];
    groups
        .into_iter()
        .flat_map(|(kind, paths)| {
            paths
                .iter()
                .flatten()
                .map(move |path| FilterRule::new(kind, path.clone()))
        })
        .collect()
}

pub fn resolve_config(cli: Cli, project_name: Option<&str>) -> Result<RuntimeConfig> {
    let presets = available_presets()?;
    let base = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => FileFilterConfig::default(),
    };
    resolve_with(cli, project_name, base, &presets)
}

/// Merges config file, preset and CLI flags, in that order of precedence.
pub fn resolve_with(
    cli: Cli,
    project_name: Option<&str>,
    base: FileFilterConfig,
    presets: &BTreeMap<String, PresetConfig>,
) -> Result<RuntimeConfig> {
    // Determine preset to use: CLI flag > Auto-detect > None
    let preset = match cli.preset.as_deref() {
        Some(name) => match presets.get(name) {
            Some(preset) => Some(preset.clone()),
            None => bail!("Unknown preset '{}'", name),
        },
        None => project_name.and_then(|name| presets.get(name)).cloned(),
    };

    let mut filter = base;

    if let Some(preset) = preset {
        let preset_rules = preset.rules.unwrap_or_default();
        filter.enabled = preset
            .enabled
            .unwrap_or(filter.enabled || !preset_rules.is_empty());
        filter.rules = merge_rules(filter.rules, preset_rules);
        if let Some(mode) = preset.mode {
            filter.mode = mode;
        }
        if let Some(controls) = preset.scope_controls {
            filter.scope_controls = Some(controls);
        }
    }

    let extra = cli_rules(&cli);
    if !extra.is_empty() {
        filter.enabled = true;
        filter.rules = merge_rules(filter.rules, extra);
    }

    if let Some(mode) = cli.mode {
        filter.mode = mode.into();
    }

    if cli.no_inline || cli.no_file_tasks {
        let mut controls = filter.scope_controls.unwrap_or_default();
        if cli.no_inline {
            controls.inline_tasks_enabled = Some(false);
        }
        if cli.no_file_tasks {
            controls.file_tasks_enabled = Some(false);
        }
        filter.scope_controls = Some(controls);
    }

    if cli.disabled {
        filter.enabled = false;
    }

    Ok(RuntimeConfig {
        filter,
        query_scope: cli.scope.into(),
        show_excluded: cli.show_excluded,
        show_stats: cli.stats,
    })
}
