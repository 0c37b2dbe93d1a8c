// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use self::cli::Cli;
use self::config::{available_presets, resolve_config};
use self::formatter::OutputGenerator;
use self::scanner::Scanner;
use crate::filter::FileFilterManager;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    if args.list_presets {
        for (name, preset) in available_presets()? {
            println!("{:<20} {}", name, preset.describe());
        }
        return Ok(());
    }

    // 2. Identify Vault Root & Name
    let root = match &args.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    if !root.is_dir() {
        anyhow::bail!("Vault root {:?} is not a directory", root);
    }
    let project_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string);

    // 3. Resolve Configuration
    let config = resolve_config(args, project_name.as_deref())?;

    if config.filter.enabled && config.filter.rules.is_empty() {
        log::warn!("Filtering is enabled but no rules were provided (via config, preset or CLI).");
    }

    // 4. Build the filter and scan the vault
    let manager = FileFilterManager::new(config.filter);
    let scanner = Scanner::new(root, &manager, config.query_scope);
    let entries = scanner.scan();

    if entries.is_empty() {
        log::warn!("No files or folders found under the vault root.");
        return Ok(());
    }

    // 5. Generate Output
    let tree_str = OutputGenerator::generate_tree(&entries, config.show_excluded);
    let summary = OutputGenerator::generate_summary(&entries);
    let stats = config
        .show_stats
        .then(|| OutputGenerator::format_stats(&manager.stats()));

    // 6. Print to Stdout
    println!(
        "{}",
        OutputGenerator::format_full_output(&tree_str, &summary, stats.as_deref())
    );

    Ok(())
}
