use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::filter::{FilterMode, Scope};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Preview which vault files and folders take part in task indexing"
)]
pub struct Cli {
    /// Use a named preset from presets.toml or one of the built-in presets
    #[arg(long)]
    pub preset: Option<String>,

    /// Load a complete filter configuration from a TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Vault root to scan (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Filter mode, overriding config file and preset
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Folder rules (e.g., 'Archive' '.obsidian')
    #[arg(long, num_args = 1..)]
    pub folder: Option<Vec<String>>,

    /// Exact file rules (e.g., 'Inbox/scratch.md')
    #[arg(long, num_args = 1..)]
    pub file: Option<Vec<String>>,

    /// Glob pattern rules (e.g., '*.tmp' 'temp/*')
    #[arg(long, num_args = 1..)]
    pub pattern: Option<Vec<String>>,

    /// Scope used for the include/exclude marker
    #[arg(long, value_enum, default_value_t = ScopeArg::Both)]
    pub scope: ScopeArg,

    /// Turn off inline task scanning
    #[arg(long)]
    pub no_inline: bool,

    /// Turn off file-as-task scanning
    #[arg(long)]
    pub no_file_tasks: bool,

    /// Keep the rules but switch filtering off
    #[arg(long)]
    pub disabled: bool,

    /// Also list files that would be excluded
    #[arg(long)]
    pub show_excluded: bool,

    /// Print filter statistics after the tree
    #[arg(long)]
    pub stats: bool,

    /// List available presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Whitelist,
    Blacklist,
}

impl From<ModeArg> for FilterMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Whitelist => FilterMode::Whitelist,
            ModeArg::Blacklist => FilterMode::Blacklist,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeArg {
    Both,
    Inline,
    File,
}

impl From<ScopeArg> for Scope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Both => Scope::Both,
            ScopeArg::Inline => Scope::Inline,
            ScopeArg::File => Scope::File,
        }
    }
}
