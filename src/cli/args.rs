//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::OrgId;

/// Multi-tenant folder hierarchies: list, resolve subtrees, relocate
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Folder data file (JSON), overrides data_file from config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Print folder lists as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Validate the collection on load
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List folders, optionally for one org
    List {
        /// Org id (default: all orgs)
        #[arg(short, long)]
        org: Option<OrgId>,
    },

    /// List all descendants of a folder
    Children {
        /// Org id (default: default_org from config)
        #[arg(short, long)]
        org: Option<OrgId>,
        /// Folder name
        name: String,
    },

    /// Move a folder and its subtree below another folder
    Move {
        /// Folder to move
        src: String,
        /// New parent folder
        dst: String,
    },

    /// Show hierarchies as trees
    Tree {
        /// Org id (default: all orgs)
        #[arg(short, long)]
        org: Option<OrgId>,
    },

    /// Check path invariants and name uniqueness
    Validate,

    /// Print the built-in sample collection
    Sample {
        /// Write to this file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
