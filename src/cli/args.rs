//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::visitor::{Order, VisitorKind};

/// Walk tag-dispatched binary trees with statically bound visitors
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file, layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traverse a tree and print every dispatch
    Walk {
        /// Traversal order: pre, in, post (default from settings)
        #[arg(short, long)]
        order: Option<Order>,

        /// Visitor: generic, derived, sum (default from settings)
        #[arg(long)]
        visitor: Option<VisitorKind>,

        /// Print the visit sequence on a single line
        #[arg(long)]
        compact: bool,

        /// Tree notation, e.g. "first(1, second(2), second(3))"
        tree: String,
    },

    /// Draw a tree
    Show {
        /// Tree notation
        tree: String,
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
    /// Print effective settings as TOML
    Show,
    /// Print the global config file path
    Path,
}
