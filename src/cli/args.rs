//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Analyze weighted tower descriptions: find the bottom program and the
/// weight fix that balances the tower
#[derive(Parser, Debug)]
#[command(name = "towerlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the bottom program and the balancing fix
    Analyze {
        /// Tower description file ('-' for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the bottom (root) program only
    Root {
        /// Tower description file ('-' for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the total weight carried by a program
    Weight {
        /// Tower description file ('-' for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Program to weigh (default: the root)
        name: Option<String>,
    },

    /// Render the tower as a tree
    Tree {
        /// Tower description file ('-' for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Annotate each program with its subtree weight
        #[arg(short, long)]
        weights: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
