//! Command dispatch: one handler per subcommand.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{find_correction, subtree_weight, BalanceReport, Tower, TowerBuilder};
use crate::parser::RecordParser;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Analyze { file }) => analyze(file),
        Some(Commands::Root { file }) => root(file),
        Some(Commands::Weight { file, name }) => weight(file, name.as_deref()),
        Some(Commands::Tree { file, weights }) => tree(file, *weights),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Read, parse, and resolve a tower description. '-' reads stdin.
fn load_tower(path: &Path) -> CliResult<Tower> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    let records = RecordParser::new().parse(&content)?;
    debug!(records = records.len(), "parsed tower description");
    Ok(TowerBuilder::new().build(records)?)
}

#[instrument]
fn analyze(file: &Path) -> CliResult<()> {
    let tower = load_tower(file)?;
    output::action("root", tower.root());
    match find_correction(&tower)? {
        BalanceReport::Balanced => output::success("tower is balanced"),
        BalanceReport::Corrected {
            culprit,
            corrected_weight,
        } => output::info(&format!("{} should weigh {}", culprit, corrected_weight)),
    }
    Ok(())
}

#[instrument]
fn root(file: &Path) -> CliResult<()> {
    let tower = load_tower(file)?;
    output::info(tower.root());
    Ok(())
}

#[instrument]
fn weight(file: &Path, name: Option<&str>) -> CliResult<()> {
    let tower = load_tower(file)?;
    let name = name.unwrap_or_else(|| tower.root());
    if !tower.contains(name) {
        return Err(CliError::InvalidArgs(format!(
            "no program named '{}' in {}",
            name,
            file.display()
        )));
    }
    output::info(&subtree_weight(&tower, name)?);
    Ok(())
}

#[instrument]
fn tree(file: &Path, with_weights: bool) -> CliResult<()> {
    let tower = load_tower(file)?;
    let rendered = output::to_termtree(&tower, tower.root(), with_weights)?;
    output::info(&rendered);
    Ok(())
}
