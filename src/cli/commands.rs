use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Tag, Tree};
use crate::parser::parse_tree;
use crate::tree_traits::TreeNodeConvert;
use crate::visitor::{walk, DerivedVisitor, GenericVisitor, Order, ValueSum, Visit, VisitorKind};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Walk {
            order,
            visitor,
            compact,
            tree,
        } => {
            let settings = Settings::load(cli.config.as_deref())?;
            _walk(
                tree,
                order.unwrap_or(settings.order),
                visitor.unwrap_or(settings.visitor),
                *compact,
            )
        }
        Commands::Show { tree } => _show(tree),
        Commands::Config { command } => match command {
            ConfigCommands::Show => _config_show(cli),
            ConfigCommands::Path => _config_path(),
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Result of walking a tree with one of the stock visitors.
#[derive(Debug)]
pub struct WalkReport {
    pub visits: Vec<Visit>,
    /// Per-tag totals, present for the `sum` visitor only
    pub sum: Option<ValueSum>,
}

/// Run the walker monomorphized for the visitor `kind` selects.
#[instrument(level = "debug", skip(tree))]
pub fn run_walk(tree: &Tree, order: Order, kind: VisitorKind) -> WalkReport {
    match kind {
        VisitorKind::Generic => WalkReport {
            visits: walk(tree, GenericVisitor, order).1,
            sum: None,
        },
        VisitorKind::Derived => WalkReport {
            visits: walk(tree, DerivedVisitor, order).1,
            sum: None,
        },
        VisitorKind::Sum => {
            let (sum, visits) = walk(tree, ValueSum::default(), order);
            WalkReport {
                visits,
                sum: Some(sum),
            }
        }
    }
}

#[instrument]
fn _walk(notation: &str, order: Order, kind: VisitorKind, compact: bool) -> CliResult<()> {
    let tree = parse_tree(notation)?;
    debug!("walking {} node(s), order={}, visitor={}", tree.len(), order, kind);
    let report = run_walk(&tree, order, kind);

    if compact {
        output::info(
            &report
                .visits
                .iter()
                .map(|v| format!("{}({})", v.tag, v.value))
                .join(" -> "),
        );
    } else {
        for visit in &report.visits {
            output::info(visit);
        }
    }

    if let Some(sum) = report.sum {
        for tag in Tag::ALL {
            output::action(&format!("{} total", tag), &sum.total(tag));
        }
    }
    Ok(())
}

#[instrument]
fn _show(notation: &str) -> CliResult<()> {
    let tree = parse_tree(notation)?;
    output::info(&tree.to_tree_string());
    output::header(&"Summary");
    output::detail(&format!("nodes: {}", tree.len()));
    output::detail(&format!("depth: {}", tree.depth()));
    for tag in Tag::ALL {
        output::detail(&format!("{}: {}", tag, tree.count(tag)));
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _config_show(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    output::info(&settings.to_toml()?.trim_end());
    Ok(())
}

fn _config_path() -> CliResult<()> {
    let path = global_config_path().ok_or(CliError::NoConfigDir)?;
    output::info(&path.display());
    Ok(())
}
