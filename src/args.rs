//! These structs provide the CLI interface for the fin CLI.

use crate::model::Amount;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// fin: A command-line personal finance tracker.
///
/// Records signed transactions (positive amounts are income, negative amounts
/// are expenses), keeps them in a local JSON store, and reports a running
/// balance along with a category breakdown chart.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Record a transaction. Use a negative amount for an expense, e.g.
    /// `fin add --label Groceries --amount -120.50 --category Food`.
    Add(AddArgs),
    /// Remove every transaction with the given ID.
    ///
    /// IDs are random and not guaranteed unique, so duplicates are removed
    /// together. Removing an unknown ID is not an error.
    Remove(RemoveArgs),
    /// List the recorded transactions in order.
    List,
    /// Show the running balance, total income and total expense.
    Summary,
    /// Write the category breakdown as an SVG doughnut chart.
    Chart(ChartArgs),
    /// Drop every transaction and empty the store.
    Clear,
    /// Export the transactions as CSV.
    Export(ExportArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where fin data is held. Defaults to ~/fin
    #[arg(long, env = "FIN_HOME", default_value_os_t = default_fin_home())]
    fin_home: PathBuf,
}

impl Common {
    pub fn new(log_level: LevelFilter, fin_home: PathBuf) -> Self {
        Self {
            log_level,
            fin_home,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn fin_home(&self) -> &PathBuf {
        &self.fin_home
    }
}

#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// What the money was for, e.g. "Groceries" or "Paycheck".
    #[arg(long)]
    label: String,

    /// The signed amount. A dollar sign and thousands commas are accepted,
    /// e.g. -120.50 or '-$1,200.00'.
    #[arg(long, allow_hyphen_values = true)]
    amount: Amount,

    /// The category label. Any text is accepted; there is no fixed set.
    #[arg(long)]
    category: String,
}

impl AddArgs {
    pub fn new(
        label: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            amount,
            category: category.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Parser, Clone)]
pub struct RemoveArgs {
    /// The ID shown by `fin list`.
    id: u32,
}

impl RemoveArgs {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    /// Where to write the SVG, defaults to $FIN_HOME/chart.svg
    #[arg(long)]
    out: Option<PathBuf>,
}

impl ChartArgs {
    pub fn new(out: Option<PathBuf>) -> Self {
        Self { out }
    }

    pub fn out(&self) -> Option<&PathBuf> {
        self.out.as_ref()
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// The file to write. If not supplied, output goes to stdout.
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,
}

impl ExportArgs {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    pub fn file(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }
}

fn default_fin_home() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join("fin"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --fin-home or FIN_HOME instead of relying on the default fin \
                home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("fin")
        }
    }
}
