use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use lendstat_core::{LedgerEntry, MonthKey};
use lendstat_ingest::{convert_statement, read_statement};
use lendstat_reports::{Row, all_time, cash_flow, fees_paid, month_table, previous_month, tabbed};
use std::path::{Path, PathBuf};

const DEFAULT_STATEMENT: &str = "data/statement.csv";

#[derive(Parser, Debug)]
#[command(
    name = "lendstat",
    version,
    about = "Statistics over a P2P lending platform's account statement"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a platform export into the normalized statement layout
    Convert {
        /// Path to the exported Statement_YYYYMMDD-YYYYMMDD.csv
        source: PathBuf,

        /// Destination for the converted statement
        #[arg(long, default_value = DEFAULT_STATEMENT)]
        output: PathBuf,
    },

    /// All-time account statement
    Totals {
        /// Path to the converted statement
        #[arg(long, default_value = DEFAULT_STATEMENT)]
        csv: PathBuf,
    },

    /// Fees paid to the platform
    Fees {
        #[arg(long, default_value = DEFAULT_STATEMENT)]
        csv: PathBuf,
    },

    /// Account statement for the previous calendar month
    PreviousMonth {
        #[arg(long, default_value = DEFAULT_STATEMENT)]
        csv: PathBuf,
    },

    /// Account statement per month, with ROI
    ByMonth {
        #[arg(long, default_value = DEFAULT_STATEMENT)]
        csv: PathBuf,
    },

    /// Cash movements in and out of the account
    CashFlow {
        #[arg(long, default_value = DEFAULT_STATEMENT)]
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Convert { source, output } => {
            if !source.exists() {
                bail!("export not found: {}", source.display());
            }
            let rows = convert_statement(&source, &output)
                .with_context(|| format!("converting {}", source.display()))?;
            println!(
                "Converted {} rows from {} to {}",
                rows,
                source.display(),
                output.display()
            );
        }

        Command::Totals { csv } => print_rows(&all_time(&load(&csv)?)),
        Command::Fees { csv } => print_rows(&fees_paid(&load(&csv)?)),
        Command::PreviousMonth { csv } => {
            let target = MonthKey::of(Local::now().date_naive()).pred();
            print_rows(&previous_month(&load(&csv)?, target)?);
        }
        Command::ByMonth { csv } => print_rows(&month_table(&load(&csv)?)),
        Command::CashFlow { csv } => print_rows(&cash_flow(&load(&csv)?)),
    }

    Ok(())
}

fn load(csv: &Path) -> Result<Vec<LedgerEntry>> {
    if !csv.exists() {
        bail!(
            "statement not found: {} (run `lendstat convert <export>` or pass --csv)",
            csv.display()
        );
    }

    let statement =
        read_statement(csv).with_context(|| format!("parsing {}", csv.display()))?;
    Ok(statement.entries)
}

fn print_rows(rows: &[Row]) {
    for row in rows {
        println!("{}", tabbed(row));
    }
}
