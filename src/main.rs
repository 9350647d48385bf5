use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gbill::audit::AuditLogger;
use gbill::cli::{
    handle_add, handle_balance, handle_calculate, handle_clear, handle_config, handle_edit,
    handle_export, handle_init, handle_list, handle_log, handle_remove, AddArgs, EditArgs,
};
use gbill::config::{GbillPaths, Settings};
use gbill::error::GbillError;
use gbill::services::LedgerService;

#[derive(Parser)]
#[command(
    name = "gbill",
    version,
    about = "Split shared bills and track who owes what",
    long_about = "gbill records shared expenses (who paid, who took part, how much) \
                  in a JSON ledger and works out how much each person owes."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the gbill database
    Init {
        /// Where to keep the ledger file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Add a new bill
    Add(AddArgs),

    /// Edit an existing bill
    Edit(EditArgs),

    /// List all bills
    #[command(alias = "ls")]
    List,

    /// Show how much each participant owes
    #[command(alias = "owe")]
    Calculate,

    /// Show net balances across all bills
    Balance,

    /// Remove a bill using its ID
    #[command(alias = "rm")]
    Remove {
        /// Position of the bill as shown by `gbill list`
        id: usize,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Remove all bills
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Export the ledger as CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes to the ledger
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GbillPaths::new()?;

    match cli.command {
        Some(Commands::Init { db_path }) => handle_init(&paths, db_path)?,
        Some(Commands::Config) => handle_config(&paths)?,
        Some(Commands::Add(args)) => handle_add(&open_ledger(&paths)?, args)?,
        Some(Commands::Edit(args)) => handle_edit(&open_ledger(&paths)?, args)?,
        Some(Commands::List) => handle_list(&open_ledger(&paths)?)?,
        Some(Commands::Calculate) => handle_calculate(&open_ledger(&paths)?)?,
        Some(Commands::Balance) => handle_balance(&open_ledger(&paths)?)?,
        Some(Commands::Remove { id, force }) => handle_remove(&open_ledger(&paths)?, id, force)?,
        Some(Commands::Clear { force }) => handle_clear(&open_ledger(&paths)?, force)?,
        Some(Commands::Export { output }) => handle_export(&open_ledger(&paths)?, output)?,
        Some(Commands::Log { limit }) => handle_log(&AuditLogger::new(paths.audit_log()), limit)?,
        None => {
            println!("gbill - split shared bills from the terminal");
            println!();
            println!("Run 'gbill init' to create a ledger.");
            println!("Run 'gbill --help' for usage information.");
        }
    }

    Ok(())
}

/// Load settings and build the ledger service, with audit logging enabled
fn open_ledger(paths: &GbillPaths) -> Result<LedgerService, GbillError> {
    let settings = Settings::load(paths)?;
    let service =
        LedgerService::new(&settings).with_audit(AuditLogger::new(paths.audit_log()));

    if !service.repository().exists() {
        return Err(GbillError::Config(
            "Database not found. Please run \"gbill init\"".into(),
        ));
    }

    Ok(service)
}
