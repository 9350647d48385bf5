//! Bill CLI commands
//!
//! Implements the commands that change or show the ledger.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;

use crate::display::{format_amount, format_bill_list};
use crate::error::{GbillError, GbillResult};
use crate::services::{import_bills_csv, BillEdit, LedgerService};

/// Arguments for `gbill add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Participants sharing the bill (names may also be comma-separated)
    #[arg(
        short,
        long,
        num_args = 1..,
        required_unless_present = "path",
        conflicts_with = "path"
    )]
    pub participants: Vec<String>,

    /// Person who paid the bill
    #[arg(long, required_unless_present = "path", conflicts_with = "path")]
    pub payer: Option<String>,

    /// Amount paid in dollars
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        required_unless_present = "path",
        conflicts_with = "path"
    )]
    pub amount: Option<f64>,

    /// Import bills from a CSV file (participants,payer,amount)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Arguments for `gbill edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Position of the bill as shown by `gbill list`
    pub id: usize,

    /// New amount in dollars
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// New payer
    #[arg(long)]
    pub payer: Option<String>,

    /// New participant list
    #[arg(short, long, num_args = 1..)]
    pub participants: Option<Vec<String>>,
}

/// Handle `gbill add`
pub fn handle_add(service: &LedgerService, args: AddArgs) -> GbillResult<()> {
    if let Some(path) = args.path {
        return handle_import(service, path);
    }

    let (payer, amount) = match (args.payer, args.amount) {
        (Some(payer), Some(amount)) => (payer, amount),
        _ => {
            return Err(GbillError::Validation(
                "--participants, --payer and --amount are all required".into(),
            ))
        }
    };

    let bill = service.add(&args.participants, &payer, amount)?;
    println!(
        "Bill for {} was added with amount {} (paid by {})",
        bill.participants.join(", "),
        format_amount(bill.amount),
        bill.payer
    );

    Ok(())
}

fn handle_import(service: &LedgerService, path: PathBuf) -> GbillResult<()> {
    let file = File::open(&path)
        .map_err(|e| GbillError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

    let bills = import_bills_csv(BufReader::new(file))?;
    if bills.is_empty() {
        println!("No bills found in {}", path.display());
        return Ok(());
    }

    let added = service.add_many(bills)?;
    println!("Imported {} bill(s) from {}", added.len(), path.display());

    Ok(())
}

/// Handle `gbill edit`
pub fn handle_edit(service: &LedgerService, args: EditArgs) -> GbillResult<()> {
    let id = args.id;
    let changes = BillEdit {
        amount: args.amount,
        payer: args.payer,
        participants: args.participants,
    };
    let (amount_changed, payer_changed, participants_changed) = (
        changes.amount.is_some(),
        changes.payer.is_some(),
        changes.participants.is_some(),
    );

    let bill = service.edit(id, changes)?;

    if amount_changed {
        println!(
            "Amount of bill #{} was edited. It is now {}",
            id,
            format_amount(bill.amount)
        );
    }
    if payer_changed {
        println!("Payer of bill #{} was edited. It is now {}", id, bill.payer);
    }
    if participants_changed {
        println!(
            "Participants of bill #{} were edited. They are now {}",
            id,
            bill.participants.join(", ")
        );
    }

    Ok(())
}

/// Handle `gbill list`
pub fn handle_list(service: &LedgerService) -> GbillResult<()> {
    let bills = service.list()?;
    print!("{}", format_bill_list(&bills));
    if bills.is_empty() {
        println!();
    }
    Ok(())
}

/// Handle `gbill remove`
pub fn handle_remove(service: &LedgerService, id: usize, force: bool) -> GbillResult<()> {
    if !force {
        let bill = service.get(id)?;
        println!("About to remove bill #{}: {}", id, bill);
        println!("Use --force to confirm removal");
        return Ok(());
    }

    let removed = service.remove(id)?;
    println!("Bill #{} ({}) was removed", id, removed);

    Ok(())
}

/// Handle `gbill clear`
pub fn handle_clear(service: &LedgerService, force: bool) -> GbillResult<()> {
    if !force {
        println!("About to remove all bills");
        println!("Use --force to confirm");
        return Ok(());
    }

    let count = service.remove_all()?;
    println!("All bills were removed ({})", count);

    Ok(())
}
