//! Ledger service
//!
//! Business logic for the bill ledger. Every operation loads the whole
//! ledger, works on the in-memory copy and writes the whole ledger back.
//! Bills are addressed by their 1-based position, which shifts when an
//! earlier bill is removed.

use std::collections::BTreeMap;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::{GbillError, GbillResult};
use crate::models::{capitalize, normalize_names, validate_amount, Bill};
use crate::storage::BillRepository;

use super::split::{amounts_owed, net_balances};

/// Field changes for one bill; `None` leaves the field as it is
///
/// Payer and participant names are raw input and get the same
/// normalization as [`LedgerService::add`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillEdit {
    pub amount: Option<f64>,
    pub payer: Option<String>,
    pub participants: Option<Vec<String>>,
}

impl BillEdit {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.payer.is_none() && self.participants.is_none()
    }
}

/// Service for ledger management
#[derive(Debug, Clone)]
pub struct LedgerService {
    repo: BillRepository,
    audit: Option<AuditLogger>,
}

impl LedgerService {
    /// Create a ledger service for the ledger named in the settings
    pub fn new(settings: &Settings) -> Self {
        Self::from_repository(BillRepository::new(&settings.database))
    }

    /// Create a ledger service over an existing repository
    pub fn from_repository(repo: BillRepository) -> Self {
        Self { repo, audit: None }
    }

    /// Record every ledger change in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The underlying repository
    pub fn repository(&self) -> &BillRepository {
        &self.repo
    }

    /// Add a new bill at the end of the ledger
    ///
    /// Participant entries may hold comma-separated names; names are
    /// capitalized and sorted.
    pub fn add<I, S>(&self, participants: I, payer: &str, amount: f64) -> GbillResult<Bill>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bill = Bill::new(normalize_names(participants), capitalize(payer), amount);
        validate(&bill)?;

        let mut bills = self.repo.read_all()?;
        bills.push(bill.clone());
        self.repo.write_all(&bills)?;

        self.log(&[AuditEntry::create(bills.len(), &bill)])?;

        Ok(bill)
    }

    /// Append several already-built bills with a single write
    ///
    /// Nothing is written if any bill fails validation.
    pub fn add_many(&self, new_bills: Vec<Bill>) -> GbillResult<Vec<Bill>> {
        for (i, bill) in new_bills.iter().enumerate() {
            bill.validate()
                .map_err(|e| GbillError::Validation(format!("bill {}: {}", i + 1, e)))?;
        }

        let mut bills = self.repo.read_all()?;
        let first_id = bills.len() + 1;
        bills.extend(new_bills.iter().cloned());
        self.repo.write_all(&bills)?;

        let entries: Vec<_> = new_bills
            .iter()
            .enumerate()
            .map(|(i, bill)| AuditEntry::create(first_id + i, bill))
            .collect();
        self.log(&entries)?;

        Ok(new_bills)
    }

    /// Apply every field of `changes` to bill `id` with a single write
    ///
    /// All new values are checked before the ledger is touched, so a bad
    /// field leaves the saved ledger unchanged.
    pub fn edit(&self, id: usize, changes: BillEdit) -> GbillResult<Bill> {
        if changes.is_empty() {
            return Err(GbillError::Validation(
                "Nothing to edit: pass --amount, --payer or --participants".into(),
            ));
        }

        if let Some(amount) = changes.amount {
            validate_amount(amount).map_err(|e| GbillError::Validation(e.to_string()))?;
        }

        let payer = changes.payer.as_deref().map(capitalize);
        if payer.as_ref().is_some_and(|p| p.is_empty()) {
            return Err(GbillError::Validation("Payer name cannot be empty".into()));
        }

        let participants = changes.participants.map(normalize_names);
        if participants.as_ref().is_some_and(|p| p.is_empty()) {
            return Err(GbillError::Validation(
                "A bill needs at least one participant".into(),
            ));
        }

        let mut bills = self.repo.read_all()?;
        let index = position(id, bills.len())?;

        let before = bills[index].clone();
        let bill = &mut bills[index];
        if let Some(amount) = changes.amount {
            bill.amount = amount;
        }
        if let Some(payer) = payer {
            bill.payer = payer;
        }
        if let Some(participants) = participants {
            bill.set_participants(participants);
        }
        let after = bill.clone();

        self.repo.write_all(&bills)?;
        self.log(&[AuditEntry::update(id, &before, &after)])?;

        Ok(after)
    }

    /// Set the amount of bill `id`
    pub fn edit_amount(&self, id: usize, amount: f64) -> GbillResult<Bill> {
        self.edit(
            id,
            BillEdit {
                amount: Some(amount),
                ..BillEdit::default()
            },
        )
    }

    /// Set the payer of bill `id`
    pub fn edit_payer(&self, id: usize, payer: &str) -> GbillResult<Bill> {
        self.edit(
            id,
            BillEdit {
                payer: Some(payer.to_string()),
                ..BillEdit::default()
            },
        )
    }

    /// Replace the participants of bill `id`
    pub fn edit_participants<I, S>(&self, id: usize, participants: I) -> GbillResult<Bill>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let participants = participants
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self.edit(
            id,
            BillEdit {
                participants: Some(participants),
                ..BillEdit::default()
            },
        )
    }

    /// Remove bill `id`; later bills move up one position
    pub fn remove(&self, id: usize) -> GbillResult<Bill> {
        let mut bills = self.repo.read_all()?;
        let index = position(id, bills.len())?;

        let removed = bills.remove(index);
        self.repo.write_all(&bills)?;
        self.log(&[AuditEntry::delete(id, &removed)])?;

        Ok(removed)
    }

    /// Empty the ledger, returning how many bills it held
    ///
    /// Works on an unreadable ledger too, in which case the count is zero.
    pub fn remove_all(&self) -> GbillResult<usize> {
        let count = self.repo.read_all().map(|bills| bills.len()).unwrap_or(0);

        self.repo.write_all(&[])?;
        self.log(&[AuditEntry::clear(count)])?;

        Ok(count)
    }

    /// All bills in ledger order
    pub fn list(&self) -> GbillResult<Vec<Bill>> {
        self.repo.read_all()
    }

    /// Bill `id`
    pub fn get(&self, id: usize) -> GbillResult<Bill> {
        let mut bills = self.repo.read_all()?;
        let index = position(id, bills.len())?;
        Ok(bills.swap_remove(index))
    }

    /// Total owed per participant across the ledger
    pub fn calculate(&self) -> GbillResult<BTreeMap<String, f64>> {
        Ok(amounts_owed(&self.repo.read_all()?))
    }

    /// Net balance per person across the ledger
    pub fn balances(&self) -> GbillResult<BTreeMap<String, f64>> {
        Ok(net_balances(&self.repo.read_all()?))
    }

    fn log(&self, entries: &[AuditEntry]) -> GbillResult<()> {
        match &self.audit {
            Some(logger) => logger.append(entries),
            None => Ok(()),
        }
    }
}

/// Map a 1-based bill id onto a vector index
fn position(id: usize, len: usize) -> GbillResult<usize> {
    if id == 0 || id > len {
        return Err(GbillError::bill_not_found(id));
    }
    Ok(id - 1)
}

fn validate(bill: &Bill) -> GbillResult<()> {
    bill.validate()
        .map_err(|e| GbillError::Validation(e.to_string()))
}
