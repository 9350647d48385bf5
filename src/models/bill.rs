//! Bill model
//!
//! A bill is one shared expense: who paid, who took part, and how much.
//! Bills are stored in the ledger file with capitalized field names
//! (`Participant`, `Payer`, `Amount`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single shared expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// People sharing the bill besides the payer, sorted ascending
    #[serde(rename = "Participant")]
    pub participants: Vec<String>,

    /// Person who paid the bill
    #[serde(rename = "Payer", default)]
    pub payer: String,

    /// Total amount in dollars
    #[serde(rename = "Amount")]
    pub amount: f64,
}

impl Bill {
    /// Create a new bill; participants are sorted ascending
    pub fn new(participants: Vec<String>, payer: impl Into<String>, amount: f64) -> Self {
        let mut bill = Self {
            participants,
            payer: payer.into(),
            amount,
        };
        bill.participants.sort();
        bill
    }

    /// Replace the participant list, keeping it sorted
    pub fn set_participants(&mut self, mut participants: Vec<String>) {
        participants.sort();
        self.participants = participants;
    }

    /// Number of ways the amount is split (participants plus the payer)
    pub fn split_count(&self) -> usize {
        self.participants.len() + 1
    }

    /// Amount each person carries
    pub fn share(&self) -> f64 {
        self.amount / self.split_count() as f64
    }

    /// Participants who owe the payer, skipping the payer if listed
    pub fn debtors(&self) -> impl Iterator<Item = &str> {
        self.participants
            .iter()
            .map(String::as_str)
            .filter(move |name| *name != self.payer)
    }

    /// Validate the bill
    pub fn validate(&self) -> Result<(), BillValidationError> {
        validate_amount(self.amount)?;

        if self.participants.is_empty() {
            return Err(BillValidationError::NoParticipants);
        }

        if self.participants.iter().any(|p| p.trim().is_empty()) {
            return Err(BillValidationError::EmptyName);
        }

        if self.payer.trim().is_empty() {
            return Err(BillValidationError::EmptyPayer);
        }

        Ok(())
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${:.2} paid by {} for {}",
            self.amount,
            if self.payer.is_empty() {
                "(unknown)"
            } else {
                self.payer.as_str()
            },
            self.participants.join(", ")
        )
    }
}

/// Check that an amount is a finite, non-negative number of dollars
pub fn validate_amount(amount: f64) -> Result<(), BillValidationError> {
    if !amount.is_finite() {
        return Err(BillValidationError::AmountNotFinite);
    }
    if amount < 0.0 {
        return Err(BillValidationError::NegativeAmount(amount));
    }
    Ok(())
}

/// Turn raw name input into a clean list of capitalized names
///
/// Each entry may itself hold several comma-separated names. Blank names are
/// dropped. The result is not sorted.
pub fn normalize_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .flat_map(|entry| {
            entry
                .as_ref()
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(capitalize)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(name: &str) -> String {
    let name = name.trim();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validation errors for bills
#[derive(Debug, Clone, PartialEq)]
pub enum BillValidationError {
    AmountNotFinite,
    NegativeAmount(f64),
    NoParticipants,
    EmptyName,
    EmptyPayer,
}

impl fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountNotFinite => write!(f, "Amount must be a number"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative ({})", amount)
            }
            Self::NoParticipants => write!(f, "A bill needs at least one participant"),
            Self::EmptyName => write!(f, "Participant name cannot be empty"),
            Self::EmptyPayer => write!(f, "Payer name cannot be empty"),
        }
    }
}

impl std::error::Error for BillValidationError {}
