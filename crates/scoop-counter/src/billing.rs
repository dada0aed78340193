//! # Receipt Ledger
//!
//! A [`BillingSystem`] that writes a [`Receipt`] for every charged order.
//! Nothing is priced; the ledger only records that an order was charged.
//!
//! ## Ledger States
//! ```text
//!   open ──── charge() ──► receipt recorded
//!    │            │
//!    │            └── max_receipts reached ──► LedgerError::Full
//!    │
//!  close()
//!    │
//!    ▼
//!  closed ─── charge() ──► LedgerError::Closed
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use scoop_core::{BillingError, BillingSystem, Order};

use crate::config::BillingSettings;
use crate::error::LedgerError;

/// Proof that an order was charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub order: Order,
}

#[derive(Debug)]
struct Book {
    receipts: Vec<Receipt>,
    open: bool,
}

/// In-memory receipt book.
#[derive(Debug)]
pub struct ReceiptLedger {
    book: Mutex<Book>,
    max_receipts: Option<usize>,
}

impl ReceiptLedger {
    /// Creates an open ledger with no receipt limit.
    pub fn new() -> Self {
        ReceiptLedger {
            book: Mutex::new(Book {
                receipts: Vec::new(),
                open: true,
            }),
            max_receipts: None,
        }
    }

    pub fn from_config(settings: &BillingSettings) -> Self {
        Self::new().with_max_receipts(settings.max_receipts)
    }

    pub fn with_max_receipts(mut self, max_receipts: Option<usize>) -> Self {
        self.max_receipts = max_receipts;
        self
    }

    /// Closes the ledger for the day. Every later charge is refused.
    pub fn close(&self) {
        let mut book = self.book();
        book.open = false;
        info!(receipts = book.receipts.len(), "Receipt ledger closed");
    }

    pub fn is_open(&self) -> bool {
        self.book().open
    }

    /// Receipts issued so far, oldest first.
    pub fn receipts(&self) -> Vec<Receipt> {
        self.book().receipts.clone()
    }

    pub fn receipt_count(&self) -> usize {
        self.book().receipts.len()
    }

    /// The most recently issued receipt.
    pub fn last_receipt(&self) -> Option<Receipt> {
        self.book().receipts.last().cloned()
    }

    fn book(&self) -> MutexGuard<'_, Book> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, order: &Order) -> Result<Receipt, LedgerError> {
        let mut book = self.book();

        if !book.open {
            return Err(LedgerError::Closed);
        }
        if let Some(max) = self.max_receipts {
            if book.receipts.len() >= max {
                return Err(LedgerError::Full { max });
            }
        }

        let receipt = Receipt {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            order: order.clone(),
        };
        book.receipts.push(receipt.clone());
        Ok(receipt)
    }
}

impl Default for ReceiptLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingSystem for ReceiptLedger {
    fn charge(&self, order: &Order) -> Result<(), BillingError> {
        let receipt = self.record(order)?;
        debug!(receipt_id = %receipt.id, "Receipt issued");
        Ok(())
    }
}
