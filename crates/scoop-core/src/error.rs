//! # Error Types
//!
//! Domain-specific error types for scoop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scoop-core errors (this file)                                         │
//! │  ├── ShopError       - Why a submission was aborted                    │
//! │  │   ├── VeganMismatch       ┐                                         │
//! │  │   ├── FlavorAfterTopping  ├ raised by the dish itself               │
//! │  │   ├── PortionExceeded     ┘                                         │
//! │  │   ├── OutOfStock          - raised by the shop                      │
//! │  │   └── Billing             - raised by the billing system, verbatim  │
//! │  └── SelectionError  - A selection name could not be parsed            │
//! │                                                                         │
//! │  scoop-counter errors (separate crate)                                 │
//! │  ├── CounterError    - Config and order file failures                  │
//! │  └── LedgerError     - Charge refused by the receipt ledger            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `ShopError` aborts the whole submission. Nothing is retried and
//! nothing is compensated: a scoop already drawn from stock stays drawn.

use thiserror::Error;

use crate::types::{Flavor, PortionSize};

/// Failure raised by a [`BillingSystem`](crate::shop::BillingSystem).
///
/// The shop never inspects it; it reaches the caller inside
/// [`ShopError::Billing`] exactly as the billing system produced it.
pub type BillingError = Box<dyn std::error::Error + Send + Sync>;

// =============================================================================
// Shop Error
// =============================================================================

/// Reasons an order submission can fail.
#[derive(Debug, Error)]
pub enum ShopError {
    /// A dairy flavor was put into a vegan dish.
    ///
    /// Raised before the flavor is recorded, so the dish never holds it.
    #[error("Cannot add non-vegan {flavor} to vegan ice cream")]
    VeganMismatch { flavor: Flavor },

    /// A flavor was added after the dish got its first topping.
    #[error("Cannot add {flavor} after a topping was added")]
    FlavorAfterTopping { flavor: Flavor },

    /// More flavor balls than the portion size holds.
    ///
    /// ## When This Occurs
    /// ```text
    /// Medium cone (capacity 2)
    ///      │
    ///      ├── add vanilla     → 1 ball  OK
    ///      ├── add strawberry  → 2 balls OK
    ///      └── add chocolate   → 3 balls → PortionExceeded
    ///                            (the third ball is already in the cone)
    /// ```
    #[error("No more space for another ice cream ball: {portion_size} holds {capacity}")]
    PortionExceeded {
        portion_size: PortionSize,
        capacity: usize,
    },

    /// The stock reported a flavor as unavailable.
    #[error("Out of stock: {flavor}")]
    OutOfStock { flavor: Flavor },

    /// The billing system refused the charge.
    #[error("Billing failed: {0}")]
    Billing(#[source] BillingError),
}

impl ShopError {
    /// Returns true if the dish itself rejected a flavor.
    pub fn is_composition_error(&self) -> bool {
        matches!(
            self,
            ShopError::VeganMismatch { .. }
                | ShopError::FlavorAfterTopping { .. }
                | ShopError::PortionExceeded { .. }
        )
    }

    /// Returns true if the billing system refused the charge.
    pub fn is_billing_error(&self) -> bool {
        matches!(self, ShopError::Billing(_))
    }
}

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Selection Error
// =============================================================================

/// A cone type, portion size, flavor or topping name was not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct SelectionError {
    pub kind: &'static str,
    pub value: String,
}

impl SelectionError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        SelectionError {
            kind,
            value: value.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
