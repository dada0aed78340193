//! # Counter Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Counter Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────────────┐        │
//! │  │  CounterError           │        │  LedgerError            │        │
//! │  │                         │        │                         │        │
//! │  │  InvalidConfig          │        │  Closed                 │        │
//! │  │  ConfigLoadFailed       │        │  Full { max }           │        │
//! │  │  ConfigSaveFailed       │        │                         │        │
//! │  │  OrderLoadFailed        │        │  returned from charge() │        │
//! │  └─────────────────────────┘        └─────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `LedgerError` travels through the shop boxed inside
//! `ShopError::Billing` and can be downcast back on the other side.

use thiserror::Error;

/// Result type alias for counter operations.
pub type CounterResult<T> = Result<T, CounterError>;

/// Failures around configuration and order files.
#[derive(Debug, Error)]
pub enum CounterError {
    /// The configuration loaded but does not make sense.
    #[error("Invalid counter configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Failed to read or parse an order file.
    #[error("Failed to load order: {0}")]
    OrderLoadFailed(String),
}

impl CounterError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CounterError::InvalidConfig(_)
                | CounterError::ConfigLoadFailed(_)
                | CounterError::ConfigSaveFailed(_)
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for CounterError {
    fn from(err: std::io::Error) -> Self {
        CounterError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CounterError {
    fn from(err: toml::de::Error) -> Self {
        CounterError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CounterError {
    fn from(err: toml::ser::Error) -> Self {
        CounterError::ConfigSaveFailed(err.to_string())
    }
}

impl From<serde_json::Error> for CounterError {
    fn from(err: serde_json::Error) -> Self {
        CounterError::OrderLoadFailed(err.to_string())
    }
}

// =============================================================================
// Ledger Error
// =============================================================================

/// Reasons the receipt ledger refuses a charge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger was closed for the day.
    #[error("Receipt ledger is closed")]
    Closed,

    /// The configured receipt limit was reached.
    #[error("Receipt ledger is full ({max} receipts)")]
    Full { max: usize },
}
