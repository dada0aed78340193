//! # scoop-counter: Stock, Billing and Configuration for Scoop
//!
//! The concrete collaborators a running shop needs:
//!
//! - [`stock::CountedStock`] - flavor balls counted down per order line
//! - [`billing::ReceiptLedger`] - a receipt per charged order
//! - [`config::CounterConfig`] - `scoop.toml` + `SCOOP_*` overrides
//! - [`order_file::load_order`] - orders from TOML or JSON files
//!
//! ## Wiring
//! ```rust
//! use std::sync::Arc;
//! use scoop_core::IceCreamShop;
//! use scoop_counter::{CountedStock, CounterConfig, ReceiptLedger};
//!
//! let config = CounterConfig::default();
//! let stock = Arc::new(CountedStock::from_config(&config.stock));
//! let ledger = Arc::new(ReceiptLedger::from_config(&config.billing));
//! let shop = IceCreamShop::new(stock, ledger);
//! # let _ = shop;
//! ```

pub mod billing;
pub mod config;
pub mod error;
pub mod order_file;
pub mod stock;

pub use billing::{Receipt, ReceiptLedger};
pub use config::{BillingSettings, CounterConfig, ShopSettings, StockSettings};
pub use error::{CounterError, CounterResult, LedgerError};
pub use order_file::load_order;
pub use stock::CountedStock;
