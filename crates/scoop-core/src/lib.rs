//! # scoop-core: Pure Order Fulfillment Logic for Scoop
//!
//! This crate turns an ice cream order into a finished dish. It contains the
//! composition rules and the orchestration, and nothing that touches a disk,
//! a network or a clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Scoop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/scoop-cli                               │   │
//! │  │        read order file ──► submit ──► print dish                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ scoop-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   order   │  │   dish    │  │   shop    │  │   │
//! │  │   │  Flavor   │  │   Order   │  │   Cone    │  │IceCream-  │  │   │
//! │  │   │  Topping  │  │  Builder  │  │   Dish    │  │   Shop    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └─────┬─────┘  │   │
//! │  │                                                      │         │   │
//! │  │              IceCreamStock + BillingSystem traits ◄──┘         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ implemented by                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 scoop-counter (adapters + config)               │   │
//! │  │            CountedStock, ReceiptLedger, CounterConfig           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cone types, portion sizes, flavors, toppings
//! - [`order`] - The immutable order and its two-stage builder
//! - [`dish`] - The cone being filled and the rules it enforces
//! - [`shop`] - The orchestrator and its collaborator traits
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use scoop_core::{
//!     BillingError, BillingSystem, Cone, ConeType, Flavor, IceCreamShop, IceCreamStock,
//!     Order, PortionSize, Topping,
//! };
//!
//! struct OpenFreezer;
//!
//! impl IceCreamStock for OpenFreezer {
//!     fn grab_cone(&self, cone_type: ConeType, portion_size: PortionSize) -> Cone {
//!         Cone::new(cone_type, portion_size)
//!     }
//!
//!     fn has_flavor_available(&self, _flavor: Flavor) -> bool {
//!         true
//!     }
//! }
//!
//! struct OnTheHouse;
//!
//! impl BillingSystem for OnTheHouse {
//!     fn charge(&self, _order: &Order) -> Result<(), BillingError> {
//!         Ok(())
//!     }
//! }
//!
//! let shop = IceCreamShop::new(Arc::new(OpenFreezer), Arc::new(OnTheHouse));
//!
//! let order = Order::builder()
//!     .vegan()
//!     .cone(ConeType::Biscuit, PortionSize::Medium)
//!     .flavor(Flavor::Vanilla)
//!     .flavor(Flavor::Strawberry)
//!     .topping(Topping::Sprinkles)
//!     .build();
//!
//! let dish = shop.submit(&order).unwrap();
//! assert_eq!(dish.flavors().len(), 2);
//! assert!(dish.is_sealed());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dish;
pub mod error;
pub mod order;
pub mod shop;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dish::{Cone, IceCreamDish};
pub use error::{BillingError, SelectionError, ShopError, ShopResult};
pub use order::{Order, OrderBuilder, ScoopBuilder};
pub use shop::{BillingSystem, IceCreamShop, IceCreamStock, OrderIntake};
pub use types::{ConeType, Flavor, PortionSize, Topping};
