//! # Shop
//!
//! Turns an [`Order`] into a finished [`IceCreamDish`].
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       IceCreamShop::submit                              │
//! │                                                                         │
//! │  Order                                                                  │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  stock.grab_cone(cone_type, portion_size)       (always succeeds)      │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  for each flavor ──► stock.has_flavor_available? ── no ──► OutOfStock  │
//! │    │                      │ yes                                         │
//! │    │                      ▼                                             │
//! │    │                 dish.add_flavor ── Err ──► VeganMismatch /        │
//! │    │                                           FlavorAfterTopping /    │
//! │    │                                           PortionExceeded         │
//! │    ▼                                                                    │
//! │  for each topping ──► dish.add_topping          (no stock check)       │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  billing.charge(order) ── Err ──► Billing (verbatim, no retry)         │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  IceCreamDish                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any error aborts the submission before billing (or, for billing errors,
//! instead of returning the dish). Nothing drawn from stock is returned.

use std::sync::Arc;

use tracing::{debug, info};

use crate::dish::{Cone, IceCreamDish};
use crate::error::{BillingError, ShopError, ShopResult};
use crate::order::Order;
use crate::types::{ConeType, Flavor, PortionSize};

// =============================================================================
// Collaborators
// =============================================================================

/// Where cones come from and which flavors are left.
pub trait IceCreamStock: Send + Sync {
    /// Hands out an empty cone. There is always one available.
    fn grab_cone(&self, cone_type: ConeType, portion_size: PortionSize) -> Cone;

    /// Whether one more ball of `flavor` can be served.
    fn has_flavor_available(&self, flavor: Flavor) -> bool;
}

/// Charges a finished order.
pub trait BillingSystem: Send + Sync {
    fn charge(&self, order: &Order) -> Result<(), BillingError>;
}

/// Anything that accepts orders and hands back dishes.
pub trait OrderIntake {
    fn submit(&self, order: &Order) -> ShopResult<IceCreamDish>;
}

// =============================================================================
// Ice Cream Shop
// =============================================================================

/// The fulfillment orchestrator.
///
/// Holds no state of its own between submissions; every call builds a fresh
/// dish.
#[derive(Clone)]
pub struct IceCreamShop {
    stock: Arc<dyn IceCreamStock>,
    billing: Arc<dyn BillingSystem>,
}

impl IceCreamShop {
    pub fn new(stock: Arc<dyn IceCreamStock>, billing: Arc<dyn BillingSystem>) -> Self {
        IceCreamShop { stock, billing }
    }

    /// Prepares the dish and charges the order.
    ///
    /// ## Errors
    /// - [`ShopError::OutOfStock`] at the first unavailable flavor; later
    ///   flavors are never queried
    /// - any composition error raised by [`IceCreamDish::add_flavor`]
    /// - [`ShopError::Billing`] carrying the billing system's own error
    pub fn submit(&self, order: &Order) -> ShopResult<IceCreamDish> {
        let dish = self.prepare(order)?;

        self.billing.charge(order).map_err(ShopError::Billing)?;
        info!(
            cone_type = %order.cone_type(),
            portion_size = %order.portion_size(),
            flavors = order.flavors().len(),
            toppings = order.toppings().len(),
            "Order charged"
        );

        Ok(dish)
    }

    fn prepare(&self, order: &Order) -> ShopResult<IceCreamDish> {
        let cone = self
            .stock
            .grab_cone(order.cone_type(), order.portion_size());
        debug!(
            cone_type = %order.cone_type(),
            portion_size = %order.portion_size(),
            vegan = order.is_vegan(),
            "Cone grabbed"
        );

        let mut dish = IceCreamDish::new(cone, order.is_vegan());

        for &flavor in order.flavors() {
            if !self.stock.has_flavor_available(flavor) {
                return Err(ShopError::OutOfStock { flavor });
            }

            dish.add_flavor(flavor)?;
            debug!(%flavor, balls = dish.flavors().len(), "Flavor added");
        }

        for &topping in order.toppings() {
            dish.add_topping(topping);
        }
        if !order.toppings().is_empty() {
            debug!(toppings = order.toppings().len(), "Toppings added");
        }

        Ok(dish)
    }
}

impl OrderIntake for IceCreamShop {
    fn submit(&self, order: &Order) -> ShopResult<IceCreamDish> {
        IceCreamShop::submit(self, order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
