//! # Counted Stock
//!
//! An [`IceCreamStock`] that knows how many balls of each flavor are left.
//!
//! ## Drawing Scoops
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  has_flavor_available(vanilla)                                          │
//! │       │                                                                 │
//! │       ├── vanilla left > 0  ──► draw one ball, return true             │
//! │       │                                                                 │
//! │       └── vanilla left = 0  ──► return false (shop: OutOfStock)        │
//! │                                                                         │
//! │  The shop asks exactly once per flavor ball, so the answer doubles     │
//! │  as the reservation. Balls drawn for an order that later fails are     │
//! │  not put back.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cones are never counted down; `grab_cone` always succeeds.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use scoop_core::{Cone, ConeType, Flavor, IceCreamStock, PortionSize};

use crate::config::StockSettings;

#[derive(Debug, Default)]
struct Freezer {
    scoops: HashMap<Flavor, u32>,
    cones_issued: usize,
}

/// Per-flavor ball counts behind a mutex.
#[derive(Debug, Default)]
pub struct CountedStock {
    freezer: Mutex<Freezer>,
}

impl CountedStock {
    /// Creates a stock with no ice cream at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stock holding the configured opening balls.
    pub fn from_config(settings: &StockSettings) -> Self {
        Flavor::ALL
            .into_iter()
            .fold(Self::new(), |stock, flavor| {
                stock.with_scoops(flavor, settings.scoops(flavor))
            })
    }

    /// Sets the balls of one flavor (builder style).
    pub fn with_scoops(self, flavor: Flavor, scoops: u32) -> Self {
        self.freezer().scoops.insert(flavor, scoops);
        self
    }

    /// Adds balls of one flavor.
    pub fn restock(&self, flavor: Flavor, scoops: u32) {
        let mut freezer = self.freezer();
        let left = freezer.scoops.entry(flavor).or_insert(0);
        *left = left.saturating_add(scoops);
        debug!(%flavor, added = scoops, left = *left, "Flavor restocked");
    }

    /// Balls of `flavor` still available.
    pub fn remaining(&self, flavor: Flavor) -> u32 {
        self.freezer().scoops.get(&flavor).copied().unwrap_or(0)
    }

    /// Number of cones handed out so far.
    pub fn cones_issued(&self) -> usize {
        self.freezer().cones_issued
    }

    fn freezer(&self) -> MutexGuard<'_, Freezer> {
        self.freezer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IceCreamStock for CountedStock {
    fn grab_cone(&self, cone_type: ConeType, portion_size: PortionSize) -> Cone {
        self.freezer().cones_issued += 1;
        Cone::new(cone_type, portion_size)
    }

    fn has_flavor_available(&self, flavor: Flavor) -> bool {
        let mut freezer = self.freezer();
        match freezer.scoops.get_mut(&flavor) {
            Some(left) if *left > 0 => {
                *left -= 1;
                debug!(%flavor, left = *left, "Scoop drawn");
                if *left == 0 {
                    warn!(%flavor, "Flavor ran out");
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    use scoop_core::{BillingError, BillingSystem, IceCreamShop, Order, ShopError};

    struct FreeOfCharge;

    impl BillingSystem for FreeOfCharge {
        fn charge(&self, _order: &Order) -> Result<(), BillingError> {
            Ok(())
        }
    }

    #[test]
    fn test_from_config() {
        let settings = StockSettings {
            chocolate: 1,
            vanilla: 2,
            strawberry: 0,
        };
        let stock = CountedStock::from_config(&settings);

        assert_eq!(stock.remaining(Flavor::Chocolate), 1);
        assert_eq!(stock.remaining(Flavor::Vanilla), 2);
        assert_eq!(stock.remaining(Flavor::Strawberry), 0);
    }

    #[test]
    fn test_each_query_draws_one_ball() {
        let stock = CountedStock::new().with_scoops(Flavor::Vanilla, 2);

        assert!(stock.has_flavor_available(Flavor::Vanilla));
        assert!(stock.has_flavor_available(Flavor::Vanilla));
        assert!(!stock.has_flavor_available(Flavor::Vanilla));
        assert_eq!(stock.remaining(Flavor::Vanilla), 0);
    }

    #[test]
    fn test_unknown_flavor_is_unavailable() {
        let stock = CountedStock::new();
        assert!(!stock.has_flavor_available(Flavor::Strawberry));
    }

    #[test]
    fn test_restock() {
        let stock = CountedStock::new();
        stock.restock(Flavor::Chocolate, 3);
        stock.restock(Flavor::Chocolate, 2);
        assert_eq!(stock.remaining(Flavor::Chocolate), 5);
    }

    #[test]
    fn test_grab_cone_counts_cones() {
        let stock = CountedStock::new();
        let cone = stock.grab_cone(ConeType::Biscuit, PortionSize::Medium);

        assert_eq!(cone.cone_type(), ConeType::Biscuit);
        assert_eq!(cone.capacity(), 2);
        assert!(cone.flavors().is_empty());
        assert_eq!(stock.cones_issued(), 1);
    }

    #[test]
    fn test_shop_runs_out_mid_order() {
        let stock = Arc::new(
            CountedStock::new()
                .with_scoops(Flavor::Vanilla, 1)
                .with_scoops(Flavor::Strawberry, 5),
        );
        let shop = IceCreamShop::new(stock.clone(), Arc::new(FreeOfCharge));

        let order = Order::builder()
            .cone(ConeType::Cup, PortionSize::Large)
            .flavors([Flavor::Vanilla, Flavor::Vanilla, Flavor::Strawberry])
            .build();
        let err = shop.submit(&order).unwrap_err();

        assert!(matches!(
            err,
            ShopError::OutOfStock {
                flavor: Flavor::Vanilla
            }
        ));
        // The first vanilla stays drawn; strawberry was never asked for.
        assert_eq!(stock.remaining(Flavor::Vanilla), 0);
        assert_eq!(stock.remaining(Flavor::Strawberry), 5);
        assert_eq!(stock.cones_issued(), 1);
    }

    proptest! {
        #[test]
        fn prop_never_draws_more_than_stocked(opening in 0u32..20, queries in 0usize..40) {
            let stock = CountedStock::new().with_scoops(Flavor::Chocolate, opening);

            let granted = (0..queries)
                .filter(|_| stock.has_flavor_available(Flavor::Chocolate))
                .count();

            prop_assert_eq!(granted, queries.min(opening as usize));
            prop_assert_eq!(stock.remaining(Flavor::Chocolate) as usize, opening as usize - granted);
        }
    }
}
