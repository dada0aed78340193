//! # Orders
//!
//! What the customer asked for, before anything is scooped.
//!
//! An [`Order`] is a plain value: it is built once, read by the shop and the
//! billing system, and never changed. No rule is checked here; the vegan,
//! topping and portion rules live on the dish, stock on the shop.
//!
//! ## Two Ways In
//! ```text
//! Order::new(false, Cup, Large, vec![Vanilla], vec![Sprinkles])
//!
//! Order::builder()                 stage one: dietary flag (optional)
//!     .vegan()
//!     .cone(Cup, Large)            ──► stage two: flavors and toppings
//!     .flavor(Vanilla)                  in any order, any count
//!     .topping(Sprinkles)
//!     .build()                     ──► Order
//! ```
//!
//! The builder cannot produce an order without a cone type and portion size:
//! `build()` only exists on the second stage.

use serde::{Deserialize, Serialize};

use crate::types::{ConeType, Flavor, PortionSize, Topping};

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    is_vegan: bool,
    cone_type: ConeType,
    portion_size: PortionSize,
    flavors: Vec<Flavor>,
    #[serde(default)]
    toppings: Vec<Topping>,
}

impl Order {
    /// Creates an order. An empty `toppings` means no toppings.
    pub fn new(
        is_vegan: bool,
        cone_type: ConeType,
        portion_size: PortionSize,
        flavors: Vec<Flavor>,
        toppings: Vec<Topping>,
    ) -> Self {
        Order {
            is_vegan,
            cone_type,
            portion_size,
            flavors,
            toppings,
        }
    }

    /// Starts the two-stage builder.
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    pub fn is_vegan(&self) -> bool {
        self.is_vegan
    }

    pub fn cone_type(&self) -> ConeType {
        self.cone_type
    }

    pub fn portion_size(&self) -> PortionSize {
        self.portion_size
    }

    /// Flavors in the order they will be scooped.
    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    /// Toppings in the order they will be added. Empty when none were asked for.
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
}

// =============================================================================
// Builder
// =============================================================================

/// First builder stage: only the dietary flag can be set.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderBuilder {
    is_vegan: bool,
}

impl OrderBuilder {
    /// Marks the order as vegan.
    pub fn vegan(self) -> Self {
        self.with_vegan(true)
    }

    pub fn with_vegan(mut self, is_vegan: bool) -> Self {
        self.is_vegan = is_vegan;
        self
    }

    /// Fixes the cone and moves on to flavors and toppings.
    pub fn cone(self, cone_type: ConeType, portion_size: PortionSize) -> ScoopBuilder {
        ScoopBuilder {
            is_vegan: self.is_vegan,
            cone_type,
            portion_size,
            flavors: Vec::new(),
            toppings: Vec::new(),
        }
    }
}

/// Second builder stage: flavors and toppings, then [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ScoopBuilder {
    is_vegan: bool,
    cone_type: ConeType,
    portion_size: PortionSize,
    flavors: Vec<Flavor>,
    toppings: Vec<Topping>,
}

impl ScoopBuilder {
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavors.push(flavor);
        self
    }

    pub fn flavors(mut self, flavors: impl IntoIterator<Item = Flavor>) -> Self {
        self.flavors.extend(flavors);
        self
    }

    pub fn topping(mut self, topping: Topping) -> Self {
        self.toppings.push(topping);
        self
    }

    pub fn toppings(mut self, toppings: impl IntoIterator<Item = Topping>) -> Self {
        self.toppings.extend(toppings);
        self
    }

    pub fn build(self) -> Order {
        Order {
            is_vegan: self.is_vegan,
            cone_type: self.cone_type,
            portion_size: self.portion_size,
            flavors: self.flavors,
            toppings: self.toppings,
        }
    }
}
