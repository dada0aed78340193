//! # Dishes
//!
//! The ice cream being assembled: a [`Cone`] holding flavor balls and
//! toppings, wrapped in an [`IceCreamDish`] that knows whether it is vegan.
//!
//! ## Assembly Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_flavor(flavor)                                                     │
//! │       │                                                                 │
//! │       ├── vegan dish, dairy flavor? ──► VeganMismatch   (not recorded)  │
//! │       │                                                                 │
//! │       ├── any topping already?      ──► FlavorAfterTopping              │
//! │       │                                                                 │
//! │       ├── push flavor                                                   │
//! │       │                                                                 │
//! │       └── balls > capacity?         ──► PortionExceeded (recorded)      │
//! │                                                                         │
//! │  add_topping(topping) ──► push, never fails, seals the dish            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The portion check runs after the push, so a dish that just failed with
//! `PortionExceeded` holds one ball more than its capacity. During a
//! submission that dish is dropped with the error; a caller adding flavors
//! by hand to a returned dish will see the extra ball.

use serde::Serialize;

use crate::error::{ShopError, ShopResult};
use crate::types::{ConeType, Flavor, PortionSize, Topping};

// =============================================================================
// Cone
// =============================================================================

/// The vessel handed out by the stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cone {
    cone_type: ConeType,
    portion_size: PortionSize,
    flavors: Vec<Flavor>,
    toppings: Vec<Topping>,
}

impl Cone {
    /// Creates an empty cone.
    pub fn new(cone_type: ConeType, portion_size: PortionSize) -> Self {
        Cone {
            cone_type,
            portion_size,
            flavors: Vec::new(),
            toppings: Vec::new(),
        }
    }

    pub fn cone_type(&self) -> ConeType {
        self.cone_type
    }

    pub fn portion_size(&self) -> PortionSize {
        self.portion_size
    }

    /// Maximum flavor balls, derived from the portion size.
    pub fn capacity(&self) -> usize {
        self.portion_size.capacity()
    }

    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    fn add_flavor(&mut self, flavor: Flavor) -> ShopResult<()> {
        if !self.toppings.is_empty() {
            return Err(ShopError::FlavorAfterTopping { flavor });
        }

        self.flavors.push(flavor);

        if self.flavors.len() > self.capacity() {
            return Err(ShopError::PortionExceeded {
                portion_size: self.portion_size,
                capacity: self.capacity(),
            });
        }

        Ok(())
    }

    fn add_topping(&mut self, topping: Topping) {
        self.toppings.push(topping);
    }
}

// =============================================================================
// Ice Cream Dish
// =============================================================================

/// A cone under construction, or the finished result of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IceCreamDish {
    cone: Cone,
    is_vegan: bool,
}

impl IceCreamDish {
    pub fn new(cone: Cone, is_vegan: bool) -> Self {
        IceCreamDish { cone, is_vegan }
    }

    pub fn cone(&self) -> &Cone {
        &self.cone
    }

    pub fn is_vegan(&self) -> bool {
        self.is_vegan
    }

    pub fn flavors(&self) -> &[Flavor] {
        self.cone.flavors()
    }

    pub fn toppings(&self) -> &[Topping] {
        self.cone.toppings()
    }

    /// True once a topping is on; no more flavors are accepted.
    pub fn is_sealed(&self) -> bool {
        !self.cone.toppings.is_empty()
    }

    /// Adds one flavor ball.
    ///
    /// ## Errors
    /// - [`ShopError::VeganMismatch`] for a dairy flavor in a vegan dish
    /// - [`ShopError::FlavorAfterTopping`] once a topping has been added
    /// - [`ShopError::PortionExceeded`] when the ball does not fit; the ball
    ///   has already been added when this is returned
    pub fn add_flavor(&mut self, flavor: Flavor) -> ShopResult<()> {
        if self.is_vegan && !flavor.is_vegan() {
            return Err(ShopError::VeganMismatch { flavor });
        }

        self.cone.add_flavor(flavor)
    }

    /// Adds a topping. Always succeeds.
    pub fn add_topping(&mut self, topping: Topping) {
        self.cone.add_topping(topping);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
