//! # Domain Types
//!
//! The closed selections a customer can make at the counter.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    ConeType     │   │  PortionSize    │   │     Flavor      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Cup            │   │  Small  = 1     │   │  Chocolate  ✗   │       │
//! │  │  Biscuit        │   │  Medium = 2     │   │  Vanilla    ✓   │       │
//! │  └─────────────────┘   │  Large  = 3     │   │  Strawberry ✓   │       │
//! │                        └─────────────────┘   │  (✓ = vegan)    │       │
//! │  ┌─────────────────┐                         └─────────────────┘       │
//! │  │    Topping      │                                                    │
//! │  │  ─────────────  │   The PortionSize discriminant IS the number      │
//! │  │  Sprinkles      │   of flavor balls the cone can hold.              │
//! │  │  Candies        │                                                    │
//! │  │  HotFudge       │                                                    │
//! │  │  GummyBears     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every selection parses case-insensitively from `snake_case`, `kebab-case`
//! or `PascalCase` (`hot_fudge`, `hot-fudge`, `HotFudge`), so order files
//! and command lines can spell them naturally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Lowercases and strips separators so `Hot-Fudge`, `hot_fudge` and
/// `HotFudge` compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// Cone Type
// =============================================================================

/// The vessel an order is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConeType {
    Cup,
    Biscuit,
}

impl ConeType {
    pub const ALL: [ConeType; 2] = [ConeType::Cup, ConeType::Biscuit];
}

impl fmt::Display for ConeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConeType::Cup => write!(f, "cup"),
            ConeType::Biscuit => write!(f, "biscuit"),
        }
    }
}

impl FromStr for ConeType {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "cup" => Ok(ConeType::Cup),
            "biscuit" => Ok(ConeType::Biscuit),
            _ => Err(SelectionError::unknown("cone type", s)),
        }
    }
}

// =============================================================================
// Portion Size
// =============================================================================

/// How many flavor balls a cone holds.
///
/// ## Capacity
/// The discriminant is the capacity: `Small` holds one ball, `Medium` two,
/// `Large` three. Nothing else stores the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortionSize {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl PortionSize {
    pub const ALL: [PortionSize; 3] = [PortionSize::Small, PortionSize::Medium, PortionSize::Large];

    /// Maximum number of flavors a cone of this size can hold.
    #[inline]
    pub const fn capacity(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PortionSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortionSize::Small => write!(f, "small"),
            PortionSize::Medium => write!(f, "medium"),
            PortionSize::Large => write!(f, "large"),
        }
    }
}

impl FromStr for PortionSize {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "small" => Ok(PortionSize::Small),
            "medium" => Ok(PortionSize::Medium),
            "large" => Ok(PortionSize::Large),
            _ => Err(SelectionError::unknown("portion size", s)),
        }
    }
}

// =============================================================================
// Flavor
// =============================================================================

/// One ball of ice cream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    Chocolate,
    Vanilla,
    Strawberry,
}

impl Flavor {
    pub const ALL: [Flavor; 3] = [Flavor::Chocolate, Flavor::Vanilla, Flavor::Strawberry];

    /// Whether this flavor may go into a vegan dish.
    ///
    /// Chocolate is made with dairy; every other flavor is vegan.
    #[inline]
    pub const fn is_vegan(self) -> bool {
        !matches!(self, Flavor::Chocolate)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Chocolate => write!(f, "chocolate"),
            Flavor::Vanilla => write!(f, "vanilla"),
            Flavor::Strawberry => write!(f, "strawberry"),
        }
    }
}

impl FromStr for Flavor {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "chocolate" => Ok(Flavor::Chocolate),
            "vanilla" => Ok(Flavor::Vanilla),
            "strawberry" => Ok(Flavor::Strawberry),
            _ => Err(SelectionError::unknown("flavor", s)),
        }
    }
}

// =============================================================================
// Topping
// =============================================================================

/// Goes on top of the flavors. Toppings are never stock-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    Sprinkles,
    Candies,
    HotFudge,
    GummyBears,
}

impl Topping {
    pub const ALL: [Topping; 4] = [
        Topping::Sprinkles,
        Topping::Candies,
        Topping::HotFudge,
        Topping::GummyBears,
    ];
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topping::Sprinkles => write!(f, "sprinkles"),
            Topping::Candies => write!(f, "candies"),
            Topping::HotFudge => write!(f, "hot_fudge"),
            Topping::GummyBears => write!(f, "gummy_bears"),
        }
    }
}

impl FromStr for Topping {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sprinkles" => Ok(Topping::Sprinkles),
            "candies" => Ok(Topping::Candies),
            "hotfudge" => Ok(Topping::HotFudge),
            "gummybears" => Ok(Topping::GummyBears),
            _ => Err(SelectionError::unknown("topping", s)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portion_capacity_matches_discriminant() {
        assert_eq!(PortionSize::Small.capacity(), 1);
        assert_eq!(PortionSize::Medium.capacity(), 2);
        assert_eq!(PortionSize::Large.capacity(), 3);
    }

    #[test]
    fn test_only_chocolate_is_not_vegan() {
        assert!(!Flavor::Chocolate.is_vegan());
        assert!(Flavor::Vanilla.is_vegan());
        assert!(Flavor::Strawberry.is_vegan());
    }

    #[test]
    fn test_topping_parsing_accepts_any_spelling() {
        assert_eq!("hot_fudge".parse::<Topping>().unwrap(), Topping::HotFudge);
        assert_eq!("hot-fudge".parse::<Topping>().unwrap(), Topping::HotFudge);
        assert_eq!("HotFudge".parse::<Topping>().unwrap(), Topping::HotFudge);
        assert_eq!("GUMMY_BEARS".parse::<Topping>().unwrap(), Topping::GummyBears);
        assert!("caramel".parse::<Topping>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for flavor in Flavor::ALL {
            assert_eq!(flavor.to_string().parse::<Flavor>().unwrap(), flavor);
        }
        for topping in Topping::ALL {
            assert_eq!(topping.to_string().parse::<Topping>().unwrap(), topping);
        }
        for size in PortionSize::ALL {
            assert_eq!(size.to_string().parse::<PortionSize>().unwrap(), size);
        }
        for cone in ConeType::ALL {
            assert_eq!(cone.to_string().parse::<ConeType>().unwrap(), cone);
        }
    }

    #[test]
    fn test_unknown_selection_names_the_kind() {
        let err = "waffle".parse::<ConeType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown cone type: 'waffle'");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Topping::GummyBears).unwrap();
        assert_eq!(json, "\"gummy_bears\"");
        let size: PortionSize = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(size, PortionSize::Medium);
    }
}
