//! # Order Files
//!
//! Reads an [`Order`] from disk. Files ending in `.json` are parsed as JSON,
//! everything else as TOML:
//!
//! ```toml
//! is_vegan = true
//! cone_type = "biscuit"
//! portion_size = "large"
//! flavors = ["vanilla", "strawberry"]
//! toppings = ["gummy_bears"]
//! ```
//!
//! `is_vegan` and `toppings` may be omitted.

use std::path::Path;

use tracing::debug;

use scoop_core::Order;

use crate::error::{CounterError, CounterResult};

pub fn load_order(path: &Path) -> CounterResult<Order> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CounterError::OrderLoadFailed(format!("{}: {}", path.display(), e)))?;

    let order = if is_json(path) {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents).map_err(|e| CounterError::OrderLoadFailed(e.to_string()))?
    };

    debug!(?path, "Order loaded");
    Ok(order)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
