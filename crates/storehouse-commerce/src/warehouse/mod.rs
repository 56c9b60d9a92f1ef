//! Warehouse module.
//!
//! Contains the [`StoreHouse`] registry and the process-wide instance.

pub mod registry;
mod storehouse;

pub use storehouse::{Placement, StockedProduct, StoreEntry, StoreHouse};
