//! Process-wide warehouse instance.
//!
//! The warehouse is shared state for the whole session: the first call to
//! [`get_or_create`] seeds it, every later call returns the same instance
//! and ignores its argument. The `Mutex` exists to satisfy shared-static
//! rules; the model itself is single-threaded and synchronous.

use crate::error::CatalogError;
use crate::warehouse::StoreHouse;
use std::sync::{Mutex, OnceLock};

static STORE_HOUSE: OnceLock<Mutex<StoreHouse>> = OnceLock::new();

/// Get the process-wide warehouse, creating it on first use.
///
/// The first call must supply a non-empty name; subsequent calls return the
/// existing instance regardless of the name given.
pub fn get_or_create(name: &str) -> Result<&'static Mutex<StoreHouse>, CatalogError> {
    if let Some(existing) = STORE_HOUSE.get() {
        return Ok(existing);
    }
    let warehouse = StoreHouse::new(name)?;
    tracing::info!(name, "seeding process-wide warehouse");
    Ok(STORE_HOUSE.get_or_init(|| Mutex::new(warehouse)))
}

/// Get the process-wide warehouse if it has been created.
pub fn try_get() -> Option<&'static Mutex<StoreHouse>> {
    STORE_HOUSE.get()
}
