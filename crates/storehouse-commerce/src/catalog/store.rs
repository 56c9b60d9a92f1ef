//! Store and coordinate types.

use crate::error::CatalogError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 \-]*$").unwrap())
}

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coords {
    latitude: f64,
    longitude: f64,
}

impl Coords {
    /// Create a new coordinate pair.
    ///
    /// Both components must be finite numbers.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CatalogError> {
        if !latitude.is_finite() {
            return Err(CatalogError::invalid_value("latitude", latitude));
        }
        if !longitude.is_finite() {
            return Err(CatalogError::invalid_value("longitude", longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude component.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude component.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A retail store.
///
/// The tax identifier doubles as the store's unique key within a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    tax_id: String,
    name: String,
    address: String,
    phone: String,
    coords: Coords,
}

impl Store {
    /// Tax id reserved for the fallback store every warehouse is seeded with.
    pub const DEFAULT_TAX_ID: &'static str = "XXXX";

    /// Create a new store.
    ///
    /// Fails on an empty tax id or name, or a malformed phone number
    /// (digits, spaces, dashes, and a leading `+` are accepted).
    pub fn new(
        tax_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        coords: Coords,
    ) -> Result<Self, CatalogError> {
        let tax_id = tax_id.into();
        if tax_id.is_empty() {
            return Err(CatalogError::EmptyValue("tax_id"));
        }
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyValue("name"));
        }
        let phone = phone.into();
        if !phone_re().is_match(&phone) {
            return Err(CatalogError::invalid_value("phone", phone));
        }
        Ok(Self {
            tax_id,
            name,
            address: address.into(),
            phone,
            coords,
        })
    }

    /// Get the tax identifier.
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Get the store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the store name. Empty names are rejected.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyValue("name"));
        }
        self.name = name;
        Ok(())
    }

    /// Get the street address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Get the store coordinates.
    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// Check if this is the fallback store.
    pub fn is_default(&self) -> bool {
        self.tax_id == Self::DEFAULT_TAX_ID
    }
}

impl Default for Store {
    /// The fallback store used to receive placements from removed stores.
    fn default() -> Self {
        Self {
            tax_id: Self::DEFAULT_TAX_ID.to_string(),
            name: "Default".to_string(),
            address: "Default".to_string(),
            phone: "0".to_string(),
            coords: Coords {
                latitude: 1.0,
                longitude: 1.0,
            },
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {} {}",
            self.name, self.tax_id, self.address, self.phone, self.coords
        )
    }
}
