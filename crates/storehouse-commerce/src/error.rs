//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog and warehouse operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A required value was missing or empty.
    #[error("Required value missing: {0}")]
    EmptyValue(&'static str),

    /// A value failed its format or range check.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        field: &'static str,
        value: String,
    },

    /// Stock amount is not a positive quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Store not found.
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category already exists.
    #[error("Category already exists: {0}")]
    CategoryAlreadyExists(String),

    /// Store already exists.
    #[error("Store already exists: {0}")]
    StoreAlreadyExists(String),

    /// Product already has a placement in the store.
    #[error("Product {serial} is already stocked in store {store}")]
    ProductAlreadyStocked { serial: String, store: String },
}

impl CatalogError {
    /// Check if this error reports an absent entity.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::CategoryNotFound(_)
                | CatalogError::StoreNotFound(_)
                | CatalogError::ProductNotFound(_)
        )
    }

    /// Check if this error reports a duplicate key.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            CatalogError::CategoryAlreadyExists(_)
                | CatalogError::StoreAlreadyExists(_)
                | CatalogError::ProductAlreadyStocked { .. }
        )
    }
}

impl CatalogError {
    pub(crate) fn invalid_value(field: &'static str, value: impl ToString) -> Self {
        CatalogError::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}
