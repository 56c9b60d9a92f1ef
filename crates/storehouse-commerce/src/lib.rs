//! Retail catalog domain types and warehouse registry for StoreHouse.
//!
//! This crate provides an in-memory model of a small retail operation:
//!
//! - **Catalog**: validated product values (generic, laptop, camera,
//!   smartphone, tablet), categories, and stores with coordinates
//! - **Warehouse**: the [`StoreHouse`](warehouse::StoreHouse) registry that
//!   files products into stores under categories with stock counts, plus a
//!   process-wide instance behind [`warehouse::registry::get_or_create`]
//!
//! # Example
//!
//! ```rust,ignore
//! use storehouse_commerce::prelude::*;
//!
//! let mut warehouse = StoreHouse::new("Central")?;
//! warehouse.add_category(Category::new("Peripherals", None)?)?;
//!
//! let laptop = Product::new(
//!     "SN-1001",
//!     "Aero 15",
//!     1299.0,
//!     ProductSpecs::Laptop(LaptopSpecs::new("i7", "16GB", DriveKind::Sdd, "512GB")?),
//! )?;
//! warehouse.add_product_with_categories(laptop, vec!["Peripherals".into()])?;
//! ```

pub mod catalog;
pub mod error;
pub mod warehouse;

pub use error::CatalogError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;

    // Catalog
    pub use crate::catalog::{
        CameraKind, CameraSpecs, Category, Coords, DriveKind, LaptopSpecs, MobileSpecs, Product,
        ProductKind, ProductSpecs, Store,
    };

    // Warehouse
    pub use crate::warehouse::{registry, Placement, StockedProduct, StoreEntry, StoreHouse};
}
