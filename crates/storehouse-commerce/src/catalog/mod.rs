//! Catalog value types.
//!
//! Contains products, categories, stores, and coordinates.

mod category;
mod product;
mod store;

pub use category::Category;
pub use product::{
    CameraKind, CameraSpecs, DriveKind, LaptopSpecs, MobileSpecs, Product, ProductKind,
    ProductSpecs,
};
pub use store::{Coords, Store};
