//! Product value types.
//!
//! Products form a closed set of variants: a generic product plus laptops,
//! cameras, smartphones, and tablets, each with validated type-specific
//! attributes. The variant payload lives in [`ProductSpecs`]; the bare
//! discriminant [`ProductKind`] is what listings filter on.

use crate::error::CatalogError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Capacity strings such as `16GB` or `1TB`.
fn capacity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(GB|TB)$").unwrap())
}

/// Screen resolutions such as `1920x1080`.
fn resolution_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+x\d+$").unwrap())
}

/// Product kind classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    /// Product with no type-specific attributes.
    #[default]
    Generic,
    Laptop,
    Camera,
    Smartphone,
    Tablet,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Generic => "generic",
            ProductKind::Laptop => "laptop",
            ProductKind::Camera => "camera",
            ProductKind::Smartphone => "smartphone",
            ProductKind::Tablet => "tablet",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "generic" => Some(ProductKind::Generic),
            "laptop" => Some(ProductKind::Laptop),
            "camera" => Some(ProductKind::Camera),
            "smartphone" => Some(ProductKind::Smartphone),
            "tablet" => Some(ProductKind::Tablet),
            _ => None,
        }
    }
}

/// Laptop drive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DriveKind {
    Hdd,
    Sdd,
    /// No drive information recorded.
    #[default]
    Unspecified,
}

impl DriveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveKind::Hdd => "HDD",
            DriveKind::Sdd => "SDD",
            DriveKind::Unspecified => "-",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "HDD" => Some(DriveKind::Hdd),
            "SDD" => Some(DriveKind::Sdd),
            "-" => Some(DriveKind::Unspecified),
            _ => None,
        }
    }
}

/// Camera body kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CameraKind {
    Digital,
    Reflex,
    /// No body information recorded.
    #[default]
    Unspecified,
}

impl CameraKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraKind::Digital => "Digital",
            CameraKind::Reflex => "Reflex",
            CameraKind::Unspecified => "-",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Digital" => Some(CameraKind::Digital),
            "Reflex" => Some(CameraKind::Reflex),
            "-" => Some(CameraKind::Unspecified),
            _ => None,
        }
    }
}

/// Laptop-specific attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaptopSpecs {
    processor: String,
    memory: String,
    drive: DriveKind,
    disk_size: String,
}

impl LaptopSpecs {
    /// Create laptop specs.
    ///
    /// Memory and disk size must be capacity strings (`8GB`, `1TB`).
    pub fn new(
        processor: impl Into<String>,
        memory: impl Into<String>,
        drive: DriveKind,
        disk_size: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let processor = processor.into();
        if processor.is_empty() {
            return Err(CatalogError::EmptyValue("processor"));
        }
        let memory = memory.into();
        if !capacity_re().is_match(&memory) {
            return Err(CatalogError::invalid_value("memory", memory));
        }
        let disk_size = disk_size.into();
        if !capacity_re().is_match(&disk_size) {
            return Err(CatalogError::invalid_value("disk_size", disk_size));
        }
        Ok(Self {
            processor,
            memory,
            drive,
            disk_size,
        })
    }

    pub fn processor(&self) -> &str {
        &self.processor
    }

    pub fn memory(&self) -> &str {
        &self.memory
    }

    pub fn drive(&self) -> DriveKind {
        self.drive
    }

    pub fn disk_size(&self) -> &str {
        &self.disk_size
    }
}

/// Camera-specific attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraSpecs {
    kind: CameraKind,
    /// Sensor resolution in megapixels.
    resolution: f64,
    /// Screen size in inches.
    size: f64,
}

impl CameraSpecs {
    /// Create camera specs. Resolution and size must be non-negative.
    pub fn new(kind: CameraKind, resolution: f64, size: f64) -> Result<Self, CatalogError> {
        if !resolution.is_finite() || resolution < 0.0 {
            return Err(CatalogError::invalid_value("resolution", resolution));
        }
        if !size.is_finite() || size < 0.0 {
            return Err(CatalogError::invalid_value("size", size));
        }
        Ok(Self {
            kind,
            resolution,
            size,
        })
    }

    pub fn kind(&self) -> CameraKind {
        self.kind
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn size(&self) -> f64 {
        self.size
    }
}

/// Attributes shared by smartphones and tablets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MobileSpecs {
    memory: String,
    storage: String,
    /// Screen resolution, e.g. `1920x1080`.
    resolution: String,
    /// Screen size in inches.
    screen_size: f64,
}

impl MobileSpecs {
    /// Create mobile specs.
    ///
    /// Memory and storage must be capacity strings, resolution must be of
    /// the form `WIDTHxHEIGHT`, and screen size must be non-negative.
    pub fn new(
        memory: impl Into<String>,
        storage: impl Into<String>,
        resolution: impl Into<String>,
        screen_size: f64,
    ) -> Result<Self, CatalogError> {
        let memory = memory.into();
        if !capacity_re().is_match(&memory) {
            return Err(CatalogError::invalid_value("memory", memory));
        }
        let storage = storage.into();
        if !capacity_re().is_match(&storage) {
            return Err(CatalogError::invalid_value("storage", storage));
        }
        let resolution = resolution.into();
        if !resolution_re().is_match(&resolution) {
            return Err(CatalogError::invalid_value("resolution", resolution));
        }
        if !screen_size.is_finite() || screen_size < 0.0 {
            return Err(CatalogError::invalid_value("screen_size", screen_size));
        }
        Ok(Self {
            memory,
            storage,
            resolution,
            screen_size,
        })
    }

    pub fn memory(&self) -> &str {
        &self.memory
    }

    pub fn storage(&self) -> &str {
        &self.storage
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn screen_size(&self) -> f64 {
        self.screen_size
    }
}

/// Type-specific payload of a product.
///
/// The set of variants is closed: constructing a product requires picking
/// one, so there is no "abstract" product state to guard against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ProductSpecs {
    Generic,
    Laptop(LaptopSpecs),
    Camera(CameraSpecs),
    Smartphone(MobileSpecs),
    Tablet(MobileSpecs),
}

impl ProductSpecs {
    /// The discriminant of this payload.
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductSpecs::Generic => ProductKind::Generic,
            ProductSpecs::Laptop(_) => ProductKind::Laptop,
            ProductSpecs::Camera(_) => ProductKind::Camera,
            ProductSpecs::Smartphone(_) => ProductKind::Smartphone,
            ProductSpecs::Tablet(_) => ProductKind::Tablet,
        }
    }
}

/// A product in the catalog.
///
/// The serial number doubles as the product's unique key within a store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    serial_number: String,
    name: String,
    description: Option<String>,
    price: f64,
    /// Tax rate as a percentage of the price.
    tax_rate: f64,
    images: Vec<String>,
    specs: ProductSpecs,
}

impl Product {
    /// Default tax rate (Spanish IVA), in percent.
    pub const DEFAULT_TAX_RATE: f64 = 21.0;

    /// Create a new product with the default tax rate and no images.
    ///
    /// Fails on an empty serial number or name, or a non-positive price.
    pub fn new(
        serial_number: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        specs: ProductSpecs,
    ) -> Result<Self, CatalogError> {
        let serial_number = serial_number.into();
        if serial_number.is_empty() {
            return Err(CatalogError::EmptyValue("serial_number"));
        }
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyValue("name"));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(CatalogError::invalid_value("price", price));
        }
        Ok(Self {
            serial_number,
            name,
            description: None,
            price,
            tax_rate: Self::DEFAULT_TAX_RATE,
            images: Vec::new(),
            specs,
        })
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image list.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Set the tax rate. Negative or non-finite rates are rejected.
    pub fn with_tax_rate(mut self, tax_rate: f64) -> Result<Self, CatalogError> {
        self.set_tax_rate(tax_rate)?;
        Ok(self)
    }

    /// Get the serial number.
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Get the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the product name. Empty names are rejected.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyValue("name"));
        }
        self.name = name;
        Ok(())
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the gross price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Set the gross price. Must be a positive finite number.
    pub fn set_price(&mut self, price: f64) -> Result<(), CatalogError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(CatalogError::invalid_value("price", price));
        }
        self.price = price;
        Ok(())
    }

    /// Get the tax rate percentage.
    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Set the tax rate percentage. Must be a non-negative finite number.
    pub fn set_tax_rate(&mut self, tax_rate: f64) -> Result<(), CatalogError> {
        if !tax_rate.is_finite() || tax_rate < 0.0 {
            return Err(CatalogError::invalid_value("tax_rate", tax_rate));
        }
        self.tax_rate = tax_rate;
        Ok(())
    }

    /// Get the image list.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Get the type-specific payload.
    pub fn specs(&self) -> &ProductSpecs {
        &self.specs
    }

    /// Get the product kind.
    pub fn kind(&self) -> ProductKind {
        self.specs.kind()
    }

    /// Tax portion of the price.
    pub fn tax_amount(&self) -> f64 {
        self.price * self.tax_rate / 100.0
    }

    /// Price net of taxes.
    pub fn price_without_taxes(&self) -> f64 {
        self.price - self.tax_amount()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Serial: {} Name: {} Price: {:.2}\u{20ac} Tax: {}%",
            self.serial_number, self.name, self.price, self.tax_rate
        )?;
        match &self.specs {
            ProductSpecs::Generic => Ok(()),
            ProductSpecs::Laptop(s) => write!(
                f,
                " Processor: {} Memory: {} Drive: {} Disk: {}",
                s.processor,
                s.memory,
                s.drive.as_str(),
                s.disk_size
            ),
            ProductSpecs::Camera(s) => write!(
                f,
                " Kind: {} Resolution: {}MP Size: {}''",
                s.kind.as_str(),
                s.resolution,
                s.size
            ),
            ProductSpecs::Smartphone(s) | ProductSpecs::Tablet(s) => write!(
                f,
                " Memory: {} Storage: {} Resolution: {} Size: {}''",
                s.memory, s.storage, s.resolution, s.screen_size
            ),
        }
    }
}
