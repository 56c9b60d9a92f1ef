//! Category type for product organization.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The title doubles as the category's unique key within a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    title: String,
    description: Option<String>,
}

impl Category {
    /// Title of the fallback category every warehouse is seeded with.
    pub const DEFAULT_TITLE: &'static str = "Default";

    /// Create a new category.
    ///
    /// Fails if the title is empty.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, CatalogError> {
        let title = title.into();
        if title.is_empty() {
            return Err(CatalogError::EmptyValue("title"));
        }
        Ok(Self { title, description })
    }

    /// Get the category title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the category title. Empty titles are rejected.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), CatalogError> {
        let title = title.into();
        if title.is_empty() {
            return Err(CatalogError::EmptyValue("title"));
        }
        self.title = title;
        Ok(())
    }

    /// Get the category description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the category description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Check if this is the fallback category.
    pub fn is_default(&self) -> bool {
        self.title == Self::DEFAULT_TITLE
    }
}

impl Default for Category {
    /// The fallback category used to receive orphaned placements.
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            description: None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{}: {}", self.title, desc),
            None => write!(f, "{}", self.title),
        }
    }
}
