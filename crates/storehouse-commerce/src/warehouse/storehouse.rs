//! The warehouse registry.
//!
//! A [`StoreHouse`] owns one list of categories and one list of store
//! entries; each entry owns the placements of products filed in that store.
//! Lookups are linear scans over the identifying field (category title,
//! store tax id, product serial number), which is O(n) but fine for the
//! small cardinalities this model is built for.

use crate::catalog::{Category, Product, ProductKind, Store};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// A product filed in a store: the product itself, the titles of the
/// categories it is filed under, and its stock count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    product: Product,
    categories: Vec<String>,
    stock: i64,
}

impl Placement {
    fn new(product: Product, categories: Vec<String>) -> Self {
        Self {
            product,
            categories,
            stock: 1,
        }
    }

    /// Get the placed product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Get the category titles this placement is filed under.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Get the stock count.
    pub fn stock(&self) -> i64 {
        self.stock
    }
}

/// A store together with its placements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreEntry {
    store: Store,
    placements: Vec<Placement>,
}

impl StoreEntry {
    fn new(store: Store) -> Self {
        Self {
            store,
            placements: Vec::new(),
        }
    }

    /// Get the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get the placements filed in this store.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    fn placement_position(&self, product: &Product) -> Option<usize> {
        self.placements
            .iter()
            .position(|p| p.product.serial_number() == product.serial_number())
    }
}

/// A listed product with its stock count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockedProduct {
    pub product: Product,
    pub stock: i64,
}

/// The warehouse registry: categories, stores, and placements.
///
/// A fresh warehouse is seeded with one default category and one default
/// store (tax id `XXXX`); they act as the fallback bucket for placements
/// orphaned by category or store removal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreHouse {
    name: String,
    categories: Vec<Category>,
    stores: Vec<StoreEntry>,
}

impl StoreHouse {
    /// Create a new warehouse seeded with the default category and store.
    ///
    /// Fails if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyValue("name"));
        }
        Ok(Self {
            name,
            categories: vec![Category::default()],
            stores: vec![StoreEntry::new(Store::default())],
        })
    }

    /// Get the warehouse name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the warehouse name. Empty names are rejected.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyValue("name"));
        }
        self.name = name;
        Ok(())
    }

    /// Iterate over all categories in insertion order.
    ///
    /// Each call yields a fresh iterator over the live list.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Iterate over all store entries in insertion order.
    ///
    /// Each call yields a fresh iterator over the live list.
    pub fn stores(&self) -> impl Iterator<Item = &StoreEntry> {
        self.stores.iter()
    }

    /// Position of a category, scanning by title. O(n).
    pub fn category_position(&self, category: &Category) -> Option<usize> {
        self.category_position_by_title(category.title())
    }

    /// Position of a category with the given title. O(n).
    pub fn category_position_by_title(&self, title: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.title() == title)
    }

    /// Position of a store entry, scanning by tax id. O(n).
    pub fn store_position(&self, store: &Store) -> Option<usize> {
        self.stores
            .iter()
            .position(|entry| entry.store.tax_id() == store.tax_id())
    }

    /// Position of a product's placement within a store, scanning by serial
    /// number. O(n).
    ///
    /// The store defaults to the default store when `None`. An unregistered
    /// store is an error; an absent product is `Ok(None)`.
    pub fn placement_position(
        &self,
        product: &Product,
        store: Option<&Store>,
    ) -> Result<Option<usize>, CatalogError> {
        let index = match store {
            Some(store) => self
                .store_position(store)
                .ok_or_else(|| CatalogError::StoreNotFound(store.tax_id().to_string()))?,
            None => 0,
        };
        Ok(self.stores[index].placement_position(product))
    }

    /// Add a new category.
    ///
    /// Fails if a category with the same title already exists. Returns the
    /// new category count.
    pub fn add_category(&mut self, category: Category) -> Result<usize, CatalogError> {
        if self.category_position(&category).is_some() {
            return Err(CatalogError::CategoryAlreadyExists(
                category.title().to_string(),
            ));
        }
        tracing::debug!(title = category.title(), "adding category");
        self.categories.push(category);
        Ok(self.categories.len())
    }

    /// Remove a category.
    ///
    /// Every placement in every store whose category set is exactly the
    /// removed category is reassigned to a freshly constructed default
    /// category. Returns the new category count.
    pub fn remove_category(&mut self, category: &Category) -> Result<usize, CatalogError> {
        let position = self
            .category_position(category)
            .ok_or_else(|| CatalogError::CategoryNotFound(category.title().to_string()))?;
        for entry in &mut self.stores {
            for placement in &mut entry.placements {
                if placement.categories.len() == 1 && placement.categories[0] == category.title() {
                    placement.categories = vec![Category::default().title().to_string()];
                }
            }
        }
        tracing::debug!(title = category.title(), "removing category");
        self.categories.remove(position);
        Ok(self.categories.len())
    }

    /// Add a product to the default store under the default category.
    ///
    /// See [`StoreHouse::add_product_with_categories`].
    pub fn add_product(&mut self, product: Product) -> Result<usize, CatalogError> {
        self.add_product_with_categories(product, vec![Category::DEFAULT_TITLE.to_string()])
    }

    /// Add a product to the default store, filed under the given category
    /// titles, with an initial stock of 1.
    ///
    /// Fails if the category list is empty, if any title does not name an
    /// existing category, or if the product is already placed in the default
    /// store. Returns the default store's new placement count.
    pub fn add_product_with_categories(
        &mut self,
        product: Product,
        categories: Vec<String>,
    ) -> Result<usize, CatalogError> {
        self.check_categories(&categories)?;
        if self.stores[0].placement_position(&product).is_some() {
            return Err(CatalogError::ProductAlreadyStocked {
                serial: product.serial_number().to_string(),
                store: self.stores[0].store.tax_id().to_string(),
            });
        }
        tracing::debug!(serial = product.serial_number(), "adding product");
        self.stores[0].placements.push(Placement::new(product, categories));
        Ok(self.stores[0].placements.len())
    }

    /// Remove a product's placement from the default store.
    ///
    /// Returns the default store's remaining placement count.
    pub fn remove_product(&mut self, product: &Product) -> Result<usize, CatalogError> {
        let position = self.stores[0]
            .placement_position(product)
            .ok_or_else(|| CatalogError::ProductNotFound(product.serial_number().to_string()))?;
        self.stores[0].placements.remove(position);
        Ok(self.stores[0].placements.len())
    }

    /// Add a product to a store under the default category.
    ///
    /// See [`StoreHouse::add_product_in_shop_with_categories`].
    pub fn add_product_in_shop(
        &mut self,
        product: Product,
        store: Store,
    ) -> Result<usize, CatalogError> {
        self.add_product_in_shop_with_categories(
            product,
            store,
            vec![Category::DEFAULT_TITLE.to_string()],
        )
    }

    /// Add a product to a store, filed under the given category titles, with
    /// an initial stock of 1.
    ///
    /// A new store entry is always appended for `store`, even when an entry
    /// with the same tax id already exists; the registry then holds two
    /// entries for that tax id with disjoint placement lists, and position
    /// scans resolve to the first. The duplicate-product check consults that
    /// first entry. Returns the new store-entry count.
    pub fn add_product_in_shop_with_categories(
        &mut self,
        product: Product,
        store: Store,
        categories: Vec<String>,
    ) -> Result<usize, CatalogError> {
        if let Some(index) = self.store_position(&store) {
            if self.stores[index].placement_position(&product).is_some() {
                return Err(CatalogError::ProductAlreadyStocked {
                    serial: product.serial_number().to_string(),
                    store: store.tax_id().to_string(),
                });
            }
        }
        self.check_categories(&categories)?;
        tracing::debug!(
            serial = product.serial_number(),
            store = store.tax_id(),
            "adding product to store"
        );
        let mut entry = StoreEntry::new(store);
        entry.placements.push(Placement::new(product, categories));
        self.stores.push(entry);
        Ok(self.stores.len())
    }

    /// Remove a product's placement from a store.
    ///
    /// Returns that store's remaining placement count.
    pub fn remove_product_in_shop(
        &mut self,
        product: &Product,
        store: &Store,
    ) -> Result<usize, CatalogError> {
        let index = self
            .store_position(store)
            .ok_or_else(|| CatalogError::StoreNotFound(store.tax_id().to_string()))?;
        let position = self.stores[index]
            .placement_position(product)
            .ok_or_else(|| CatalogError::ProductNotFound(product.serial_number().to_string()))?;
        self.stores[index].placements.remove(position);
        Ok(self.stores[index].placements.len())
    }

    /// Add stock to a product's placement in a store.
    ///
    /// The placement must exist and the amount must be at least 1. Returns
    /// the new stock level.
    pub fn add_stock(
        &mut self,
        product: &Product,
        store: &Store,
        amount: i64,
    ) -> Result<i64, CatalogError> {
        let index = self
            .store_position(store)
            .ok_or_else(|| CatalogError::StoreNotFound(store.tax_id().to_string()))?;
        let position = self.stores[index]
            .placement_position(product)
            .ok_or_else(|| CatalogError::ProductNotFound(product.serial_number().to_string()))?;
        if amount < 1 {
            return Err(CatalogError::InvalidQuantity(amount));
        }
        let placement = &mut self.stores[index].placements[position];
        placement.stock += amount;
        Ok(placement.stock)
    }

    /// List every placement across all stores filed under a category.
    ///
    /// The sequence is a snapshot taken at call time; calling again yields a
    /// fresh sequence over current state. The kind filter is accepted for
    /// parity with [`StoreHouse::products_by_store`] but is not applied to
    /// category listings.
    pub fn products_by_category(
        &self,
        category: &Category,
        _kind: Option<ProductKind>,
    ) -> Result<impl Iterator<Item = StockedProduct>, CatalogError> {
        if self.category_position(category).is_none() {
            return Err(CatalogError::CategoryNotFound(category.title().to_string()));
        }
        let title = category.title();
        let matches: Vec<StockedProduct> = self
            .stores
            .iter()
            .flat_map(|entry| entry.placements.iter())
            .filter(|placement| placement.categories.iter().any(|c| c == title))
            .map(|placement| StockedProduct {
                product: placement.product.clone(),
                stock: placement.stock,
            })
            .collect();
        Ok(matches.into_iter())
    }

    /// Add a new store with an empty placement list.
    ///
    /// Fails if a store with the same tax id already exists. Returns the new
    /// store count.
    pub fn add_shop(&mut self, store: Store) -> Result<usize, CatalogError> {
        if self.store_position(&store).is_some() {
            return Err(CatalogError::StoreAlreadyExists(store.tax_id().to_string()));
        }
        tracing::debug!(store = store.tax_id(), "adding store");
        self.stores.push(StoreEntry::new(store));
        Ok(self.stores.len())
    }

    /// Remove a store.
    ///
    /// Placements of every entry with the matching tax id are appended onto
    /// the default store's placement list (appended, not merged), then the
    /// first matching entry is removed. Returns the new store count.
    pub fn remove_shop(&mut self, store: &Store) -> Result<usize, CatalogError> {
        let position = self
            .store_position(store)
            .ok_or_else(|| CatalogError::StoreNotFound(store.tax_id().to_string()))?;
        let orphaned: Vec<Placement> = self
            .stores
            .iter()
            .filter(|entry| entry.store.tax_id() == store.tax_id())
            .flat_map(|entry| entry.placements.iter().cloned())
            .collect();
        tracing::debug!(
            store = store.tax_id(),
            orphaned = orphaned.len(),
            "removing store"
        );
        self.stores[0].placements.extend(orphaned);
        self.stores.remove(position);
        Ok(self.stores.len())
    }

    /// List a store's placements, filtered by product kind.
    ///
    /// The sequence is a snapshot taken at call time; calling again yields a
    /// fresh sequence over current state. A `None` kind matches any product.
    pub fn products_by_store(
        &self,
        store: &Store,
        kind: Option<ProductKind>,
    ) -> Result<impl Iterator<Item = StockedProduct>, CatalogError> {
        let index = self
            .store_position(store)
            .ok_or_else(|| CatalogError::StoreNotFound(store.tax_id().to_string()))?;
        let matches: Vec<StockedProduct> = self.stores[index]
            .placements
            .iter()
            .filter(|placement| kind.map_or(true, |k| placement.product.kind() == k))
            .map(|placement| StockedProduct {
                product: placement.product.clone(),
                stock: placement.stock,
            })
            .collect();
        Ok(matches.into_iter())
    }

    fn check_categories(&self, categories: &[String]) -> Result<(), CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::EmptyValue("categories"));
        }
        for title in categories {
            if self.category_position_by_title(title).is_none() {
                return Err(CatalogError::CategoryNotFound(title.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Coords, ProductSpecs};

    fn store(tax_id: &str) -> Store {
        Store::new(
            tax_id,
            "Intel",
            "Plaza mayor, 1, Madrid",
            "685723102",
            Coords::new(143.0, 1542.0).unwrap(),
        )
        .unwrap()
    }

    fn product(serial: &str) -> Product {
        Product::new(serial, "I5 10400F", 125.0, ProductSpecs::Generic).unwrap()
    }

    #[test]
    fn test_seeding() {
        let warehouse = StoreHouse::new("Almacen").unwrap();
        assert_eq!(warehouse.categories().count(), 1);
        assert_eq!(warehouse.stores().count(), 1);
        assert!(warehouse.categories().next().unwrap().is_default());
        assert!(warehouse.stores().next().unwrap().store().is_default());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(StoreHouse::new(""), Err(CatalogError::EmptyValue("name")));
    }

    #[test]
    fn test_category_uniqueness() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let count = warehouse
            .add_category(Category::new("Pilas", None).unwrap())
            .unwrap();
        assert_eq!(count, 2);

        let err = warehouse
            .add_category(Category::new("Pilas", Some("duplicate".into())).unwrap())
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(warehouse.categories().count(), 2);
    }

    #[test]
    fn test_remove_category_reassigns_orphans() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let pilas = Category::new("Pilas", None).unwrap();
        warehouse.add_category(pilas.clone()).unwrap();
        warehouse
            .add_product_with_categories(product("SN-1"), vec!["Pilas".into()])
            .unwrap();

        let count = warehouse.remove_category(&pilas).unwrap();
        assert_eq!(count, 1);

        let entry = warehouse.stores().next().unwrap();
        let placement = &entry.placements()[0];
        assert_eq!(placement.categories(), [Category::DEFAULT_TITLE]);
    }

    #[test]
    fn test_remove_category_keeps_multi_category_placements() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let pilas = Category::new("Pilas", None).unwrap();
        warehouse.add_category(pilas.clone()).unwrap();
        warehouse
            .add_product_with_categories(
                product("SN-1"),
                vec!["Pilas".into(), Category::DEFAULT_TITLE.into()],
            )
            .unwrap();

        warehouse.remove_category(&pilas).unwrap();
        let entry = warehouse.stores().next().unwrap();
        // Still filed under both titles; only single-category placements are
        // reassigned.
        assert_eq!(
            entry.placements()[0].categories(),
            ["Pilas", Category::DEFAULT_TITLE]
        );
    }

    #[test]
    fn test_remove_missing_category() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let err = warehouse
            .remove_category(&Category::new("Ghost", None).unwrap())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_product_defaults() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let count = warehouse.add_product(product("SN-1")).unwrap();
        assert_eq!(count, 1);

        let entry = warehouse.stores().next().unwrap();
        assert_eq!(entry.placements()[0].stock(), 1);
        assert_eq!(entry.placements()[0].categories(), [Category::DEFAULT_TITLE]);
    }

    #[test]
    fn test_add_product_unknown_category() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let err = warehouse
            .add_product_with_categories(product("SN-1"), vec!["Ghost".into()])
            .unwrap_err();
        assert_eq!(err, CatalogError::CategoryNotFound("Ghost".into()));
    }

    #[test]
    fn test_add_product_empty_categories() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let err = warehouse
            .add_product_with_categories(product("SN-1"), Vec::new())
            .unwrap_err();
        assert_eq!(err, CatalogError::EmptyValue("categories"));
    }

    #[test]
    fn test_placement_uniqueness_per_store() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        warehouse.add_product(product("SN-1")).unwrap();
        let err = warehouse.add_product(product("SN-1")).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_remove_product() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        warehouse.add_product(product("SN-1")).unwrap();
        warehouse.add_product(product("SN-2")).unwrap();

        assert_eq!(warehouse.remove_product(&product("SN-1")).unwrap(), 1);
        let err = warehouse.remove_product(&product("SN-1")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_product_in_shop_appends_entry() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let count = warehouse
            .add_product_in_shop(product("SN-1"), store("12332"))
            .unwrap();
        assert_eq!(count, 2);

        // A second product for the same tax id appends another entry; the
        // duplicate check only consults the first matching one.
        let count = warehouse
            .add_product_in_shop(product("SN-2"), store("12332"))
            .unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            warehouse
                .stores()
                .filter(|e| e.store().tax_id() == "12332")
                .count(),
            2
        );
    }

    #[test]
    fn test_add_product_in_shop_duplicate_product() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        warehouse
            .add_product_in_shop(product("SN-1"), store("12332"))
            .unwrap();
        let err = warehouse
            .add_product_in_shop(product("SN-1"), store("12332"))
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_stock_accumulation() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let shop = store("12332");
        warehouse
            .add_product_in_shop(product("SN-1"), shop.clone())
            .unwrap();

        assert_eq!(warehouse.add_stock(&product("SN-1"), &shop, 3).unwrap(), 4);
        assert_eq!(warehouse.add_stock(&product("SN-1"), &shop, 3).unwrap(), 7);
    }

    #[test]
    fn test_stock_rejects_non_positive_amounts() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let shop = store("12332");
        warehouse
            .add_product_in_shop(product("SN-1"), shop.clone())
            .unwrap();

        assert_eq!(
            warehouse.add_stock(&product("SN-1"), &shop, 0),
            Err(CatalogError::InvalidQuantity(0))
        );
        assert_eq!(
            warehouse.add_stock(&product("SN-1"), &shop, -2),
            Err(CatalogError::InvalidQuantity(-2))
        );
    }

    #[test]
    fn test_stock_requires_existing_placement() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let shop = store("12332");
        warehouse.add_shop(shop.clone()).unwrap();
        let err = warehouse.add_stock(&product("SN-1"), &shop, 1).unwrap_err();
        assert_eq!(err, CatalogError::ProductNotFound("SN-1".into()));
    }

    #[test]
    fn test_store_uniqueness() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        assert_eq!(warehouse.add_shop(store("12332")).unwrap(), 2);
        let err = warehouse.add_shop(store("12332")).unwrap_err();
        assert_eq!(err, CatalogError::StoreAlreadyExists("12332".into()));
    }

    #[test]
    fn test_remove_shop_transfers_placements() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let shop = store("12332");
        warehouse
            .add_product_in_shop(product("SN-1"), shop.clone())
            .unwrap();
        warehouse
            .add_product_in_shop(product("SN-2"), shop.clone())
            .unwrap();

        // Two entries for the same tax id exist; removal drains both into the
        // default store but only removes the first entry.
        let count = warehouse.remove_shop(&shop).unwrap();
        assert_eq!(count, 2);

        let default_entry = warehouse.stores().next().unwrap();
        assert_eq!(default_entry.placements().len(), 2);
    }

    #[test]
    fn test_remove_missing_shop() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let err = warehouse.remove_shop(&store("12332")).unwrap_err();
        assert_eq!(err, CatalogError::StoreNotFound("12332".into()));
    }

    #[test]
    fn test_position_sentinels() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        assert_eq!(warehouse.category_position_by_title("Ghost"), None);
        assert_eq!(warehouse.store_position(&store("12332")), None);

        // Absent product in a registered store is a sentinel, not an error.
        warehouse.add_shop(store("12332")).unwrap();
        assert_eq!(
            warehouse
                .placement_position(&product("SN-1"), Some(&store("12332")))
                .unwrap(),
            None
        );

        // Unregistered store is an error.
        let err = warehouse
            .placement_position(&product("SN-1"), Some(&store("99999")))
            .unwrap_err();
        assert_eq!(err, CatalogError::StoreNotFound("99999".into()));
    }

    #[test]
    fn test_products_by_category_spans_stores() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        let pilas = Category::new("Pilas", None).unwrap();
        warehouse.add_category(pilas.clone()).unwrap();
        warehouse
            .add_product_with_categories(product("SN-1"), vec!["Pilas".into()])
            .unwrap();
        warehouse
            .add_product_in_shop_with_categories(
                product("SN-2"),
                store("12332"),
                vec!["Pilas".into()],
            )
            .unwrap();
        warehouse.add_product(product("SN-3")).unwrap();

        let listed: Vec<_> = warehouse.products_by_category(&pilas, None).unwrap().collect();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|sp| sp.stock == 1));
    }

    #[test]
    fn test_products_by_category_ignores_kind_filter() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        warehouse.add_product(product("SN-1")).unwrap();

        let default = Category::default();
        let listed: Vec<_> = warehouse
            .products_by_category(&default, Some(ProductKind::Laptop))
            .unwrap()
            .collect();
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn test_products_by_store_honors_kind_filter() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        warehouse.add_product(product("SN-1")).unwrap();

        let laptop = Product::new(
            "SN-2",
            "Aero 15",
            1299.0,
            ProductSpecs::Laptop(
                crate::catalog::LaptopSpecs::new("i7", "16GB", crate::catalog::DriveKind::Sdd, "512GB")
                    .unwrap(),
            ),
        )
        .unwrap();
        warehouse.add_product(laptop).unwrap();

        let default = Store::default();
        let all: Vec<_> = warehouse.products_by_store(&default, None).unwrap().collect();
        assert_eq!(all.len(), 2);

        let laptops: Vec<_> = warehouse
            .products_by_store(&default, Some(ProductKind::Laptop))
            .unwrap()
            .collect();
        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].product.serial_number(), "SN-2");
    }

    #[test]
    fn test_listing_is_restartable() {
        let mut warehouse = StoreHouse::new("Almacen").unwrap();
        warehouse.add_product(product("SN-1")).unwrap();

        let default = Category::default();
        let first: Vec<_> = warehouse.products_by_category(&default, None).unwrap().collect();
        assert_eq!(first.len(), 1);

        warehouse.add_product(product("SN-2")).unwrap();
        let second: Vec<_> = warehouse.products_by_category(&default, None).unwrap().collect();
        assert_eq!(second.len(), 2);
    }
}
