//! End-to-end walkthrough of the warehouse registry, mirroring a session
//! that stocks a small electronics operation.

use storehouse_commerce::prelude::*;

fn laptop(serial: &str) -> Product {
    Product::new(
        serial,
        "Aero 15",
        1299.0,
        ProductSpecs::Laptop(LaptopSpecs::new("i7-10700F", "16GB", DriveKind::Sdd, "512GB").unwrap()),
    )
    .unwrap()
}

fn camera(serial: &str) -> Product {
    Product::new(
        serial,
        "EOS 250D",
        549.0,
        ProductSpecs::Camera(CameraSpecs::new(CameraKind::Reflex, 24.1, 3.0).unwrap()),
    )
    .unwrap()
}

fn phone(serial: &str) -> Product {
    Product::new(
        serial,
        "Pixel 8",
        699.0,
        ProductSpecs::Smartphone(MobileSpecs::new("8GB", "128GB", "2400x1080", 6.2).unwrap()),
    )
    .unwrap()
}

fn shop(tax_id: &str, name: &str) -> Store {
    Store::new(
        tax_id,
        name,
        "Plaza mayor, 1, Madrid",
        "685723102",
        Coords::new(40.4, -3.7).unwrap(),
    )
    .unwrap()
}

#[test]
fn full_catalog_walkthrough() {
    let mut warehouse = StoreHouse::new("Almacen").unwrap();

    // Categories.
    warehouse
        .add_category(Category::new("Portatiles", Some("Laptops".into())).unwrap())
        .unwrap();
    warehouse
        .add_category(Category::new("Fotografia", None).unwrap())
        .unwrap();
    assert_eq!(warehouse.categories().count(), 3);

    // Stores.
    let madrid = shop("12332", "Intel Madrid");
    let toledo = shop("12322332", "Intel Toledo");
    warehouse.add_shop(madrid.clone()).unwrap();
    warehouse.add_shop(toledo.clone()).unwrap();
    assert_eq!(warehouse.stores().count(), 3);

    // Default-store products.
    warehouse
        .add_product_with_categories(laptop("L-1"), vec!["Portatiles".into()])
        .unwrap();
    warehouse
        .add_product_with_categories(camera("C-1"), vec!["Fotografia".into()])
        .unwrap();
    warehouse.add_product(phone("P-1")).unwrap();

    // Stock a camera in a pop-up store known only through its placement.
    // add_product_in_shop registers the entry itself.
    let popup = shop("55555", "Intel Sevilla");
    warehouse
        .add_product_in_shop_with_categories(camera("C-2"), popup.clone(), vec!["Fotografia".into()])
        .unwrap();
    assert_eq!(warehouse.stores().count(), 4);
    assert_eq!(warehouse.add_stock(&camera("C-2"), &popup, 3).unwrap(), 4);
    assert_eq!(warehouse.add_stock(&camera("C-2"), &popup, 3).unwrap(), 7);

    // Category listing spans every store.
    let foto = Category::new("Fotografia", None).unwrap();
    let cameras: Vec<StockedProduct> = warehouse.products_by_category(&foto, None).unwrap().collect();
    assert_eq!(cameras.len(), 2);
    let stocks: Vec<i64> = cameras.iter().map(|sp| sp.stock).collect();
    assert!(stocks.contains(&1) && stocks.contains(&7));

    // Store listing honors the kind filter.
    let default_store = Store::default();
    let phones: Vec<StockedProduct> = warehouse
        .products_by_store(&default_store, Some(ProductKind::Smartphone))
        .unwrap()
        .collect();
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0].product.serial_number(), "P-1");

    // Removing Toledo transfers nothing (it was empty) but drops the entry.
    warehouse.remove_shop(&toledo).unwrap();
    assert!(warehouse
        .stores()
        .all(|entry| entry.store().tax_id() != "12322332"));

    // Removing the pop-up appends its camera to the default store.
    let before = warehouse.stores().next().unwrap().placements().len();
    warehouse.remove_shop(&popup).unwrap();
    let default_entry = warehouse.stores().next().unwrap();
    assert_eq!(default_entry.placements().len(), before + 1);
    let moved = default_entry
        .placements()
        .iter()
        .find(|p| p.product().serial_number() == "C-2")
        .unwrap();
    assert_eq!(moved.stock(), 7);

    // Removing the photography category reassigns single-category
    // placements to a fresh default category.
    warehouse.remove_category(&foto).unwrap();
    for entry in warehouse.stores() {
        for placement in entry.placements() {
            assert!(!placement.categories().iter().any(|c| c == "Fotografia"));
        }
    }
    let orphaned: Vec<_> = warehouse
        .stores()
        .flat_map(|entry| entry.placements())
        .filter(|p| p.product().serial_number().starts_with("C-"))
        .collect();
    assert!(!orphaned.is_empty());
    for placement in orphaned {
        assert_eq!(placement.categories(), [Category::DEFAULT_TITLE]);
    }
}

#[test]
fn listing_errors() {
    let warehouse = StoreHouse::new("Almacen").unwrap();

    let err = warehouse
        .products_by_category(&Category::new("Ghost", None).unwrap(), None)
        .err()
        .unwrap();
    assert!(err.is_not_found());

    let err = warehouse
        .products_by_store(&shop("99999", "Ghost"), None)
        .err()
        .unwrap();
    assert_eq!(err, CatalogError::StoreNotFound("99999".into()));
}

#[test]
fn relisting_reflects_current_state() {
    let mut warehouse = StoreHouse::new("Almacen").unwrap();
    let default = Category::default();

    warehouse.add_product(laptop("L-1")).unwrap();
    let first: Vec<_> = warehouse.products_by_category(&default, None).unwrap().collect();
    assert_eq!(first.len(), 1);

    warehouse.add_product(camera("C-1")).unwrap();
    warehouse.add_product(phone("P-1")).unwrap();
    let second: Vec<_> = warehouse.products_by_category(&default, None).unwrap().collect();
    assert_eq!(second.len(), 3);
}
