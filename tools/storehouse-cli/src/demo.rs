//! The catalog walkthrough.
//!
//! Builds products of every kind, seeds the process-wide warehouse, and
//! drives each registry operation, including deliberate failures so the
//! error reporting is visible on the console.

use crate::output::Output;
use anyhow::{anyhow, Context, Result};
use storehouse_commerce::prelude::*;

pub fn run(out: &Output) -> Result<()> {
    products(out)?;
    let warehouse = seed_registry(out)?;
    categories(out, warehouse)?;
    default_store_products(out, warehouse)?;
    stores(out, warehouse)?;
    listings(out, warehouse)?;
    Ok(())
}

fn products(out: &Output) -> Result<()> {
    out.section("Products");

    let laptop = Product::new(
        "432214321423",
        "Aero 15",
        1299.0,
        ProductSpecs::Laptop(LaptopSpecs::new("i7-10700F", "16GB", DriveKind::Sdd, "512GB")?),
    )?
    .with_description("Thin and light");
    out.item(&laptop, &laptop.to_string());

    let camera = Product::new(
        "432214321429",
        "EOS 250D",
        549.0,
        ProductSpecs::Camera(CameraSpecs::new(CameraKind::Reflex, 24.1, 3.0)?),
    )?;
    out.item(&camera, &camera.to_string());

    let phone = Product::new(
        "d23141234",
        "Pixel 8",
        699.0,
        ProductSpecs::Smartphone(MobileSpecs::new("8GB", "128GB", "2400x1080", 6.2)?),
    )?;
    out.item(&phone, &phone.to_string());

    let tablet = Product::new(
        "d23141299",
        "Tab S9",
        899.0,
        ProductSpecs::Tablet(MobileSpecs::new("12GB", "256GB", "2560x1600", 11.0)?),
    )?;
    out.item(&tablet, &tablet.to_string());

    out.info("Rejected constructions:");
    expect_failure(out, Product::new("", "Aero 15", 1299.0, ProductSpecs::Generic));
    expect_failure(out, Product::new("SN-1", "Aero 15", -5.0, ProductSpecs::Generic));
    expect_failure(out, LaptopSpecs::new("i7", "16 gigs", DriveKind::Sdd, "512GB"));
    expect_failure(out, MobileSpecs::new("8GB", "128GB", "fullhd", 6.2));
    expect_failure(out, Coords::new(f64::NAN, 1.0));
    Ok(())
}

fn seed_registry(out: &Output) -> Result<&'static std::sync::Mutex<StoreHouse>> {
    out.section("Warehouse");

    expect_failure(out, registry::get_or_create(""));

    let warehouse = registry::get_or_create("Almacen")?;
    out.success(&format!(
        "created warehouse '{}'",
        warehouse.lock().map_err(|_| anyhow!("poisoned lock"))?.name()
    ));

    let again = registry::get_or_create("Almacen2")?;
    out.info(&format!(
        "second get_or_create(\"Almacen2\") keeps name '{}'",
        again.lock().map_err(|_| anyhow!("poisoned lock"))?.name()
    ));
    Ok(warehouse)
}

fn categories(out: &Output, warehouse: &std::sync::Mutex<StoreHouse>) -> Result<()> {
    out.section("Categories");
    let mut warehouse = warehouse.lock().map_err(|_| anyhow!("poisoned lock"))?;

    warehouse
        .add_category(Category::new("Portatiles", Some("Laptops".into()))?)
        .context("adding category")?;
    warehouse.add_category(Category::new("Fotografia", None)?)?;
    let pilas = Category::new("Pilas", None)?;
    warehouse.add_category(pilas.clone())?;
    out.success("added Portatiles, Fotografia, Pilas");

    expect_failure(out, warehouse.add_category(Category::new("Pilas", None)?));

    warehouse.remove_category(&pilas)?;
    out.success("removed Pilas");

    for category in warehouse.categories() {
        out.item(category, &category.to_string());
    }
    Ok(())
}

fn default_store_products(out: &Output, warehouse: &std::sync::Mutex<StoreHouse>) -> Result<()> {
    out.section("Default store");
    let mut warehouse = warehouse.lock().map_err(|_| anyhow!("poisoned lock"))?;

    let laptop = Product::new(
        "432214321423",
        "Aero 15",
        1299.0,
        ProductSpecs::Laptop(LaptopSpecs::new("i7-10700F", "16GB", DriveKind::Sdd, "512GB")?),
    )?;
    let camera = Product::new(
        "432214321429",
        "EOS 250D",
        549.0,
        ProductSpecs::Camera(CameraSpecs::new(CameraKind::Reflex, 24.1, 3.0)?),
    )?;

    warehouse.add_product_with_categories(laptop.clone(), vec!["Portatiles".into()])?;
    warehouse.add_product_with_categories(camera.clone(), vec!["Fotografia".into()])?;
    out.success("placed laptop and camera in the default store");

    expect_failure(
        out,
        warehouse.add_product_with_categories(laptop.clone(), vec!["Portatiles".into()]),
    );
    expect_failure(
        out,
        warehouse.add_product_with_categories(
            Product::new("SN-9", "Widget", 9.0, ProductSpecs::Generic)?,
            vec!["Ghost".into()],
        ),
    );

    warehouse.remove_product(&camera)?;
    out.success("removed the camera again");
    expect_failure(out, warehouse.remove_product(&camera));
    Ok(())
}

fn stores(out: &Output, warehouse: &std::sync::Mutex<StoreHouse>) -> Result<()> {
    out.section("Stores");
    let mut warehouse = warehouse.lock().map_err(|_| anyhow!("poisoned lock"))?;

    let madrid = Store::new(
        "12332",
        "Intel Madrid",
        "Plaza mayor, 1, Madrid",
        "685723102",
        Coords::new(40.4, -3.7)?,
    )?;
    let toledo = Store::new(
        "12322332",
        "Intel Toledo",
        "Calle ancha, 2, Toledo",
        "685723103",
        Coords::new(39.9, -4.0)?,
    )?;
    warehouse.add_shop(madrid.clone())?;
    warehouse.add_shop(toledo.clone())?;
    out.success("added Madrid and Toledo");

    expect_failure(out, warehouse.add_shop(madrid.clone()));

    warehouse.remove_shop(&toledo)?;
    out.success("removed Toledo; its placements went to the default store");

    // A pop-up store registered through a placement alone.
    let popup = Store::new(
        "55555",
        "Intel Sevilla",
        "Avenida larga, 3, Sevilla",
        "685723104",
        Coords::new(37.4, -6.0)?,
    )?;
    let tablet = Product::new(
        "d23141299",
        "Tab S9",
        899.0,
        ProductSpecs::Tablet(MobileSpecs::new("12GB", "256GB", "2560x1600", 11.0)?),
    )?;
    warehouse.add_product_in_shop(tablet.clone(), popup.clone())?;
    let stock = warehouse.add_stock(&tablet, &popup, 3)?;
    out.success(&format!("stocked the tablet in Sevilla, stock is now {stock}"));
    expect_failure(out, warehouse.add_stock(&tablet, &popup, 0));

    for entry in warehouse.stores() {
        out.item(
            entry.store(),
            &format!(
                "{} ({} placements)",
                entry.store(),
                entry.placements().len()
            ),
        );
    }
    Ok(())
}

fn listings(out: &Output, warehouse: &std::sync::Mutex<StoreHouse>) -> Result<()> {
    out.section("Listings");
    let warehouse = warehouse.lock().map_err(|_| anyhow!("poisoned lock"))?;

    out.info("products filed under Portatiles, across every store:");
    let portatiles = Category::new("Portatiles", None)?;
    for stocked in warehouse.products_by_category(&portatiles, None)? {
        let display = format!("{} (stock {})", stocked.product, stocked.stock);
        out.item(&stocked, &display);
    }

    out.info("laptops in the default store:");
    let default_store = Store::default();
    for stocked in warehouse.products_by_store(&default_store, Some(ProductKind::Laptop))? {
        let display = format!("{} (stock {})", stocked.product, stocked.stock);
        out.item(&stocked, &display);
    }

    expect_failure(
        out,
        warehouse.products_by_category(&Category::new("Ghost", None)?, None),
    );
    Ok(())
}

/// Run a fallible step whose failure is the point, and report it.
fn expect_failure<T>(out: &Output, result: Result<T, CatalogError>) {
    match result {
        Ok(_) => out.failure("expected this operation to fail, but it succeeded"),
        Err(err) => out.failure(&err.to_string()),
    }
}
