//! Product catalog handlers (public screens)

use prettytable::{row, Table};

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::{Category, Product};
use crate::screen::ScreenState;

/// List the catalog as a table or JSON.
pub async fn run_list(config: Config, json: bool) -> Result<()> {
    let api = ApiClient::new(&config.api)?;
    let Some(products) = ScreenState::resolve(api.list_products()).await.into_ready() else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("No products available.");
        return Ok(());
    }

    output_products_table(&products);
    Ok(())
}

/// Show one product in detail.
pub async fn run_show(config: Config, id: i64) -> Result<()> {
    let api = ApiClient::new(&config.api)?;
    let Some(product) = ScreenState::resolve(api.product_detail(id)).await.into_ready() else {
        return Ok(());
    };

    match product {
        Some(p) => output_product_detail(&p),
        None => println!("Product not found."),
    }
    Ok(())
}

/// List product categories.
pub async fn run_categories(config: Config) -> Result<()> {
    let api = ApiClient::new(&config.api)?;
    let Some(categories) = ScreenState::resolve(api.list_categories())
        .await
        .into_ready()
    else {
        return Ok(());
    };

    output_categories_table(&categories);
    Ok(())
}

fn output_products_table(products: &[Product]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Name", "Price", "Category", "Available", "Farmer"]);
    for p in products {
        let farmer = p
            .farmer
            .as_ref()
            .map(|f| f.name.clone())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row![
            p.id,
            p.name,
            format!("{:.2}", p.price),
            p.category_label(),
            p.quantity_available,
            farmer
        ]);
    }
    table.printstd();
    println!("{} products", products.len());
}

fn output_product_detail(p: &Product) {
    println!("{} (#{})", p.name, p.id);
    println!("  Price:     {:.2}", p.price);
    println!("  Category:  {}", p.category_label());
    println!("  Available: {}", p.quantity_available);
    if let Some(description) = &p.description {
        println!("  About:     {}", description);
    }
    if let Some(farmer) = &p.farmer {
        let location = farmer.location.as_deref().unwrap_or("-");
        println!("  Farmer:    {} ({})", farmer.name, location);
    }
    if let Some(image) = &p.image {
        println!("  Image:     {}", image);
    }
}

fn output_categories_table(categories: &[Category]) {
    if categories.is_empty() {
        println!("No categories available.");
        return;
    }
    let mut table = Table::new();
    table.add_row(row!["ID", "Name"]);
    for c in categories {
        table.add_row(row![c.id, c.name]);
    }
    table.printstd();
}
