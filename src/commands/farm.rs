//! Farmer-side handlers: dashboard, profile, product management

use prettytable::{row, Table};

use crate::api::{ApiClient, NewProduct, ProductUpdate, ProfileUpdate};
use crate::config::Config;
use crate::error::Result;
use crate::models::FarmerProfile;
use crate::screen::{alert, notice, user_message, ScreenState};
use crate::session::SessionStore;

/// Show the farmer dashboard: own products with a count.
pub async fn run_dashboard(config: Config) -> Result<()> {
    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let Some(dash) = ScreenState::resolve(api.dashboard(&session))
        .await
        .into_ready()
    else {
        return Ok(());
    };

    if dash.products.is_empty() {
        println!("No products listed yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "Name", "Price", "Available", "Popularity"]);
    for p in &dash.products {
        table.add_row(row![
            p.id,
            p.name,
            format!("{:.2}", p.price),
            p.quantity_available,
            p.popularity.unwrap_or(0)
        ]);
    }
    table.printstd();
    println!("{} products total", dash.total_products);
    Ok(())
}

/// Show the farmer profile.
pub async fn run_profile(config: Config) -> Result<()> {
    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let Some(profile) = ScreenState::resolve(api.profile(&session))
        .await
        .into_ready()
    else {
        return Ok(());
    };

    output_profile(&profile);
    Ok(())
}

/// Update the farmer profile.
///
/// The server accepts a full profile on PATCH, so the current profile is
/// fetched first and the provided fields are merged over it. Phone and
/// email are folded back into the `contact_info` text blob the server
/// stores.
pub async fn run_edit_profile(
    config: Config,
    name: Option<String>,
    location: Option<String>,
    phone: Option<String>,
    email: Option<String>,
) -> Result<()> {
    if name.is_none() && location.is_none() && phone.is_none() && email.is_none() {
        alert("Nothing to update. Pass at least one of --name, --location, --phone, --email.");
        return Ok(());
    }

    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let current = match api.profile(&session).await {
        Ok(profile) => profile,
        Err(e) => {
            alert(&user_message(&e));
            return Ok(());
        }
    };

    let phone = phone
        .or_else(|| current.phone())
        .unwrap_or_default();
    let email = email
        .or_else(|| current.email())
        .unwrap_or_default();
    let update = ProfileUpdate {
        name: name.unwrap_or_else(|| current.name.clone()),
        location: location
            .or_else(|| current.location.clone())
            .unwrap_or_default(),
        contact_info: format!("Phone: {}, Email: {}", phone, email),
    };

    match api.update_profile(&session, &update).await {
        Ok(()) => notice("Profile updated."),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Create a product listing with an image upload.
#[allow(clippy::too_many_arguments)]
pub async fn run_add_product(
    config: Config,
    name: String,
    price: f64,
    description: String,
    quantity: i64,
    category: i64,
    popularity: i64,
    image: std::path::PathBuf,
) -> Result<()> {
    if price <= 0.0 {
        alert("Price must be greater than zero.");
        return Ok(());
    }
    if quantity < 0 {
        alert("Quantity cannot be negative.");
        return Ok(());
    }
    if !image.is_file() {
        alert(&format!("Image file not found: {}", image.display()));
        return Ok(());
    }

    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let product = NewProduct {
        name,
        price,
        description,
        quantity_available: quantity,
        category,
        popularity,
        image_path: image,
    };

    match api.create_product(&session, &product).await {
        Ok(()) => notice("Product created."),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Update an existing product listing.
pub async fn run_update_product(
    config: Config,
    id: i64,
    name: String,
    price: f64,
    quantity: i64,
    category: i64,
) -> Result<()> {
    if price <= 0.0 {
        alert("Price must be greater than zero.");
        return Ok(());
    }
    if quantity < 0 {
        alert("Quantity cannot be negative.");
        return Ok(());
    }

    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let update = ProductUpdate {
        name,
        price,
        quantity_available: quantity,
        category_id: category,
    };

    match api.update_product(&session, id, &update).await {
        Ok(product) => notice(&format!("Product #{} updated.", product.id)),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

fn output_profile(profile: &FarmerProfile) {
    println!("Name:     {}", profile.name);
    println!(
        "Location: {}",
        profile.location.as_deref().unwrap_or("-")
    );
    println!(
        "Phone:    {}",
        profile.phone().as_deref().unwrap_or("-")
    );
    println!(
        "Email:    {}",
        profile.email().as_deref().unwrap_or("-")
    );
}
