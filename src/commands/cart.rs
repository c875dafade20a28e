//! Buyer cart handlers
//!
//! Every operation here requires a stored session; the session gate runs
//! before any network traffic so a logged-out user gets a local message
//! instead of a server 401.

use prettytable::{row, Table};

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::Cart;
use crate::screen::{alert, notice, user_message, ScreenState};
use crate::session::SessionStore;

/// Show the current cart contents and server-computed total.
pub async fn run_show(config: Config) -> Result<()> {
    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let Some(cart) = ScreenState::resolve(api.cart(&session)).await.into_ready() else {
        return Ok(());
    };

    output_cart(&cart);
    Ok(())
}

/// Add a product to the cart.
pub async fn run_add(config: Config, product_id: i64, quantity: i64) -> Result<()> {
    if quantity < 1 {
        alert("Quantity must be at least 1.");
        return Ok(());
    }

    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    // Single round trip; `cart show` renders the server-computed state.
    match api.add_to_cart(&session, product_id, quantity).await {
        Ok(()) => notice("Added to cart."),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Remove a cart line by its item id.
pub async fn run_remove(config: Config, item_id: i64) -> Result<()> {
    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    match api.remove_from_cart(&session, item_id).await {
        Ok(()) => notice("Removed from cart."),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Apply a promo code; the server returns the discounted total.
pub async fn run_promo(config: Config, code: String) -> Result<()> {
    let code = code.trim().to_string();
    if code.is_empty() {
        alert("Please enter a promo code.");
        return Ok(());
    }

    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    match api.apply_promo(&session, &code).await {
        Ok(promo) => notice(&format!(
            "Promo applied. New total: {:.2}",
            promo.new_total
        )),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Place an order from the current cart.
pub async fn run_checkout(config: Config, delivery: String) -> Result<()> {
    let delivery = delivery.trim().to_string();
    if delivery.is_empty() {
        alert("Please provide delivery details.");
        return Ok(());
    }

    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    // Refuse locally on an empty cart rather than let the server reject it.
    match api.cart(&session).await {
        Ok(cart) if cart.is_empty() => {
            alert("Your cart is empty.");
            return Ok(());
        }
        Ok(_) => {}
        Err(e) => {
            alert(&user_message(&e));
            return Ok(());
        }
    }

    match api.place_order(&session, &delivery).await {
        Ok(order) => notice(&format!(
            "Order #{} placed. Total: {:.2}",
            order.id, order.total_price
        )),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

fn output_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    let mut table = Table::new();
    table.add_row(row!["Item", "Product", "Price", "Qty", "Subtotal"]);
    for item in &cart.items {
        table.add_row(row![
            item.id,
            item.product_name,
            format!("{:.2}", item.product_price),
            item.quantity,
            format!("{:.2}", item.product_price * item.quantity as f64)
        ]);
    }
    table.printstd();

    if let Some(total) = cart.total {
        println!("Total: {:.2}", total);
    }
}
