//! Order history handlers

use prettytable::{row, Table};

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::Order;
use crate::screen::ScreenState;
use crate::session::SessionStore;

/// List past orders for the logged-in buyer.
pub async fn run_list(config: Config, json: bool) -> Result<()> {
    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let Some(orders) = ScreenState::resolve(api.order_history(&session))
        .await
        .into_ready()
    else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
        return Ok(());
    }

    if orders.is_empty() {
        println!("No orders yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "Date", "Total", "Status"]);
    for order in &orders {
        table.add_row(row![
            order.id,
            order.order_date,
            format!("{:.2}", order.total_price),
            order.status()
        ]);
    }
    table.printstd();
    Ok(())
}

/// Show one order with its line items.
pub async fn run_show(config: Config, id: i64) -> Result<()> {
    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let Some(order) = ScreenState::resolve(api.order_detail(&session, id))
        .await
        .into_ready()
    else {
        return Ok(());
    };

    match order {
        Some(o) => output_order_detail(&o),
        None => println!("Order not found."),
    }
    Ok(())
}

fn output_order_detail(order: &Order) {
    println!("Order #{} ({})", order.id, order.status());
    println!("  Date:  {}", order.order_date);
    println!("  Total: {:.2}", order.total_price);
    if let Some(delivery) = &order.delivery_details {
        println!("  Delivery: {}", delivery);
    }
    if order.items.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.add_row(row!["Product", "Qty", "Price"]);
    for item in &order.items {
        let name = item.product_name.as_deref().unwrap_or("-");
        let price = item
            .prices
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row![name, item.quantity, price]);
    }
    table.printstd();
}
