//! Report handlers
//!
//! The report endpoints are served without authentication and return
//! server-shaped JSON, so both commands validate the date range locally
//! and render the payload as pretty-printed JSON.

use chrono::NaiveDate;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::screen::{alert, user_message};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sales report for a date range.
pub async fn run_sales(
    config: Config,
    start: String,
    end: String,
    report_type: String,
) -> Result<()> {
    if !validate_range(&start, &end) {
        return Ok(());
    }

    let api = ApiClient::new(&config.api)?;
    match api.sales_report(&start, &end, &report_type).await {
        Ok(report) => println!("{}", serde_json::to_string_pretty(&report.report)?),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Inventory report for a date range.
pub async fn run_inventory(config: Config, start: String, end: String) -> Result<()> {
    if !validate_range(&start, &end) {
        return Ok(());
    }

    let api = ApiClient::new(&config.api)?;
    match api.inventory_report(&start, &end).await {
        Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Checks both bounds parse as `YYYY-MM-DD` and start is not after end.
/// Alerts and returns false on failure.
fn validate_range(start: &str, end: &str) -> bool {
    let parsed_start = match NaiveDate::parse_from_str(start, DATE_FORMAT) {
        Ok(d) => d,
        Err(_) => {
            alert(&format!("Invalid start date `{}`. Use YYYY-MM-DD.", start));
            return false;
        }
    };
    let parsed_end = match NaiveDate::parse_from_str(end, DATE_FORMAT) {
        Ok(d) => d,
        Err(_) => {
            alert(&format!("Invalid end date `{}`. Use YYYY-MM-DD.", end));
            return false;
        }
    };
    if parsed_start > parsed_end {
        alert("Start date is after end date.");
        return false;
    }
    true
}
