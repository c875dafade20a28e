//! Login, logout, and registration handlers
//!
//! Field validation stays local and minimal: all fields non-empty, a
//! digits-only contact number, a plausible email, a minimum password
//! length. Everything else is the server's business.

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{FarmgateError, Result};
use crate::screen::{alert, notice, user_message};
use crate::session::{Session, SessionStore, UserRole};

fn email_is_plausible(email: &str) -> bool {
    // local@domain.tld, no spaces.
    let re = regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex");
    re.is_match(email)
}

fn validate_registration(email: &str, password: &str) -> Result<()> {
    if !email_is_plausible(email) {
        return Err(FarmgateError::InvalidInput("Valid Email is required.".to_string()).into());
    }
    if password.trim().len() < 6 {
        return Err(FarmgateError::InvalidInput(
            "Password must be at least 6 characters long.".to_string(),
        )
        .into());
    }
    Ok(())
}

/// Log in and persist the session token.
pub async fn run_login(config: Config, username: &str, password: &str, role: &str) -> Result<()> {
    if username.trim().is_empty() || password.trim().is_empty() {
        alert("Please fill in all fields and select a user type.");
        return Ok(());
    }

    let role: UserRole = match role.parse() {
        Ok(r) => r,
        Err(e) => {
            alert(&user_message(&anyhow::Error::new(e)));
            return Ok(());
        }
    };

    let api = ApiClient::new(&config.api)?;
    match api.login(username.trim(), password, role).await {
        Ok(token) => {
            SessionStore.save(&Session::new(token, role))?;
            notice(&format!("Login successful. Welcome back, {}!", role));
        }
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Remove the stored session. Idempotent.
pub async fn run_logout() -> Result<()> {
    SessionStore.clear()?;
    notice("Logged out.");
    Ok(())
}

/// Register a farmer account.
pub async fn run_register_farmer(
    config: Config,
    name: &str,
    location: &str,
    phone: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    if name.trim().is_empty() || location.trim().is_empty() || phone.trim().is_empty() {
        alert("Please fill in all fields.");
        return Ok(());
    }
    if let Err(e) = validate_registration(email, password) {
        alert(&user_message(&e));
        return Ok(());
    }

    let api = ApiClient::new(&config.api)?;
    match api
        .register_farmer(name.trim(), location.trim(), phone.trim(), email, password)
        .await
    {
        Ok(()) => notice("Farmer registration successful! Please log in."),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Register a buyer account.
pub async fn run_register_buyer(
    config: Config,
    delivery_address: &str,
    contact_number: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    if delivery_address.trim().is_empty() {
        alert("Delivery Address is required.");
        return Ok(());
    }
    if contact_number.trim().is_empty() || !contact_number.trim().chars().all(|c| c.is_ascii_digit())
    {
        alert("Valid Phone Number is required.");
        return Ok(());
    }
    if let Err(e) = validate_registration(email, password) {
        alert(&user_message(&e));
        return Ok(());
    }

    let api = ApiClient::new(&config.api)?;
    match api
        .register_buyer(
            delivery_address.trim(),
            contact_number.trim(),
            email,
            password,
        )
        .await
    {
        Ok(()) => notice("Buyer registration successful! Please log in."),
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_plausible() {
        assert!(email_is_plausible("dana@example.com"));
        assert!(!email_is_plausible("dana@example"));
        assert!(!email_is_plausible("dana example.com"));
        assert!(!email_is_plausible("@example.com"));
    }

    #[test]
    fn test_validate_registration_rejects_short_password() {
        let err = validate_registration("dana@example.com", "abc").unwrap_err();
        assert!(err.to_string().contains("at least 6 characters"));
    }

    #[test]
    fn test_validate_registration_accepts_good_input() {
        assert!(validate_registration("dana@example.com", "hunter22").is_ok());
    }
}
