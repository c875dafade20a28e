//! Login and registration endpoints
//!
//! Login yields the opaque token persisted by the session store. The
//! registration payloads nest the Django user record under `user`, with
//! the username derived from the email local part.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::{FarmgateError, Result};
use crate::session::UserRole;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    user_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct UserRecord<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct FarmerRegistration<'a> {
    name: &'a str,
    location: &'a str,
    contact_info: String,
    user: UserRecord<'a>,
}

#[derive(Debug, Serialize)]
struct BuyerRegistration<'a> {
    user: UserRecord<'a>,
    delivery_address: &'a str,
    contact_number: &'a str,
}

/// Username derived from an email address: the local part before '@'.
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

impl ApiClient {
    /// `POST /users/login/`. Returns the issued token.
    ///
    /// A 200 without a token field is treated as rejected credentials:
    /// the hosted API responds that way for a role mismatch.
    pub async fn login(&self, username: &str, password: &str, role: UserRole) -> Result<String> {
        let body = LoginRequest {
            username,
            password,
            user_type: role.as_str(),
        };
        let response: LoginResponse = self.execute(self.post("/users/login/").json(&body)).await?;

        response.token.filter(|t| !t.is_empty()).ok_or_else(|| {
            FarmgateError::Authentication("login succeeded without a token".to_string()).into()
        })
    }

    /// `POST /users/register/farmer/`.
    pub async fn register_farmer(
        &self,
        name: &str,
        location: &str,
        phone: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let body = FarmerRegistration {
            name,
            location,
            contact_info: format!("Phone: {}, Email: {}", phone, email),
            user: UserRecord {
                username: username_from_email(email),
                email,
                password,
            },
        };
        self.execute_unit(self.post("/users/register/farmer/").json(&body))
            .await
    }

    /// `POST /users/register/buyer/`.
    pub async fn register_buyer(
        &self,
        delivery_address: &str,
        contact_number: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let body = BuyerRegistration {
            user: UserRecord {
                username: username_from_email(email),
                email,
                password,
            },
            delivery_address,
            contact_number,
        };
        self.execute_unit(self.post("/users/register/buyer/").json(&body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_from_email() {
        assert_eq!(username_from_email("dana@example.com"), "dana");
        assert_eq!(username_from_email("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_login_request_wire_shape() {
        let body = LoginRequest {
            username: "dana",
            password: "secret",
            user_type: "buyer",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["username"], "dana");
        assert_eq!(json["user_type"], "buyer");
    }

    #[test]
    fn test_farmer_registration_nests_user_record() {
        let body = FarmerRegistration {
            name: "Aigerim",
            location: "Almaty",
            contact_info: "Phone: 701, Email: a@example.com".to_string(),
            user: UserRecord {
                username: "a",
                email: "a@example.com",
                password: "secret",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["user"]["username"], "a");
        assert_eq!(json["contact_info"], "Phone: 701, Email: a@example.com");
    }

    #[test]
    fn test_login_response_tolerates_missing_token() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(response.token.is_none());
    }
}
