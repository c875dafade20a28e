//! Mirrored server-owned entities
//!
//! The marketplace API owns every entity; the client only mirrors the
//! fields it renders. Unknown fields are ignored on deserialize so server
//! additions never break the client. Numeric money fields arrive either
//! as numbers or as decimal strings depending on the endpoint, so totals
//! are kept as `f64` behind a lenient deserializer.

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts a price as a JSON number or a decimal string.
///
/// The API is a Django backend: list endpoints serialize `DecimalField`s
/// as strings while computed totals come back as numbers.
fn de_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

fn de_price_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "de_price")] f64);

    Option::<Wrapper>::deserialize(deserializer).map(|opt| opt.map(|w| w.0))
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Product category from `/products/categories/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Farmer identity nested inside a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Catalog product from `/products/list/` or the farmer dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "de_price")]
    pub price: f64,
    #[serde(default)]
    pub category: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub quantity_available: i64,
    #[serde(default)]
    pub popularity: Option<i64>,
    #[serde(default)]
    pub farmer: Option<FarmerInfo>,
}

impl Product {
    /// Category label regardless of whether the server sent an id, a
    /// name, or a nested object.
    pub fn category_label(&self) -> String {
        match &self.category {
            None => "-".to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(serde_json::Value::Object(obj)) => obj
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or("-")
                .to_string(),
            Some(_) => "-".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Cart and orders
// ---------------------------------------------------------------------------

/// One line of the buyer cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub product_name: String,
    #[serde(deserialize_with = "de_price")]
    pub product_price: f64,
    pub quantity: i64,
}

/// Buyer cart from `/users/buyers/cart/`. Entirely server-computed; the
/// client never recomputes `total` locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default, deserialize_with = "de_price_opt")]
    pub total: Option<f64>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Response of `/users/buyers/cart/apply-promo/`.
#[derive(Debug, Clone, Deserialize)]
pub struct PromoResult {
    #[serde(deserialize_with = "de_price")]
    pub new_total: f64,
}

/// One product line inside an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    #[serde(default, deserialize_with = "de_price_opt")]
    pub prices: Option<f64>,
}

/// Past order from `/users/buyers/order/history/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_date: String,
    #[serde(deserialize_with = "de_price")]
    pub total_price: f64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub delivery_details: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Human-facing status string.
    pub fn status(&self) -> &'static str {
        if self.is_completed {
            "Completed"
        } else {
            "In Progress"
        }
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// One chat message. `sender`/`receiver` are numeric user ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: Option<i64>,
    pub sender: i64,
    pub receiver: i64,
    pub message: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

/// Chat endpoints wrap messages in a `results` array with no cursor.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagePage {
    #[serde(default)]
    pub results: Vec<ChatMessage>,
}

// ---------------------------------------------------------------------------
// Farmer surface
// ---------------------------------------------------------------------------

/// Farmer profile from `/farmer/profile/`.
///
/// `contact_info` is a free-text blob of the form
/// `"Phone: <n>, Email: <e>"`; [`FarmerProfile::phone`] and
/// [`FarmerProfile::email`] parse it best-effort for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
}

impl FarmerProfile {
    fn contact_part(&self, pattern: &str) -> Option<String> {
        let re = regex::Regex::new(pattern).ok()?;
        let info = self.contact_info.as_deref()?;
        re.captures(info)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    pub fn phone(&self) -> Option<String> {
        self.contact_part(r"(?i)Phone:\s*([^,]+)")
    }

    pub fn email(&self) -> Option<String> {
        self.contact_part(r"(?i)Email:\s*([^,]+)")
    }
}

/// Wrapper the profile endpoint uses: `{ "farmer": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileEnvelope {
    pub farmer: FarmerProfile,
}

/// Farmer dashboard payload: own products plus a count.
#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total_products: i64,
}

/// Sales report envelope from `/users/farmers/sales-report/`.
///
/// The report body is server-shaped and rendered as-is, so it stays an
/// untyped JSON value.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesReport {
    #[serde(default)]
    pub report: serde_json::Value,
}
