//! Public product catalog endpoints
//!
//! The catalog is unauthenticated: the product list, the category list,
//! and the inventory report are served without authentication and are
//! fetched without a token.

use super::ApiClient;
use crate::error::Result;
use crate::models::{Category, Product};

impl ApiClient {
    /// `GET /products/list/`. The full catalog; no pagination.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.execute(self.get("/products/list/")).await
    }

    /// Fetch one product by id.
    ///
    /// The server exposes no detail endpoint, so this fetches the full
    /// list and filters client-side.
    pub async fn product_detail(&self, id: i64) -> Result<Option<Product>> {
        let products = self.list_products().await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    /// `GET /products/categories/`.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.execute(self.get("/products/categories/")).await
    }

    /// `GET /products/inventory-report/?start_date&end_date`.
    ///
    /// Server-shaped payload, rendered as-is.
    pub async fn inventory_report(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<serde_json::Value> {
        let request = self
            .get("/products/inventory-report/")
            .query(&[("start_date", start_date), ("end_date", end_date)]);
        self.execute(request).await
    }
}
