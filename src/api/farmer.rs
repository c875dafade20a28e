//! Farmer surface: dashboard, profile, product management, sales report
//!
//! Product creation is the one multipart endpoint: text fields plus an
//! image file whose MIME subtype is derived from the file extension.

use std::path::Path;

use serde::Serialize;

use super::ApiClient;
use crate::error::{FarmgateError, Result};
use crate::models::{Dashboard, FarmerProfile, Product, ProfileEnvelope, SalesReport};
use crate::session::Session;

/// Fields for `POST /farmer/products/create/`.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub quantity_available: i64,
    pub category: i64,
    pub popularity: i64,
    pub image_path: std::path::PathBuf,
}

/// Fields for `PATCH /farmer/product/{id}/update/`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub quantity_available: i64,
    pub category_id: i64,
}

/// Fields for `PATCH /farmer/profile/`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub location: String,
    pub contact_info: String,
}

fn image_file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| {
            FarmgateError::InvalidInput(format!("bad image path: {}", path.display())).into()
        })
}

fn image_mime(file_name: &str) -> String {
    let ext = file_name.rsplit('.').next().unwrap_or("jpeg");
    format!("image/{}", ext.to_lowercase())
}

impl ApiClient {
    /// `GET /farmer/dashboard/`. Own products plus a count.
    pub async fn dashboard(&self, session: &Session) -> Result<Dashboard> {
        self.execute(Self::authorize(self.get("/farmer/dashboard/"), session))
            .await
    }

    /// `GET /farmer/profile/`.
    pub async fn profile(&self, session: &Session) -> Result<FarmerProfile> {
        let envelope: ProfileEnvelope = self
            .execute(Self::authorize(self.get("/farmer/profile/"), session))
            .await?;
        Ok(envelope.farmer)
    }

    /// `PATCH /farmer/profile/`.
    pub async fn update_profile(&self, session: &Session, update: &ProfileUpdate) -> Result<()> {
        self.execute_unit(Self::authorize(
            self.patch("/farmer/profile/").json(update),
            session,
        ))
        .await
    }

    /// `POST /farmer/products/create/` (multipart).
    pub async fn create_product(&self, session: &Session, product: &NewProduct) -> Result<()> {
        let file_name = image_file_name(&product.image_path)?;
        let mime = image_mime(&file_name);
        let image_bytes = tokio::fs::read(&product.image_path).await.map_err(|e| {
            FarmgateError::InvalidInput(format!(
                "cannot read image {}: {}",
                product.image_path.display(),
                e
            ))
        })?;

        let image_part = reqwest::multipart::Part::bytes(image_bytes)
            .file_name(file_name)
            .mime_str(&mime)
            .map_err(FarmgateError::Http)?;

        let form = reqwest::multipart::Form::new()
            .text("name", product.name.clone())
            .text("price", product.price.to_string())
            .text("description", product.description.clone())
            .text("quantity_available", product.quantity_available.to_string())
            .text("category", product.category.to_string())
            .text("popularity", product.popularity.to_string())
            .part("image", image_part);

        self.execute_unit(Self::authorize(
            self.post("/farmer/products/create/").multipart(form),
            session,
        ))
        .await
    }

    /// `PATCH /farmer/product/{id}/update/`.
    pub async fn update_product(
        &self,
        session: &Session,
        id: i64,
        update: &ProductUpdate,
    ) -> Result<Product> {
        let path = format!("/farmer/product/{}/update/", id);
        self.execute(Self::authorize(self.patch(&path).json(update), session))
            .await
    }

    /// `GET /users/farmers/sales-report/?start_date&end_date&report_type`.
    pub async fn sales_report(
        &self,
        start_date: &str,
        end_date: &str,
        report_type: &str,
    ) -> Result<SalesReport> {
        let request = self.get("/users/farmers/sales-report/").query(&[
            ("start_date", start_date),
            ("end_date", end_date),
            ("report_type", report_type),
        ]);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_mime_from_extension() {
        assert_eq!(image_mime("tomatoes.jpg"), "image/jpg");
        assert_eq!(image_mime("photo.PNG"), "image/png");
        assert_eq!(image_mime("noext"), "image/noext");
    }

    #[test]
    fn test_image_file_name() {
        let name = image_file_name(Path::new("/tmp/photos/tomatoes.jpg")).unwrap();
        assert_eq!(name, "tomatoes.jpg");
    }

    #[test]
    fn test_product_update_wire_shape() {
        let update = ProductUpdate {
            name: "Tomatoes".to_string(),
            price: 12.5,
            quantity_available: 30,
            category_id: 2,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["name"], "Tomatoes");
        assert_eq!(json["price"], 12.5);
        assert_eq!(json["quantity_available"], 30);
        assert_eq!(json["category_id"], 2);
    }

    #[test]
    fn test_profile_update_wire_shape() {
        let update = ProfileUpdate {
            name: "Aigerim".to_string(),
            location: "Almaty".to_string(),
            contact_info: "Phone: 701, Email: a@example.com".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["contact_info"], "Phone: 701, Email: a@example.com");
    }
}
