//! Buyer cart endpoints
//!
//! The cart is entirely server-computed: add, remove, promo, and
//! checkout are single round trips and the client renders server state
//! rather than recomputing totals locally.

use serde::Serialize;

use super::ApiClient;
use crate::error::Result;
use crate::models::{Cart, Order, PromoResult};
use crate::session::Session;

#[derive(Debug, Serialize)]
struct AddItemRequest {
    product_id: i64,
    quantity: i64,
}

#[derive(Debug, Serialize)]
struct RemoveItemRequest {
    item_id: i64,
}

#[derive(Debug, Serialize)]
struct PromoRequest<'a> {
    promo_code: &'a str,
}

#[derive(Debug, Serialize)]
struct PlaceOrderRequest<'a> {
    delivery_details: &'a str,
}

impl ApiClient {
    /// `GET /users/buyers/cart/`.
    pub async fn cart(&self, session: &Session) -> Result<Cart> {
        self.execute(Self::authorize(self.get("/users/buyers/cart/"), session))
            .await
    }

    /// `POST /users/buyers/cart/add/`.
    pub async fn add_to_cart(
        &self,
        session: &Session,
        product_id: i64,
        quantity: i64,
    ) -> Result<()> {
        let body = AddItemRequest {
            product_id,
            quantity,
        };
        self.execute_unit(Self::authorize(
            self.post("/users/buyers/cart/add/").json(&body),
            session,
        ))
        .await
    }

    /// `POST /users/buyers/cart/remove/`.
    pub async fn remove_from_cart(&self, session: &Session, item_id: i64) -> Result<()> {
        let body = RemoveItemRequest { item_id };
        self.execute_unit(Self::authorize(
            self.post("/users/buyers/cart/remove/").json(&body),
            session,
        ))
        .await
    }

    /// `POST /users/buyers/cart/apply-promo/`. Returns the new total.
    pub async fn apply_promo(&self, session: &Session, promo_code: &str) -> Result<PromoResult> {
        let body = PromoRequest { promo_code };
        self.execute(Self::authorize(
            self.post("/users/buyers/cart/apply-promo/").json(&body),
            session,
        ))
        .await
    }

    /// `POST /users/buyers/cart/place-order/`. Returns the created order.
    pub async fn place_order(&self, session: &Session, delivery_details: &str) -> Result<Order> {
        let body = PlaceOrderRequest { delivery_details };
        self.execute(Self::authorize(
            self.post("/users/buyers/cart/place-order/").json(&body),
            session,
        ))
        .await
    }
}
