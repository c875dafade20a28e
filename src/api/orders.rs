//! Buyer order history endpoints

use super::ApiClient;
use crate::error::Result;
use crate::models::Order;
use crate::session::Session;

impl ApiClient {
    /// `GET /users/buyers/order/history/`.
    pub async fn order_history(&self, session: &Session) -> Result<Vec<Order>> {
        self.execute(Self::authorize(
            self.get("/users/buyers/order/history/"),
            session,
        ))
        .await
    }

    /// Fetch one order by id from the history list.
    ///
    /// The server exposes no single-order endpoint, so this looks the
    /// order up in the history.
    pub async fn order_detail(&self, session: &Session, id: i64) -> Result<Option<Order>> {
        let orders = self.order_history(session).await?;
        Ok(orders.into_iter().find(|o| o.id == id))
    }
}
