//! Chat endpoints
//!
//! Conversations are keyed by numeric user ids. The client's own id is
//! not part of the login response; the server echoes it as `sender` on a
//! sent message, and the session layer persists it from there.

use serde::Serialize;

use super::ApiClient;
use crate::error::Result;
use crate::models::{ChatMessage, MessagePage};
use crate::session::Session;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    receiver: i64,
    message: &'a str,
    is_read: bool,
}

impl ApiClient {
    /// `GET /chat/my-messages/`. Received messages, newest last.
    pub async fn inbox(&self, session: &Session) -> Result<Vec<ChatMessage>> {
        let page: MessagePage = self
            .execute(Self::authorize(self.get("/chat/my-messages/"), session))
            .await?;
        Ok(page.results)
    }

    /// `GET /chat/get-messages/{sender}/{receiver}/`.
    ///
    /// Requires the local user id, so a conversation can only be opened
    /// once at least one message has been sent (the id backfill).
    pub async fn conversation(
        &self,
        session: &Session,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<Vec<ChatMessage>> {
        let path = format!("/chat/get-messages/{}/{}/", sender_id, receiver_id);
        let page: MessagePage = self
            .execute(Self::authorize(self.get(&path), session))
            .await?;
        Ok(page.results)
    }

    /// `POST /chat/send-messages/`. Returns the stored message, whose
    /// `sender` field carries the local user id.
    pub async fn send_message(
        &self,
        session: &Session,
        receiver: i64,
        message: &str,
    ) -> Result<ChatMessage> {
        let body = SendMessageRequest {
            receiver,
            message,
            is_read: false,
        };
        self.execute(Self::authorize(
            self.post("/chat/send-messages/").json(&body),
            session,
        ))
        .await
    }
}
