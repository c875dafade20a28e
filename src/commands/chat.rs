//! Chat handlers
//!
//! The chat endpoints identify users by numeric id, but the login
//! response never carries one. The id is learned opportunistically: the
//! send endpoint echoes the sender id back, and inbox traffic always
//! involves the logged-in user, so both are used to backfill
//! `Session::user_id` into the session store.

use colored::Colorize;
use prettytable::{row, Table};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::ChatMessage;
use crate::screen::{alert, notice, user_message, ScreenState};
use crate::session::{Session, SessionStore};

/// List every message involving the logged-in user, newest last.
pub async fn run_inbox(config: Config) -> Result<()> {
    let session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let Some(messages) = ScreenState::resolve(api.inbox(&session)).await.into_ready() else {
        return Ok(());
    };

    if messages.is_empty() {
        println!("No messages yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["From", "To", "Date", "Message"]);
    for msg in &messages {
        table.add_row(row![
            msg.sender,
            msg.receiver,
            msg.date.as_deref().unwrap_or("-"),
            msg.message
        ]);
    }
    table.printstd();
    Ok(())
}

/// Send a single message without entering the interactive view.
pub async fn run_send(config: Config, to: i64, message: String) -> Result<()> {
    let message = message.trim().to_string();
    if message.is_empty() {
        alert("Message cannot be empty.");
        return Ok(());
    }

    let mut session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    match api.send_message(&session, to, &message).await {
        Ok(sent) => {
            backfill_user_id(&mut session, sent.sender)?;
            notice("Message sent.");
        }
        Err(e) => alert(&user_message(&e)),
    }
    Ok(())
}

/// Open an interactive conversation with another user.
///
/// Past messages are printed once, then a readline loop sends each line
/// as a new message. Exit with Ctrl-D, Ctrl-C, or `/quit`.
pub async fn run_open(config: Config, with: i64) -> Result<()> {
    let mut session = SessionStore.require()?;
    let api = ApiClient::new(&config.api)?;

    let my_id = match session.user_id {
        Some(id) => id,
        None => {
            let messages = api.inbox(&session).await.unwrap_or_default();
            match infer_user_id(&messages, with) {
                Some(id) => {
                    backfill_user_id(&mut session, id)?;
                    id
                }
                None => {
                    alert("Could not determine your user id yet. Send a message first with `farmgate chat send`.");
                    return Ok(());
                }
            }
        }
    };

    match api.conversation(&session, my_id, with).await {
        Ok(history) => {
            for msg in &history {
                print_message(msg, my_id);
            }
        }
        Err(e) => {
            alert(&user_message(&e));
            return Ok(());
        }
    }

    let mut rl = DefaultEditor::new()?;
    println!("Chatting with user {}. Type /quit to leave.", with);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                rl.add_history_entry(trimmed)?;

                match api.send_message(&session, with, trimmed).await {
                    Ok(sent) => print_message(&sent, my_id),
                    Err(e) => alert(&user_message(&e)),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Persist a newly learned user id into the stored session.
fn backfill_user_id(session: &mut Session, id: i64) -> Result<()> {
    if session.user_id != Some(id) {
        session.user_id = Some(id);
        SessionStore.save(session)?;
    }
    Ok(())
}

/// Every inbox message involves the logged-in user, so for any message
/// exchanged with `peer` the other party must be us.
fn infer_user_id(messages: &[ChatMessage], peer: i64) -> Option<i64> {
    messages.iter().find_map(|m| {
        if m.sender == peer {
            Some(m.receiver)
        } else if m.receiver == peer {
            Some(m.sender)
        } else {
            None
        }
    })
}

fn print_message(msg: &ChatMessage, my_id: i64) {
    let tag = if msg.sender == my_id {
        "you".green()
    } else {
        format!("user {}", msg.sender).cyan()
    };
    match &msg.date {
        Some(date) => println!("[{}] {}: {}", date, tag, msg.message),
        None => println!("{}: {}", tag, msg.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(sender: i64, receiver: i64) -> ChatMessage {
        ChatMessage {
            id: None,
            sender,
            receiver,
            message: "hi".to_string(),
            date: None,
            is_read: false,
        }
    }

    #[test]
    fn test_infer_user_id_from_received_message() {
        let messages = vec![msg(7, 3)];
        assert_eq!(infer_user_id(&messages, 7), Some(3));
    }

    #[test]
    fn test_infer_user_id_from_sent_message() {
        let messages = vec![msg(3, 7)];
        assert_eq!(infer_user_id(&messages, 7), Some(3));
    }

    #[test]
    fn test_infer_user_id_ignores_other_conversations() {
        let messages = vec![msg(4, 5), msg(3, 7)];
        assert_eq!(infer_user_id(&messages, 9), None);
        assert_eq!(infer_user_id(&messages, 5), Some(4));
    }
}
