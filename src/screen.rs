//! Per-screen state and alert rendering
//!
//! Every data-bearing screen follows the same three-state shape:
//! `loading -> {data | error}`. There is no stale-while-revalidate, no
//! optimistic update, and no cancellation of in-flight requests; a failed
//! fetch is terminal for that invocation and surfaces a one-shot alert.

use std::future::Future;

use colored::Colorize;

use crate::error::FarmgateError;
use crate::error::Result;

/// State of one screen's data fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    /// The request has not resolved yet.
    Loading,
    /// The fetch succeeded and the screen holds its data.
    Ready(T),
    /// The fetch failed; the screen holds the user-facing message.
    Failed(String),
}

impl<T> ScreenState<T> {
    /// Drive a fetch future to completion, resolving into `Ready` or
    /// `Failed`. `Loading` is the initial value for screens that hold
    /// their state across turns; [`ScreenState::is_loading`] observes it.
    pub async fn resolve<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T>>,
    {
        match fut.await {
            Ok(data) => ScreenState::Ready(data),
            Err(e) => ScreenState::Failed(user_message(&e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    /// Unpack the screen, printing the alert and returning `None` on
    /// failure. `Loading` also yields `None`: a screen rendered before
    /// its fetch resolved has nothing to show.
    pub fn into_ready(self) -> Option<T> {
        match self {
            ScreenState::Ready(data) => Some(data),
            ScreenState::Failed(message) => {
                alert(&message);
                None
            }
            ScreenState::Loading => None,
        }
    }
}

/// Extract the one-line user-facing message from an error chain.
///
/// API and session errors already carry the exact wording the screen
/// should show; anything else (transport failures, bad JSON) collapses to
/// its display string.
pub fn user_message(err: &anyhow::Error) -> String {
    if let Some(fg) = err.downcast_ref::<FarmgateError>() {
        return fg.to_string();
    }
    err.to_string()
}

/// Print a one-shot error alert to stderr.
pub fn alert(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a success notice.
pub fn notice(message: &str) {
    println!("{} {}", "OK:".green().bold(), message);
}
