//! Farmgate - command-line client for the Farmer Market API
//!
//! This library provides the building blocks of the Farmgate client:
//! a token-based session store backed by the OS keyring, an HTTP client
//! for the marketplace API, and the command handlers that render each
//! screen in the terminal.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: session token persistence and the logged-in gate
//! - `api`: HTTP client and typed endpoint calls
//! - `models`: mirrored server-owned entities
//! - `commands`: per-screen command handlers
//! - `screen`: loading/ready/failed screen flow and terminal alerts
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use farmgate::{ApiClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let api = ApiClient::new(&config.api)?;
//!     let products = api.list_products().await?;
//!     println!("{} products", products.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod screen;
pub mod session;

// Re-export commonly used types
pub use api::{ApiClient, FALLBACK_ERROR};
pub use config::Config;
pub use error::{FarmgateError, Result};
pub use session::{Session, SessionStore, UserRole};
