/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint,
one module per screen group:

- `auth`     — login, logout, registration forms
- `products` — public catalog screens
- `cart`     — buyer cart and checkout
- `orders`   — buyer order history and tracking
- `chat`     — inbox and conversation screens
- `farm`     — farmer dashboard, profile, product management
- `reports`  — sales and inventory reports

Handlers are intentionally small: read the session where required, issue
the API call, resolve it into a screen state, render.
*/

pub mod auth;
pub mod cart;
pub mod chat;
pub mod farm;
pub mod orders;
pub mod products;
pub mod reports;
