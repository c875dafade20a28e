//! Command-line interface definition for Farmgate
//!
//! This module defines the CLI structure using clap's derive API. Each
//! subcommand corresponds to one screen group: login and registration
//! forms, the product catalog, the buyer cart, order history, chat, and
//! the farmer dashboard and reports.

use clap::{Parser, Subcommand};

/// Farmgate - command-line client for the Farmer Market API
///
/// Browse products, manage your cart and orders as a buyer, or manage
/// your products, profile, and reports as a farmer.
#[derive(Parser, Debug, Clone)]
#[command(name = "farmgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the API base URL from config
    #[arg(long, env = "FARMGATE_API_BASE")]
    pub api_base: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Farmgate
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Account username (the part before '@' of your email)
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Role to log in as: farmer or buyer
        #[arg(short, long)]
        role: String,
    },

    /// Remove the stored session
    Logout,

    /// Register a new account
    Register {
        #[command(subcommand)]
        command: RegisterCommand,
    },

    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        command: ProductCommand,
    },

    /// Manage the buyer cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    /// View past orders
    Orders {
        #[command(subcommand)]
        command: OrderCommand,
    },

    /// Chat with other users
    Chat {
        #[command(subcommand)]
        command: ChatCommand,
    },

    /// Farmer dashboard, profile, and product management
    Farm {
        #[command(subcommand)]
        command: FarmCommand,
    },

    /// Sales and inventory reports
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
}

/// Registration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum RegisterCommand {
    /// Register a farmer account
    Farmer {
        /// Display name
        #[arg(long)]
        name: String,

        /// Farm location
        #[arg(long)]
        location: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Email address (also used to derive the username)
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Register a buyer account
    Buyer {
        /// Delivery address
        #[arg(long)]
        delivery_address: String,

        /// Contact phone number (digits only)
        #[arg(long)]
        contact_number: String,

        /// Email address (also used to derive the username)
        #[arg(long)]
        email: String,

        /// Account password (minimum 6 characters)
        #[arg(long)]
        password: String,
    },
}

/// Product catalog subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ProductCommand {
    /// List all products
    List {
        /// Output machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one product in detail
    Show {
        /// Product identifier
        #[arg(short, long)]
        id: i64,
    },

    /// List product categories
    Categories,
}

/// Cart subcommands (buyer)
#[derive(Subcommand, Debug, Clone)]
pub enum CartCommand {
    /// Show the current cart
    Show,

    /// Add a product to the cart
    Add {
        /// Product identifier
        #[arg(short, long)]
        product: i64,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },

    /// Remove an item from the cart
    Remove {
        /// Cart item identifier (as shown by `cart show`)
        #[arg(short, long)]
        item: i64,
    },

    /// Apply a promo code
    Promo {
        /// Promo code
        #[arg(short = 'c', long)]
        code: String,
    },

    /// Place the order for the current cart
    Checkout {
        /// Delivery address for this order
        #[arg(short, long)]
        delivery: String,
    },
}

/// Order history subcommands (buyer)
#[derive(Subcommand, Debug, Clone)]
pub enum OrderCommand {
    /// List past orders
    List {
        /// Output machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one order with its delivery status
    Show {
        /// Order identifier
        #[arg(short, long)]
        id: i64,
    },
}

/// Chat subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ChatCommand {
    /// Show received messages
    Inbox,

    /// Open an interactive conversation with a user
    Open {
        /// Numeric id of the other user
        #[arg(short, long)]
        with: i64,
    },

    /// Send a single message
    Send {
        /// Numeric id of the receiving user
        #[arg(short, long)]
        to: i64,

        /// Message text
        #[arg(short, long)]
        message: String,
    },
}

/// Farmer surface subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum FarmCommand {
    /// Show your products and totals
    Dashboard,

    /// Show your profile
    Profile,

    /// Update your profile
    EditProfile {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Farm location
        #[arg(long)]
        location: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,
    },

    /// Add a product (with an image upload)
    AddProduct {
        /// Product name
        #[arg(long)]
        name: String,

        /// Price per unit
        #[arg(long)]
        price: f64,

        /// Product description
        #[arg(long)]
        description: String,

        /// Quantity available
        #[arg(long)]
        quantity: i64,

        /// Category identifier (see `products categories`)
        #[arg(long)]
        category: i64,

        /// Popularity rank
        #[arg(long, default_value_t = 0)]
        popularity: i64,

        /// Path to the product image file
        #[arg(long)]
        image: std::path::PathBuf,
    },

    /// Update an existing product
    UpdateProduct {
        /// Product identifier
        #[arg(short, long)]
        id: i64,

        /// New product name
        #[arg(long)]
        name: String,

        /// New price per unit
        #[arg(long)]
        price: f64,

        /// New quantity available
        #[arg(long)]
        quantity: i64,

        /// New category identifier
        #[arg(long)]
        category: i64,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ReportCommand {
    /// Sales report over a date range
    Sales {
        /// Range start, YYYY-MM-DD
        #[arg(long)]
        start: String,

        /// Range end, YYYY-MM-DD
        #[arg(long)]
        end: String,

        /// Report granularity understood by the server (e.g. daily, weekly)
        #[arg(long, default_value = "daily")]
        report_type: String,
    },

    /// Inventory report over a date range
    Inventory {
        /// Range start, YYYY-MM-DD
        #[arg(long)]
        start: String,

        /// Range end, YYYY-MM-DD
        #[arg(long)]
        end: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            api_base: None,
            no_color: false,
            verbose: false,
            command: Commands::Products {
                command: ProductCommand::List { json: false },
            },
        }
    }
}
