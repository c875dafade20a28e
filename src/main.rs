//! Farmgate - command-line client for the Farmer Market API
//!
#![doc = "Farmgate - command-line client for the Farmer Market API"]
#![doc = "Main entry point for the Farmgate application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use farmgate::cli::{
    CartCommand, ChatCommand, Cli, Commands, FarmCommand, OrderCommand, ProductCommand,
    RegisterCommand, ReportCommand,
};
use farmgate::commands;
use farmgate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Execute command
    match cli.command {
        Commands::Login {
            username,
            password,
            role,
        } => {
            tracing::info!("Logging in as {}", username);
            commands::auth::run_login(config, &username, &password, &role).await?;
            Ok(())
        }
        Commands::Logout => {
            commands::auth::run_logout().await?;
            Ok(())
        }
        Commands::Register { command } => match command {
            RegisterCommand::Farmer {
                name,
                location,
                phone,
                email,
                password,
            } => {
                tracing::info!("Registering farmer account");
                commands::auth::run_register_farmer(
                    config, &name, &location, &phone, &email, &password,
                )
                .await?;
                Ok(())
            }
            RegisterCommand::Buyer {
                delivery_address,
                contact_number,
                email,
                password,
            } => {
                tracing::info!("Registering buyer account");
                commands::auth::run_register_buyer(
                    config,
                    &delivery_address,
                    &contact_number,
                    &email,
                    &password,
                )
                .await?;
                Ok(())
            }
        },
        Commands::Products { command } => match command {
            ProductCommand::List { json } => {
                commands::products::run_list(config, json).await?;
                Ok(())
            }
            ProductCommand::Show { id } => {
                commands::products::run_show(config, id).await?;
                Ok(())
            }
            ProductCommand::Categories => {
                commands::products::run_categories(config).await?;
                Ok(())
            }
        },
        Commands::Cart { command } => match command {
            CartCommand::Show => {
                commands::cart::run_show(config).await?;
                Ok(())
            }
            CartCommand::Add { product, quantity } => {
                commands::cart::run_add(config, product, quantity).await?;
                Ok(())
            }
            CartCommand::Remove { item } => {
                commands::cart::run_remove(config, item).await?;
                Ok(())
            }
            CartCommand::Promo { code } => {
                commands::cart::run_promo(config, code).await?;
                Ok(())
            }
            CartCommand::Checkout { delivery } => {
                commands::cart::run_checkout(config, delivery).await?;
                Ok(())
            }
        },
        Commands::Orders { command } => match command {
            OrderCommand::List { json } => {
                commands::orders::run_list(config, json).await?;
                Ok(())
            }
            OrderCommand::Show { id } => {
                commands::orders::run_show(config, id).await?;
                Ok(())
            }
        },
        Commands::Chat { command } => match command {
            ChatCommand::Inbox => {
                commands::chat::run_inbox(config).await?;
                Ok(())
            }
            ChatCommand::Open { with } => {
                tracing::info!("Opening conversation with user {}", with);
                commands::chat::run_open(config, with).await?;
                Ok(())
            }
            ChatCommand::Send { to, message } => {
                commands::chat::run_send(config, to, message).await?;
                Ok(())
            }
        },
        Commands::Farm { command } => match command {
            FarmCommand::Dashboard => {
                commands::farm::run_dashboard(config).await?;
                Ok(())
            }
            FarmCommand::Profile => {
                commands::farm::run_profile(config).await?;
                Ok(())
            }
            FarmCommand::EditProfile {
                name,
                location,
                phone,
                email,
            } => {
                commands::farm::run_edit_profile(config, name, location, phone, email).await?;
                Ok(())
            }
            FarmCommand::AddProduct {
                name,
                price,
                description,
                quantity,
                category,
                popularity,
                image,
            } => {
                tracing::info!("Creating product {}", name);
                commands::farm::run_add_product(
                    config,
                    name,
                    price,
                    description,
                    quantity,
                    category,
                    popularity,
                    image,
                )
                .await?;
                Ok(())
            }
            FarmCommand::UpdateProduct {
                id,
                name,
                price,
                quantity,
                category,
            } => {
                commands::farm::run_update_product(config, id, name, price, quantity, category)
                    .await?;
                Ok(())
            }
        },
        Commands::Report { command } => match command {
            ReportCommand::Sales {
                start,
                end,
                report_type,
            } => {
                commands::reports::run_sales(config, start, end, report_type).await?;
                Ok(())
            }
            ReportCommand::Inventory { start, end } => {
                commands::reports::run_inventory(config, start, end).await?;
                Ok(())
            }
        },
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "farmgate=debug" } else { "farmgate=info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
