//! Rave CLI - Terminal client for the Rave Collection storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog and build a cart
//! rave products --brand Apex
//! rave cart add 7 --quantity 2
//! rave cart show
//!
//! # Check out against a saved address
//! rave addresses list
//! rave checkout --address 3 --notes "Leave at the gate"
//!
//! # Watch the cart change from other terminals
//! rave watch
//! ```
//!
//! # Commands
//!
//! - `cart` - Show and mutate the persisted cart
//! - `checkout` - Submit the cart as an order
//! - `products` / `orders` / `addresses` - Browse remote data
//! - `login` / `register` / `whoami` / `profile` - Account management
//! - `dashboard` - Role-gated back-office views
//! - `pos` / `admin` - Employee and admin operations
//! - `watch` - Follow cart change signals, including other processes'

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rave_storefront::config::StorefrontConfig;
use rave_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "rave")]
#[command(author, version, about = "Rave Collection storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show and mutate the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Submit the cart as an order
    Checkout {
        /// Shipping address id (see `rave addresses list`)
        #[arg(short, long)]
        address: Option<i32>,

        /// Free-form note for the order
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// List catalog products
    Products {
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        section: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// List the current account's orders, or show one
    Orders {
        /// Order id to show
        id: Option<i32>,
    },
    /// Manage saved addresses
    Addresses {
        #[command(subcommand)]
        action: AddressAction,
    },
    /// Log in and persist the session token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Show the logged-in account
    Whoami,
    /// Manage the account profile and reviews
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Open the role-gated dashboard
    Dashboard,
    /// Ring up an in-store sale (employee/admin)
    Pos {
        /// Items as `product-id:quantity` pairs (bare id means one unit)
        #[arg(required = true)]
        items: Vec<String>,

        /// Customer phone number to attach the sale to
        #[arg(long)]
        phone: Option<String>,
    },
    /// Store administration (admin/employee)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Follow cart change signals until interrupted
    Watch,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the profile
    Show,
    /// Update profile fields
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List the account's orders
    Orders,
    /// Cancel a pending order
    Cancel { order_id: i32 },
    /// List the account's reviews
    Reviews,
    /// Review a purchased product
    Review {
        #[arg(long)]
        product: i32,
        #[arg(long)]
        order: Option<i32>,
        #[arg(long)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Change an account's role
    Promote {
        #[arg(long)]
        user: i32,
        /// `customer`, `employee`, or `admin`
        #[arg(long)]
        role: String,
    },
    /// Move an order to a new status
    OrderStatus { order_id: i32, status: String },
    /// Overwrite a product's stock level
    Stock { product_id: i32, stock: i32 },
    /// Remove a product from the catalog
    DeleteProduct { product_id: i32 },
    /// Create a commission rate tier
    AddRate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        min_sales: rust_decimal::Decimal,
        #[arg(long)]
        max_sales: Option<rust_decimal::Decimal>,
        /// Fraction, not a percentage: 0.05 is five percent
        #[arg(long)]
        rate: rust_decimal::Decimal,
    },
    /// Overwrite a commission rate tier
    UpdateRate {
        id: i32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        min_sales: rust_decimal::Decimal,
        #[arg(long)]
        max_sales: Option<rust_decimal::Decimal>,
        #[arg(long)]
        rate: rust_decimal::Decimal,
        #[arg(long, default_value_t = true)]
        active: bool,
    },
    /// Delete a commission rate tier
    DeleteRate { id: i32 },
    /// Run the commission calculation for a month
    Calculate {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
    },
    /// Store-wide commission totals
    CommissionSummary,
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart with its derived count and total
    Show,
    /// Add a product to the cart
    Add {
        /// Product id from the catalog
        product_id: i32,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Overwrite a line's quantity (0 removes the line)
    Set {
        product_id: i32,
        quantity: u32,
    },
    /// Remove a line
    Remove { product_id: i32 },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum AddressAction {
    /// List saved addresses
    List,
    /// Save a new address
    Add {
        /// Short label such as "Home" or "Work"
        #[arg(long)]
        label: String,

        /// Recipient name
        #[arg(long)]
        name: String,

        #[arg(long)]
        address_line: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        postal_code: String,
        #[arg(long)]
        phone: String,

        /// Make this the default shipping address
        #[arg(long)]
        default: bool,
    },
    /// Overwrite a saved address
    Update {
        id: i32,
        #[arg(long)]
        label: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        address_line: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        postal_code: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        default: bool,
    },
    /// Delete a saved address
    Delete { id: i32 },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration first; Sentry must init before the subscriber
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            std::process::exit(2);
        }
    };

    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rave_cli=info,rave_storefront=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("Failed to initialize: {err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(cli, &state).await {
        // The taxonomy guarantees a presentable message for every failure.
        eprintln!("{}", err.user_message());
        tracing::debug!("command failed: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, state: &AppState) -> rave_storefront::error::Result<()> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(state),
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(state, product_id, quantity).await,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set(state, product_id, quantity),
            CartAction::Remove { product_id } => commands::cart::remove(state, product_id),
            CartAction::Clear => commands::cart::clear(state),
        },
        Commands::Checkout { address, notes } => {
            commands::checkout::run(state, address, &notes).await
        }
        Commands::Products {
            search,
            category,
            brand,
            section,
            gender,
            color,
        } => {
            commands::shop::products(
                state,
                rave_storefront::api::ProductFilters {
                    search,
                    category,
                    brand,
                    section,
                    gender,
                    color,
                },
            )
            .await
        }
        Commands::Orders { id } => commands::shop::orders(state, id).await,
        Commands::Addresses { action } => match action {
            AddressAction::List => commands::account::addresses(state).await,
            AddressAction::Add {
                label,
                name,
                address_line,
                city,
                postal_code,
                phone,
                default,
            } => {
                commands::account::add_address(
                    state,
                    rave_storefront::api::NewAddress {
                        label,
                        name,
                        address_line,
                        city,
                        postal_code,
                        phone,
                        is_default: default,
                    },
                )
                .await
            }
            AddressAction::Update {
                id,
                label,
                name,
                address_line,
                city,
                postal_code,
                phone,
                default,
            } => {
                commands::account::update_address(
                    state,
                    id,
                    rave_storefront::api::NewAddress {
                        label,
                        name,
                        address_line,
                        city,
                        postal_code,
                        phone,
                        is_default: default,
                    },
                )
                .await
            }
            AddressAction::Delete { id } => commands::account::delete_address(state, id).await,
        },
        Commands::Login { email, password } => {
            commands::account::login(state, email, password).await
        }
        Commands::Register {
            name,
            email,
            password,
            phone,
        } => commands::account::register(state, name, email, password, phone).await,
        Commands::Whoami => commands::account::whoami(state).await,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(state).await,
            ProfileAction::Update { name, phone } => {
                commands::profile::update(state, name, phone).await
            }
            ProfileAction::Orders => commands::profile::orders(state).await,
            ProfileAction::Cancel { order_id } => {
                commands::profile::cancel_order(state, order_id).await
            }
            ProfileAction::Reviews => commands::profile::reviews(state).await,
            ProfileAction::Review {
                product,
                order,
                rating,
                comment,
            } => commands::profile::review(state, product, order, rating, comment).await,
        },
        Commands::Dashboard => commands::dashboard::run(state).await,
        Commands::Pos { items, phone } => commands::pos::run(state, &items, phone).await,
        Commands::Admin { action } => match action {
            AdminAction::Promote { user, role } => commands::admin::promote(state, user, &role).await,
            AdminAction::OrderStatus { order_id, status } => {
                commands::admin::order_status(state, order_id, &status).await
            }
            AdminAction::Stock { product_id, stock } => {
                commands::admin::stock(state, product_id, stock).await
            }
            AdminAction::DeleteProduct { product_id } => {
                commands::admin::delete_product(state, product_id).await
            }
            AdminAction::AddRate {
                name,
                min_sales,
                max_sales,
                rate,
            } => commands::admin::add_rate(state, name, min_sales, max_sales, rate).await,
            AdminAction::UpdateRate {
                id,
                name,
                min_sales,
                max_sales,
                rate,
                active,
            } => {
                commands::admin::update_rate(state, id, name, min_sales, max_sales, rate, active)
                    .await
            }
            AdminAction::DeleteRate { id } => commands::admin::delete_rate(state, id).await,
            AdminAction::Calculate { month, year } => {
                commands::admin::calculate(state, month, year).await
            }
            AdminAction::CommissionSummary => commands::admin::commission_summary(state).await,
        },
        Commands::Watch => commands::watch::run(state).await,
    }
}
