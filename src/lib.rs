//! FoodBridge — data access and query layer for a food donation network.
//!
//! SQLite-backed store over four tables (providers, receivers, food
//! listings, claims) with typed CRUD accessors, a conjunctive filter
//! builder, a fixed catalog of analytical reports, and the dashboard
//! queries the admin surface renders. All reads come back either as typed
//! rows or as a [`table::Table`] exportable to CSV.

pub mod config;
pub mod db;
pub mod error;
pub mod filter;
mod migrations;
pub mod reports;
pub mod services;
pub mod state;
pub mod table;

pub use config::StoreConfig;
pub use db::FoodDb;
pub use error::ActionOutcome;
pub use state::AppState;
pub use table::Table;

/// Initialize env_logger. Safe to call more than once; later calls are
/// no-ops. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
