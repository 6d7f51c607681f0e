//! Warung POS edge server
//!
//! A single process that owns the document store for a small food stall
//! and exposes the POS operations over HTTP:
//!
//! - **store**: embedded document collections (redb) with full-collection
//!   snapshot publication
//! - **session**: role gate, PIN credentials, persisted login
//! - **catalog**: search / category filtering with memoization
//! - **cart**: transient cart and discount math
//! - **marketing**: promo code lookup
//! - **reporting**: dashboard sales aggregates
//! - **checkout**: atomic sale + stock decrement
//! - **api**: HTTP routes and handlers
//!
//! ```text
//! warung-server/src/
//! ├── core/       # config, state, server
//! ├── store/      # document store + typed repositories
//! ├── session/    # role gate, credentials, persistence
//! ├── catalog/    # product filtering
//! ├── cart/       # cart engine and totals
//! ├── marketing/  # promo lookup
//! ├── reporting/  # sales aggregates
//! ├── checkout/   # checkout orchestration + receipt
//! ├── api/        # HTTP routes and handlers
//! └── utils/      # logging, shared error re-exports
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod marketing;
pub mod reporting;
pub mod session;
pub mod store;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(Some(&log_level), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _       __
| |     / /___ _______  ______  ____ _
| | /| / / __ `/ ___/ / / / __ \/ __ `/
| |/ |/ / /_/ / /  / /_/ / / / / /_/ /
|__/|__/\__,_/_/   \__,_/_/ /_/\__, /
                              /____/
         P O S   S E R V E R
    "#
    );
}
