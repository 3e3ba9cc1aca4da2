//! Vows Server - wedding site backend
//!
//! Serves the guest directory, RSVP intake, the site password gate and the
//! two seating charts the planner edits.
//!
//! ```text
//! vows-server/src/
//! ├── core/     # config, state, server, errors
//! ├── api/      # HTTP routes and handlers
//! ├── db/       # redb storage
//! └── utils/    # logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use db::SeatingStorage;
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and start logging
///
/// Reads `LOG_LEVEL` and `LOG_DIR` directly so logging is up before the
/// rest of the configuration is parsed.
pub fn setup_environment() -> Result<(), ServerError> {
    // .env is optional
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _    __
| |  / /___ _      _______
| | / / __ \ | /| / / ___/
| |/ / /_/ / |/ |/ (__  )
|___/\____/|__/|__/____/
    "#
    );
}
