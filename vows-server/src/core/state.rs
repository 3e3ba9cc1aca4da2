use crate::core::{Config, Result};
use crate::db::SeatingStorage;

/// Shared handler state
///
/// Cheap to clone; storage is behind an `Arc`.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Immutable configuration |
/// | storage | SeatingStorage | Guest directory and seating layouts |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub storage: SeatingStorage,
}

impl ServerState {
    /// Open the on-disk database under the work directory
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(config.database_dir())?;
        let path = config.database_path();
        let storage = SeatingStorage::open(&path)?;
        tracing::info!(path = %path.display(), "Database opened");

        Ok(Self::with_storage(config.clone(), storage))
    }

    /// Build state around an existing storage handle
    pub fn with_storage(config: Config, storage: SeatingStorage) -> Self {
        Self { config, storage }
    }
}
