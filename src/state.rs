//! Shared application state.
//!
//! The connection wrapper is not `Sync`, so callers behind a shared handle go
//! through a mutex. Services take `&FoodDb`; `with_db` hands them a guarded
//! reference and maps a poisoned lock to a plain error message.

use std::sync::Mutex;

use crate::config::StoreConfig;
use crate::db::FoodDb;

pub struct AppState {
    pub config: StoreConfig,
    db: Mutex<FoodDb>,
}

impl AppState {
    pub fn new(config: StoreConfig, db: FoodDb) -> Self {
        Self {
            config,
            db: Mutex::new(db),
        }
    }

    /// Load config and open the store it points at.
    pub fn init() -> Result<Self, String> {
        let config = StoreConfig::load()?;
        let db = FoodDb::open_with(&config).map_err(|e| e.to_string())?;
        Ok(Self::new(config, db))
    }

    /// Run a closure against the store under the lock.
    pub fn with_db<T>(&self, f: impl FnOnce(&FoodDb) -> T) -> Result<T, String> {
        let db = self.db.lock().map_err(|_| "Lock poisoned".to_string())?;
        Ok(f(&db))
    }
}
