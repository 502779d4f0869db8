//! Persistent store for country records: trait plus Postgres and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryCountryStore;
pub use postgres::{ensure_country_table, ensure_database_exists, PgCountryStore};

use crate::error::AppError;
use crate::model::Country;
use async_trait::async_trait;

#[async_trait]
pub trait CountryStore: Send + Sync {
    /// All records ordered by `country` ascending (ties in store order).
    async fn list(&self) -> Result<Vec<Country>, AppError>;

    /// Insert one record; the store assigns `country_id` and `last_update`.
    async fn create(&self, name: &str) -> Result<Country, AppError>;

    /// Cheap connectivity check for readiness.
    async fn ping(&self) -> Result<(), AppError>;
}
