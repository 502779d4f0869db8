//! In-process store with the same contract as the Postgres one.

use super::CountryStore;
use crate::error::AppError;
use crate::model::Country;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryCountryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Country>,
    last_id: i32,
}

impl MemoryCountryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the given names, inserted in order (ids 1..=n).
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.write() {
            for name in names {
                inner.insert(name.into());
            }
        }
        store
    }
}

impl Inner {
    fn insert(&mut self, country: String) -> Country {
        self.last_id += 1;
        let row = Country {
            country_id: self.last_id,
            country,
            last_update: Utc::now(),
        };
        self.rows.push(row.clone());
        row
    }
}

fn poisoned() -> AppError {
    AppError::Store("memory store lock poisoned".into())
}

#[async_trait]
impl CountryStore for MemoryCountryStore {
    async fn list(&self) -> Result<Vec<Country>, AppError> {
        let mut rows = self.inner.read().map_err(|_| poisoned())?.rows.clone();
        rows.sort_by(|a, b| a.country.cmp(&b.country));
        Ok(rows)
    }

    async fn create(&self, name: &str) -> Result<Country, AppError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        Ok(inner.insert(name.to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.inner.read().map(|_| ()).map_err(|_| poisoned())
    }
}
