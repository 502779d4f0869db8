//! Country admin: REST gateway over the `country` reference table, and the list view
//! (pagination, selection, bulk delete, edit panel) that consumes it.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod view;

pub use client::{ClientError, CountriesApi, HttpCountriesApi};
pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Country, NewCountry};
pub use response::{success, Envelope};
pub use routes::{app, common_routes_with_ready, country_routes};
pub use state::AppState;
pub use store::{ensure_country_table, ensure_database_exists, CountryStore, MemoryCountryStore, PgCountryStore};
pub use view::{EditPanel, ListView, PageWindow, Phase};
