//! Country admin server: loads config from env, prepares the store, serves the API and list page.
//!
//! Run from repo root: `cargo run -p admin-server`
//! `COUNTRY_STORE=memory` serves from an in-process store without a database.

use country_admin::{
    app, ensure_country_table, ensure_database_exists, AppState, MemoryCountryStore, PgCountryStore,
    ServerConfig, StoreKind,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("country_admin=info,admin_server=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = match config.store {
        StoreKind::Memory => {
            tracing::info!("using in-memory country store");
            AppState::new(MemoryCountryStore::new())
        }
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_country_table(&pool, &config.schema).await?;
            AppState::new(PgCountryStore::new(pool, &config.schema))
        }
    };

    let router: axum::Router = app(state, config.max_body_bytes);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
