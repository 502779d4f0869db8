//! Postgres backend. The table lives in the schema given at construction (default `public`).

use super::CountryStore;
use crate::error::{AppError, ConfigError};
use crate::model::Country;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const TABLE: &str = "country";

#[derive(Clone)]
pub struct PgCountryStore {
    pool: PgPool,
    table: String,
}

impl PgCountryStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgCountryStore {
            pool,
            table: qualified_table(schema),
        }
    }
}

/// `last_update` is cast so both `timestamp` and `timestamptz` columns decode as UTC.
const COLUMNS: &str = "country_id, country, last_update::timestamptz AS last_update";

fn list_sql(table: &str) -> String {
    format!("SELECT {} FROM {} ORDER BY country", COLUMNS, table)
}

fn insert_sql(table: &str) -> String {
    format!("INSERT INTO {} (country) VALUES ($1) RETURNING {}", table, COLUMNS)
}

#[async_trait]
impl CountryStore for PgCountryStore {
    async fn list(&self) -> Result<Vec<Country>, AppError> {
        let rows: Vec<Country> = sqlx::query_as(&list_sql(&self.table))
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!(count = rows.len(), "listed countries");
        Ok(rows)
    }

    async fn create(&self, name: &str) -> Result<Country, AppError> {
        let row: Country = sqlx::query_as(&insert_sql(&self.table))
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        tracing::info!(country_id = row.country_id, "created country");
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the schema and `country` table if missing. Existing tables are left as they are.
pub async fn ensure_country_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            country_id SERIAL PRIMARY KEY,
            country TEXT NOT NULL,
            last_update TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        qualified_table(schema)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Options for the `postgres` maintenance database plus the target database name,
/// or `None` when the URL already points at `postgres` (or names no database).
fn maintenance_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, ConfigError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::InvalidVar {
        var: "DATABASE_URL",
        reason: e.to_string(),
    })?;
    let name = opts.get_database().map(str::to_string);
    match name {
        Some(name) if !name.is_empty() && name != "postgres" => Ok(Some((opts.database("postgres"), name))),
        _ => Ok(None),
    }
}

/// Create the database named in `database_url` if it does not exist yet. Call before
/// building the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = maintenance_target(database_url)? else {
        return Ok(());
    };
    let mut conn = admin.connect().await?;
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(TABLE))
}
