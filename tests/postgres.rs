//! `PgCountryStore` against a live database.
//!
//! Runs only when `DATABASE_URL` is set, e.g.
//! `DATABASE_URL="postgres://localhost/rental_test" cargo test --test postgres`.
//! Each test works in its own throwaway schema.

use chrono::{DateTime, Utc};
use country_admin::{ensure_country_table, CountryStore, PgCountryStore};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::{SystemTime, UNIX_EPOCH};

async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty())?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("DATABASE_URL is set but not reachable");
    Some(pool)
}

fn scratch_schema(tag: &str) -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().subsec_nanos();
    format!("country_test_{}_{}_{}", tag, std::process::id(), nanos)
}

async fn drop_schema(pool: &PgPool, schema: &str) {
    sqlx::query(&format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", schema))
        .execute(pool)
        .await
        .unwrap();
}

async fn db_now(pool: &PgPool) -> DateTime<Utc> {
    let (now,): (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()").fetch_one(pool).await.unwrap();
    now
}

#[tokio::test]
async fn list_sorts_scrambled_names_and_create_returns_stored_row() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let schema = scratch_schema("tz");
    ensure_country_table(&pool, &schema).await.unwrap();
    let store = PgCountryStore::new(pool.clone(), &schema);

    assert!(store.list().await.unwrap().is_empty());

    let before = db_now(&pool).await;
    let wakanda = store.create("Wakanda").await.unwrap();
    assert_eq!(wakanda.country, "Wakanda");
    assert!(wakanda.country_id > 0);
    assert!(wakanda.last_update >= before);

    for name in ["Zimbabwe", "Chad", "Mongolia", "Austria"] {
        store.create(name).await.unwrap();
    }
    let names: Vec<String> = store.list().await.unwrap().into_iter().map(|c| c.country).collect();
    assert_eq!(names, ["Austria", "Chad", "Mongolia", "Wakanda", "Zimbabwe"]);

    drop_schema(&pool, &schema).await;
}

#[tokio::test]
async fn timestamp_without_time_zone_column_decodes() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let schema = scratch_schema("naive");
    sqlx::query(&format!("CREATE SCHEMA \"{}\"", schema)).execute(&pool).await.unwrap();
    sqlx::query(&format!(
        r#"
        CREATE TABLE "{}"."country" (
            country_id SERIAL PRIMARY KEY,
            country VARCHAR(50) NOT NULL,
            last_update TIMESTAMP WITHOUT TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
        schema
    ))
    .execute(&pool)
    .await
    .unwrap();
    ensure_country_table(&pool, &schema).await.unwrap();

    let store = PgCountryStore::new(pool.clone(), &schema);
    let created = store.create("Genovia").await.unwrap();
    assert_eq!(created.country, "Genovia");

    let rows = store.list().await.unwrap();
    assert_eq!(rows, vec![created]);

    drop_schema(&pool, &schema).await;
}
