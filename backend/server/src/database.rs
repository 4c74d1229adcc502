//! # Postgres
//!
//! Managed Postgres holding the guest list, reached through one shared pool.
//!
//! ## Requirements
//!
//! - One table, append-only writes, full-table reads
//! - Tiny dataset (one party, capacity ~100), so a handful of connections
//!   is plenty
//!
//! ## Schema
//!
//! The table belongs to the managed store and is created there, not here.
//!
//! | column        | type        | constraint                |
//! |---------------|-------------|---------------------------|
//! | id            | bigint      | unique, store-assigned    |
//! | name          | text        | required                  |
//! | "peopleCount" | integer     | required, default 1       |
//! | created_at    | timestamptz | store-assigned            |
//!
//! ## Implementation
//!
//! - Inserts use `RETURNING` so the caller can echo the stored row back
//! - Reads order by `id` so the roster always renders in confirmation order
use std::time::Duration;

use roster::Rsvp;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_postgres(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(4)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
        .unwrap()
}

pub async fn insert_guest(
    pool: &PgPool,
    name: &str,
    people_count: i32,
) -> Result<Rsvp, sqlx::Error> {
    sqlx::query_as::<_, Rsvp>(
        r#"
        INSERT INTO people (name, "peopleCount")
        VALUES ($1, $2)
        RETURNING id, name, "peopleCount", created_at
        "#,
    )
    .bind(name)
    .bind(people_count)
    .fetch_one(pool)
    .await
}

pub async fn fetch_guests(pool: &PgPool) -> Result<Vec<Rsvp>, sqlx::Error> {
    sqlx::query_as::<_, Rsvp>(
        r#"
        SELECT id, name, "peopleCount", created_at
        FROM people
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}
