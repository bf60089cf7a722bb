use sqlx::{Pool, Postgres};

pub type PgPool = Pool<Postgres>;

/// Pool size comes from `Config::db_max_connections` rather than being
/// fixed here; the item and user repositories share this pool.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Applies the embedded items/users migrations from ./migrations.
pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub mod repositories;
