//! Postgres connection pool backing the roost repositories

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool handle shared by every repository
pub type DbPool = PgPool;

/// Connect a bounded pool to the roost database.
///
/// All repositories clone this pool; connection limits live here rather than
/// per repository.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
