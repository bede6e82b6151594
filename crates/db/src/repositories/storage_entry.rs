use crate::models::DbStorageEntry;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_entry(pool: &Pool<Postgres>, key: &str) -> Result<Option<DbStorageEntry>> {
    tracing::debug!("Getting storage entry: key={}", key);

    let entry = sqlx::query_as::<_, DbStorageEntry>(
        r#"
        SELECT key, value, updated_at
        FROM storage_entries
        WHERE key = $1
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(entry)
}

/// Writes every entry in a single transaction, replacing existing values.
pub async fn upsert_entries(
    pool: &Pool<Postgres>,
    entries: &[(String, serde_json::Value)],
) -> Result<()> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    for (key, value) in entries {
        tracing::debug!("Upserting storage entry: key={}", key);
        sqlx::query(
            r#"
            INSERT INTO storage_entries (key, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
