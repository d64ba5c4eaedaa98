use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::application::ports::outbound::{KeyValueStorePort, StorageError, StoreName};

/// Key-value stores backed by a single SQLite table keyed by `(store, key)`
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                store TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (store, key)
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Self::new(pool).await
    }
}

#[async_trait]
impl KeyValueStorePort for SqliteKeyValueStore {
    async fn get(&self, store: StoreName, key: &str) -> Result<Option<String>, StorageError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM kv_store WHERE store = ? AND key = ?")
                .bind(store.as_str())
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StorageError::read(store, e))?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, store: StoreName, key: &str, value: String) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT OR REPLACE INTO kv_store (store, key, value, updated_at) VALUES (?, ?, ?, CURRENT_TIMESTAMP)",
        )
        .bind(store.as_str())
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::write(store, e))?;

        Ok(())
    }

    async fn remove(&self, store: StoreName, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv_store WHERE store = ? AND key = ?")
            .bind(store.as_str())
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::delete(store, e))?;

        Ok(())
    }

    async fn values(&self, store: StoreName) -> Result<Vec<String>, StorageError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT value FROM kv_store WHERE store = ? ORDER BY key")
                .bind(store.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StorageError::read(store, e))?;

        Ok(rows.into_iter().map(|(value,)| value).collect())
    }

    async fn clear(&self, store: StoreName) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv_store WHERE store = ?")
            .bind(store.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::delete(store, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteKeyValueStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteKeyValueStore::new(pool).await.unwrap()
    }

    #[tokio::test]
    async fn test_set_get_overwrite() {
        let store = store().await;
        assert!(store.get(StoreName::Games, "a").await.unwrap().is_none());

        store.set(StoreName::Games, "a", "1".to_string()).await.unwrap();
        store.set(StoreName::Games, "a", "2".to_string()).await.unwrap();
        assert_eq!(store.get(StoreName::Games, "a").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_stores_are_isolated() {
        let store = store().await;
        store.set(StoreName::Games, "k", "game".to_string()).await.unwrap();
        store.set(StoreName::Collection, "k", "item".to_string()).await.unwrap();

        store.clear(StoreName::Games).await.unwrap();
        assert!(store.values(StoreName::Games).await.unwrap().is_empty());
        assert_eq!(store.values(StoreName::Collection).await.unwrap(), vec!["item"]);
    }

    #[tokio::test]
    async fn test_values_ordered_by_key_and_remove() {
        let store = store().await;
        for key in ["c", "a", "b"] {
            store.set(StoreName::Achievements, key, key.to_uppercase()).await.unwrap();
        }
        store.remove(StoreName::Achievements, "b").await.unwrap();
        store.remove(StoreName::Achievements, "missing").await.unwrap();

        assert_eq!(store.values(StoreName::Achievements).await.unwrap(), vec!["A", "C"]);
    }
}
