use crate::core::{CatalogItem, CuratorError, ItemId};
use crate::keywords::KeywordSet;
use sqlx::SqlitePool;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: i64,
    pub query: String,
    pub catalog_digest: String,
    pub created_at: i64,
    pub keywords: Vec<String>,
    pub results: Vec<ItemId>,
}

/// Persists past recommendation queries so frequent interests can be surfaced later.
pub struct HistoryStore {
    pub db: SqlitePool,
}

impl HistoryStore {
    pub async fn new(db_url: &str) -> Result<Self, CuratorError> {
        let db = SqlitePool::connect(db_url).await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS searches (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                query TEXT NOT NULL,
                catalog_digest TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );
            CREATE TABLE IF NOT EXISTS search_keywords (
                search_id INTEGER NOT NULL,
                keyword TEXT NOT NULL,
                PRIMARY KEY (search_id, keyword)
            );
            CREATE TABLE IF NOT EXISTS search_results (
                search_id INTEGER NOT NULL,
                position INTEGER NOT NULL,
                item_id TEXT NOT NULL,
                PRIMARY KEY (search_id, position)
            );",
        )
        .execute(&db)
        .await?;

        Ok(Self { db })
    }

    pub async fn record(
        &self,
        query: &str,
        catalog_digest: &str,
        keywords: &KeywordSet,
        items: &[&CatalogItem],
    ) -> Result<i64, CuratorError> {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();

        let mut tx = self.db.begin().await?;

        let search_id = sqlx::query(
            "INSERT INTO searches (query, catalog_digest, created_at) VALUES (?, ?, ?)",
        )
        .bind(query)
        .bind(catalog_digest)
        .bind(created_at)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for keyword in keywords.iter() {
            sqlx::query("INSERT OR IGNORE INTO search_keywords (search_id, keyword) VALUES (?, ?)")
                .bind(search_id)
                .bind(keyword)
                .execute(&mut *tx)
                .await?;
        }

        for (position, item) in items.iter().enumerate() {
            sqlx::query("INSERT INTO search_results (search_id, position, item_id) VALUES (?, ?, ?)")
                .bind(search_id)
                .bind(position as i64)
                .bind(&item.id.0)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(search_id)
    }

    /// Newest first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<HistoryEntry>, CuratorError> {
        let rows: Vec<(i64, String, String, i64)> = sqlx::query_as(
            "SELECT id, query, catalog_digest, created_at FROM searches ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for (id, query, catalog_digest, created_at) in rows {
            let keywords: Vec<(String,)> = sqlx::query_as(
                "SELECT keyword FROM search_keywords WHERE search_id = ? ORDER BY keyword",
            )
            .bind(id)
            .fetch_all(&self.db)
            .await?;

            let results: Vec<(String,)> = sqlx::query_as(
                "SELECT item_id FROM search_results WHERE search_id = ? ORDER BY position",
            )
            .bind(id)
            .fetch_all(&self.db)
            .await?;

            entries.push(HistoryEntry {
                id,
                query,
                catalog_digest,
                created_at,
                keywords: keywords.into_iter().map(|(k,)| k).collect(),
                results: results.into_iter().map(|(r,)| ItemId(r)).collect(),
            });
        }

        Ok(entries)
    }

    /// Most frequent keywords across all recorded searches.
    pub async fn top_keywords(&self, limit: i64) -> Result<Vec<(String, i64)>, CuratorError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT keyword, COUNT(*) AS hits FROM search_keywords
             GROUP BY keyword ORDER BY hits DESC, keyword ASC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    pub async fn clear(&self) -> Result<(), CuratorError> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM search_results")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM search_keywords")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM searches").execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::item;
    use tempfile::TempDir;

    async fn store() -> (TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/history.db?mode=rwc", dir.path().display());
        let store = HistoryStore::new(&url).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_record_and_read_back() {
        let (_dir, store) = store().await;
        let tee = item("tee-01", "Urban Tee", "clothing", &[], "");
        let cap = item("cap-01", "Urban Cap", "accessories", &[], "");
        let keywords: KeywordSet = ["urban", "cap"].iter().collect();

        let id = store
            .record("urban cap", "abc", &keywords, &[&cap, &tee])
            .await
            .unwrap();

        let entries = store.recent(10).await.unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, id);
        assert_eq!(entry.query, "urban cap");
        assert_eq!(entry.catalog_digest, "abc");
        assert_eq!(entry.keywords, vec!["cap", "urban"]);
        assert_eq!(
            entry.results,
            vec![ItemId("cap-01".into()), ItemId("tee-01".into())]
        );
    }

    #[tokio::test]
    async fn test_recent_is_newest_first_and_limited() {
        let (_dir, store) = store().await;
        for query in ["punk", "jazz", "reggae"] {
            let keywords: KeywordSet = [query].iter().collect();
            store.record(query, "d", &keywords, &[]).await.unwrap();
        }

        let entries = store.recent(2).await.unwrap();
        let queries: Vec<&str> = entries.iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["reggae", "jazz"]);
        assert!(entries[0].results.is_empty());
    }

    #[tokio::test]
    async fn test_top_keywords_counts_across_searches() {
        let (_dir, store) = store().await;
        let a: KeywordSet = ["punk", "jacket"].iter().collect();
        let b: KeywordSet = ["punk"].iter().collect();
        let c: KeywordSet = ["jazz"].iter().collect();
        store.record("a", "d", &a, &[]).await.unwrap();
        store.record("b", "d", &b, &[]).await.unwrap();
        store.record("c", "d", &c, &[]).await.unwrap();

        let top = store.top_keywords(2).await.unwrap();
        assert_eq!(top, vec![("punk".to_string(), 2), ("jacket".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let (_dir, store) = store().await;
        let keywords: KeywordSet = ["punk"].iter().collect();
        let tee = item("tee-01", "Punk Tee", "clothing", &[], "");
        store.record("punk", "d", &keywords, &[&tee]).await.unwrap();

        store.clear().await.unwrap();
        assert!(store.recent(10).await.unwrap().is_empty());
        assert!(store.top_keywords(10).await.unwrap().is_empty());
    }
}
