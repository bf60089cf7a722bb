use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::item_repository::ItemRepository;
use crate::domain::items::item::Item;
use crate::infrastructure::db::PgPool;

pub struct SqlxItemRepository {
    pub pool: PgPool,
}

impl SqlxItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_item(row: &sqlx::postgres::PgRow) -> Item {
    Item {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    }
}

#[async_trait]
impl ItemRepository for SqlxItemRepository {
    async fn list(&self) -> anyhow::Result<Vec<Item>> {
        let rows = sqlx::query(r#"SELECT id, name, description FROM items ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(to_item).collect())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Item>> {
        let row = sqlx::query(r#"SELECT id, name, description FROM items WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(to_item))
    }

    async fn insert(&self, name: &str, description: &str) -> anyhow::Result<Item> {
        let row = sqlx::query(
            r#"INSERT INTO items (name, description) VALUES ($1, $2)
               RETURNING id, name, description"#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(to_item(&row))
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        description: &str,
    ) -> anyhow::Result<Option<Item>> {
        let row = sqlx::query(
            r#"UPDATE items SET name = $2, description = $3 WHERE id = $1
               RETURNING id, name, description"#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(to_item))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
