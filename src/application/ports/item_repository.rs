use async_trait::async_trait;

use crate::domain::items::item::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Item>>;
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Item>>;
    async fn insert(&self, name: &str, description: &str) -> anyhow::Result<Item>;
    async fn update(&self, id: i32, name: &str, description: &str)
    -> anyhow::Result<Option<Item>>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
