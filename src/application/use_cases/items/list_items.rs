use crate::application::ports::item_repository::ItemRepository;
use crate::domain::items::item::Item;

pub struct ListItems<'a, R: ItemRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ItemRepository + ?Sized> ListItems<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Item>> {
        self.repo.list().await
    }
}
