use super::ItemError;
use crate::application::ports::item_repository::ItemRepository;
use crate::domain::items::item::Item;

pub struct GetItem<'a, R: ItemRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ItemRepository + ?Sized> GetItem<'a, R> {
    pub async fn execute(&self, id: i32) -> Result<Item, ItemError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound)
    }
}
