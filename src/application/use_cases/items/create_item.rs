use super::{ItemError, validate_description, validate_name};
use crate::application::ports::item_repository::ItemRepository;
use crate::domain::items::item::Item;

pub struct CreateItem<'a, R: ItemRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ItemRepository + ?Sized> CreateItem<'a, R> {
    pub async fn execute(&self, name: &str, description: &str) -> Result<Item, ItemError> {
        validate_name(name)?;
        validate_description(description)?;
        let item = self.repo.insert(name, description).await?;
        Ok(item)
    }
}
