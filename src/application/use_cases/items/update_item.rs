use super::{ItemError, validate_description, validate_name};
use crate::application::ports::item_repository::ItemRepository;
use crate::domain::items::item::Item;

pub struct UpdateItem<'a, R: ItemRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ItemRepository + ?Sized> UpdateItem<'a, R> {
    /// Full update passes both fields; partial update passes only the
    /// provided ones, the rest keep their stored values. An unknown id
    /// fails before validation, and validation runs before any write, so
    /// a rejected request never partially applies.
    pub async fn execute(
        &self,
        id: i32,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Item, ItemError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound)?;
        if let Some(name) = name {
            validate_name(name)?;
        }
        if let Some(description) = description {
            validate_description(description)?;
        }
        let name = name.unwrap_or(&current.name);
        let description = description.unwrap_or(&current.description);
        self.repo
            .update(id, name, description)
            .await?
            .ok_or(ItemError::NotFound)
    }
}
