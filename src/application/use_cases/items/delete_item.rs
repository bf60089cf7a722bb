use super::ItemError;
use crate::application::ports::item_repository::ItemRepository;

pub struct DeleteItem<'a, R: ItemRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ItemRepository + ?Sized> DeleteItem<'a, R> {
    pub async fn execute(&self, id: i32) -> Result<(), ItemError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound)
        }
    }
}
