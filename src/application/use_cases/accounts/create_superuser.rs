use super::{ProvisionError, hash_password};
use crate::application::ports::user_repository::{InsertUserError, UserRepository, UserRow};

pub struct CreateSuperuser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> CreateSuperuser<'a, R> {
    pub async fn execute(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRow, ProvisionError> {
        // Defaults cover absent fields; an explicit blank username is an
        // error, never an account.
        if username.trim().is_empty() {
            return Err(ProvisionError::MissingUsername);
        }
        if self
            .repo
            .username_exists(username)
            .await
            .map_err(|e| ProvisionError::Other(e.to_string()))?
        {
            return Err(ProvisionError::DuplicateUsername(username.to_string()));
        }
        // Unreachable while usernames are globally unique; kept as an
        // explicit policy check on the superuser namespace.
        if self
            .repo
            .superuser_exists(username)
            .await
            .map_err(|e| ProvisionError::Other(e.to_string()))?
        {
            return Err(ProvisionError::DuplicateSuperuser(username.to_string()));
        }

        let hash = hash_password(password)?;
        match self.repo.insert_user(username, email, &hash, true).await {
            Ok(row) => Ok(row),
            Err(InsertUserError::DuplicateEmail) => Err(ProvisionError::EmailConflict),
            Err(InsertUserError::Other(e)) => Err(ProvisionError::Other(e.to_string())),
        }
    }
}
