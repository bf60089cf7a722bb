use super::{ProvisionError, hash_password};
use crate::application::ports::user_repository::{InsertUserError, UserRepository, UserRow};

pub struct RegisterUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> RegisterUser<'a, R> {
    pub async fn execute(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRow, ProvisionError> {
        if self
            .repo
            .username_exists(username)
            .await
            .map_err(|e| ProvisionError::Other(e.to_string()))?
        {
            return Err(ProvisionError::DuplicateUsername(username.to_string()));
        }
        if self
            .repo
            .email_exists(email)
            .await
            .map_err(|e| ProvisionError::Other(e.to_string()))?
        {
            return Err(ProvisionError::DuplicateEmail(email.to_string()));
        }

        let hash = hash_password(password)?;
        match self.repo.insert_user(username, email, &hash, false).await {
            Ok(row) => Ok(row),
            Err(InsertUserError::DuplicateEmail) => Err(ProvisionError::EmailConflict),
            Err(InsertUserError::Other(e)) => Err(ProvisionError::Other(e.to_string())),
        }
    }
}
