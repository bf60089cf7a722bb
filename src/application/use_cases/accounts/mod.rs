pub mod create_superuser;
pub mod create_superusers;
pub mod register_user;

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

#[derive(thiserror::Error, Debug)]
pub enum ProvisionError {
    #[error("User with username \"{0}\" already exists.")]
    DuplicateUsername(String),
    #[error("A superuser with username \"{0}\" already exists.")]
    DuplicateSuperuser(String),
    /// Username/email pre-check hit (registration path).
    #[error("User with email \"{0}\" already exists.")]
    DuplicateEmail(String),
    /// The store's unique email constraint rejected the insert.
    #[error("A user with the provided email already exists.")]
    EmailConflict,
    /// An explicit blank username; the message mirrors the account
    /// backend this API replaced.
    #[error("The given username must be set")]
    MissingUsername,
    #[error("No users data provided.")]
    EmptyBatch,
    #[error("{0}")]
    Other(String),
}

pub(crate) fn hash_password(password: &str) -> Result<String, ProvisionError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ProvisionError::Other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_format() {
        assert_eq!(
            ProvisionError::DuplicateUsername("admin".into()).to_string(),
            "User with username \"admin\" already exists."
        );
        assert_eq!(
            ProvisionError::DuplicateSuperuser("admin".into()).to_string(),
            "A superuser with username \"admin\" already exists."
        );
        assert_eq!(
            ProvisionError::EmptyBatch.to_string(),
            "No users data provided."
        );
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("pw").unwrap();
        let b = hash_password("pw").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
    }
}
