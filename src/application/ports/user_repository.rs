use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub is_superuser: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum InsertUserError {
    /// The store rejected the insert on its unique email constraint.
    #[error("a user with the provided email already exists")]
    DuplicateEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        is_superuser: bool,
    ) -> Result<UserRow, InsertUserError>;
    async fn username_exists(&self, username: &str) -> anyhow::Result<bool>;
    /// Distinct from `username_exists` so callers can keep a
    /// superuser-specific policy check even though usernames are unique.
    async fn superuser_exists(&self, username: &str) -> anyhow::Result<bool>;
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>>;
}
