use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::user_repository::{InsertUserError, UserRepository, UserRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_user(row: &sqlx::postgres::PgRow) -> UserRow {
    UserRow {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.try_get("password_hash").ok(),
        is_superuser: row.get("is_superuser"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn insert_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        is_superuser: bool,
    ) -> Result<UserRow, InsertUserError> {
        let res = sqlx::query(
            r#"INSERT INTO users (username, email, password_hash, is_superuser)
               VALUES ($1, $2, $3, $4)
               RETURNING id, username, email, password_hash, is_superuser"#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(is_superuser)
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(row) => Ok(to_user(&row)),
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("users_email_key") =>
            {
                Err(InsertUserError::DuplicateEmail)
            }
            Err(e) => Err(InsertUserError::Other(e.into())),
        }
    }

    async fn username_exists(&self, username: &str) -> anyhow::Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)"#)
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn superuser_exists(&self, username: &str) -> anyhow::Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND is_superuser)"#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT id, username, email, password_hash, is_superuser
               FROM users WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(to_user))
    }
}
