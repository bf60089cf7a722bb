use super::{ProvisionError, hash_password};
use crate::application::ports::user_repository::{InsertUserError, UserRepository};

#[derive(Debug, Clone, Default)]
pub struct BatchEntry {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Per-entry result, reported in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Created {
        username: String,
    },
    Failed {
        username: Option<String>,
        reason: String,
    },
}

pub struct CreateSuperusers<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> CreateSuperusers<'a, R> {
    /// Entries are processed sequentially and independently: there is no
    /// transaction spanning the batch, and a failed entry neither rolls
    /// back nor blocks the ones around it.
    pub async fn execute(
        &self,
        entries: &[BatchEntry],
    ) -> Result<Vec<BatchOutcome>, ProvisionError> {
        if entries.is_empty() {
            return Err(ProvisionError::EmptyBatch);
        }

        let mut outcomes = Vec::with_capacity(entries.len());
        for entry in entries {
            outcomes.push(self.provision_one(entry).await);
        }
        Ok(outcomes)
    }

    async fn provision_one(&self, entry: &BatchEntry) -> BatchOutcome {
        let username = entry.username.as_deref().filter(|s| !s.is_empty());
        let password = entry.password.as_deref().filter(|s| !s.is_empty());
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) => (u, p),
            _ => {
                return BatchOutcome::Failed {
                    username: entry.username.clone(),
                    reason: "Username and password are required.".into(),
                };
            }
        };
        let email = entry.email.as_deref().unwrap_or("");

        let failed = |reason: String| BatchOutcome::Failed {
            username: Some(username.to_string()),
            reason,
        };

        match self.repo.username_exists(username).await {
            Ok(true) => return failed("Username already exists.".into()),
            Ok(false) => {}
            Err(e) => return failed(e.to_string()),
        }
        // Same redundant policy check as the single-create path.
        match self.repo.superuser_exists(username).await {
            Ok(true) => return failed("A superuser with this username already exists.".into()),
            Ok(false) => {}
            Err(e) => return failed(e.to_string()),
        }

        let hash = match hash_password(password) {
            Ok(h) => h,
            Err(e) => return failed(e.to_string()),
        };
        match self.repo.insert_user(username, email, &hash, true).await {
            Ok(_) => BatchOutcome::Created {
                username: username.to_string(),
            },
            Err(InsertUserError::DuplicateEmail) => {
                failed("A user with the provided email already exists.".into())
            }
            Err(InsertUserError::Other(e)) => failed(e.to_string()),
        }
    }
}
