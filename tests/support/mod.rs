#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use uuid::Uuid;

use api::application::ports::item_repository::ItemRepository;
use api::application::ports::user_repository::{InsertUserError, UserRepository, UserRow};
use api::bootstrap::app_context::{AppContext, AppServices};
use api::bootstrap::config::{Config, SuperuserDefaults};
use api::domain::items::item::Item;
use api::presentation::http::{accounts, auth, items};

#[derive(Default)]
pub struct MemoryItemRepository {
    next_id: AtomicUsize,
    items: Mutex<Vec<Item>>,
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn list(&self) -> anyhow::Result<Vec<Item>> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Item>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn insert(&self, name: &str, description: &str) -> anyhow::Result<Item> {
        let item = Item {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1,
            name: name.to_string(),
            description: description.to_string(),
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        description: &str,
    ) -> anyhow::Result<Option<Item>> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.name = name.to_string();
                item.description = description.to_string();
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<UserRow>>,
    /// Counts every repository call, so tests can assert that an operation
    /// never reached the persistence layer.
    pub calls: AtomicUsize,
}

impl MemoryUserRepository {
    pub fn stored(&self) -> Vec<UserRow> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        is_superuser: bool,
    ) -> Result<UserRow, InsertUserError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(InsertUserError::DuplicateEmail);
        }
        if users.iter().any(|u| u.username == username) {
            return Err(InsertUserError::Other(anyhow::anyhow!(
                "duplicate key value violates unique constraint \"users_username_key\""
            )));
        }
        let row = UserRow {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: Some(password_hash.to_string()),
            is_superuser,
        };
        users.push(row.clone());
        Ok(row)
    }

    async fn username_exists(&self, username: &str) -> anyhow::Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username == username))
    }

    async fn superuser_exists(&self, username: &str) -> anyhow::Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username == username && u.is_superuser))
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

pub fn test_config() -> Config {
    Config {
        api_port: 0,
        frontend_url: None,
        database_url: String::new(),
        db_max_connections: 1,
        jwt_secret: "test-secret".into(),
        access_expires_secs: 3600,
        refresh_expires_secs: 86400,
        superuser_defaults: SuperuserDefaults::default(),
        is_production: false,
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub items: Arc<MemoryItemRepository>,
    pub users: Arc<MemoryUserRepository>,
}

pub fn spawn_app() -> TestApp {
    let items = Arc::new(MemoryItemRepository::default());
    let users = Arc::new(MemoryUserRepository::default());
    let services = AppServices::new(items.clone(), users.clone());
    let ctx = AppContext::new(test_config(), services);

    let app = Router::new()
        .nest("/api", items::routes(ctx.clone()))
        .nest("/api", accounts::routes(ctx.clone()))
        .nest("/api", auth::routes(ctx));
    TestApp {
        server: TestServer::new(app).unwrap(),
        items,
        users,
    }
}

/// Registers a user and returns a valid access token for it.
pub async fn access_token(app: &TestApp, username: &str, password: &str) -> String {
    let response = app
        .server
        .post("/api/register/")
        .json(&serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), 201);

    let response = app
        .server
        .post("/api/token/")
        .json(&serde_json::json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), 200);
    response.json::<serde_json::Value>()["access"]
        .as_str()
        .unwrap()
        .to_string()
}
