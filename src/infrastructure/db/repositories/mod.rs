pub mod item_repository_sqlx;
pub mod user_repository_sqlx;
