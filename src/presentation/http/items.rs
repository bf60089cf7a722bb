use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiError;
use super::auth::{Bearer, require_access};
use crate::application::use_cases::items::create_item::CreateItem;
use crate::application::use_cases::items::delete_item::DeleteItem;
use crate::application::use_cases::items::get_item::GetItem;
use crate::application::use_cases::items::list_items::ListItems;
use crate::application::use_cases::items::update_item::UpdateItem;
use crate::application::use_cases::items::ItemError;
use crate::bootstrap::app_context::AppContext;
use crate::domain::items::item as domain;

#[derive(Debug, Serialize, ToSchema)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<domain::Item> for Item {
    fn from(item: domain::Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WriteItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/:id/",
            get(get_item)
                .put(put_item)
                .patch(patch_item)
                .delete(delete_item),
        )
        .with_state(ctx)
}

fn map_item_error(err: ItemError) -> ApiError {
    match err {
        ItemError::Validation(msg) => ApiError::bad_request(msg),
        ItemError::NotFound => ApiError::not_found(),
        ItemError::Other(_) => ApiError::internal(),
    }
}

/// Presence is checked at the boundary; blank/length rules live in the
/// use case.
fn require_field(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(format!("The {name} field is required.")))
}

#[utoipa::path(get, path = "/api/items/", tag = "Items", responses(
    (status = 200, body = [Item]),
    (status = 401, body = super::Message)
))]
pub async fn list_items(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<Item>>, ApiError> {
    require_access(&ctx.cfg, bearer)?;
    let repo = ctx.item_repo();
    let uc = ListItems {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await.map_err(|_| ApiError::internal())?;
    Ok(Json(items.into_iter().map(Item::from).collect()))
}

#[utoipa::path(post, path = "/api/items/", tag = "Items", request_body = WriteItemRequest, responses(
    (status = 201, body = Item),
    (status = 400, body = super::Message),
    (status = 401, body = super::Message)
))]
pub async fn create_item(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<WriteItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    require_access(&ctx.cfg, bearer)?;
    let name = require_field(req.name, "name")?;
    let description = require_field(req.description, "description")?;
    let repo = ctx.item_repo();
    let uc = CreateItem {
        repo: repo.as_ref(),
    };
    let item = uc
        .execute(&name, &description)
        .await
        .map_err(map_item_error)?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

#[utoipa::path(get, path = "/api/items/{id}/", tag = "Items",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, body = Item),
        (status = 404, body = super::Message),
        (status = 401, body = super::Message)
    ))]
pub async fn get_item(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<i32>,
) -> Result<Json<Item>, ApiError> {
    require_access(&ctx.cfg, bearer)?;
    let repo = ctx.item_repo();
    let uc = GetItem {
        repo: repo.as_ref(),
    };
    let item = uc.execute(id).await.map_err(map_item_error)?;
    Ok(Json(item.into()))
}

#[utoipa::path(put, path = "/api/items/{id}/", tag = "Items", request_body = WriteItemRequest,
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, body = Item),
        (status = 400, body = super::Message),
        (status = 404, body = super::Message),
        (status = 401, body = super::Message)
    ))]
pub async fn put_item(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<i32>,
    Json(req): Json<WriteItemRequest>,
) -> Result<Json<Item>, ApiError> {
    require_access(&ctx.cfg, bearer)?;
    // Full update: both fields must be present.
    let name = require_field(req.name, "name")?;
    let description = require_field(req.description, "description")?;
    let repo = ctx.item_repo();
    let uc = UpdateItem {
        repo: repo.as_ref(),
    };
    let item = uc
        .execute(id, Some(&name), Some(&description))
        .await
        .map_err(map_item_error)?;
    Ok(Json(item.into()))
}

#[utoipa::path(patch, path = "/api/items/{id}/", tag = "Items", request_body = PatchItemRequest,
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, body = Item),
        (status = 400, body = super::Message),
        (status = 404, body = super::Message),
        (status = 401, body = super::Message)
    ))]
pub async fn patch_item(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<i32>,
    Json(req): Json<PatchItemRequest>,
) -> Result<Json<Item>, ApiError> {
    require_access(&ctx.cfg, bearer)?;
    let repo = ctx.item_repo();
    let uc = UpdateItem {
        repo: repo.as_ref(),
    };
    let item = uc
        .execute(id, req.name.as_deref(), req.description.as_deref())
        .await
        .map_err(map_item_error)?;
    Ok(Json(item.into()))
}

#[utoipa::path(delete, path = "/api/items/{id}/", tag = "Items",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 204),
        (status = 404, body = super::Message),
        (status = 401, body = super::Message)
    ))]
pub async fn delete_item(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_access(&ctx.cfg, bearer)?;
    let repo = ctx.item_repo();
    let uc = DeleteItem {
        repo: repo.as_ref(),
    };
    uc.execute(id).await.map_err(map_item_error)?;
    Ok(StatusCode::NO_CONTENT)
}
