use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::ApiError;
use crate::application::use_cases::auth::login::Login as LoginUc;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenResponse {
    pub access: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub typ: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/token/", post(token))
        .route("/token/refresh/", post(token_refresh))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/token/", tag = "Auth", request_body = TokenRequest, security(()), responses(
    (status = 200, body = TokenPairResponse),
    (status = 401, body = super::Message)
))]
pub async fn token(
    State(ctx): State<AppContext>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenPairResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(&req.username, &req.password)
        .await
        .map_err(|_| ApiError::internal())?
        .ok_or(ApiError(
            StatusCode::UNAUTHORIZED,
            "No active account found with the given credentials.".into(),
        ))?;

    let access = encode_token(
        &ctx.cfg,
        &user.id,
        TOKEN_TYPE_ACCESS,
        ctx.cfg.access_expires_secs,
    )?;
    let refresh = encode_token(
        &ctx.cfg,
        &user.id,
        TOKEN_TYPE_REFRESH,
        ctx.cfg.refresh_expires_secs,
    )?;
    Ok(Json(TokenPairResponse { access, refresh }))
}

#[utoipa::path(post, path = "/api/token/refresh/", tag = "Auth", request_body = RefreshRequest, security(()), responses(
    (status = 200, body = AccessTokenResponse),
    (status = 401, body = super::Message)
))]
pub async fn token_refresh(
    State(ctx): State<AppContext>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<AccessTokenResponse>, ApiError> {
    let invalid = || ApiError(StatusCode::UNAUTHORIZED, "Token is invalid or expired.".into());
    let claims = decode_token(&ctx.cfg, &req.refresh).ok_or_else(invalid)?;
    if claims.typ != TOKEN_TYPE_REFRESH {
        return Err(invalid());
    }
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| invalid())?;
    let access = encode_token(
        &ctx.cfg,
        &user_id,
        TOKEN_TYPE_ACCESS,
        ctx.cfg.access_expires_secs,
    )?;
    Ok(Json(AccessTokenResponse { access }))
}

pub(crate) fn encode_token(
    cfg: &Config,
    user_id: &Uuid,
    typ: &str,
    expires_secs: i64,
) -> Result<String, ApiError> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + expires_secs.max(0)) as usize,
        typ: typ.to_string(),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .map_err(|_| ApiError::internal())
}

fn decode_token(cfg: &Config, token: &str) -> Option<Claims> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}

// --- Bearer extractor & access-token gate ---
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(auth) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(t) = auth.strip_prefix("Bearer ") {
                return Ok(Bearer(t.to_string()));
            }
        }
        Err(ApiError::unauthorized())
    }
}

/// Gate for the item endpoints: the presented token must be a valid,
/// unexpired access token (a refresh token is not accepted here).
pub(crate) fn require_access(cfg: &Config, bearer: Bearer) -> Result<Uuid, ApiError> {
    let claims = decode_token(cfg, &bearer.0).ok_or_else(ApiError::unauthorized)?;
    if claims.typ != TOKEN_TYPE_ACCESS {
        return Err(ApiError::unauthorized());
    }
    Uuid::parse_str(&claims.sub).map_err(|_| ApiError::unauthorized())
}
