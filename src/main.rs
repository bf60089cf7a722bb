use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use api::bootstrap::app_context::{AppContext, AppServices};
use api::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::presentation::http::items::list_items,
        api::presentation::http::items::create_item,
        api::presentation::http::items::get_item,
        api::presentation::http::items::put_item,
        api::presentation::http::items::patch_item,
        api::presentation::http::items::delete_item,
        api::presentation::http::accounts::create_superuser,
        api::presentation::http::accounts::create_superusers,
        api::presentation::http::accounts::register_user,
        api::presentation::http::auth::token,
        api::presentation::http::auth::token_refresh,
        api::presentation::http::health::health,
    ),
    components(schemas(
        api::presentation::http::Message,
        api::presentation::http::items::Item,
        api::presentation::http::items::WriteItemRequest,
        api::presentation::http::items::PatchItemRequest,
        api::presentation::http::accounts::CreateSuperuserRequest,
        api::presentation::http::accounts::CreateSuperusersRequest,
        api::presentation::http::accounts::BatchUserRequest,
        api::presentation::http::accounts::BatchOutcomeResponse,
        api::presentation::http::accounts::RegisterRequest,
        api::presentation::http::auth::TokenRequest,
        api::presentation::http::auth::TokenPairResponse,
        api::presentation::http::auth::RefreshRequest,
        api::presentation::http::auth::AccessTokenResponse,
        api::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Items", description = "Item CRUD"),
        (name = "Accounts", description = "Account provisioning and registration"),
        (name = "Auth", description = "Token issuance"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(port = cfg.api_port, "Starting item API backend");

    // Database
    let pool =
        api::infrastructure::db::connect_pool(&cfg.database_url, cfg.db_max_connections).await?;
    api::infrastructure::db::migrate(&pool).await?;

    let item_repo = Arc::new(
        api::infrastructure::db::repositories::item_repository_sqlx::SqlxItemRepository::new(
            pool.clone(),
        ),
    );
    let user_repo = Arc::new(
        api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );

    let services = AppServices::new(item_repo, user_repo);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let allow_methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::PATCH,
        http::Method::OPTIONS,
    ];
    let allow_headers = [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];
    let cors = match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(allow_methods)
            .allow_headers(allow_headers)
            .allow_credentials(true),
        _ if cfg.is_production => {
            // FRONTEND_URL is mandatory in production (enforced earlier);
            // fall back to deny-all if it was unparsable.
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
                .allow_methods(allow_methods)
                .allow_headers(allow_headers)
        }
        _ => {
            // Development convenience
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(allow_methods)
                .allow_headers(allow_headers)
                .allow_credentials(true)
        }
    };

    let app = Router::new()
        .nest(
            "/api",
            api::presentation::http::health::routes(pool.clone()),
        )
        .nest("/api", api::presentation::http::items::routes(ctx.clone()))
        .nest(
            "/api",
            api::presentation::http::accounts::routes(ctx.clone()),
        )
        .nest("/api", api::presentation::http::auth::routes(ctx.clone()))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
