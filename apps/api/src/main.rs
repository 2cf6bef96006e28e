//! Courseforge plugin service composition root.

#![forbid(unsafe_code)]

mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post};
use courseforge_application::{CohortRoleCleanupObserver, CohortRoleService, ContentSearchService};
use courseforge_core::AppError;
use courseforge_infrastructure::{
    HttpPlatformClient, InProcessEventBus, PostgresCohortRoleRepository,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

    let database_url = required_env("DATABASE_URL")?;
    let platform_api_url = required_env("PLATFORM_API_URL")?;
    let platform_service_token = required_env("PLATFORM_SERVICE_TOKEN")?;

    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3101);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    if migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

    let platform_client = Arc::new(HttpPlatformClient::new(
        http_client,
        platform_api_url.as_str(),
        platform_service_token.clone(),
    )?);

    let cohort_role_repository = Arc::new(PostgresCohortRoleRepository::new(pool));
    let cohort_role_service = CohortRoleService::new(cohort_role_repository);
    let content_search_service = ContentSearchService::new(
        platform_client.clone(),
        platform_client.clone(),
        platform_client.clone(),
    );

    let mut event_bus = InProcessEventBus::new();
    event_bus.register_user_deleted_observer(Arc::new(CohortRoleCleanupObserver::new(
        cohort_role_service.clone(),
    )));

    let app_state = AppState {
        cohort_role_service,
        content_search_service,
        capability_checker: platform_client,
        event_bus: Arc::new(event_bus),
        platform_service_token,
    };

    // Routes acting on behalf of a platform user carry the acting-user
    // header; the event intake authenticates with the service token instead.
    let user_routes = Router::new()
        .route(
            "/api/cohort-role-assignments",
            get(handlers::cohort_roles::list_cohort_role_assignments_handler)
                .post(handlers::cohort_roles::create_cohort_role_assignment_handler),
        )
        .route(
            "/api/cohort-role-assignments/{assignment_id}",
            delete(handlers::cohort_roles::delete_cohort_role_assignment_handler),
        )
        .route(
            "/api/contentbank/search",
            get(handlers::contentbank::search_contents_handler),
        )
        .route_layer(from_fn(middleware::require_platform_user));

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/events/user-deleted",
            post(handlers::events::user_deleted_handler),
        )
        .merge(user_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "courseforge-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}
