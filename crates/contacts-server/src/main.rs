use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{InMemoryContactRepository, PgContactRepository};
use application::{seed, ContactService};
use config::{ServerConfig, StoreBackend};
use contacts::ContactRepository;

/// Application service over whichever store the config selects
pub type AppContactService = ContactService<dyn ContactRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<AppContactService>,
    pub config: Arc<ServerConfig>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Contacts API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble the HTTP surface around an already-built state
pub fn build_router(state: AppState) -> Router {
    // Protected routes (require authentication when a key is configured)
    let protected_routes = Router::new()
        .merge(routes::contact::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📇 Contacts API initializing...");

    let config = ServerConfig::from_secrets(&secrets)
        .map_err(anyhow::Error::msg)
        .context("Invalid server configuration")?;

    if config.api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No CONTACTS_API_KEY set - authentication disabled");
    }

    let repo: Arc<dyn ContactRepository> = match config.store {
        StoreBackend::Postgres => {
            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("✅ Database migrations completed");
            Arc::new(PgContactRepository::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("⚠️  Using in-memory store - contacts are lost on restart");
            Arc::new(InMemoryContactRepository::new())
        }
    };

    let contact_service = Arc::new(ContactService::new(repo));

    if config.seed_contacts {
        let seeded = contact_service
            .seed_if_empty(seed::sample_contacts())
            .await
            .context("Failed to seed sample contacts")?;
        if seeded > 0 {
            tracing::info!("🌱 Seeded {} sample contacts", seeded);
        }
    }

    let state = AppState {
        contact_service,
        config: Arc::new(config),
    };

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Contacts API ready");

    Ok(build_router(state).into())
}
