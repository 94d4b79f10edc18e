use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use lead_manager_api::bootstrap::app_context::{AppContext, AppServices};
use lead_manager_api::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            lead_manager_api::presentation::http::index::root,
            lead_manager_api::presentation::http::health::health,
            lead_manager_api::presentation::http::auth::create_user,
            lead_manager_api::presentation::http::auth::generate_token,
            lead_manager_api::presentation::http::auth::me,
            lead_manager_api::presentation::http::leads::create_lead,
            lead_manager_api::presentation::http::leads::list_leads,
            lead_manager_api::presentation::http::leads::get_lead,
            lead_manager_api::presentation::http::leads::update_lead,
            lead_manager_api::presentation::http::leads::delete_lead,
        ),
        components(schemas(
            lead_manager_api::presentation::http::auth::RegisterRequest,
            lead_manager_api::presentation::http::auth::TokenForm,
            lead_manager_api::presentation::http::auth::TokenResponse,
            lead_manager_api::presentation::http::auth::UserResponse,
            lead_manager_api::presentation::http::leads::Lead,
            lead_manager_api::presentation::http::leads::LeadRequest,
            lead_manager_api::presentation::http::leads::MessageResponse,
            lead_manager_api::presentation::http::error::ErrorBody,
            lead_manager_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Auth", description = "Registration and bearer tokens"),
            (name = "Leads", description = "Leads owned by the current user"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn build_cors(cfg: &Config) -> CorsLayer {
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let headers = [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
        _ if cfg.is_production => {
            // FRONTEND_URL is validated at startup in production; deny everything if it still fails to parse
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                    "http://invalid",
                )))
                .allow_methods(methods)
                .allow_headers(headers)
        }
        _ => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            "lead_manager_api=debug,axum=info,tower_http=info,sqlx=warn".into()
        }))
        .init();

    let cfg = Config::from_env()?;
    info!(
        api_port = cfg.api_port,
        frontend_url = ?cfg.frontend_url,
        jwt_expires_secs = cfg.jwt_expires_secs,
        is_production = cfg.is_production,
        "Starting lead manager backend"
    );

    // Database
    let pool = lead_manager_api::infrastructure::db::connect_pool(
        &cfg.database_url,
        cfg.database_max_connections,
    )
    .await?;
    lead_manager_api::infrastructure::db::migrate(&pool).await?;

    let user_repo = Arc::new(
        lead_manager_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );
    let lead_repo = Arc::new(
        lead_manager_api::infrastructure::db::repositories::lead_repository_sqlx::SqlxLeadRepository::new(
            pool.clone(),
        ),
    );
    let services = AppServices::new(user_repo, lead_repo);
    let ctx = AppContext::new(cfg.clone(), services);

    let app = lead_manager_api::presentation::http::router(ctx)
        .nest(
            "/api",
            lead_manager_api::presentation::http::health::routes(pool.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(build_cors(&cfg))
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

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
