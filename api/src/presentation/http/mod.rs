pub mod auth;
pub mod error;
pub mod health;
pub mod index;
pub mod leads;

use axum::Router;

use crate::bootstrap::app_context::AppContext;

/// Every route except `/api/health`, which needs the raw pool and is mounted by the binary.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(index::routes())
        .nest("/api", auth::routes(ctx.clone()))
        .nest("/api", leads::routes(ctx))
}
