pub mod handlers;
pub mod models;
pub mod openapi;

use crate::core::services::FlatgateService;
use crate::infrastructure::storage::RecordStore;
use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Handlers see the record store only through the trait.
pub type AppState = Arc<FlatgateService<Arc<dyn RecordStore>>>;

/// JSON API under `/api` plus the Swagger UI.
pub fn app(service: AppState) -> Router {
    Router::new()
        .nest("/api", handlers::api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}
