pub mod dtos;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;
use crate::health;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::health_check,
        handlers::extract_content,
        handlers::summarize,
        handlers::translate,
        handlers::key_points,
        handlers::highlight,
    ),
    tags(
        (name = "content", description = "Readable-content extraction"),
        (name = "generate", description = "Summarize / translate / key points"),
        (name = "highlight", description = "Sentence highlighting"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/v1/content", post(handlers::extract_content))
        .route("/v1/summarize", post(handlers::summarize))
        .route("/v1/translate", post(handlers::translate))
        .route("/v1/key-points", post(handlers::key_points))
        .route("/v1/highlight", post(handlers::highlight))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
