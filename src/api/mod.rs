use crate::AppState;
use axum::routing::{get, post, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod gci;
pub mod health;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/gci", post(gci::gci))
        .route("/health", get(health::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
