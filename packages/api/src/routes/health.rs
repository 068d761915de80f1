use axum::routing::get;
use axum::Router;

use crate::server::AppState;

pub const HEALTH_MESSAGE: &str = "Directory API is running";

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}
