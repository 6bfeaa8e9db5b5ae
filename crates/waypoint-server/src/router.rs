use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::ServeResult;
use crate::pipeline;
use crate::state::AppState;

/// Build the axum router: every path is an asset request.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(serve_asset)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve and serve one request path.
///
/// `Uri::path()` already excludes query and fragment; it is handed to
/// the resolver untouched, so percent-encoded literal names stay
/// distinct keys. Upstream decode policy belongs to the fronting proxy.
async fn serve_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    match handle(&state, path).await {
        Ok(response) => response,
        Err(err) => {
            if err.is_consistency_violation() {
                tracing::error!(%path, error = %err, "manifest and content store disagree");
            } else {
                tracing::error!(%path, error = %err, "asset request failed");
            }
            Response::builder()
                .status(err.status())
                .body(Body::empty())
                .unwrap_or_else(|_| {
                    let mut fallback = Response::new(Body::empty());
                    *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                    fallback
                })
        }
    }
}

async fn handle(state: &AppState, path: &str) -> ServeResult<Response> {
    let resolution = state.resolver().resolve(path).await?;
    pipeline::respond(resolution, state.store().as_ref()).await
}
