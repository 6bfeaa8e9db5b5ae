use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;
use waypoint_store::ContentStore;
use waypoint_types::Resolution;

use crate::error::{ServeError, ServeResult};

/// Turn a resolution into an HTTP response.
///
/// `NotFound` is the routing-level 404 — any fallback handling happens
/// upstream of this pipeline. A `Serve` whose key is missing from the
/// store means the manifest and the store disagree about the deployment;
/// that is surfaced as an error, never as a 404.
pub async fn respond(resolution: Resolution, store: &dyn ContentStore) -> ServeResult<Response> {
    match resolution {
        Resolution::NotFound => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())?),
        Resolution::Redirect { location } => Ok(Response::builder()
            .status(StatusCode::TEMPORARY_REDIRECT)
            .header(header::LOCATION, location)
            .body(Body::empty())?),
        Resolution::Serve { key, path } => {
            let Some(payload) = store.get(&key).await? else {
                tracing::error!(%key, %path, "serve resolution points at absent content");
                return Err(ServeError::ContentMissing { key: key.to_hex() });
            };
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, payload.content_type)
                .body(Body::from(payload.bytes))?)
        }
    }
}

#[cfg(test)]
mod tests {
    use waypoint_store::MemoryContentStore;
    use waypoint_types::ContentKey;

    use super::*;

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let store = MemoryContentStore::new();
        let response = respond(Resolution::NotFound, &store).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn redirect_maps_to_307_with_location() {
        let store = MemoryContentStore::new();
        let response = respond(
            Resolution::Redirect { location: "/guide/".into() },
            &store,
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/guide/");
    }

    #[tokio::test]
    async fn serve_fetches_bytes_and_content_type() {
        let store = MemoryContentStore::new();
        let key = store.insert(&b"body { color: red }"[..], "text/css");
        let response = respond(
            Resolution::Serve { key, path: "/style.css".into() },
            &store,
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn absent_content_is_a_consistency_error() {
        let store = MemoryContentStore::new();
        let err = respond(
            Resolution::Serve {
                key: ContentKey::of(b"never uploaded"),
                path: "/ghost".into(),
            },
            &store,
        )
        .await
        .unwrap_err();
        assert!(err.is_consistency_violation());
    }
}
