//! Static frontend assets with single-page-app fallback.
//!
//! Existing files are served with their inferred content type; any other path
//! gets `index.html` with status 200 so the client-side router can take over.
//! That includes paths naming a directory and non-GET methods.
//! `ServeDir` rejects paths that escape the root.

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request};
use tower::util::MapRequest;
use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_FILE: &str = "index.html";

type IndexRequest = fn(Request<Body>) -> Request<Body>;

/// `index.html` for any method; HEAD stays HEAD.
pub type IndexFallback = MapRequest<ServeFile, IndexRequest>;

fn as_index_request(mut req: Request<Body>) -> Request<Body> {
    if req.method() != Method::HEAD {
        *req.method_mut() = Method::GET;
    }
    req
}

pub fn spa_service(root: &Path) -> ServeDir<IndexFallback> {
    let index = MapRequest::new(ServeFile::new(root.join(INDEX_FILE)), as_index_request as IndexRequest);
    ServeDir::new(root)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .fallback(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use tower::ServiceExt;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INDEX_FILE), "<html>app</html>").unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn get(root: &Path, uri: &str) -> (StatusCode, Option<String>, String) {
        send(root, Method::GET, uri).await
    }

    async fn send(root: &Path, method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = spa_service(root)
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(Body::new(response.into_body()), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_existing_file_served() {
        let dir = site();
        let (status, content_type, body) = get(dir.path(), "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
        assert!(content_type.unwrap().contains("javascript"));
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_index() {
        let dir = site();
        let (status, content_type, body) = get(dir.path(), "/any/unknown/route").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>app</html>");
        assert!(content_type.unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_directory_named_route_falls_back_to_index() {
        let dir = site();
        std::fs::create_dir(dir.path().join("models")).unwrap();

        let (status, _, body) = get(dir.path(), "/models").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>app</html>");

        let (status, _, body) = get(dir.path(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>app</html>");
    }

    #[tokio::test]
    async fn test_any_method_falls_back_to_index() {
        let dir = site();
        let (status, _, body) = send(dir.path(), Method::POST, "/chat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>app</html>");

        let (status, _, body) = send(dir.path(), Method::HEAD, "/chat").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_traversal_does_not_escape_root() {
        let outer = tempfile::tempdir().unwrap();
        std::fs::write(outer.path().join("secret.txt"), "top secret").unwrap();
        let root = outer.path().join("site");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join(INDEX_FILE), "<html>app</html>").unwrap();

        let (_, _, body) = get(&root, "/../secret.txt").await;
        assert!(!body.contains("top secret"));
    }
}
