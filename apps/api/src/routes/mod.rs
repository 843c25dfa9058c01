pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyse", post(handlers::handle_analyse_upload))
        .route("/api/v1/analyse/text", post(handlers::handle_analyse_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::decode::DocumentDecoder;

    const BOUNDARY: &str = "resume-analyser-test-boundary";

    /// Returns fixed text for any non-empty upload.
    struct StubDecoder(&'static str);

    impl DocumentDecoder for StubDecoder {
        fn decode(&self, _bytes: &[u8]) -> String {
            self.0.to_string()
        }
    }

    fn router_with(text: &'static str) -> Router {
        build_router(AppState {
            config: Config::default(),
            decoder: Arc::new(StubDecoder(text)),
        })
    }

    fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/pdf\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    fn multipart_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyse")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = router_with("")
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-analyser");
    }

    #[tokio::test]
    async fn test_analyse_text_returns_report() {
        let payload = serde_json::json!({
            "resume_text": "Jane Doe\njane@doe.dev\nExperience\nEducation\nPython, SQL",
            "jd_text": "Python engineer"
        });
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analyse/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = router_with("").oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["report"]["name"], "Jane Doe");
        assert_eq!(body["report"]["email"], "jane@doe.dev");
        assert!(body["analysis_id"].is_string());
        assert!(body["report"]["suggestions"].as_array().unwrap().len() >= 2);
    }

    #[tokio::test]
    async fn test_analyse_text_without_jd_is_accepted() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analyse/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"resume_text": ""}"#))
            .unwrap();

        let response = router_with("").oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["report"]["score"], 0);
        assert_eq!(body["report"]["name"], "Not found");
        assert!(body["report"]["text_preview"].is_null());
    }

    #[tokio::test]
    async fn test_upload_decodes_and_analyses() {
        let body = multipart_body(&[
            ("resume", Some("cv.pdf"), "%PDF-1.4 stub"),
            ("jd_text", None, "Looking for Python and Docker"),
        ]);
        let router = router_with("Alan Turing\nalan@bletchley.uk\nPython, Docker\nExperience");

        let response = router.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["report"]["name"], "Alan Turing");
        assert_eq!(body["report"]["email"], "alan@bletchley.uk");
        // 20 base + 32 match + 5 section - 5 penalty + 24 coverage
        assert_eq!(body["report"]["score"], 76);
        assert_eq!(body["report"]["score_band"], "good");
    }

    #[tokio::test]
    async fn test_upload_without_resume_is_rejected() {
        let body = multipart_body(&[("jd_text", None, "Rust engineer")]);

        let response = router_with("ignored")
            .oneshot(multipart_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
