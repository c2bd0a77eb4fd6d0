//! Axum router configuration with middleware.
//!
//! - `/user/*`: account management
//! - `/api/chat`: chat proxy
//! - `/health`: liveness
//!
//! Middleware: permissive CORS, request tracing.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_routes = Router::new()
        .route("/create", post(handlers::account::create_account))
        .route("/login", post(handlers::account::login))
        .route("/update/{id}", put(handlers::account::update_account))
        .route("/delete/{id}", delete(handlers::account::delete_account));

    let chat_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/chat/health", get(handlers::chat::chat_health));

    Router::new()
        .nest("/user", user_routes)
        .nest("/api", chat_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use orglead_infra::crypto::hash::Argon2CredentialHasher;
    use orglead_types::chat::NO_RESPONSE_FALLBACK;
    use orglead_types::config::ChatBackendConfig;

    use super::*;

    struct TestApp {
        router: Router,
        backend: MockServer,
        _dir: tempfile::TempDir,
    }

    async fn test_app() -> TestApp {
        let chat = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("api.db").display());
        let chat_config = ChatBackendConfig {
            base_url: chat.uri(),
            timeout_secs: 2,
            connect_timeout_secs: 1,
        };

        let hasher = Argon2CredentialHasher::with_params(64, 1, 1).unwrap();
        let state = AppState::from_parts(&url, &chat_config, hasher).await.unwrap();

        TestApp {
            router: build_router(state),
            backend: chat,
            _dir: dir,
        }
    }

    impl TestApp {
        async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(json) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            (status, serde_json::from_slice(&bytes).unwrap())
        }

        async fn chat(&self, prompt: &str) -> (StatusCode, String) {
            let request = Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from(prompt.to_string()))
                .unwrap();

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            (status, String::from_utf8(bytes.to_vec()).unwrap())
        }

        async fn create(&self, email: &str, password: &str) -> Value {
            let (status, body) = self
                .call(
                    "POST",
                    "/user/create",
                    Some(json!({
                        "email": email,
                        "password": password,
                        "firstName": "Grace",
                        "lastName": "Hopper",
                    })),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
            body
        }

        async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
            self.call(
                "POST",
                "/user/login",
                Some(json!({"email": email, "password": password})),
            )
            .await
        }
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let (status, body) = app.call("GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_account_echoes_fields_with_fresh_id() {
        let app = test_app().await;

        let first = app.create("grace@navy.mil", "cobol").await;
        let second = app.create("ada@example.com", "engine").await;

        assert_eq!(first["message"], "User created successfully!");
        assert_eq!(first["email"], "grace@navy.mil");
        assert_eq!(first["firstName"], "Grace");
        assert_eq!(first["lastName"], "Hopper");
        assert!(first["id"].is_i64());
        assert_ne!(first["id"], second["id"]);
        assert!(first.get("password").is_none());
    }

    #[tokio::test]
    async fn test_login_success_returns_account() {
        let app = test_app().await;
        let created = app.create("grace@navy.mil", "cobol").await;

        let (status, body) = app.login("grace@navy.mil", "cobol").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User successfully logged in!");
        assert_eq!(body["id"], created["id"]);
        assert_eq!(body["firstName"], "Grace");
        assert_eq!(body["lastName"], "Hopper");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let app = test_app().await;
        app.create("grace@navy.mil", "cobol").await;

        let wrong_password = app.login("grace@navy.mil", "fortran").await;
        let unknown_email = app.login("nobody@navy.mil", "cobol").await;

        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password.1["message"], "Incorrect credentials!");
        assert!(wrong_password.1["id"].is_null());
        assert!(wrong_password.1["email"].is_null());
        assert!(wrong_password.1["firstName"].is_null());
        assert!(wrong_password.1["lastName"].is_null());
    }

    #[tokio::test]
    async fn test_update_switches_credentials() {
        let app = test_app().await;
        let created = app.create("grace@navy.mil", "cobol").await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = app
            .call(
                "PUT",
                &format!("/user/update/{id}"),
                Some(json!({
                    "email": "admiral@navy.mil",
                    "password": "flowmatic",
                    "firstName": "Amazing",
                    "lastName": "Grace",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Account Updated Successfully!");
        assert_eq!(body["id"], id);
        assert_eq!(body["email"], "admiral@navy.mil");
        assert_eq!(body["firstName"], "Amazing");

        let (status, body) = app.login("admiral@navy.mil", "flowmatic").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);

        let (status, _) = app.login("admiral@navy.mil", "cobol").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_delete_then_update_and_delete_report_not_found() {
        let app = test_app().await;
        let created = app.create("grace@navy.mil", "cobol").await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = app.call("DELETE", &format!("/user/delete/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Account Successfully Deleted");
        assert!(body["id"].is_null());

        let (status, body) = app
            .call(
                "PUT",
                &format!("/user/update/{id}"),
                Some(json!({
                    "email": "x@y.z",
                    "password": "pw",
                    "firstName": "X",
                    "lastName": "Y",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            "Unable To Update Account! Unable To Find Account!"
        );

        let (status, body) = app.call("DELETE", &format!("/user/delete/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            "Unable To Delete Account! Unable To Find Account!"
        );

        let (status, _) = app.login("grace@navy.mil", "cobol").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_nonexistent_id_does_not_mutate_existing_accounts() {
        let app = test_app().await;
        let created = app.create("grace@navy.mil", "cobol").await;

        let (status, body) = app
            .call(
                "PUT",
                "/user/update/999999",
                Some(json!({
                    "email": "evil@example.com",
                    "password": "pw",
                    "firstName": "E",
                    "lastName": "Vil",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            "Unable To Update Account! Unable To Find Account!"
        );
        assert!(body["id"].is_null());

        let (status, body) = app.call("DELETE", "/user/delete/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            "Unable To Delete Account! Unable To Find Account!"
        );

        let (status, body) = app.login("grace@navy.mil", "cobol").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], created["id"]);
        assert_eq!(body["firstName"], "Grace");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test_app().await;

        let (status, body) = app
            .call("POST", "/user/create", Some(json!({"email": "only@email.com"})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Fail: "));
        assert!(body["id"].is_null());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = test_app().await;

        let (status, body) = app.call("DELETE", "/user/delete/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Fail: "));

        let (status, body) = app
            .call(
                "PUT",
                "/user/update/12.5",
                Some(json!({
                    "email": "x@y.z",
                    "password": "pw",
                    "firstName": "X",
                    "lastName": "Y",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["id"].is_null());
    }

    #[tokio::test]
    async fn test_chat_relays_reply() {
        let app = test_app().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hello"})))
            .mount(&app.backend)
            .await;

        let (status, text) = app.chat("hi there").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_chat_empty_body_returns_fallback() {
        let app = test_app().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&app.backend)
            .await;

        let (status, text) = app.chat("hi there").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, NO_RESPONSE_FALLBACK);
    }

    #[tokio::test]
    async fn test_chat_backend_error_is_bad_gateway() {
        let app = test_app().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
            .mount(&app.backend)
            .await;

        let (status, text) = app.chat("hi there").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(text.contains("500"));
    }

    #[tokio::test]
    async fn test_chat_health_reports_unavailable_backend() {
        let app = test_app().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&app.backend)
            .await;

        let (status, body) = app.call("GET", "/api/chat/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
        assert_eq!(body["backend"], app.backend.uri());
    }
}
