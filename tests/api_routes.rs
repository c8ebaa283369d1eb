//! Router-level tests that exercise routing, authentication, RBAC, and
//! validation without external services. The database pool is lazy and
//! never connected by these paths; the cache is in-memory and storage
//! and PDF generation are faked.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use bytes::Bytes;
use http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use cvforge_api::AppState;
use cvforge_auth::{
    JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator, RbacEnforcer,
};
use cvforge_cache::CacheManager;
use cvforge_core::config::AppConfig;
use cvforge_core::traits::ObjectStore;
use cvforge_core::AppResult;
use cvforge_database::repositories::resume::ResumeRepository;
use cvforge_database::repositories::user::UserRepository;
use cvforge_entity::user::UserRole;
use cvforge_notify::{Notifier, NoopPublisher};
use cvforge_render::PdfEngine;
use cvforge_service::{AuthService, MediaService, ResumeService, UserService};

#[derive(Debug)]
struct FakeStore;

#[async_trait]
impl ObjectStore for FakeStore {
    async fn ensure_bucket(&self, _bucket: &str) -> AppResult<()> {
        Ok(())
    }

    async fn put(&self, _: &str, _: &str, _: Bytes, _: &str) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _: &str, _: &str) -> AppResult<()> {
        Ok(())
    }

    async fn exists(&self, _: &str, _: &str) -> AppResult<bool> {
        Ok(false)
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("http://localhost:9000/{bucket}/{key}")
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

struct StubPdf;

#[async_trait]
impl PdfEngine for StubPdf {
    async fn html_to_pdf(&self, _html: &str) -> AppResult<Vec<u8>> {
        Ok(b"%PDF-1.4 stub".to_vec())
    }
}

struct TestApp {
    router: Router,
    encoder: JwtEncoder,
}

async fn test_app() -> TestApp {
    let mut config = AppConfig::load("test").expect("load config");
    config.cache.provider = "memory".to_string();
    config.auth.jwt_secret = "router-test-secret".to_string();

    let db_pool = sqlx::postgres::PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy(&config.database.url)
        .expect("lazy pool");

    let cache = CacheManager::new(&config.cache).await.expect("cache");
    let store: Arc<dyn ObjectStore> = Arc::new(FakeStore);
    let pdf: Arc<dyn PdfEngine> = Arc::new(StubPdf);
    let notifier = Notifier::new(Arc::new(NoopPublisher), "cvforge");

    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let resume_repo = Arc::new(ResumeRepository::new(db_pool.clone()));

    let hasher = Arc::new(PasswordHasher::new());
    let validator = Arc::new(PasswordValidator::new(&config.auth));
    let encoder = JwtEncoder::new(&config.auth);
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let rbac = Arc::new(RbacEnforcer::new());

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        cache.clone(),
        Arc::clone(&hasher),
        Arc::clone(&validator),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        notifier.clone(),
        &config.auth,
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        cache.clone(),
        Arc::clone(&hasher),
        Arc::clone(&validator),
    ));
    let resume_service = Arc::new(ResumeService::new(
        Arc::clone(&resume_repo),
        cache.clone(),
        Arc::clone(&store),
        Arc::clone(&pdf),
        notifier.clone(),
        &config.storage,
        &config.resume,
    ));
    let media_service = Arc::new(MediaService::new(Arc::clone(&store), &config.storage));

    let state = AppState {
        config: Arc::new(config),
        db_pool,
        cache,
        store,
        jwt_decoder,
        rbac,
        auth_service,
        user_service,
        resume_service,
        media_service,
    };

    TestApp {
        router: cvforge_api::build_router(state),
        encoder,
    }
}

impl TestApp {
    fn user_token(&self) -> String {
        self.encoder
            .generate_token_pair(Uuid::new_v4(), UserRole::User, "user@example.com")
            .expect("token pair")
            .access_token
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}

fn sample_basics() -> Value {
    json!({
        "name": "Jane Doe",
        "label": "Backend Engineer",
        "email": "jane@example.com",
        "location": {"city": "Tashkent", "countryCode": "UZ", "region": "Tashkent"},
        "salary": 3000,
        "job_location": "online",
        "job_type": "full-time",
        "experience_years": 4
    })
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app().await;
    let (status, _) = app.request("GET", "/v1/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn staging_requires_authentication() {
    let app = test_app().await;
    let (status, body) = app
        .request("POST", "/v1/resumes/basic", None, Some(sample_basics()))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = test_app().await;
    let (status, _) = app
        .request("GET", "/v1/users/me", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = test_app().await;
    let (status, body) = app
        .request(
            "POST",
            "/v1/auth/register",
            None,
            Some(json!({
                "full_name": "Jane Doe",
                "email": "not-an-email",
                "password": "secret1234"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn login_rejects_malformed_email() {
    let app = test_app().await;
    let (status, _) = app
        .request(
            "POST",
            "/v1/auth/login",
            None,
            Some(json!({"email": "nope", "password": "x"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reset_password_without_staged_code_is_rejected() {
    let app = test_app().await;
    let (status, body) = app
        .request(
            "POST",
            "/v1/auth/reset-password",
            None,
            Some(json!({
                "email": "jane@example.com",
                "code": "123456",
                "new_password": "freshsecret1"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn authenticated_user_can_stage_sections() {
    let app = test_app().await;
    let token = app.user_token();

    let (status, body) = app
        .request(
            "POST",
            "/v1/resumes/basic",
            Some(&token),
            Some(sample_basics()),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let basic_key = body["data"]["key"].as_str().expect("key").to_string();
    Uuid::parse_str(&basic_key).expect("key is a uuid");

    let (status, body) = app
        .request(
            "POST",
            "/v1/resumes/main",
            Some(&token),
            Some(json!({
                "work": [{"position": "Engineer", "company": "Acme"}],
                "skills": [{"name": "Rust"}]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["key"].is_string());
}

#[tokio::test]
async fn staging_rejects_invalid_email() {
    let app = test_app().await;
    let token = app.user_token();

    let mut basics = sample_basics();
    basics["email"] = json!("not-an-email");
    let (status, body) = app
        .request("POST", "/v1/resumes/basic", Some(&token), Some(basics))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let mut document = json!({
        "basics": sample_basics(),
        "meta": {"template": "classic", "lang": "en"}
    });
    document["basics"]["email"] = json!("nope");
    let (status, body) = app
        .request("POST", "/v1/resumes", Some(&token), Some(document))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn generate_with_unknown_keys_is_not_found() {
    let app = test_app().await;
    let token = app.user_token();

    let (status, body) = app
        .request(
            "POST",
            "/v1/resumes/generate",
            Some(&token),
            Some(json!({
                "basic_key": Uuid::new_v4(),
                "main_key": Uuid::new_v4(),
                "template": "classic",
                "lang": "en"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn resume_delete_requires_authentication() {
    let app = test_app().await;
    let (status, _) = app
        .request(
            "DELETE",
            &format!("/v1/resumes/{}", Uuid::new_v4()),
            None,
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn regular_user_cannot_create_accounts() {
    let app = test_app().await;
    let token = app.user_token();
    let (status, body) = app
        .request(
            "POST",
            "/v1/users",
            Some(&token),
            Some(json!({
                "full_name": "New Admin",
                "email": "new-admin@example.com",
                "password": "secret1234",
                "role": "admin"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn health_endpoint_always_answers() {
    let app = test_app().await;
    let (status, body) = app.request("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["cache"], "connected");
}
