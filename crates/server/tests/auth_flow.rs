use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Duration;
use serde_json::{json, Value};
use tower::Service;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::auth::TokenService;

const TEST_SECRET: &str = "test-secret";

// These tests exercise the router in-process. They still need a reachable
// store to build the state, so they skip when MONGODB_URI is absent.
async fn build_app() -> anyhow::Result<Router> {
    if std::env::var("MONGODB_URI").is_err() {
        anyhow::bail!("MONGODB_URI missing; skip router tests");
    }
    let mut db_cfg = configs::DatabaseConfig::default();
    db_cfg.normalize_from_env();
    db_cfg.validate()?;

    let store = models::Store::connect(&db_cfg).await?;
    let tokens = Arc::new(TokenService::new(TEST_SECRET, Duration::hours(10)));
    let state = ServerState { store, tokens };
    Ok(routes::build_router(CorsLayer::very_permissive(), state))
}

async fn body_json(resp: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn issue_token(app: &Router, payload: Value) -> anyhow::Result<String> {
    let req = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload)?))?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    let token = body["token"].as_str().unwrap_or_default().to_string();
    assert!(!token.is_empty());
    Ok(token)
}

#[tokio::test]
async fn reviews_without_token_rejected() -> anyhow::Result<()> {
    let app = match build_app().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let req = Request::builder().uri("/reviews").body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await?, json!({ "message": "unauthorized access" }));
    Ok(())
}

#[tokio::test]
async fn reviews_with_tampered_token_rejected() -> anyhow::Result<()> {
    let app = match build_app().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let token = issue_token(&app, json!({ "email": "a@x.com" })).await?;
    let mut tampered = token.into_bytes();
    let last = tampered.last_mut().unwrap();
    *last = if *last == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered)?;

    let req = Request::builder()
        .uri("/reviews")
        .header("Authorization", format!("Bearer {tampered}"))
        .body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn reviews_with_expired_token_rejected() -> anyhow::Result<()> {
    let app = match build_app().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    // Forge an already-expired token signed with the test secret.
    use jsonwebtoken::{encode, EncodingKey, Header};
    #[derive(serde::Serialize)]
    struct Expired {
        email: String,
        iat: i64,
        exp: i64,
    }
    let now = chrono::Utc::now().timestamp();
    let claims = Expired { email: "a@x.com".into(), iat: now - 7200, exp: now - 3600 };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET.as_bytes()))?;

    let req = Request::builder()
        .uri("/reviews")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn issued_token_grants_owner_scoped_listing() -> anyhow::Result<()> {
    let app = match build_app().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let token = issue_token(&app, json!({ "email": "a@x.com" })).await?;

    let req = Request::builder()
        .uri("/reviews?email=a@x.com")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert!(body.is_array());
    Ok(())
}

#[tokio::test]
async fn mismatched_email_rejected_with_single_body() -> anyhow::Result<()> {
    let app = match build_app().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let token = issue_token(&app, json!({ "email": "a@x.com" })).await?;

    let req = Request::builder()
        .uri("/reviews?email=b@x.com")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    // The 401 halts the handler; the body is exactly one error object,
    // never a second payload appended after it.
    assert_eq!(body_json(resp).await?, json!({ "message": "unauthorized access" }));
    Ok(())
}

#[tokio::test]
async fn token_without_email_claim_fails_ownership_check() -> anyhow::Result<()> {
    let app = match build_app().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let token = issue_token(&app, json!({ "role": "anonymous" })).await?;

    let req = Request::builder()
        .uri("/reviews?email=a@x.com")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
