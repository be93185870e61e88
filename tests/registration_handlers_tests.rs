use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use regform::{
    repositories::{RegistrationRepository, SqliteRegistrationRepository},
    routes::create_router,
    services::{SaltedHasher, Sha256SaltedHasher},
    test_utils::test_helpers,
    AppState,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn setup() -> (Router, SqlitePool) {
    let pool = test_helpers::create_test_db().await.unwrap();
    let app = create_router(AppState::new(pool.clone()));
    (app, pool)
}

async fn post_form(app: &Router, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_get_renders_empty_form() {
    let (app, _pool) = setup().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("X-Frame-Options").unwrap(),
        "DENY"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("name=\"FirstName\""));
    assert!(!html.contains("success-message"));
    assert!(!html.contains("error-message"));
}

#[tokio::test]
async fn test_post_stores_registration_in_database() {
    let (app, pool) = setup().await;

    let (status, html) = post_form(
        &app,
        &[
            ("FirstName", "Some first name"),
            ("LastName", "Some last name"),
            ("Email", "Some email"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("success-message"));

    let repository = SqliteRegistrationRepository::new(pool);
    let registrations = repository.list_all().await.unwrap();
    assert_eq!(registrations.len(), 1);

    let registration = &registrations[0];
    assert_eq!(registration.first_name, "Some first name");
    assert_eq!(registration.last_name, "Some last name");
    assert_eq!(
        Sha256SaltedHasher::new().hash_with_salt("Some email", &registration.email_hash_salt),
        registration.email_hash
    );
    assert_ne!(registration.email_hash, "Some email");
}

#[tokio::test]
async fn test_post_same_email_twice_stores_one_record() {
    let (app, pool) = setup().await;
    let fields = [
        ("FirstName", "John"),
        ("LastName", "Doe"),
        ("Email", "john.doe@example.com"),
    ];

    let (status, html) = post_form(&app, &fields).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("success-message"));
    assert!(!html.contains("error-message"));
    assert_eq!(test_helpers::count_registrations(&pool).await.unwrap(), 1);

    let (status, html) = post_form(&app, &fields).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("error-message"));
    assert!(!html.contains("success-message"));
    assert_eq!(test_helpers::count_registrations(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_distinct_emails_with_same_names_are_all_stored() {
    let (app, pool) = setup().await;

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        let (status, html) = post_form(
            &app,
            &[("FirstName", "Jane"), ("LastName", "Roe"), ("Email", email)],
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("success-message"));
    }

    let registrations = SqliteRegistrationRepository::new(pool)
        .list_all()
        .await
        .unwrap();
    assert_eq!(registrations.len(), 3);

    let hasher = Sha256SaltedHasher::new();
    for (registration, email) in registrations
        .iter()
        .zip(["a@example.com", "b@example.com", "c@example.com"])
    {
        assert_eq!(
            hasher.hash_with_salt(email, &registration.email_hash_salt),
            registration.email_hash
        );
    }
}

#[tokio::test]
async fn test_missing_first_name_is_not_stored() {
    let (app, pool) = setup().await;

    let (status, html) = post_form(
        &app,
        &[("LastName", "Some last name"), ("Email", "Some email")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("First name is required"));
    assert!(!html.contains("success-message"));
    assert_eq!(test_helpers::count_registrations(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_last_name_is_not_stored() {
    let (app, pool) = setup().await;

    let (status, html) = post_form(
        &app,
        &[("FirstName", "Some first name"), ("Email", "Some email")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Last name is required"));
    assert_eq!(test_helpers::count_registrations(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_email_is_not_stored() {
    let (app, pool) = setup().await;

    let (status, html) = post_form(
        &app,
        &[("FirstName", "Some first name"), ("LastName", "Some last name")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Email is required"));
    // the submitted values are echoed back
    assert!(html.contains("value=\"Some first name\""));
    assert_eq!(test_helpers::count_registrations(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_blank_email_is_not_stored() {
    let (app, pool) = setup().await;

    let (status, _html) = post_form(
        &app,
        &[("FirstName", "A"), ("LastName", "B"), ("Email", "   ")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(test_helpers::count_registrations(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_storage_failure_returns_500() {
    let (app, pool) = setup().await;
    pool.close().await;

    let (status, html) = post_form(
        &app,
        &[("FirstName", "John"), ("LastName", "Doe"), ("Email", "john.doe@example.com")],
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!html.contains("success-message"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _pool) = setup().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_health_reports_unavailable_database() {
    let (app, pool) = setup().await;
    pool.close().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
