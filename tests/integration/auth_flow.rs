//! Integration tests for login, bearer authentication and logout

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use bucketlist_api::Message;
use bucketlist_api::requests::v1::auth::LoginRequest;
use bucketlist_api::responses::v1::auth::LoggedIn;
use bucketlist_api::testing::setup;

#[actix_web::test]
async fn test_login_returns_access_token() {
    let (service, db) = bucketlist_api::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();

    let req = TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_form(LoginRequest::new(&user.email, setup::PASSWORD))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: LoggedIn = read_body_json(resp).await;
    assert_eq!(body.message, "You logged in successfully.");
    assert_eq!(body.access_token.len(), 32);
}

#[actix_web::test]
async fn test_login_failures() {
    let (service, db) = bucketlist_api::service!();
    let hasher = setup::password_hasher().unwrap();
    let user = setup::create_test_user(&db, &hasher).await.unwrap();

    let cases = [
        (
            LoginRequest::default(),
            StatusCode::BAD_REQUEST,
            "Email address and password are required.",
        ),
        (
            LoginRequest::new(&user.email, ""),
            StatusCode::BAD_REQUEST,
            "Email address and password are required.",
        ),
        (
            LoginRequest::new(&user.email, "wrong_password"),
            StatusCode::UNAUTHORIZED,
            "Invalid email or password, Please try again.",
        ),
        (
            LoginRequest::new("nobody@example.com", setup::PASSWORD),
            StatusCode::UNAUTHORIZED,
            "Invalid email or password, Please try again.",
        ),
    ];

    for (request, status, message) in cases {
        let req = TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_form(&request)
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), status, "{message}");

        let body: Message = read_body_json(resp).await;
        assert_eq!(body.message, message);
    }

    let req = TestRequest::post().uri("/api/v1/auth/login").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Message = read_body_json(resp).await;
    assert_eq!(body.message, "Email address and password are required.");
}

#[actix_web::test]
async fn test_register_login_logout_flow() {
    let (service, _db) = bucketlist_api::service!();
    let token = register_and_login!(service, "user@test.com", "test1234");

    // Token works on a protected route
    let req = TestRequest::get()
        .uri("/bucketlists/")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Logout
    let req = TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Message = read_body_json(resp).await;
    assert_eq!(body.message, "You logged out successfully.");

    // The same token is now rejected
    let req = TestRequest::get()
        .uri("/bucketlists/")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_logout_keeps_other_sessions() {
    let (service, _db) = bucketlist_api::service!();
    let first = register_and_login!(service, "user@test.com", "test1234");

    let req = TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_form(LoginRequest::new("user@test.com", "test1234"))
        .to_request();
    let second: LoggedIn = read_body_json(call_service(&service, req).await).await;

    let req = TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", format!("Bearer {first}")))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri("/bucketlists/")
        .insert_header(("Authorization", format!("Bearer {}", second.access_token)))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_protected_routes_require_bearer() {
    let (service, _db) = bucketlist_api::service!();

    let headers: [Option<&str>; 4] = [
        None,
        Some("Token abc"),
        Some("Bearer "),
        Some("Bearer 00000000000000000000000000000000"),
    ];

    for header in headers {
        let mut req = TestRequest::post().uri("/api/v1/auth/logout");
        if let Some(header) = header {
            req = req.insert_header(("Authorization", header));
        }
        let resp = call_service(&service, req.to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{header:?}");
    }
}
