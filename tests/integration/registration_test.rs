//! Registration over HTTP: every outcome of the rule table plus the
//! created/conflict pair.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use bucketlist_api::Message;
use bucketlist_api::entities::v1::users;
use bucketlist_api::requests::v1::auth::RegisterRequest;
use bucketlist_api::responses::v1::auth::Registered;
use sea_orm::{EntityTrait, PaginatorTrait};

fn form(email: Option<&str>, password: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        email: email.map(str::to_string),
        password: password.map(str::to_string),
    }
}

#[actix_web::test]
async fn test_register_twice_is_created_then_conflict() {
    let (service, db) = bucketlist_api::service!();
    let request = form(Some("test@example.com"), Some("test_password"));

    let req = TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_form(&request)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Registered = read_body_json(resp).await;
    assert_eq!(body.message, "You registered successfully. Please log in.");
    assert_eq!(body.email, "test@example.com");

    let req = TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_form(&request)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Message = read_body_json(resp).await;
    assert_eq!(body.message, "User already exists. Please login.");

    assert_eq!(users::Entity::find().count(&db).await.unwrap(), 1);
}

#[actix_web::test]
async fn test_register_rejections() {
    let (service, db) = bucketlist_api::service!();

    let cases = [
        (form(None, None), "Email address and password not provided."),
        (form(None, Some("password")), "Email address not provided."),
        (form(Some("email"), None), "Password not provided."),
        (form(Some(""), Some("")), "Email address and password is empty."),
        (form(Some(""), Some("password")), "Email address is empty."),
        (form(Some("email@company.com"), Some("")), "Password is empty."),
        (form(Some("email"), Some("password")), "Invalid email address."),
        (
            form(Some("email"), Some("pass")),
            "Invalid email address and short password.",
        ),
        (form(Some("email@company.co"), Some("pass")), "Password too short."),
    ];

    for (request, expected) in cases {
        // resubmitting yields the same answer
        for _ in 0..2 {
            let req = TestRequest::post()
                .uri("/api/v1/auth/register")
                .set_form(&request)
                .to_request();
            let resp = call_service(&service, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{expected}");

            let body: Message = read_body_json(resp).await;
            assert_eq!(body.message, expected);
        }
    }

    assert_eq!(users::Entity::find().count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_register_email_is_case_sensitive() {
    let (service, _db) = bucketlist_api::service!();

    for email in ["Test@Example.com", "test@example.com"] {
        let req = TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_form(form(Some(email), Some("test_password")))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED, "{email}");
    }
}

#[actix_web::test]
async fn test_register_outcomes_are_counted() {
    let (service, _db) = bucketlist_api::service!();

    let req = TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_form(form(Some("email@company.co"), Some("pass")))
        .to_request();
    call_service(&service, req).await;

    let req = TestRequest::get().uri("/metrics").to_request();
    let body = actix_web::test::call_and_read_body(&service, req).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("auth_registrations_total"));
    assert!(body.contains("outcome=\"password_too_short\""));
}

#[actix_web::test]
async fn test_register_without_body() {
    let (service, db) = bucketlist_api::service!();

    let req = TestRequest::post().uri("/api/v1/auth/register").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Message = read_body_json(resp).await;
    assert_eq!(body.message, "Email address and password not provided.");

    // same fields without a Content-Type header
    let req = TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_payload("email=email%40company.co&password=pass")
        .to_request();
    let body: Message = read_body_json(call_service(&service, req).await).await;
    assert_eq!(body.message, "Password too short.");

    assert_eq!(users::Entity::find().count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_register_is_only_served_under_api_prefix() {
    let (service, _db) = bucketlist_api::service!();

    let req = TestRequest::post()
        .uri("/auth/register")
        .set_form(form(Some("test@example.com"), Some("test_password")))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);
}
