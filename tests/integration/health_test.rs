use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use bucketlist_api::controllers::health::{HealthResponse, LivenessResponse};

#[actix_web::test]
async fn test_health_endpoints() {
    let (service, _db) = bucketlist_api::service!();

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: LivenessResponse = read_body_json(resp).await;
    assert_eq!(body.status, "healthy");

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthResponse = read_body_json(resp).await;
    assert_eq!(body.database, "connected");
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let (service, _db) = bucketlist_api::service!();

    let req = TestRequest::get().uri("/api.json").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = read_body_json(resp).await;
    assert!(body["paths"]["/api/v1/auth/register"].is_object());
}
