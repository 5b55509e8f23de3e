//! Markup is stored and returned verbatim inside JSON; nothing is rendered.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use bucketlist_api::requests::v1::bucketlist::BucketlistRequest;
use bucketlist_api::responses::v1::bucketlist::Bucketlist;

#[actix_web::test]
async fn test_script_names_round_trip_as_json() {
    let (service, _db) = bucketlist_api::service!();
    let token = register_and_login!(service, "user@test.com", "test1234");
    let name = "<script>alert('xss')</script>";

    let req = TestRequest::post()
        .uri("/bucketlists/")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_form(BucketlistRequest::new(name))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );

    let created: Bucketlist = read_body_json(resp).await;
    assert_eq!(created.name, name);
}
