//! Bucketlist CRUD through the HTTP API

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use bucketlist_api::Message;
use bucketlist_api::requests::v1::bucketlist::BucketlistRequest;
use bucketlist_api::responses::v1::bucketlist::{Bucketlist, BucketlistPaginationResponse};

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_bucketlist_crud() {
    let (service, _db) = bucketlist_api::service!();
    let token = register_and_login!(service, "user@test.com", "test1234");

    // Create
    let req = TestRequest::post()
        .uri("/bucketlists/")
        .insert_header(bearer(&token))
        .set_form(BucketlistRequest::new("Go to Grand canyon for camping"))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Bucketlist = read_body_json(resp).await;
    assert_eq!(created.name, "Go to Grand canyon for camping");

    // List
    let req = TestRequest::get()
        .uri("/bucketlists/")
        .insert_header(bearer(&token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page: BucketlistPaginationResponse = read_body_json(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.pages, 1);
    assert_eq!(page.data, vec![created.clone()]);

    // Get by id
    let req = TestRequest::get()
        .uri(&format!("/bucketlists/{}", created.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let shown: Bucketlist = read_body_json(resp).await;
    assert_eq!(shown, created);

    // Edit
    let req = TestRequest::put()
        .uri(&format!("/bucketlists/{}", created.id))
        .insert_header(bearer(&token))
        .set_form(BucketlistRequest::new("Vacay :)"))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let edited: Bucketlist = read_body_json(resp).await;
    assert_eq!(edited.id, created.id);
    assert_eq!(edited.name, "Vacay :)");

    // Delete
    let req = TestRequest::delete()
        .uri(&format!("/bucketlists/{}", created.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Message = read_body_json(resp).await;
    assert_eq!(
        body.message,
        format!("bucketlist {} deleted successfully", created.id)
    );

    // Gone
    let req = TestRequest::get()
        .uri(&format!("/bucketlists/{}", created.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Message = read_body_json(resp).await;
    assert_eq!(body.message, "Bucketlist not found.");
}

#[actix_web::test]
async fn test_bucketlist_name_validation() {
    let (service, _db) = bucketlist_api::service!();
    let token = register_and_login!(service, "user@test.com", "test1234");

    let cases = [
        (BucketlistRequest::default(), "Bucketlist name not provided."),
        (BucketlistRequest::new("   "), "Bucketlist name is empty."),
    ];

    for (request, message) in cases {
        let req = TestRequest::post()
            .uri("/bucketlists/")
            .insert_header(bearer(&token))
            .set_form(&request)
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Message = read_body_json(resp).await;
        assert_eq!(body.message, message);
    }

    let req = TestRequest::post()
        .uri("/bucketlists/")
        .insert_header(bearer(&token))
        .to_request();
    let body: Message = read_body_json(call_service(&service, req).await).await;
    assert_eq!(body.message, "Bucketlist name not provided.");
}

#[actix_web::test]
async fn test_bucketlists_are_private() {
    let (service, _db) = bucketlist_api::service!();
    let alice = register_and_login!(service, "alice@test.com", "test1234");
    let bob = register_and_login!(service, "bob@test.com", "test1234");

    let req = TestRequest::post()
        .uri("/bucketlists/")
        .insert_header(bearer(&alice))
        .set_form(BucketlistRequest::new("Alice's list"))
        .to_request();
    let created: Bucketlist = read_body_json(call_service(&service, req).await).await;

    let req = TestRequest::get()
        .uri(&format!("/bucketlists/{}", created.id))
        .insert_header(bearer(&bob))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::get()
        .uri("/bucketlists/")
        .insert_header(bearer(&bob))
        .to_request();
    let page: BucketlistPaginationResponse = read_body_json(call_service(&service, req).await).await;
    assert_eq!(page.total, 0);
    assert!(page.data.is_empty());
}

#[actix_web::test]
async fn test_bucketlist_search_and_paging() {
    let (service, _db) = bucketlist_api::service!();
    let token = register_and_login!(service, "user@test.com", "test1234");

    for name in ["Camp at the Grand canyon", "Climb Kilimanjaro", "Raft the Grand canyon"] {
        let req = TestRequest::post()
            .uri("/bucketlists/")
            .insert_header(bearer(&token))
            .set_form(BucketlistRequest::new(name))
            .to_request();
        assert_eq!(call_service(&service, req).await.status(), StatusCode::CREATED);
    }

    let req = TestRequest::get()
        .uri("/bucketlists/?q=Grand&limit=1&page=2")
        .insert_header(bearer(&token))
        .to_request();
    let page: BucketlistPaginationResponse = read_body_json(call_service(&service, req).await).await;

    assert_eq!(page.total, 2);
    assert_eq!(page.pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Raft the Grand canyon");

    let req = TestRequest::get()
        .uri("/bucketlists/?page=0")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::get()
        .uri("/bucketlists/?page=18446744073709551615")
        .insert_header(bearer(&token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Message = read_body_json(resp).await;
    assert_eq!(body.message, "Page is out of range.");

    // wildcards match themselves only
    let req = TestRequest::get()
        .uri("/bucketlists/?q=_")
        .insert_header(bearer(&token))
        .to_request();
    let page: BucketlistPaginationResponse = read_body_json(call_service(&service, req).await).await;
    assert_eq!(page.total, 0);
}

#[actix_web::test]
async fn test_bucketlists_require_authentication() {
    let (service, _db) = bucketlist_api::service!();

    let req = TestRequest::post()
        .uri("/bucketlists/")
        .set_form(BucketlistRequest::new("Go to Grand canyon for camping"))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = TestRequest::get().uri("/bucketlists/1").to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::UNAUTHORIZED);
}
