//! Helpers shared by the test harnesses

/// Register `email`/`password` through the API, log in and evaluate to the
/// access token
macro_rules! register_and_login {
    ($service:expr, $email:expr, $password:expr) => {{
        use ::actix_web::test::{TestRequest, call_service, read_body_json};
        use ::bucketlist_api::requests::v1::auth::{LoginRequest, RegisterRequest};
        use ::bucketlist_api::responses::v1::auth::LoggedIn;

        let req = TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_form(RegisterRequest::new($email, $password))
            .to_request();
        let resp = call_service(&$service, req).await;
        assert_eq!(resp.status().as_u16(), 201, "registration should succeed");

        let req = TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_form(LoginRequest::new($email, $password))
            .to_request();
        let resp = call_service(&$service, req).await;
        assert_eq!(resp.status().as_u16(), 200, "login should succeed");

        let body: LoggedIn = read_body_json(resp).await;
        body.access_token
    }};
}
