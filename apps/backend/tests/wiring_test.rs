mod common;

use actix_web::{test, web, App};
use backend::{routes, RequestTrace};
use common::test_state;
use serde_json::Value;

/// A route that demands an identity but is served without the access gate
/// is a configuration bug; it must fail loudly as a 500-class WIRING
/// error, never masquerade as an authentication failure.
#[actix_web::test]
async fn ungated_identity_route_fails_as_wiring_defect() {
    let (state, _) = test_state();

    // Deliberately no AccessGate wrap.
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestTrace)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/users/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "WIRING");
    // Internals stay out of the response body.
    assert_eq!(body["detail"], "Internal server error");
}
