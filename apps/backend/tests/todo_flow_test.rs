mod common;

use actix_web::{test, web, App};
use backend::{routes, AccessGate, RequestTrace, RoutePolicy, UserRole};
use common::{assert_problem_details, bearer, test_state, token_for};
use serde_json::Value;

macro_rules! gated_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .wrap(AccessGate::new(RoutePolicy::new(routes::access_rules())))
                .wrap(RequestTrace)
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn todos_comments_and_managers_flow() {
    let (state, _) = test_state();
    let app = gated_app!(state);

    let owner = state.store.users.insert("owner@b.com", "hash", UserRole::User);
    let helper = state.store.users.insert("helper@b.com", "hash", UserRole::User);
    let owner_token = token_for(&state, owner.id, &owner.email, owner.role);
    let helper_token = token_for(&state, helper.id, &helper.email, helper.role);

    // Owner creates a todo.
    let req = test::TestRequest::post()
        .uri("/api/todos")
        .insert_header(bearer(&owner_token))
        .set_json(serde_json::json!({"title": "write report", "contents": "quarterly"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let todo: Value = test::read_body_json(resp).await;
    let todo_id = todo["id"].as_i64().unwrap();

    // Helper comments on it.
    let req = test::TestRequest::post()
        .uri(&format!("/api/todos/{todo_id}/comments"))
        .insert_header(bearer(&helper_token))
        .set_json(serde_json::json!({"contents": "on it"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let req = test::TestRequest::get()
        .uri(&format!("/api/todos/{todo_id}/comments"))
        .insert_header(bearer(&owner_token))
        .to_request();
    let comments: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(comments.as_array().unwrap().len(), 1);
    assert_eq!(comments[0]["author_id"], helper.id);

    // Owner registers the helper as a manager; the helper cannot.
    let req = test::TestRequest::post()
        .uri(&format!("/api/todos/{todo_id}/managers"))
        .insert_header(bearer(&helper_token))
        .set_json(serde_json::json!({"user_id": helper.id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let req = test::TestRequest::post()
        .uri(&format!("/api/todos/{todo_id}/managers"))
        .insert_header(bearer(&owner_token))
        .set_json(serde_json::json!({"user_id": helper.id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let manager: Value = test::read_body_json(resp).await;
    let manager_id = manager["id"].as_i64().unwrap();

    // And removes the assignment again.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/todos/{todo_id}/managers/{manager_id}"))
        .insert_header(bearer(&owner_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);
}

#[actix_web::test]
async fn commenting_on_a_missing_todo_is_404() {
    let (state, _) = test_state();
    let app = gated_app!(state);

    let token = token_for(&state, 1, "user@b.com", UserRole::User);
    let req = test::TestRequest::post()
        .uri("/api/todos/999/comments")
        .insert_header(bearer(&token))
        .set_json(serde_json::json!({"contents": "hello?"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, 404, "TODO_NOT_FOUND", "Todo not found").await;
}

#[actix_web::test]
async fn password_change_requires_the_current_password() {
    let (state, _) = test_state();
    let app = gated_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(serde_json::json!({
            "email": "alice@example.com",
            "password": "Original1",
            "role": "USER"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri("/api/users/password")
        .insert_header(bearer(&token))
        .set_json(serde_json::json!({
            "old_password": "WrongOne1",
            "new_password": "Replacement1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let req = test::TestRequest::put()
        .uri("/api/users/password")
        .insert_header(bearer(&token))
        .set_json(serde_json::json!({
            "old_password": "Original1",
            "new_password": "Replacement1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);
}
