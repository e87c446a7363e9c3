use actix_web::web;

use crate::middleware::route_policy::AccessPolicy;

pub mod admin;
pub mod auth;
pub mod comments;
pub mod health;
pub mod managers;
pub mod todos;
pub mod users;

/// Register every route. Both `main.rs` and the integration tests build
/// their apps from this, so the paths under test are the production paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Todo routes, with comments and managers nested under a todo:
    // /api/todos/**
    cfg.service(
        web::scope("/api/todos")
            .configure(todos::configure_routes)
            .configure(comments::configure_routes)
            .configure(managers::configure_routes),
    );

    // User routes: /api/users/**
    cfg.service(web::scope("/api/users").configure(users::configure_routes));

    // Admin routes: /api/admin/**
    cfg.service(web::scope("/api/admin").configure(admin::configure_routes));
}

/// Route classification the access gate consumes. Everything not listed
/// here requires an authenticated caller.
pub fn access_rules() -> Vec<(&'static str, AccessPolicy)> {
    vec![
        ("/health", AccessPolicy::Public),
        ("/api/auth", AccessPolicy::Public),
        ("/api/admin", AccessPolicy::AdminOnly),
    ]
}
