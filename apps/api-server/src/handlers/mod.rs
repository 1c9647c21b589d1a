//! HTTP handlers and route configuration.

mod auth;
mod categories;
mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Public routes
        .route("/login", web::post().to(auth::login))
        // User routes; registration is public, the rest require a token
        .service(
            web::resource("/user")
                .route(web::post().to(auth::register))
                .route(web::get().to(users::list_users)),
        )
        .route("/user/{id}", web::get().to(users::get_user))
        // Protected routes
        .service(
            web::resource("/categories")
                .route(web::post().to(categories::create_category))
                .route(web::get().to(categories::list_categories)),
        )
        .route("/post", web::post().to(posts::create_post));
}
