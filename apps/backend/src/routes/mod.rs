use actix_web::web;

pub mod authors;
pub mod health;

/// Register every application route.
///
/// `main.rs` wraps this with the tracing middleware; tests call it through
/// the test app builder with the same wrappers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.configure(health::configure_routes);

    // Authors: /authors
    cfg.service(web::scope("/authors").configure(authors::configure_routes));
}
