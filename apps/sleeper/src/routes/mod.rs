use actix_web::web;

pub mod health;
pub mod sleepers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(sleepers::configure_routes);
}
