mod get_lookup;

use actix_web::web;
use get_lookup::get_lookup_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/lookup", web::get().to(get_lookup_controller));
}
