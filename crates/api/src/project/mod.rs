mod create_project;
mod get_projects;

use actix_web::web;
use create_project::create_project_controller;
use get_projects::get_projects_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/projects", web::get().to(get_projects_controller));
    cfg.route("/projects", web::post().to(create_project_controller));
}
