mod create_task;
mod get_tasks;

use actix_web::web;
use create_task::create_task_controller;
use get_tasks::get_tasks_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tasks", web::get().to(get_tasks_controller));
    cfg.route("/tasks", web::post().to(create_task_controller));
}
