mod send_task_reminders;

use actix_web::web;
use send_task_reminders::send_task_reminders_controller;

pub use send_task_reminders::SendTaskRemindersUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/cron/reminders",
        web::get().to(send_task_reminders_controller),
    );
}
