use std::sync::Arc;
use taskdeck_api::Application;
use taskdeck_infra::{Config, Environment, StaticTimeSys, TaskdeckContext};
use taskdeck_sdk::TaskdeckSDK;

/// 2021-02-21T00:00:00Z
pub const DUE_MIDNIGHT: i64 = 1613865600000;
pub const HOUR: i64 = 1000 * 60 * 60;

pub struct TestApp {
    pub config: Config,
    /// Shares the repositories with the running application
    pub ctx: TaskdeckContext,
    pub address: String,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, TaskdeckSDK) {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> (TestApp, TaskdeckSDK) {
    let mut ctx = TaskdeckContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.environment = Environment::Development;
    ctx.config.api_key = Some("test-api-key".into());
    ctx.config.cron_secret = None;
    ctx.config.reminder_job_interval = None;
    ctx.config.default_task_webhook_url = None;
    // One hour before midnight of the due dates used in the tests
    ctx.sys = Arc::new(StaticTimeSys(DUE_MIDNIGHT - HOUR));
    configure(&mut ctx.config);

    let config = ctx.config.clone();
    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = TaskdeckSDK::new(address.clone(), "test-api-key");
    let app = TestApp {
        config,
        ctx,
        address,
    };
    (app, sdk)
}
