use std::{fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_env() -> Self {
        let env = std::env::var("APP_ENV")
            .or_else(|_| std::env::var("NODE_ENV"))
            .unwrap_or_default();
        match env.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    pub environment: Environment,
    /// Shared secret the reminders trigger has to provide as the `secret` query
    /// parameter. Only checked in `Environment::Production`.
    pub cron_secret: Option<String>,
    /// Key expected in the `x-api-key` header of the task and project routes.
    /// When it is not set those routes reject every request.
    pub api_key: Option<String>,
    /// Upper bound for a single reminder webhook call
    pub reminder_webhook_timeout: Duration,
    /// Maximum number of reminders dispatched at the same time
    pub reminder_dispatch_concurrency: usize,
    /// When set the server runs the reminder job itself on this interval,
    /// in addition to the http trigger.
    pub reminder_job_interval: Option<Duration>,
    /// Webhook used for new `Task`s that do not specify one
    pub default_task_webhook_url: Option<String>,
}

fn parse_env_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn optional_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
    pub fn new() -> Self {
        let environment = Environment::from_env();
        let cron_secret = optional_env_var("CRON_SECRET");
        if cron_secret.is_none() && environment == Environment::Production {
            warn!("Did not find CRON_SECRET environment variable. The reminders trigger will reject every invocation.");
        }
        let api_key = optional_env_var("PM_TOOLS_API_KEY");
        if api_key.is_none() {
            info!("Did not find PM_TOOLS_API_KEY environment variable. Task and project routes are disabled.");
        }

        let reminder_job_interval = match parse_env_var("REMINDER_JOB_INTERVAL_SECS", 0u64) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Self {
            port: parse_env_var("PORT", 5000),
            environment,
            cron_secret,
            api_key,
            reminder_webhook_timeout: Duration::from_secs(parse_env_var(
                "REMINDER_WEBHOOK_TIMEOUT_SECS",
                10,
            )),
            reminder_dispatch_concurrency: parse_env_var("REMINDER_DISPATCH_CONCURRENCY", 8usize)
                .max(1),
            reminder_job_interval,
            default_task_webhook_url: optional_env_var("DEFAULT_TASK_WEBHOOK_URL"),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
