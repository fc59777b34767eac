use crate::error::TaskdeckError;
use actix_web::HttpRequest;
use taskdeck_infra::TaskdeckContext;
use taskdeck_utils::secrets_match;
use tracing::error;

/// Routes used by integrations have to provide the configured api key in the
/// `x-api-key` header. When no key is configured every request is rejected.
pub fn protect_api_key_route(req: &HttpRequest, ctx: &TaskdeckContext) -> Result<(), TaskdeckError> {
    let expected_api_key = match &ctx.config.api_key {
        Some(key) => key,
        None => {
            error!("PM_TOOLS_API_KEY is not configured, rejecting request");
            return Err(TaskdeckError::Unauthorized(
                "Invalid or missing API Key".into(),
            ));
        }
    };

    let api_key = match req.headers().get("x-api-key") {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) => api_key,
            Err(_) => {
                return Err(TaskdeckError::Unauthorized(
                    "Invalid or missing API Key".into(),
                ))
            }
        },
        None => {
            return Err(TaskdeckError::Unauthorized(
                "Invalid or missing API Key".into(),
            ))
        }
    };

    if secrets_match(api_key, expected_api_key) {
        Ok(())
    } else {
        Err(TaskdeckError::Unauthorized(
            "Invalid or missing API Key".into(),
        ))
    }
}

/// The reminders trigger is protected by a shared secret in production only
pub fn protect_cron_route(secret: Option<&str>, ctx: &TaskdeckContext) -> Result<(), TaskdeckError> {
    if !ctx.config.is_production() {
        return Ok(());
    }

    match (&ctx.config.cron_secret, secret) {
        (Some(expected), Some(provided)) if secrets_match(provided, expected) => Ok(()),
        (None, _) => {
            error!("CRON_SECRET is not configured, rejecting reminders trigger");
            Err(TaskdeckError::Unauthorized("Cron secret is not configured".into()))
        }
        _ => Err(TaskdeckError::Unauthorized(
            "Invalid or missing cron secret".into(),
        )),
    }
}
