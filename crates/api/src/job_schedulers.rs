use crate::{reminder::SendTaskRemindersUseCase, shared::usecase::execute};
use actix_web::rt::time::{interval, sleep_until, Instant};
use std::time::Duration;
use taskdeck_infra::TaskdeckContext;
use tracing::{error, info};

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Runs the task reminders job in process. Only started when an interval is configured,
/// otherwise the job is expected to be triggered through the cron route.
pub fn start_send_reminders_job(ctx: TaskdeckContext) {
    let period = match ctx.config.reminder_job_interval {
        Some(period) => period,
        None => return,
    };
    info!("Starting task reminders job with interval: {:?}", period);

    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now.max(0) as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);

        sleep_until(start).await;
        let mut job_interval = interval(period);
        loop {
            job_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(send_reminders(context));
        }
    });
}

async fn send_reminders(context: TaskdeckContext) {
    let usecase = match SendTaskRemindersUseCase::for_invocation(&context) {
        Ok(usecase) => usecase,
        Err(e) => {
            error!("Unable to start task reminders job: {:?}", e);
            return;
        }
    };

    if let Ok(results) = execute(usecase, &context).await {
        let failed = results.iter().filter(|r| r.error.is_some()).count();
        info!(
            "Task reminders job finished. Processed: {}, failed: {}",
            results.len(),
            failed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(50 * 1000, 5), 5);
        assert_eq!(get_start_delay(50 * 1000, 10), 60);
        assert_eq!(get_start_delay(50 * 1000, 15), 55);
        assert_eq!(get_start_delay(60 * 1000, 60), 60);
        assert_eq!(get_start_delay(60 * 1000, 10), 50);
        assert_eq!(get_start_delay(59 * 1000, 0), 1);
        assert_eq!(get_start_delay(59 * 1000, 1), 60);
    }
}
