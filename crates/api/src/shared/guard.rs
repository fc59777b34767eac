use crate::error::TaskdeckError;
use chrono::NaiveDate;
use taskdeck_domain::{parse_date, ID};

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: String) -> Result<ID, TaskdeckError> {
        val.parse()
            .map_err(|e| TaskdeckError::BadClientData(format!("{}", e)))
    }

    pub fn against_malformed_date(val: Option<String>) -> Result<Option<NaiveDate>, TaskdeckError> {
        match val {
            Some(date) if !date.is_empty() => parse_date(&date).map(Some).map_err(|_| {
                TaskdeckError::BadClientData(format!(
                    "Date: {} is malformed, expected the format YYYY-MM-DD",
                    date
                ))
            }),
            _ => Ok(None),
        }
    }

    pub fn against_missing_field(val: Option<String>, message: &str) -> Result<String, TaskdeckError> {
        match val {
            Some(val) if !val.trim().is_empty() => Ok(val),
            _ => Err(TaskdeckError::BadClientData(message.into())),
        }
    }
}
