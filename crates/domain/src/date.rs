use chrono::prelude::*;

/// Parses a calendar date on the form `YYYY-M-D`. Leading zeros are optional.
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    let (year, month, day) = match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr.to_string())),
    };

    if !(1970..=2100).contains(&year) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
}

/// Calendar dates carry no time of day. They are interpreted as midnight UTC
/// whenever they are compared against a timestamp.
pub fn date_to_timestamp_millis(date: &NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| Utc.from_utc_datetime(&dt).timestamp_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2020-2-09",
        ];

        for date in &valid_dates {
            assert!(parse_date(date).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2021-2-29",
            "2020-0-1",
            "2020-1-0",
            "1969-12-31",
            "2020-01-01T10:00:00Z",
        ];

        for date in &invalid_dates {
            assert!(parse_date(date).is_err());
        }
    }

    #[test]
    fn dates_are_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2021, 2, 21).unwrap();
        assert_eq!(date_to_timestamp_millis(&date), 1613865600000);
    }
}
