use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Whole minutes, rounded up, as shown next to lesson titles.
#[must_use]
pub fn format_minutes(secs: u32) -> String {
    let minutes = secs.div_ceil(60);
    if minutes == 1 {
        "1 min".to_string()
    } else {
        format!("{minutes} min")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::time::fixed_now;

    #[test]
    fn datetime_is_minute_precision() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13");
    }

    #[test]
    fn minutes_round_up() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(60), "1 min");
        assert_eq!(format_minutes(61), "2 min");
    }
}
