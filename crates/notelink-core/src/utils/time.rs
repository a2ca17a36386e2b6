use chrono::{Local, NaiveDateTime};

/// Clock abstraction so note filenames can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the host's local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Format a timestamp as the compact numeric note prefix, second
/// precision, no separators.
///
/// `2024-03-05T14:30:07` becomes `20240305143007`.
pub fn compact_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%d%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_compact_timestamp() {
        let at = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 7).unwrap(),
        );
        assert_eq!(compact_timestamp(at), "20240305143007");
    }

    #[test]
    fn test_compact_timestamp_pads_fields() {
        let at = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            NaiveTime::from_hms_opt(3, 4, 5).unwrap(),
        );
        assert_eq!(compact_timestamp(at), "20250102030405");
    }
}
