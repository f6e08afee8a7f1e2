use chrono::{Local, NaiveDate};

/// Request DTO for one tracking run
#[derive(Debug, Clone)]
pub struct TrackRequest {
    /// Trailing retention window in days
    pub days: u32,
    /// The date the window trails from; injectable for deterministic tests
    pub reference_date: NaiveDate,
}

impl TrackRequest {
    /// Creates a request anchored at today's local date
    pub fn new(days: u32) -> Self {
        Self {
            days,
            reference_date: Local::now().date_naive(),
        }
    }

    /// Creates a request anchored at an explicit reference date
    pub fn with_reference_date(days: u32, reference_date: NaiveDate) -> Self {
        Self {
            days,
            reference_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_today() {
        let request = TrackRequest::new(7);
        assert_eq!(request.days, 7);
        assert_eq!(request.reference_date, Local::now().date_naive());
    }

    #[test]
    fn test_with_reference_date() {
        let date = NaiveDate::from_ymd_opt(2022, 8, 1).unwrap();
        let request = TrackRequest::with_reference_date(3, date);
        assert_eq!(request.days, 3);
        assert_eq!(request.reference_date, date);
    }
}
