use std::{fmt, str::FromStr};

use time::{Date, Month, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use time_tz::{ToTimezone, timezones};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
    }
}

/// Weekday of the 1st of the month, 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month: Month) -> u8 {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let m = u8::from(month) as usize;
    // widened so any i32 year stays in range
    let year = i64::from(year);
    let y = if m < 3 { year - 1 } else { year };
    let weekday = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + i64::from(OFFSETS[m - 1])
        + 1;

    weekday.rem_euclid(7) as u8
}

/// Current calendar date in the given IANA timezone, UTC when unknown.
pub fn today(tz: &str) -> Date {
    let mut now = OffsetDateTime::now_utc();

    if let Some(tz) = timezones::get_by_name(tz) {
        now = now.to_timezone(tz);
    }

    now.date()
}

/// Selected date as exchanged with forms: `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateValue(pub Date);

impl DateValue {
    /// Lenient parse used for widget input; anything invalid is ignored.
    pub fn parse_opt(value: Option<&str>) -> Option<Date> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse::<DateValue>().ok())
            .map(|v| v.0)
    }

    /// `20 Oct 2026`
    pub fn display(&self) -> String {
        let month = self.0.month().to_string();

        format!("{} {} {}", self.0.day(), &month[..3], self.0.year())
    }
}

impl FromStr for DateValue {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s, ISO_DATE).map(DateValue)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl From<Date> for DateValue {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_days_in_month_known_values() {
        assert_eq!(days_in_month(2024, Month::February), 29);
        assert_eq!(days_in_month(2023, Month::February), 28);
        assert_eq!(days_in_month(1900, Month::February), 28);
        assert_eq!(days_in_month(2000, Month::February), 29);
        assert_eq!(days_in_month(2023, Month::April), 30);
        assert_eq!(days_in_month(2023, Month::January), 31);
    }

    #[test]
    fn test_first_weekday_of_month() {
        // 2024-02-01 was a Thursday
        assert_eq!(first_weekday_of_month(2024, Month::February), 4);
        // 2026-10-01 is a Thursday
        assert_eq!(first_weekday_of_month(2026, Month::October), 4);
        // 2023-01-01 was a Sunday
        assert_eq!(first_weekday_of_month(2023, Month::January), 0);
        // 2000-03-01 was a Wednesday
        assert_eq!(first_weekday_of_month(2000, Month::March), 3);
    }

    #[test]
    fn test_date_value_round_trip_and_display() {
        let value: DateValue = "2026-10-05".parse().unwrap();
        assert_eq!(value.0, date!(2026 - 10 - 05));
        assert_eq!(value.to_string(), "2026-10-05");
        assert_eq!(value.display(), "5 Oct 2026");
    }

    #[test]
    fn test_date_value_parse_opt_ignores_garbage() {
        assert_eq!(DateValue::parse_opt(None), None);
        assert_eq!(DateValue::parse_opt(Some("")), None);
        assert_eq!(DateValue::parse_opt(Some("tomorrow")), None);
        assert_eq!(DateValue::parse_opt(Some("2026-02-30")), None);
        assert_eq!(
            DateValue::parse_opt(Some(" 2024-02-29 ")),
            Some(date!(2024 - 02 - 29))
        );
    }

    #[test]
    fn test_today_unknown_timezone_falls_back_to_utc() {
        let utc = OffsetDateTime::now_utc().date();
        let value = today("Not/AZone");
        assert!(value == utc || value == utc.next_day().unwrap_or(utc));
    }
}
