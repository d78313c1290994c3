use std::sync::LazyLock;

use devdarshan_calendar::{Bounds, DateValue, clock::parse_hhmm};
use regex::Regex;
use serde::Deserialize;
use time::{Date, Duration};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{Attendance, BookingKind, Platform};

pub const MIN_MEMBERS: u8 = 1;
pub const MAX_MEMBERS: u8 = 99;

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\- ]{7,20}$").expect("phone pattern is valid"));

/// Raw booking form as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub gotra: String,
    #[serde(default)]
    pub nakshatra: String,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub accommodation: Option<String>,
    #[serde(default)]
    pub pickup_required: Option<String>,
}

#[derive(Validate)]
struct Devotee<'a> {
    #[validate(length(min = 1, max = 100, message = "Please enter your full name"))]
    full_name: &'a str,
    #[validate(regex(path = *PHONE, message = "Please enter a valid phone number"))]
    phone: &'a str,
    #[validate(email(message = "Please enter a valid email address"))]
    email: &'a str,
    #[validate(length(max = 50, message = "Gotra is too long"))]
    gotra: &'a str,
    #[validate(length(max = 50, message = "Nakshatra is too long"))]
    nakshatra: &'a str,
    #[validate(length(max = 1000, message = "Special requests are too long"))]
    special_requests: &'a str,
}

/// Limits applied to the preferred date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRules {
    pub window_days: u16,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self { window_days: 180 }
    }
}

impl BookingRules {
    pub fn bounds(&self, today: Date) -> Bounds {
        let max = today.checked_add(Duration::days(self.window_days as i64));
        Bounds::new(Some(today), max)
    }
}

/// Number of attendees, clamped like the number input. Non-numeric input is the minimum.
pub fn clamp_members(value: &str) -> u8 {
    value
        .trim()
        .parse::<i64>()
        .map(|n| n.clamp(MIN_MEMBERS as i64, MAX_MEMBERS as i64) as u8)
        .unwrap_or(MIN_MEMBERS)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Validated booking details, before a reference is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub attendance: Attendance,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub date: Date,
    pub time: Option<String>,
    pub members: u8,
    pub gotra: Option<String>,
    pub nakshatra: Option<String>,
    pub special_requests: Option<String>,
}

impl BookingForm {
    pub fn members(&self) -> u8 {
        clamp_members(&self.members)
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
            .as_deref()
            .filter(|p| !p.is_empty())
            .map_or(Some(Platform::default()), |p| p.parse().ok())
    }

    pub fn validate(
        &self,
        kind: BookingKind,
        rules: &BookingRules,
        today: Date,
    ) -> devdarshan_shared::Result<BookingDetails> {
        let devotee = Devotee {
            full_name: self.full_name.trim(),
            phone: self.phone.trim(),
            email: self.email.trim(),
            gotra: self.gotra.trim(),
            nakshatra: self.nakshatra.trim(),
            special_requests: self.special_requests.trim(),
        };

        let mut errors = match devotee.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let date = DateValue::parse_opt(Some(&self.date));
        match date {
            None => errors.add(
                "date",
                field_error("required", "Please choose a preferred date"),
            ),
            Some(date) if !rules.bounds(today).contains(date) => errors.add(
                "date",
                field_error("range", "Please choose a date within the booking window"),
            ),
            Some(_) => {}
        }

        let time = non_empty(&self.time);
        if time.as_deref().is_some_and(|t| parse_hhmm(t).is_none()) {
            errors.add("time", field_error("format", "Please choose a valid time"));
        }

        let attendance = match kind {
            BookingKind::InPerson => Attendance::InPerson {
                accommodation: self.accommodation.is_some(),
                pickup_required: self.pickup_required.is_some(),
            },
            BookingKind::VideoCall => match self.platform() {
                Some(platform) => Attendance::VideoCall { platform },
                None => {
                    errors.add(
                        "platform",
                        field_error("choice", "Please choose a video call platform"),
                    );
                    Attendance::VideoCall {
                        platform: Platform::default(),
                    }
                }
            },
        };

        let Some(date) = date.filter(|_| errors.is_empty()) else {
            return Err(errors.into());
        };

        Ok(BookingDetails {
            attendance,
            full_name: devotee.full_name.to_owned(),
            phone: devotee.phone.to_owned(),
            email: devotee.email.to_owned(),
            date,
            time: time.and_then(|t| parse_hhmm(&t)).map(|(h, m)| format!("{h:02}:{m:02}")),
            members: self.members(),
            gotra: non_empty(&self.gotra),
            nakshatra: non_empty(&self.nakshatra),
            special_requests: non_empty(&self.special_requests),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 10 - 16);

    fn valid_form() -> BookingForm {
        BookingForm {
            full_name: "  Asha Verma ".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            email: "asha@example.org".to_owned(),
            date: "2026-10-20".to_owned(),
            time: "6:30".to_owned(),
            members: "3".to_owned(),
            ..Default::default()
        }
    }

    fn fields(err: devdarshan_shared::Error) -> Vec<String> {
        err.field_messages().into_iter().map(|(f, _)| f).collect()
    }

    #[test]
    fn test_valid_in_person_booking() {
        let mut form = valid_form();
        form.accommodation = Some("on".to_owned());

        let details = form
            .validate(BookingKind::InPerson, &BookingRules::default(), TODAY)
            .unwrap();

        assert_eq!(details.full_name, "Asha Verma");
        assert_eq!(details.date, date!(2026 - 10 - 20));
        assert_eq!(details.time.as_deref(), Some("06:30"));
        assert_eq!(details.members, 3);
        assert_eq!(details.gotra, None);
        assert_eq!(
            details.attendance,
            Attendance::InPerson {
                accommodation: true,
                pickup_required: false
            }
        );
    }

    #[test]
    fn test_video_call_platform() {
        let mut form = valid_form();
        form.platform = Some("whatsapp".to_owned());
        let details = form
            .validate(BookingKind::VideoCall, &BookingRules::default(), TODAY)
            .unwrap();
        assert_eq!(
            details.attendance,
            Attendance::VideoCall {
                platform: Platform::Whatsapp
            }
        );

        form.platform = Some("skype".to_owned());
        let err = form
            .validate(BookingKind::VideoCall, &BookingRules::default(), TODAY)
            .unwrap_err();
        assert_eq!(fields(err), vec!["platform"]);
    }

    #[test]
    fn test_required_fields() {
        let err = BookingForm::default()
            .validate(BookingKind::InPerson, &BookingRules::default(), TODAY)
            .unwrap_err();

        assert_eq!(fields(err), vec!["date", "email", "full_name", "phone"]);
    }

    #[test]
    fn test_date_window() {
        let rules = BookingRules { window_days: 30 };

        let mut form = valid_form();
        form.date = "2026-10-15".to_owned();
        let err = form.validate(BookingKind::InPerson, &rules, TODAY).unwrap_err();
        assert_eq!(fields(err), vec!["date"]);

        form.date = "2026-11-15".to_owned();
        assert!(form.validate(BookingKind::InPerson, &rules, TODAY).is_ok());

        form.date = "2026-11-16".to_owned();
        assert!(form.validate(BookingKind::InPerson, &rules, TODAY).is_err());

        form.date = "2026-10-16".to_owned();
        assert!(form.validate(BookingKind::InPerson, &rules, TODAY).is_ok());
    }

    #[test]
    fn test_invalid_time_and_phone() {
        let mut form = valid_form();
        form.time = "25:00".to_owned();
        form.phone = "call me".to_owned();

        let err = form
            .validate(BookingKind::InPerson, &BookingRules::default(), TODAY)
            .unwrap_err();
        assert_eq!(fields(err), vec!["phone", "time"]);
    }

    #[test]
    fn test_members_are_clamped() {
        assert_eq!(clamp_members("0"), 1);
        assert_eq!(clamp_members("-4"), 1);
        assert_eq!(clamp_members("150"), 99);
        assert_eq!(clamp_members("abc"), 1);
        assert_eq!(clamp_members(""), 1);
        assert_eq!(clamp_members(" 12 "), 12);
    }
}
