//! Date and time picker fragments.
//!
//! Widget state travels in the query string. Each request rebuilds the picker,
//! applies at most one action and renders the fragment that replaces the old one.

use axum::response::IntoResponse;
use axum_extra::extract::Query;
use devdarshan_calendar::{
    Bounds, CalendarView, ClockMode, DatePicker, DateValue, DayCell, Preset, TimePicker,
    WEEKDAY_LABELS,
};
use serde::Deserialize;
use strum::{EnumString, VariantArray};
use time::{Date, Month};

use crate::template::Template;

#[derive(EnumString, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
enum DateAction {
    Toggle,
    Previous,
    Next,
    Select,
    Today,
}

#[derive(EnumString, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
enum TimeAction {
    Toggle,
    HourUp,
    HourDown,
    MinuteUp,
    MinuteDown,
    Meridiem,
    Preset,
}

fn field_name(name: Option<String>, fallback: &str) -> String {
    name.filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

fn flag(value: Option<&str>) -> bool {
    matches!(value, Some("true" | "1" | "on"))
}

#[derive(Debug, Clone)]
pub struct DatePickerView {
    pub name: String,
    pub value: String,
    pub display: Option<String>,
    pub open: bool,
    pub title: String,
    pub year: i32,
    pub month: u8,
    pub min: String,
    pub max: String,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<DayCell>,
    pub today_selectable: bool,
}

impl DatePickerView {
    pub fn new(name: &str, picker: &DatePicker, today: Date) -> Self {
        let iso = |d: Option<Date>| d.map(|d| DateValue(d).to_string()).unwrap_or_default();

        Self {
            name: name.to_owned(),
            value: picker.value_iso(),
            display: picker.display(),
            open: picker.open,
            title: picker.view.title(),
            year: picker.view.year,
            month: picker.view.month as u8,
            min: iso(picker.bounds.min),
            max: iso(picker.bounds.max),
            weekdays: WEEKDAY_LABELS,
            cells: picker.cells(today),
            today_selectable: picker.bounds.contains(today),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DatePickerQuery {
    pub name: Option<String>,
    pub value: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub open: Option<String>,
    pub action: Option<String>,
    pub day: Option<String>,
}

impl DatePickerQuery {
    fn view(&self) -> Option<CalendarView> {
        let year = self.year.as_deref()?.trim().parse::<i32>().ok()?;
        let month = self.month.as_deref()?.trim().parse::<u8>().ok()?;
        let month = Month::try_from(month).ok()?;

        CalendarView::checked(year, month)
    }

    /// Rebuilds the picker and applies the requested action. Anything unparseable is ignored.
    pub fn apply(&self, today: Date) -> DatePicker {
        let bounds = Bounds::new(
            DateValue::parse_opt(self.min.as_deref()),
            DateValue::parse_opt(self.max.as_deref()),
        );
        let mut picker = DatePicker::new(DateValue::parse_opt(self.value.as_deref()), bounds, today)
            .with_open(flag(self.open.as_deref()));

        if let Some(view) = self.view() {
            picker = picker.with_view(view);
        }

        let action = self.action.as_deref().and_then(|a| a.parse().ok());
        match action {
            Some(DateAction::Toggle) => picker.toggle(),
            Some(DateAction::Previous) => picker.previous_month(),
            Some(DateAction::Next) => picker.next_month(),
            Some(DateAction::Select) => {
                if let Some(day) = self.day.as_deref().and_then(|d| d.parse().ok()) {
                    picker.select(day);
                }
            }
            Some(DateAction::Today) => {
                picker.pick_today(today);
            }
            None => {}
        }

        picker
    }
}

#[derive(Debug, Clone)]
pub struct TimePickerView {
    pub name: String,
    pub value: String,
    pub display: String,
    pub open: bool,
    pub mode: String,
    pub step: u8,
    pub hour: String,
    pub minute: String,
    pub meridiem: Option<String>,
    pub presets: Vec<(&'static str, &'static str)>,
}

impl TimePickerView {
    /// `value` is empty until the visitor has picked a time.
    pub fn new(name: &str, picker: &TimePicker, picked: bool) -> Self {
        let hour = if picker.is_twelve_hour() {
            picker.hour.to_string()
        } else {
            format!("{:02}", picker.hour)
        };

        Self {
            name: name.to_owned(),
            value: if picked { picker.value() } else { String::new() },
            display: picker.display(),
            open: picker.open,
            mode: picker.mode.to_string(),
            step: picker.step,
            hour,
            minute: format!("{:02}", picker.minute),
            meridiem: picker
                .is_twelve_hour()
                .then(|| picker.meridiem.to_string()),
            presets: Preset::VARIANTS
                .iter()
                .map(|p| (p.as_ref(), p.label()))
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TimePickerQuery {
    pub name: Option<String>,
    pub value: Option<String>,
    pub mode: Option<String>,
    pub step: Option<String>,
    pub open: Option<String>,
    pub action: Option<String>,
    pub preset: Option<String>,
}

impl TimePickerQuery {
    /// Rebuilds the picker and applies the requested action. Returns whether a time is picked.
    pub fn apply(&self, default_mode: ClockMode, default_step: u8) -> (TimePicker, bool) {
        let mode = self
            .mode
            .as_deref()
            .and_then(|m| m.parse().ok())
            .unwrap_or(default_mode);
        let step = self
            .step
            .as_deref()
            .and_then(|s| s.trim().parse::<u8>().ok())
            .unwrap_or(default_step);
        let value = self
            .value
            .as_deref()
            .filter(|v| devdarshan_calendar::clock::parse_hhmm(v).is_some());

        let mut picker = TimePicker::new(mode, step)
            .with_value(value)
            .with_open(flag(self.open.as_deref()));
        let mut picked = value.is_some();

        let action = self.action.as_deref().and_then(|a| a.parse().ok());
        match action {
            Some(TimeAction::Toggle) => picker.toggle(),
            Some(TimeAction::HourUp) => picker.increment_hour(),
            Some(TimeAction::HourDown) => picker.decrement_hour(),
            Some(TimeAction::MinuteUp) => picker.increment_minute(),
            Some(TimeAction::MinuteDown) => picker.decrement_minute(),
            Some(TimeAction::Meridiem) => picker.toggle_meridiem(),
            Some(TimeAction::Preset) => {
                if let Some(preset) = self.preset.as_deref().and_then(|p| p.parse().ok()) {
                    picker.quick_pick(preset);
                }
            }
            None => {}
        }

        if !matches!(action, None | Some(TimeAction::Toggle)) {
            picked = true;
        }

        (picker, picked)
    }
}

#[derive(askama::Template)]
#[template(path = "partials/date-picker.html")]
pub struct DatePickerTemplate {
    pub date_picker: DatePickerView,
}

#[derive(askama::Template)]
#[template(path = "partials/time-picker.html")]
pub struct TimePickerTemplate {
    pub time_picker: TimePickerView,
}

pub async fn date_picker(
    template: Template,
    Query(query): Query<DatePickerQuery>,
) -> impl IntoResponse {
    let today = template.today();
    let picker = query.apply(today);
    let name = field_name(query.name, "date");

    template.render(DatePickerTemplate {
        date_picker: DatePickerView::new(&name, &picker, today),
    })
}

pub async fn time_picker(
    template: Template,
    Query(query): Query<TimePickerQuery>,
) -> impl IntoResponse {
    let booking = &template.config().booking;
    let (picker, picked) = query.apply(booking.clock_mode(), booking.minute_step);
    let name = field_name(query.name, "time");

    template.render(TimePickerTemplate {
        time_picker: TimePickerView::new(&name, &picker, picked),
    })
}
