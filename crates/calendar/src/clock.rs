//! Time picker companion to the date picker.
//!
//! The state is kept in display terms (`hour`, `minute`, `meridiem`) while
//! [`TimePicker::value`] is always the 24-hour `HH:MM` form.

use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DEFAULT_MINUTE_STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, AsRefStr)]
pub enum Meridiem {
    #[default]
    #[strum(serialize = "AM")]
    Am,
    #[strum(serialize = "PM")]
    Pm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ClockMode {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, VariantArray, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    Morning,
    MidMorning,
    Noon,
    Afternoon,
    Evening,
}

impl Preset {
    /// 24-hour time of the preset.
    pub fn time(&self) -> (u8, u8) {
        match self {
            Preset::Morning => (6, 0),
            Preset::MidMorning => (9, 0),
            Preset::Noon => (12, 0),
            Preset::Afternoon => (15, 0),
            Preset::Evening => (18, 0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Morning => "6:00 AM",
            Preset::MidMorning => "9:00 AM",
            Preset::Noon => "12:00 PM",
            Preset::Afternoon => "3:00 PM",
            Preset::Evening => "6:00 PM",
        }
    }
}

/// Parses `HH:MM` in 24-hour form. Out-of-range values are rejected.
pub fn parse_hhmm(value: &str) -> Option<(u8, u8)> {
    let (h, m) = value.trim().split_once(':')?;
    let h = h.parse::<u8>().ok().filter(|h| *h < 24)?;
    let m = m.parse::<u8>().ok().filter(|m| *m < 60)?;

    Some((h, m))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePicker {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
    pub mode: ClockMode,
    pub step: u8,
    pub open: bool,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::new(ClockMode::default(), DEFAULT_MINUTE_STEP)
    }
}

impl TimePicker {
    /// Starts at midnight (`12:00 AM` or `00:00`). The step is clamped into `1..=60`.
    pub fn new(mode: ClockMode, step: u8) -> Self {
        let mut picker = Self {
            hour: 0,
            minute: 0,
            meridiem: Meridiem::Am,
            mode,
            step: step.clamp(1, 60),
            open: false,
        };
        picker.set_24h(0, 0);
        picker
    }

    /// Loads a `HH:MM` value; invalid input is ignored.
    pub fn with_value(mut self, value: Option<&str>) -> Self {
        if let Some((h, m)) = value.and_then(parse_hhmm) {
            self.set_24h(h, m);
        }
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    fn set_24h(&mut self, hour: u8, minute: u8) {
        self.minute = minute;

        match self.mode {
            ClockMode::TwentyFourHour => self.hour = hour,
            ClockMode::TwelveHour => {
                self.meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
                self.hour = match hour % 12 {
                    0 => 12,
                    h => h,
                };
            }
        }
    }

    fn hour_range(&self) -> (u8, u8) {
        match self.mode {
            ClockMode::TwelveHour => (1, 12),
            ClockMode::TwentyFourHour => (0, 23),
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn increment_hour(&mut self) {
        let (min, max) = self.hour_range();
        self.hour = if self.hour >= max { min } else { self.hour + 1 };
    }

    pub fn decrement_hour(&mut self) {
        let (min, max) = self.hour_range();
        self.hour = if self.hour <= min { max } else { self.hour - 1 };
    }

    pub fn increment_minute(&mut self) {
        let next = self.minute as u16 + self.step as u16;
        self.minute = if next >= 60 { 0 } else { next as u8 };
    }

    /// Below zero wraps to the last multiple of the step under 60.
    pub fn decrement_minute(&mut self) {
        self.minute = match self.minute.checked_sub(self.step) {
            Some(minute) => minute,
            None => (59 / self.step) * self.step,
        };
    }

    pub fn toggle_meridiem(&mut self) {
        if self.mode == ClockMode::TwentyFourHour {
            return;
        }

        self.meridiem = match self.meridiem {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        };
    }

    pub fn quick_pick(&mut self, preset: Preset) {
        let (h, m) = preset.time();
        self.set_24h(h, m);
        self.open = false;
    }

    pub fn hour_24(&self) -> u8 {
        match (self.mode, self.meridiem) {
            (ClockMode::TwentyFourHour, _) => self.hour,
            (ClockMode::TwelveHour, Meridiem::Am) if self.hour == 12 => 0,
            (ClockMode::TwelveHour, Meridiem::Am) => self.hour,
            (ClockMode::TwelveHour, Meridiem::Pm) if self.hour == 12 => 12,
            (ClockMode::TwelveHour, Meridiem::Pm) => self.hour + 12,
        }
    }

    /// Normalized 24-hour `HH:MM`, whatever the display mode.
    pub fn value(&self) -> String {
        format!("{:02}:{:02}", self.hour_24(), self.minute)
    }

    pub fn display(&self) -> String {
        match self.mode {
            ClockMode::TwentyFourHour => self.value(),
            ClockMode::TwelveHour => {
                format!("{}:{:02} {}", self.hour, self.minute, self.meridiem)
            }
        }
    }

    pub fn is_twelve_hour(&self) -> bool {
        self.mode == ClockMode::TwelveHour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_midnight() {
        let picker = TimePicker::default();
        assert_eq!(picker.hour, 12);
        assert_eq!(picker.meridiem, Meridiem::Am);
        assert_eq!(picker.value(), "00:00");
        assert_eq!(picker.display(), "12:00 AM");

        let picker = TimePicker::new(ClockMode::TwentyFourHour, 5);
        assert_eq!(picker.hour, 0);
        assert_eq!(picker.display(), "00:00");
    }

    #[test]
    fn test_twelve_hour_increment_wraps_to_one() {
        let mut picker = TimePicker::default();
        picker.increment_hour();
        assert_eq!(picker.hour, 1);
        assert_eq!(picker.meridiem, Meridiem::Am);
        assert_eq!(picker.value(), "01:00");

        picker.decrement_hour();
        assert_eq!(picker.hour, 12);
        picker.decrement_hour();
        assert_eq!(picker.hour, 11);
    }

    #[test]
    fn test_twenty_four_hour_wraps() {
        let mut picker =
            TimePicker::new(ClockMode::TwentyFourHour, 5).with_value(Some("23:10"));
        picker.increment_hour();
        assert_eq!(picker.value(), "00:10");
        picker.decrement_hour();
        assert_eq!(picker.value(), "23:10");
    }

    #[test]
    fn test_value_is_always_24_hour() {
        let picker = TimePicker::default().with_value(Some("18:05"));
        assert_eq!(picker.hour, 6);
        assert_eq!(picker.meridiem, Meridiem::Pm);
        assert_eq!(picker.display(), "6:05 PM");
        assert_eq!(picker.value(), "18:05");

        let picker = TimePicker::default().with_value(Some("12:30"));
        assert_eq!(picker.display(), "12:30 PM");
        assert_eq!(picker.value(), "12:30");
    }

    #[test]
    fn test_minutes_wrap_with_step() {
        let mut picker = TimePicker::default().with_value(Some("09:55"));
        picker.increment_minute();
        assert_eq!(picker.minute, 0);
        picker.decrement_minute();
        assert_eq!(picker.minute, 55);
    }

    #[test]
    fn test_non_divisor_step_stays_on_lattice() {
        let mut picker = TimePicker::new(ClockMode::TwelveHour, 7);
        picker.decrement_minute();
        assert_eq!(picker.minute, 56);
        picker.increment_minute();
        assert_eq!(picker.minute, 0);

        for _ in 0..8 {
            picker.increment_minute();
        }
        assert_eq!(picker.minute, 56);
    }

    #[test]
    fn test_step_is_clamped() {
        assert_eq!(TimePicker::new(ClockMode::TwelveHour, 0).step, 1);
        assert_eq!(TimePicker::new(ClockMode::TwelveHour, 90).step, 60);

        let mut picker = TimePicker::new(ClockMode::TwelveHour, 60);
        picker.increment_minute();
        assert_eq!(picker.minute, 0);
        picker.decrement_minute();
        assert_eq!(picker.minute, 0);
    }

    #[test]
    fn test_toggle_meridiem() {
        let mut picker = TimePicker::default().with_value(Some("06:00"));
        picker.toggle_meridiem();
        assert_eq!(picker.value(), "18:00");

        let mut picker =
            TimePicker::new(ClockMode::TwentyFourHour, 5).with_value(Some("06:00"));
        picker.toggle_meridiem();
        assert_eq!(picker.value(), "06:00");
    }

    #[test]
    fn test_quick_pick_closes() {
        let mut picker = TimePicker::default().with_open(true);
        picker.quick_pick(Preset::Afternoon);
        assert_eq!(picker.value(), "15:00");
        assert_eq!(picker.display(), "3:00 PM");
        assert!(!picker.open);

        let mut picker = TimePicker::new(ClockMode::TwentyFourHour, 5);
        picker.quick_pick(Preset::Noon);
        assert_eq!(picker.display(), "12:00");
    }

    #[test]
    fn test_invalid_value_is_ignored() {
        for value in ["", "25:00", "10:60", "ten", "10-30"] {
            let picker = TimePicker::default().with_value(Some(value));
            assert_eq!(picker.value(), "00:00", "{value}");
        }
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("mid-morning".parse::<Preset>().unwrap(), Preset::MidMorning);
        assert_eq!(Preset::VARIANTS.len(), 5);
        assert_eq!(
            "twenty-four-hour".parse::<ClockMode>().unwrap(),
            ClockMode::TwentyFourHour
        );
    }
}
