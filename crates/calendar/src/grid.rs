use time::{Date, Month};

use crate::date::{days_in_month, first_weekday_of_month};

/// Month currently displayed by a date picker. Independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub year: i32,
    pub month: Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day(u8),
}

/// Inclusive selection bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<Date>,
    pub max: Option<Date>,
}

impl Bounds {
    pub fn new(min: Option<Date>, max: Option<Date>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, date: Date) -> bool {
        !self.min.is_some_and(|min| date < min) && !self.max.is_some_and(|max| date > max)
    }
}

impl CalendarView {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub fn of(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    /// `None` when the month lies outside the representable date range.
    pub fn checked(year: i32, month: Month) -> Option<Self> {
        Date::from_calendar_date(year, month, 1)
            .ok()
            .map(Self::of)
    }

    pub fn date(&self, day: u8) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, day).ok()
    }

    pub fn days(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    pub fn first_weekday(&self) -> u8 {
        first_weekday_of_month(self.year, self.month)
    }

    /// `October 2026`
    pub fn title(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// Stays put at the edges of the representable date range.
pub fn navigate_month(direction: Direction, view: CalendarView) -> CalendarView {
    match (direction, view.month) {
        (Direction::Previous, Month::January) if view.year > Date::MIN.year() => {
            CalendarView::new(view.year - 1, Month::December)
        }
        (Direction::Next, Month::December) if view.year < Date::MAX.year() => {
            CalendarView::new(view.year + 1, Month::January)
        }
        (Direction::Previous, Month::January) | (Direction::Next, Month::December) => view,
        (Direction::Previous, month) => CalendarView::new(view.year, month.previous()),
        (Direction::Next, month) => CalendarView::new(view.year, month.next()),
    }
}

pub fn build_grid(view: CalendarView) -> Vec<Cell> {
    let blanks = view.first_weekday() as usize;
    let days = view.days();

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat_n(Cell::Blank, blanks));
    cells.extend((1..=days).map(Cell::Day));
    cells
}

/// Days that do not exist in the month are disabled too.
pub fn is_disabled(day: u8, view: CalendarView, bounds: Bounds) -> bool {
    match view.date(day) {
        Some(date) => !bounds.contains(date),
        None => true,
    }
}

pub fn is_today(day: u8, view: CalendarView, today: Date) -> bool {
    view.date(day) == Some(today)
}

pub fn is_selected(day: u8, view: CalendarView, selected: Option<Date>) -> bool {
    selected.is_some_and(|selected| view.date(day) == Some(selected))
}

/// Returns the date to emit, or `None` when the click must be ignored.
pub fn select_day(day: u8, view: CalendarView, bounds: Bounds) -> Option<Date> {
    if is_disabled(day, view, bounds) {
        return None;
    }

    view.date(day)
}
