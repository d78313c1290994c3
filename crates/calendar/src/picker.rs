use time::Date;

use crate::{
    date::DateValue,
    grid::{self, Bounds, CalendarView, Cell, Direction},
};

/// A renderable day cell with its selection flags resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: Option<u8>,
    pub disabled: bool,
    pub today: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    pub view: CalendarView,
    pub value: Option<Date>,
    pub bounds: Bounds,
    pub open: bool,
}

impl DatePicker {
    /// The view starts on the selected month, or on today's month without one.
    pub fn new(value: Option<Date>, bounds: Bounds, today: Date) -> Self {
        Self {
            view: CalendarView::of(value.unwrap_or(today)),
            value,
            bounds,
            open: false,
        }
    }

    pub fn with_view(mut self, view: CalendarView) -> Self {
        self.view = view;
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn previous_month(&mut self) {
        self.view = grid::navigate_month(Direction::Previous, self.view);
    }

    pub fn next_month(&mut self) {
        self.view = grid::navigate_month(Direction::Next, self.view);
    }

    /// Selects a day of the viewed month and closes the picker.
    /// Disabled days leave the picker untouched.
    pub fn select(&mut self, day: u8) -> Option<Date> {
        let date = grid::select_day(day, self.view, self.bounds)?;

        self.value = Some(date);
        self.open = false;

        Some(date)
    }

    /// Jumps to today's month and selects today.
    pub fn pick_today(&mut self, today: Date) -> Option<Date> {
        self.view = CalendarView::of(today);
        self.select(today.day())
    }

    pub fn cells(&self, today: Date) -> Vec<DayCell> {
        grid::build_grid(self.view)
            .into_iter()
            .map(|cell| match cell {
                Cell::Blank => DayCell {
                    day: None,
                    disabled: true,
                    today: false,
                    selected: false,
                },
                Cell::Day(day) => DayCell {
                    day: Some(day),
                    disabled: grid::is_disabled(day, self.view, self.bounds),
                    today: grid::is_today(day, self.view, today),
                    selected: grid::is_selected(day, self.view, self.value),
                },
            })
            .collect()
    }

    pub fn value_iso(&self) -> String {
        self.value
            .map(|v| DateValue(v).to_string())
            .unwrap_or_default()
    }

    pub fn display(&self) -> Option<String> {
        self.value.map(|v| DateValue(v).display())
    }
}
