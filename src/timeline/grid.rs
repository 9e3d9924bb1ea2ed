//! Grid background cells, the today marker and jump-to-today scrolling.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::position::date_to_pixel;
use super::range::{monday_of, DateRange, DisplayUnit};

/// Classification of one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Saturday,
    Sunday,
    Holiday,
}

impl DayKind {
    /// Classify a date. Holidays win over the weekend kinds.
    pub fn of(date: NaiveDate, holidays: &HolidayCalendar) -> Self {
        if holidays.contains(date) {
            DayKind::Holiday
        } else {
            match date.weekday() {
                Weekday::Sun => DayKind::Sunday,
                Weekday::Sat => DayKind::Saturday,
                _ => DayKind::Weekday,
            }
        }
    }

    /// Non-working day of any kind.
    pub fn is_off(self) -> bool {
        !matches!(self, DayKind::Weekday)
    }
}

/// Static holiday lookup table.
///
/// The dates are a host-supplied data input; the engine only does
/// membership checks against them.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// One painted background column of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// First date the cell covers.
    pub start: NaiveDate,
    pub left: f32,
    pub width: f32,
    /// Day classification; week cells are always `Weekday`.
    pub kind: DayKind,
    /// Alternating week parity, for the banded background.
    pub alternate: bool,
}

/// Grid cells covering the whole window, one per display unit.
///
/// Day cells carry their weekend/holiday kind; week cells are
/// Monday-anchored, span seven day-widths and alternate parity for
/// banding.
pub fn grid_cells(
    range: &DateRange,
    unit: DisplayUnit,
    holidays: &HolidayCalendar,
) -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(range.unit_count(unit) as usize);
    match unit {
        DisplayUnit::Day => {
            let mut date = range.start;
            while date <= range.end {
                let week = (monday_of(date) - monday_of(range.start)).num_days() / 7;
                cells.push(GridCell {
                    start: date,
                    left: date_to_pixel(date, range, unit),
                    width: range.cell_width,
                    kind: DayKind::of(date, holidays),
                    alternate: week % 2 != 0,
                });
                date += Duration::days(1);
            }
        }
        DisplayUnit::Week => {
            let mut date = monday_of(range.start);
            let mut week = 0i64;
            while date <= range.end {
                cells.push(GridCell {
                    start: date,
                    left: date_to_pixel(date, range, unit),
                    width: range.cell_width * 7.0,
                    kind: DayKind::Weekday,
                    alternate: week % 2 != 0,
                });
                date += Duration::days(7);
                week += 1;
            }
        }
    }
    cells
}

/// Content-pixel position of the today marker. Plain date mapping, no
/// special cases.
pub fn today_marker(today: NaiveDate, range: &DateRange, unit: DisplayUnit) -> f32 {
    date_to_pixel(today, range, unit)
}

/// Scroll offset that centers today in the viewport, clamped at zero.
pub fn today_scroll_offset(today_px: f32, viewport_width_px: f32) -> f32 {
    (today_px - viewport_width_px / 2.0).max(0.0)
}
