use chrono::{Datelike, Duration, NaiveDate};

/// Calendar granularity of one timeline column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayUnit {
    Day,
    Week,
}

/// Share of the window placed before the anchor date.
const LOOKBEHIND: f64 = 0.3;
/// Default total span of the window, in days.
const MIN_SPAN_DAYS: i64 = 365;
/// Hard ceiling on the span (~270 years) so oversized viewports cannot
/// push date arithmetic out of chrono's range.
const MAX_SPAN_DAYS: i64 = 100_000;
/// Smallest cell width the range will carry, in pixels.
const MIN_CELL_WIDTH: f32 = 1.0;

/// The visible date window of the timeline.
///
/// A value object: recomputed whenever the viewport, zoom or display unit
/// changes, never mutated in place. Construction guarantees `start <= end`
/// and `cell_width > 0`, so the position math downstream never divides by
/// zero or walks a negative window.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    /// The leftmost date of the window.
    pub start: NaiveDate,
    /// The rightmost date of the window, inclusive.
    pub end: NaiveDate,
    /// Pixels per day. A week column spans `7.0 * cell_width`.
    pub cell_width: f32,
}

impl DateRange {
    /// Build a window from explicit bounds, normalizing degenerate input.
    pub fn new(start: NaiveDate, end: NaiveDate, cell_width: f32) -> Self {
        Self {
            start,
            end: end.max(start),
            cell_width: if cell_width > 0.0 {
                cell_width.max(MIN_CELL_WIDTH)
            } else {
                MIN_CELL_WIDTH
            },
        }
    }

    /// Compute the window around `anchor` for the given display unit.
    ///
    /// The window spans at least a year, 30% before the anchor and 70%
    /// after, and widens when the viewport needs more cells than that. In
    /// week mode the bounds snap outward to full Monday–Sunday weeks. A
    /// non-positive viewport yields a minimal one-unit window instead of
    /// an empty one.
    pub fn compute(
        unit: DisplayUnit,
        anchor: NaiveDate,
        viewport_width_px: f32,
        cell_width_px: f32,
    ) -> Self {
        let cell_width = if cell_width_px > 0.0 {
            cell_width_px.max(MIN_CELL_WIDTH)
        } else {
            MIN_CELL_WIDTH
        };
        if viewport_width_px <= 0.0 {
            return Self::minimal(unit, anchor, cell_width);
        }

        let viewport_days = (viewport_width_px / cell_width).ceil() as i64;
        let span = viewport_days.clamp(MIN_SPAN_DAYS, MAX_SPAN_DAYS);
        let before = (span as f64 * LOOKBEHIND).floor() as i64;
        let after = span - before;

        let mut start = anchor - Duration::days(before);
        let mut end = anchor + Duration::days(after);
        if unit == DisplayUnit::Week {
            start = monday_of(start);
            end = sunday_after(end);
        }
        Self::new(start, end, cell_width)
    }

    fn minimal(unit: DisplayUnit, anchor: NaiveDate, cell_width: f32) -> Self {
        match unit {
            DisplayUnit::Day => Self::new(anchor, anchor, cell_width),
            DisplayUnit::Week => {
                let monday = monday_of(anchor);
                Self::new(monday, monday + Duration::days(6), cell_width)
            }
        }
    }

    /// Number of grid cells (days or weeks) the window spans.
    pub fn unit_count(&self, unit: DisplayUnit) -> i64 {
        let days = (self.end - self.start).num_days() + 1;
        match unit {
            DisplayUnit::Day => days,
            DisplayUnit::Week => (days + 6) / 7,
        }
    }

    /// Total width of the window in content pixels.
    pub fn total_width(&self, unit: DisplayUnit) -> f32 {
        match unit {
            DisplayUnit::Day => self.unit_count(unit) as f32 * self.cell_width,
            DisplayUnit::Week => self.unit_count(unit) as f32 * self.cell_width * 7.0,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Sunday of the week containing `date` (the first Sunday at or after it).
fn sunday_after(date: NaiveDate) -> NaiveDate {
    monday_of(date) + Duration::days(6)
}
