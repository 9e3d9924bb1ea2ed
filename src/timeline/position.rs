//! Date ↔ pixel mapping.
//!
//! One set of functions serves both display units so the day and week
//! code paths cannot drift apart. Weeks are anchored to Monday; the
//! within-week offset uses the Monday = 0 convention throughout.

use chrono::{Datelike, Duration, NaiveDate};

use super::range::{monday_of, DateRange, DisplayUnit};

/// Horizontal content-pixel offset of `date` from the window start.
///
/// Dates before the window start map to negative offsets; callers that
/// clip to the window do so on the pixel value.
pub fn date_to_pixel(date: NaiveDate, range: &DateRange, unit: DisplayUnit) -> f32 {
    match unit {
        DisplayUnit::Day => (date - range.start).num_days() as f32 * range.cell_width,
        DisplayUnit::Week => {
            let weeks = (monday_of(date) - monday_of(range.start)).num_days() / 7;
            let day_offset = date.weekday().num_days_from_monday() as f32;
            (weeks * 7) as f32 * range.cell_width + day_offset * range.cell_width
        }
    }
}

/// Inverse of [`date_to_pixel`], to the nearest day.
pub fn pixel_to_date(pixel: f32, range: &DateRange, unit: DisplayUnit) -> NaiveDate {
    // cell_width > 0 is a DateRange construction invariant; the guard
    // keeps a hand-built literal from dividing by zero.
    if range.cell_width <= 0.0 {
        return range.start;
    }
    let days = (pixel / range.cell_width).round() as i64;
    let origin = match unit {
        DisplayUnit::Day => range.start,
        DisplayUnit::Week => monday_of(range.start),
    };
    origin
        .checked_add_signed(Duration::days(days.clamp(-MAX_PIXEL_DAYS, MAX_PIXEL_DAYS)))
        .unwrap_or(range.start)
}

/// Pixel inputs are clamped to ~270 years' worth of days so absurd
/// coordinates cannot push chrono out of range.
const MAX_PIXEL_DAYS: i64 = 100_000;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_unit_maps_days_to_cell_multiples() {
        let range = DateRange::new(date(2025, 5, 1), date(2025, 12, 31), 30.0);
        assert_eq!(date_to_pixel(date(2025, 5, 1), &range, DisplayUnit::Day), 0.0);
        assert_eq!(date_to_pixel(date(2025, 5, 3), &range, DisplayUnit::Day), 60.0);
        assert_eq!(date_to_pixel(date(2025, 4, 30), &range, DisplayUnit::Day), -30.0);
    }

    #[test]
    fn week_unit_is_monday_anchored() {
        // 2025-05-05 is a Monday.
        let range = DateRange::new(date(2025, 5, 5), date(2025, 12, 31), 20.0);
        assert_eq!(date_to_pixel(date(2025, 5, 5), &range, DisplayUnit::Week), 0.0);
        // Wednesday of the same week: two day offsets in.
        assert_eq!(date_to_pixel(date(2025, 5, 7), &range, DisplayUnit::Week), 40.0);
        // Monday one week later: a full 7-cell column.
        assert_eq!(date_to_pixel(date(2025, 5, 12), &range, DisplayUnit::Week), 140.0);
    }

    #[test]
    fn round_trip_returns_the_same_day() {
        let range = DateRange::new(date(2025, 5, 5), date(2025, 12, 31), 20.0);
        for offset in [0i64, 1, 6, 7, 13, 100, 200] {
            let d = date(2025, 5, 5) + Duration::days(offset);
            for unit in [DisplayUnit::Day, DisplayUnit::Week] {
                let px = date_to_pixel(d, &range, unit);
                assert_eq!(pixel_to_date(px, &range, unit), d);
            }
        }
    }

    #[test]
    fn pixel_positions_are_monotone_in_the_date() {
        let range = DateRange::new(date(2025, 5, 1), date(2025, 12, 31), 30.0);
        for unit in [DisplayUnit::Day, DisplayUnit::Week] {
            let mut prev = f32::NEG_INFINITY;
            for offset in 0..120 {
                let px = date_to_pixel(date(2025, 5, 1) + Duration::days(offset), &range, unit);
                assert!(px >= prev);
                prev = px;
            }
        }
    }

    #[test]
    fn today_marker_is_plain_mapping() {
        let range = DateRange::new(date(2025, 5, 1), date(2025, 12, 31), 30.0);
        let today = date(2025, 5, 15);
        assert_eq!(date_to_pixel(today, &range, DisplayUnit::Day), 420.0);
    }
}
