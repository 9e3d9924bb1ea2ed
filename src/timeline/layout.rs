//! Bar geometry for the visible rows.

use chrono::NaiveDate;
use uuid::Uuid;

use super::position::date_to_pixel;
use super::range::{DateRange, DisplayUnit};
use super::rows::VisibleRow;

/// Bars never shrink below this width, so a `start > due` record or a
/// sub-cell zoom still paints something clickable.
pub const MIN_BAR_WIDTH: f32 = 6.0;

/// Painted geometry for one visible row, in content pixels.
///
/// `left` is the true date position; indenting by `depth` is the
/// renderer's choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBar {
    pub task_id: Uuid,
    pub left: f32,
    pub width: f32,
    pub depth: u32,
    pub milestone: bool,
}

/// Bar geometry for every visible row, in row order.
///
/// Width is inclusive of the due-date cell: a one-day task spans exactly
/// one cell. Missing dates resolve to `today` per the model's sentinel
/// rule.
pub fn layout_rows(
    rows: &[VisibleRow<'_>],
    range: &DateRange,
    unit: DisplayUnit,
    today: NaiveDate,
) -> Vec<RowBar> {
    rows.iter()
        .map(|row| {
            let (start, due) = row.task.resolved_dates(today);
            let left = date_to_pixel(start, range, unit);
            let right = date_to_pixel(due, range, unit);
            RowBar {
                task_id: row.task.id,
                left,
                width: (right - left + range.cell_width).max(MIN_BAR_WIDTH),
                depth: row.depth,
                milestone: row.task.milestone,
            }
        })
        .collect()
}
