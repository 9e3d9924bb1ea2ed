use super::range::DisplayUnit;

/// Zoom bounds and step, in percent.
pub const ZOOM_MIN: u16 = 10;
pub const ZOOM_MAX: u16 = 200;
pub const ZOOM_STEP: u16 = 10;
pub const ZOOM_DEFAULT: u16 = 100;

// ── Base sizes at 100% zoom, in pixels ───────────────────────────────────────

const BASE_CELL_WIDTH_DAY: f32 = 30.0;
const BASE_CELL_WIDTH_WEEK: f32 = 20.0;
const BASE_ROW_PROJECT: f32 = 32.0;
const BASE_ROW_TASK: f32 = 48.0;
const BASE_ROW_SUBTASK: f32 = 40.0;
const BASE_BAR_HEIGHT: f32 = 32.0;

// ── Floors no derived size may fall below ────────────────────────────────────

const MIN_CELL_WIDTH: f32 = 3.0;
const MIN_ROW_HEIGHT: f32 = 12.0;
const MIN_BAR_HEIGHT: f32 = 8.0;

/// User-controlled zoom percentage, always within `[ZOOM_MIN, ZOOM_MAX]`.
///
/// Out-of-range requests clamp silently; every operation returns a new
/// state and callers re-derive dependent layout from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    level: u16,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { level: ZOOM_DEFAULT }
    }
}

impl ZoomState {
    pub fn new(level: u16) -> Self {
        Self {
            level: level.clamp(ZOOM_MIN, ZOOM_MAX),
        }
    }

    pub fn level(self) -> u16 {
        self.level
    }

    /// Normalized multiplier applied to all size constants.
    pub fn ratio(self) -> f32 {
        self.level as f32 / 100.0
    }

    pub fn set(self, level: u16) -> Self {
        Self::new(level)
    }

    pub fn zoom_in(self) -> Self {
        Self::new(self.level.saturating_add(ZOOM_STEP))
    }

    pub fn zoom_out(self) -> Self {
        Self::new(self.level.saturating_sub(ZOOM_STEP))
    }

    pub fn reset(self) -> Self {
        Self::new(ZOOM_DEFAULT)
    }

    /// Zoom level at which `visible_unit_count` cells fit the viewport
    /// exactly, clamped to the valid range.
    ///
    /// Returns `self` unchanged when there is nothing to fit.
    pub fn fit_to_screen(
        self,
        unit: DisplayUnit,
        visible_unit_count: i64,
        viewport_width_px: f32,
    ) -> Self {
        if visible_unit_count <= 0 || viewport_width_px <= 0.0 {
            return self;
        }
        let px_per_day = match unit {
            DisplayUnit::Day => viewport_width_px / visible_unit_count as f32,
            DisplayUnit::Week => viewport_width_px / (visible_unit_count as f32 * 7.0),
        };
        let level = (px_per_day / base_cell_width(unit) * 100.0)
            .round()
            .clamp(ZOOM_MIN as f32, ZOOM_MAX as f32);
        Self::new(level as u16)
    }
}

fn base_cell_width(unit: DisplayUnit) -> f32 {
    match unit {
        DisplayUnit::Day => BASE_CELL_WIDTH_DAY,
        DisplayUnit::Week => BASE_CELL_WIDTH_WEEK,
    }
}

/// Label sizes for the three text roles on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub base: f32,
    pub small: f32,
    pub large: f32,
}

impl FontSizes {
    // Bucketed rather than scaled continuously so labels land on whole
    // pixel sizes at every zoom level.
    fn for_level(level: u16) -> Self {
        let (base, small, large) = match level {
            0..=30 => (8.0, 7.0, 9.0),
            31..=50 => (10.0, 9.0, 11.0),
            51..=80 => (12.0, 11.0, 13.0),
            81..=120 => (14.0, 12.0, 16.0),
            121..=150 => (16.0, 14.0, 18.0),
            _ => (18.0, 16.0, 20.0),
        };
        Self { base, small, large }
    }
}

/// Pixel sizes derived from the zoom ratio.
///
/// Every field is floored so cells, rows and bars never collapse to zero
/// at minimum zoom; the renderer can rely on all of them being positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicSizes {
    /// Pixels per day for the current display unit.
    pub cell_width: f32,
    pub row_project: f32,
    pub row_task: f32,
    pub row_subtask: f32,
    pub bar_height: f32,
    pub font: FontSizes,
}

impl DynamicSizes {
    pub fn for_zoom(zoom: ZoomState, unit: DisplayUnit) -> Self {
        let ratio = zoom.ratio();
        Self {
            cell_width: (base_cell_width(unit) * ratio).round().max(MIN_CELL_WIDTH),
            row_project: (BASE_ROW_PROJECT * ratio).round().max(MIN_ROW_HEIGHT),
            row_task: (BASE_ROW_TASK * ratio).round().max(MIN_ROW_HEIGHT),
            row_subtask: (BASE_ROW_SUBTASK * ratio).round().max(MIN_ROW_HEIGHT),
            bar_height: (BASE_BAR_HEIGHT * ratio).round().max(MIN_BAR_HEIGHT),
            font: FontSizes::for_level(zoom.level()),
        }
    }

    /// Row height for a task row at the given tree depth.
    pub fn row_height(&self, depth: u32) -> f32 {
        if depth == 0 {
            self.row_task
        } else {
            self.row_subtask
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zoom_clamps_to_valid_range() {
        assert_eq!(ZoomState::new(5).level(), ZOOM_MIN);
        assert_eq!(ZoomState::new(999).level(), ZOOM_MAX);
        assert_eq!(ZoomState::new(ZOOM_MAX).zoom_in().level(), ZOOM_MAX);
        assert_eq!(ZoomState::new(ZOOM_MIN).zoom_out().level(), ZOOM_MIN);
    }

    #[test]
    fn zoom_steps_by_ten() {
        let zoom = ZoomState::default();
        assert_eq!(zoom.zoom_in().level(), 110);
        assert_eq!(zoom.zoom_out().level(), 90);
        assert_eq!(zoom.zoom_in().reset().level(), ZOOM_DEFAULT);
    }

    #[test]
    fn doubling_the_level_doubles_cell_width() {
        let at_100 = DynamicSizes::for_zoom(ZoomState::new(100), DisplayUnit::Day);
        let at_200 = DynamicSizes::for_zoom(ZoomState::new(200), DisplayUnit::Day);
        assert_eq!(at_100.cell_width, 30.0);
        assert_eq!(at_200.cell_width, 60.0);
    }

    #[test]
    fn derived_sizes_hold_their_floors_at_minimum_zoom() {
        for unit in [DisplayUnit::Day, DisplayUnit::Week] {
            let sizes = DynamicSizes::for_zoom(ZoomState::new(ZOOM_MIN), unit);
            assert!(sizes.cell_width >= MIN_CELL_WIDTH);
            assert!(sizes.row_project >= MIN_ROW_HEIGHT);
            assert!(sizes.row_task >= MIN_ROW_HEIGHT);
            assert!(sizes.row_subtask >= MIN_ROW_HEIGHT);
            assert!(sizes.bar_height >= MIN_BAR_HEIGHT);
            assert!(sizes.font.small > 0.0);
        }
    }

    #[test]
    fn fit_to_screen_picks_the_exact_fitting_level() {
        // 40 day cells in 600px wants 15px cells: half the 30px base.
        let fitted = ZoomState::default().fit_to_screen(DisplayUnit::Day, 40, 600.0);
        assert_eq!(fitted.level(), 50);

        // 10 week columns in 1400px wants 20px/day: exactly the week base.
        let fitted = ZoomState::new(30).fit_to_screen(DisplayUnit::Week, 10, 1400.0);
        assert_eq!(fitted.level(), 100);
    }

    #[test]
    fn fit_to_screen_clamps_and_ignores_empty_input() {
        let zoom = ZoomState::new(70);
        assert_eq!(zoom.fit_to_screen(DisplayUnit::Day, 0, 600.0), zoom);
        assert_eq!(zoom.fit_to_screen(DisplayUnit::Day, 40, 0.0), zoom);
        // 2 cells across a huge viewport would need far more than 200%.
        let fitted = zoom.fit_to_screen(DisplayUnit::Day, 2, 100_000.0);
        assert_eq!(fitted.level(), ZOOM_MAX);
    }

    #[test]
    fn font_buckets_follow_the_zoom_level() {
        assert_eq!(FontSizes::for_level(10).base, 8.0);
        assert_eq!(FontSizes::for_level(100).base, 14.0);
        assert_eq!(FontSizes::for_level(200).base, 18.0);
    }
}
