//! Grid coordinate mapping
//!
//! The grid uses 1-based line numbers. Row 1 holds the day headers and
//! column 1 the time labels; every 15-minute slot between 07:00 and 21:00
//! takes one row, every visible day takes two columns.

use crate::date_math::{day_label, start_of_week, week_days};
use crate::models::{AlternationLayout, DayLabel, ViewMode, WeekParity};
use chrono::NaiveDate;
use serde::Serialize;

pub const FIRST_HOUR: u8 = 7;
/// Exclusive: the last slot starts at 20:45
pub const END_HOUR: u8 = 21;
pub const SLOT_MINUTES: u8 = 15;
pub const SLOTS_PER_HOUR: i32 = 4;
pub const SLOT_COUNT: usize = 56;
pub const HEADER_ROW: i32 = 1;
pub const TIME_COLUMN: i32 = 1;
/// Columns reserved per visible day
pub const COLUMNS_PER_DAY: i32 = 2;

/// Common start/end boundaries drawn with emphasis
pub const EMPHASIZED_TIMES: [(u8, u8); 8] = [
    (8, 0),
    (10, 0),
    (10, 15),
    (12, 15),
    (14, 15),
    (16, 15),
    (16, 30),
    (18, 30),
];

/// Row/column span of a session on the grid (end lines are exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCoordinate {
    pub col_start: i32,
    pub col_end: i32,
    pub row_start: i32,
    pub row_end: i32,
}

impl GridCoordinate {
    pub fn row_span(&self) -> i32 {
        self.row_end - self.row_start
    }

    pub fn col_span(&self) -> i32 {
        self.col_end - self.col_start
    }
}

/// Column span on the grid (end line exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpan {
    pub start: i32,
    pub end: i32,
}

impl ColumnSpan {
    /// Narrow the span to one half for sessions bound to a week parity
    pub fn for_week(self, week: Option<WeekParity>, layout: AlternationLayout) -> Self {
        match (layout, week) {
            (AlternationLayout::Split, Some(WeekParity::A)) => Self {
                start: self.start,
                end: self.end - 1,
            },
            (AlternationLayout::Split, Some(WeekParity::B)) => Self {
                start: self.start + 1,
                end: self.end,
            },
            _ => self,
        }
    }
}

/// Grid row of a wall-clock time
///
/// Defined for 07:00..=20:45 in quarter hours; other inputs give
/// meaningless rows but never panic.
pub fn time_to_row(hour: u8, minute: u8) -> i32 {
    (i32::from(hour) - i32::from(FIRST_HOUR)) * SLOTS_PER_HOUR
        + i32::from(minute) / i32::from(SLOT_MINUTES)
        + 2
}

/// Columns occupied by a day in the given mode
///
/// In day mode the single visible day owns the whole width, whatever
/// `day_index` is.
pub fn day_columns(mode: ViewMode, day_index: usize) -> ColumnSpan {
    let start = match mode {
        ViewMode::Day => TIME_COLUMN + 1,
        ViewMode::Compact | ViewMode::Complete => {
            (day_index as i32).saturating_mul(COLUMNS_PER_DAY) + TIME_COLUMN + 1
        }
    };
    ColumnSpan {
        start,
        end: start + COLUMNS_PER_DAY,
    }
}

/// Number of column tracks needed to draw the given mode
pub fn column_count(mode: ViewMode) -> i32 {
    TIME_COLUMN + mode.visible_day_count() as i32 * COLUMNS_PER_DAY
}

/// One 15-minute line of the background grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotDescriptor {
    pub hour: u8,
    pub minute: u8,
    pub row: i32,
    /// On the hour the slot also carries the hour label, which spans the
    /// whole hour
    pub row_end: i32,
    pub is_major_line: bool,
    pub is_emphasized: bool,
}

/// The 56 fixed slots from 07:00 to 20:45
pub fn slots() -> Vec<SlotDescriptor> {
    let mut slots = Vec::with_capacity(SLOT_COUNT);
    for hour in FIRST_HOUR..END_HOUR {
        for minute in (0..60).step_by(SLOT_MINUTES as usize) {
            let row = time_to_row(hour, minute);
            let is_major_line = minute == 0;
            slots.push(SlotDescriptor {
                hour,
                minute,
                row,
                row_end: if is_major_line { row + 5 } else { row + 2 },
                is_major_line,
                is_emphasized: EMPHASIZED_TIMES.contains(&(hour, minute)),
            });
        }
    }
    slots
}

/// A day column with its header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleDay {
    pub date: NaiveDate,
    pub label: DayLabel,
    pub columns: ColumnSpan,
}

/// Days displayed for the selected date
pub fn visible_days(mode: ViewMode, selected_date: NaiveDate) -> Vec<VisibleDay> {
    let dates = match mode {
        ViewMode::Day => vec![selected_date],
        ViewMode::Compact | ViewMode::Complete => {
            week_days(start_of_week(selected_date), mode.visible_day_count())
        }
    };

    dates
        .into_iter()
        .enumerate()
        .map(|(index, date)| {
            let start = index as i32 * COLUMNS_PER_DAY + TIME_COLUMN + 1;
            VisibleDay {
                date,
                label: day_label(date),
                columns: ColumnSpan {
                    start,
                    end: start + COLUMNS_PER_DAY,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_time_to_row_bounds() {
        assert_eq!(time_to_row(7, 0), 2);
        assert_eq!(time_to_row(7, 15), 3);
        assert_eq!(time_to_row(8, 0), 6);
        assert_eq!(time_to_row(20, 45), 57);
        assert_eq!(time_to_row(21, 0), 58);
    }

    #[test]
    fn test_time_to_row_strictly_increasing() {
        let rows: Vec<i32> = slots().iter().map(|s| s.row).collect();
        assert!(rows.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_time_to_row_out_of_domain_does_not_panic() {
        assert_eq!(time_to_row(0, 0), -26);
        let _ = time_to_row(u8::MAX, u8::MAX);
    }

    #[test]
    fn test_day_columns() {
        assert_eq!(
            day_columns(ViewMode::Day, 4),
            ColumnSpan { start: 2, end: 4 }
        );
        assert_eq!(
            day_columns(ViewMode::Day, 0),
            ColumnSpan { start: 2, end: 4 }
        );
        assert_eq!(
            day_columns(ViewMode::Compact, 0),
            ColumnSpan { start: 2, end: 4 }
        );
        assert_eq!(
            day_columns(ViewMode::Complete, 2),
            ColumnSpan { start: 6, end: 8 }
        );
        assert_eq!(
            day_columns(ViewMode::Complete, 6),
            ColumnSpan { start: 14, end: 16 }
        );
    }

    #[test]
    fn test_column_span_split() {
        let span = ColumnSpan { start: 6, end: 8 };
        assert_eq!(
            span.for_week(Some(WeekParity::A), AlternationLayout::FullWidth),
            span
        );
        assert_eq!(
            span.for_week(Some(WeekParity::A), AlternationLayout::Split),
            ColumnSpan { start: 6, end: 7 }
        );
        assert_eq!(
            span.for_week(Some(WeekParity::B), AlternationLayout::Split),
            ColumnSpan { start: 7, end: 8 }
        );
        assert_eq!(span.for_week(None, AlternationLayout::Split), span);
    }

    #[test]
    fn test_slots() {
        let slots = slots();
        assert_eq!(slots.len(), SLOT_COUNT);
        assert_eq!(slots[0].row, 2);
        assert_eq!(slots[SLOT_COUNT - 1].row, 57);
        assert_eq!(slots.iter().filter(|s| s.is_emphasized).count(), 8);
        assert_eq!(slots.iter().filter(|s| s.is_major_line).count(), 14);

        let eight = slots.iter().find(|s| s.hour == 8 && s.minute == 0).unwrap();
        assert!(eight.is_emphasized);
        assert_eq!(eight.row_end, eight.row + 5);

        let quarter = slots.iter().find(|s| s.hour == 9 && s.minute == 15).unwrap();
        assert!(!quarter.is_major_line);
        assert!(!quarter.is_emphasized);
        assert_eq!(quarter.row_end, quarter.row + 2);
    }

    #[test]
    fn test_visible_days() {
        // Wednesday
        let selected = date(2026, 10, 21);

        let day = visible_days(ViewMode::Day, selected);
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].date, selected);
        assert_eq!(day[0].label, DayLabel::Wednesday);
        assert_eq!(day[0].columns, ColumnSpan { start: 2, end: 4 });

        let compact = visible_days(ViewMode::Compact, selected);
        assert_eq!(compact.len(), 5);
        assert_eq!(compact[0].date, date(2026, 10, 19));
        assert_eq!(compact[4].label, DayLabel::Friday);
        assert_eq!(compact[4].columns, ColumnSpan { start: 10, end: 12 });

        let complete = visible_days(ViewMode::Complete, selected);
        assert_eq!(complete.len(), 7);
        assert_eq!(complete[6].date, date(2026, 10, 25));
        assert_eq!(complete[6].label, DayLabel::Sunday);
    }

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(ViewMode::Day), 3);
        assert_eq!(column_count(ViewMode::Compact), 11);
        assert_eq!(column_count(ViewMode::Complete), 15);
    }
}
