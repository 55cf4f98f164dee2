use super::util::{add_days, cell_date, monday_on_or_before, week_row, WeekRow, DAYS_IN_WEEK};
use super::TermDays;
use std::iter::successors;
use time::{Date, Month};

/// One line of the term calendar
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GridRow {
    /// Heading naming the term
    Term,
    /// Weekday names
    Header,
    /// Heading for the month whose weeks follow
    Month(Month),
    /// The week starting on `monday`, restricted to `month` when the week
    /// straddles two months
    Week { monday: Date, month: Option<Month> },
}

/// Location of a cell: index into the grid's rows and the weekday column
/// (Monday = 0)
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct GridPos {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

/// Result of a navigation key: the date to select and the cell to focus
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Navigation {
    pub(crate) date: Date,
    pub(crate) focus: GridPos,
}

/// The term laid out as rows of seven weekday columns
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarGrid {
    term: TermDays,
    rows: Vec<GridRow>,
}

impl CalendarGrid {
    pub(crate) fn new(term: TermDays) -> CalendarGrid {
        let mut rows = vec![GridRow::Term, GridRow::Header];
        let mut current_month = None;
        let mondays = successors(monday_on_or_before(term.start()), |&m| add_days(m, 7))
            .take_while(|&m| m <= term.end());
        for monday in mondays {
            let mut months = (0..DAYS_IN_WEEK)
                .filter_map(|col| cell_date(monday, None, &term, col))
                .map(Date::month)
                .collect::<Vec<_>>();
            months.dedup();
            if let [month] = months[..] {
                if current_month != Some(month) {
                    rows.push(GridRow::Month(month));
                    current_month = Some(month);
                }
                rows.push(GridRow::Week {
                    monday,
                    month: None,
                });
            } else {
                for month in months {
                    if current_month != Some(month) {
                        rows.push(GridRow::Month(month));
                        current_month = Some(month);
                    }
                    rows.push(GridRow::Week {
                        monday,
                        month: Some(month),
                    });
                }
            }
        }
        CalendarGrid { term, rows }
    }

    pub(crate) fn term(&self) -> &TermDays {
        &self.term
    }

    pub(crate) fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// The cells of row `row` if it is a week row
    pub(crate) fn week_row(&self, row: usize, selected: Date) -> Option<WeekRow> {
        match self.rows.get(row)? {
            GridRow::Week { monday, month } => {
                Some(week_row(*monday, *month, &self.term, selected))
            }
            _ => None,
        }
    }

    /// The date shown at `pos`, or `None` if the cell is blank or not part of
    /// a week row
    pub(crate) fn date_at(&self, pos: GridPos) -> Option<Date> {
        match self.rows.get(pos.row)? {
            GridRow::Week { monday, month } => cell_date(*monday, *month, &self.term, pos.col),
            _ => None,
        }
    }

    pub(crate) fn position_of(&self, date: Date) -> Option<GridPos> {
        self.rows.iter().enumerate().find_map(|(row, r)| match r {
            GridRow::Week { monday, month } => {
                let col = usize::try_from((date - *monday).whole_days()).ok()?;
                (cell_date(*monday, *month, &self.term, col) == Some(date))
                    .then_some(GridPos { row, col })
            }
            _ => None,
        })
    }

    /// Handles a navigation key pressed while the cell at `focus` has focus.
    ///
    /// Up and Down always select the date a week away from the focused one,
    /// even when that date is outside the term.  Focus then moves to the
    /// nearest week row in that direction that shows a day in the same
    /// column; if there is none, focus stays put.  Left and Right select
    /// the neighboring day only if it is shown somewhere in the grid, so they
    /// stop at the first and last days of the term instead of wrapping.
    ///
    /// Returns `None` if nothing changes, i.e., if the focused cell is blank
    /// or the key leads nowhere.
    pub(crate) fn navigate(&self, focus: GridPos, key: NavKey) -> Option<Navigation> {
        let current = self.date_at(focus)?;
        match key {
            NavKey::Up | NavKey::Down => {
                let up = key == NavKey::Up;
                let date = add_days(current, if up { -7 } else { 7 })?;
                let focus = self.next_row_with_day(focus, up).unwrap_or(focus);
                Some(Navigation { date, focus })
            }
            NavKey::Left | NavKey::Right => {
                let date = add_days(current, if key == NavKey::Left { -1 } else { 1 })?;
                let focus = self.position_of(date)?;
                Some(Navigation { date, focus })
            }
        }
    }

    /// Where navigation enters the grid when no cell has focus: `date` if it
    /// is in the term, else the nearest end of the term
    pub(crate) fn entry_point(&self, date: Date) -> Option<Navigation> {
        let date = date.clamp(self.term.start(), self.term.end());
        let focus = self.position_of(date)?;
        Some(Navigation { date, focus })
    }

    fn next_row_with_day(&self, from: GridPos, up: bool) -> Option<GridPos> {
        let col = from.col;
        let candidate = |row| {
            let pos = GridPos { row, col };
            self.date_at(pos).map(|_| pos)
        };
        if up {
            (0..from.row).rev().find_map(candidate)
        } else {
            ((from.row + 1)..self.rows.len()).find_map(candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::util::CalendarCell;
    use time::macros::date;
    use time::Month::{December, November, October, September};

    fn fall() -> TermDays {
        TermDays::new(
            date!(2024 - 09 - 23),
            date!(2024 - 12 - 02),
            date!(2024 - 12 - 06),
        )
        .unwrap()
    }

    fn week(monday: Date, month: Option<Month>) -> GridRow {
        GridRow::Week { monday, month }
    }

    fn pos(row: usize, col: usize) -> GridPos {
        GridPos { row, col }
    }

    #[test]
    fn test_rows() {
        let grid = CalendarGrid::new(fall());
        assert_eq!(
            grid.rows(),
            [
                GridRow::Term,
                GridRow::Header,
                GridRow::Month(September),
                week(date!(2024 - 09 - 23), None),
                week(date!(2024 - 09 - 30), Some(September)),
                GridRow::Month(October),
                week(date!(2024 - 09 - 30), Some(October)),
                week(date!(2024 - 10 - 07), None),
                week(date!(2024 - 10 - 14), None),
                week(date!(2024 - 10 - 21), None),
                week(date!(2024 - 10 - 28), Some(October)),
                GridRow::Month(November),
                week(date!(2024 - 10 - 28), Some(November)),
                week(date!(2024 - 11 - 04), None),
                week(date!(2024 - 11 - 11), None),
                week(date!(2024 - 11 - 18), None),
                week(date!(2024 - 11 - 25), Some(November)),
                GridRow::Month(December),
                week(date!(2024 - 11 - 25), Some(December)),
                week(date!(2024 - 12 - 02), None),
            ]
        );
    }

    #[test]
    fn test_rows_midweek_start() {
        let term = TermDays::new(
            date!(2025 - 01 - 08),
            date!(2025 - 03 - 17),
            date!(2025 - 03 - 22),
        )
        .unwrap();
        let grid = CalendarGrid::new(term);
        assert_eq!(
            grid.rows()[..4],
            [
                GridRow::Term,
                GridRow::Header,
                GridRow::Month(Month::January),
                week(date!(2025 - 01 - 06), None),
            ]
        );
        assert_eq!(grid.date_at(pos(3, 1)), None);
        assert_eq!(grid.date_at(pos(3, 2)), Some(date!(2025 - 01 - 08)));
        assert_eq!(grid.rows().last(), Some(&week(date!(2025 - 03 - 17), None)));
    }

    #[test]
    fn test_position_of() {
        let grid = CalendarGrid::new(fall());
        assert_eq!(grid.position_of(date!(2024 - 09 - 23)), Some(pos(3, 0)));
        assert_eq!(grid.position_of(date!(2024 - 09 - 30)), Some(pos(4, 0)));
        assert_eq!(grid.position_of(date!(2024 - 10 - 01)), Some(pos(6, 1)));
        assert_eq!(grid.position_of(date!(2024 - 12 - 01)), Some(pos(18, 6)));
        assert_eq!(grid.position_of(date!(2024 - 12 - 06)), Some(pos(19, 4)));
        assert_eq!(grid.position_of(date!(2024 - 12 - 07)), None);
        assert_eq!(grid.position_of(date!(2024 - 09 - 22)), None);
    }

    #[test]
    fn test_week_row_only_for_weeks() {
        let grid = CalendarGrid::new(fall());
        assert_eq!(grid.week_row(0, date!(2024 - 09 - 23)), None);
        assert_eq!(grid.week_row(2, date!(2024 - 09 - 23)), None);
        assert_eq!(grid.week_row(20, date!(2024 - 09 - 23)), None);
        let row = grid.week_row(19, date!(2024 - 12 - 03)).unwrap();
        assert_eq!(row.label.to_string(), "Final");
        assert!(matches!(
            row.cells[1],
            CalendarCell::Day { selected: true, finals: true, .. }
        ));
    }

    #[test]
    fn test_down_within_month() {
        let grid = CalendarGrid::new(fall());
        assert_eq!(
            grid.navigate(pos(3, 0), NavKey::Down),
            Some(Navigation {
                date: date!(2024 - 09 - 30),
                focus: pos(4, 0),
            })
        );
    }

    #[test]
    fn test_down_skips_headings_and_blank_cells() {
        let grid = CalendarGrid::new(fall());
        // Sep 25 -> Oct 2, which is shown in the October half of the
        // straddling week
        assert_eq!(
            grid.navigate(pos(3, 2), NavKey::Down),
            Some(Navigation {
                date: date!(2024 - 10 - 02),
                focus: pos(6, 2),
            })
        );
    }

    #[test]
    fn test_up_skips_headings_and_blank_cells() {
        let grid = CalendarGrid::new(fall());
        // Dec 4 -> Nov 27
        assert_eq!(
            grid.navigate(pos(19, 2), NavKey::Up),
            Some(Navigation {
                date: date!(2024 - 11 - 27),
                focus: pos(16, 2),
            })
        );
        // Dec 1 -> Nov 24
        assert_eq!(
            grid.navigate(pos(18, 6), NavKey::Up),
            Some(Navigation {
                date: date!(2024 - 11 - 24),
                focus: pos(15, 6),
            })
        );
    }

    #[test]
    fn test_up_off_top_keeps_focus() {
        let grid = CalendarGrid::new(fall());
        assert_eq!(
            grid.navigate(pos(3, 0), NavKey::Up),
            Some(Navigation {
                date: date!(2024 - 09 - 16),
                focus: pos(3, 0),
            })
        );
    }

    #[test]
    fn test_down_off_bottom_keeps_focus() {
        let grid = CalendarGrid::new(fall());
        assert_eq!(
            grid.navigate(pos(19, 0), NavKey::Down),
            Some(Navigation {
                date: date!(2024 - 12 - 09),
                focus: pos(19, 0),
            })
        );
        // Thursday Nov 28 -> Dec 5, past the December half of the
        // straddling week
        assert_eq!(
            grid.navigate(pos(16, 3), NavKey::Down),
            Some(Navigation {
                date: date!(2024 - 12 - 05),
                focus: pos(19, 3),
            })
        );
        // Saturday Nov 30 -> Dec 7; the finals week ends on Friday
        assert_eq!(
            grid.navigate(pos(16, 5), NavKey::Down),
            Some(Navigation {
                date: date!(2024 - 12 - 07),
                focus: pos(16, 5),
            })
        );
    }

    #[test]
    fn test_vertical_moves_are_one_week() {
        let grid = CalendarGrid::new(fall());
        for (row, r) in grid.rows().iter().enumerate() {
            if !matches!(r, GridRow::Week { .. }) {
                continue;
            }
            for col in 0..7 {
                let here = pos(row, col);
                let Some(date) = grid.date_at(here) else {
                    assert_eq!(grid.navigate(here, NavKey::Up), None);
                    continue;
                };
                for (key, days) in [(NavKey::Up, -7), (NavKey::Down, 7)] {
                    let nav = grid.navigate(here, key).unwrap();
                    assert_eq!(nav.date, add_days(date, days).unwrap());
                    assert_eq!(nav.focus.col, col);
                    if nav.focus != here {
                        assert_eq!(grid.date_at(nav.focus), Some(nav.date));
                    }
                }
            }
        }
    }

    #[test]
    fn test_blank_focus_does_nothing() {
        let grid = CalendarGrid::new(fall());
        assert_eq!(grid.navigate(pos(4, 3), NavKey::Down), None);
        assert_eq!(grid.navigate(pos(2, 0), NavKey::Down), None);
        assert_eq!(grid.navigate(pos(99, 0), NavKey::Up), None);
    }

    #[test]
    fn test_left_right() {
        let grid = CalendarGrid::new(fall());
        // Sep 30 -> Oct 1 crosses into the October row
        assert_eq!(
            grid.navigate(pos(4, 0), NavKey::Right),
            Some(Navigation {
                date: date!(2024 - 10 - 01),
                focus: pos(6, 1),
            })
        );
        // Sunday Sep 29 -> Monday Sep 30 wraps to the next row
        assert_eq!(
            grid.navigate(pos(3, 6), NavKey::Right),
            Some(Navigation {
                date: date!(2024 - 09 - 30),
                focus: pos(4, 0),
            })
        );
        assert_eq!(
            grid.navigate(pos(6, 1), NavKey::Left),
            Some(Navigation {
                date: date!(2024 - 09 - 30),
                focus: pos(4, 0),
            })
        );
        // No wrapping at either end of the term
        assert_eq!(grid.navigate(pos(3, 0), NavKey::Left), None);
        assert_eq!(grid.navigate(pos(19, 4), NavKey::Right), None);
    }

    #[test]
    fn test_entry_point() {
        let grid = CalendarGrid::new(fall());
        assert_eq!(
            grid.entry_point(date!(2024 - 10 - 02)),
            Some(Navigation {
                date: date!(2024 - 10 - 02),
                focus: pos(6, 2),
            })
        );
        assert_eq!(
            grid.entry_point(date!(2024 - 09 - 01)),
            Some(Navigation {
                date: date!(2024 - 09 - 23),
                focus: pos(3, 0),
            })
        );
        assert_eq!(
            grid.entry_point(date!(2025 - 01 - 15)),
            Some(Navigation {
                date: date!(2024 - 12 - 06),
                focus: pos(19, 4),
            })
        );
    }
}
