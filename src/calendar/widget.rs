use super::grid::{CalendarGrid, GridPos, GridRow};
use super::util::{CalendarCell, WeekdayExt};
use crate::canvas::BufferCanvas;
use crate::schedule::MONDAY_FIRST;
use crate::theme::{
    calendar::{FINALS_STYLE, HEADING_STYLE, SELECTED_STYLE, WEEK_LABEL_STYLE},
    BASE_STYLE, TITLE_STYLE, WEEKDAY_STYLE,
};
use ratatui::prelude::*;
use time::Date;

/// Number of columns on the left side of the calendar, used for the week
/// numbers
const LABEL_WIDTH: u16 = 6;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 5;

const TOTAL_WIDTH: u16 = LABEL_WIDTH + 7 * DAY_WIDTH;

/// The term calendar, scrolled so that the focused cell is on screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a> {
    grid: &'a CalendarGrid,
    term_name: Option<&'a str>,
    selected: Date,
    focus: Option<GridPos>,
}

impl<'a> Calendar<'a> {
    pub(crate) fn new(grid: &'a CalendarGrid, selected: Date) -> Self {
        Calendar {
            grid,
            term_name: None,
            selected,
            focus: None,
        }
    }

    pub(crate) fn term_name(mut self, name: Option<&'a str>) -> Self {
        self.term_name = name;
        self
    }

    pub(crate) fn focus(mut self, focus: Option<GridPos>) -> Self {
        self.focus = focus;
        self
    }

    fn first_visible_row(&self, lines: u16) -> usize {
        self.focus
            .map_or(0, |f| (f.row + 1).saturating_sub(usize::from(lines)))
    }
}

impl Widget for Calendar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left = area.width.saturating_sub(TOTAL_WIDTH) / 2;
        let [_, area, _] = Layout::horizontal([
            Constraint::Length(left),
            Constraint::Length(TOTAL_WIDTH.min(area.width)),
            Constraint::Min(0),
        ])
        .areas(area);
        let first = self.first_visible_row(area.height);
        let mut canvas = BufferCanvas::new(area, buf);
        let rows = self.grid.rows().iter().enumerate().skip(first);
        for (y, (i, row)) in std::iter::zip(0..area.height, rows) {
            match row {
                GridRow::Term => {
                    let term = self.grid.term();
                    let heading = match self.term_name {
                        Some(name) => format!("{name}: {} to {}", term.start(), term.end()),
                        None => format!("{} to {}", term.start(), term.end()),
                    };
                    canvas.mvprint(y, 0, heading, Some(TITLE_STYLE));
                }
                GridRow::Header => {
                    canvas.mvprint(y, 0, "Week", Some(WEEK_LABEL_STYLE));
                    for wd in MONDAY_FIRST {
                        canvas.mvprint(y, day_x(wd.index0()), wd.abbr(), Some(WEEKDAY_STYLE));
                    }
                }
                GridRow::Month(month) => {
                    canvas.mvprint(y, LABEL_WIDTH, month.to_string(), Some(HEADING_STYLE));
                }
                GridRow::Week { .. } => {
                    let Some(week) = self.grid.week_row(i, self.selected) else {
                        continue;
                    };
                    canvas.mvprint(y, 0, week.label.to_string(), Some(WEEK_LABEL_STYLE));
                    for (col, cell) in week.cells.iter().enumerate() {
                        let focused = self.focus == Some(GridPos { row: i, col });
                        if let Some((s, style)) = show_cell(cell, focused) {
                            canvas.mvprint(y, day_x(col), s, Some(style));
                        }
                    }
                }
            }
        }
    }
}

fn day_x(col: usize) -> u16 {
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    LABEL_WIDTH.saturating_add(DAY_WIDTH.saturating_mul(col))
}

fn show_cell(cell: &CalendarCell, focused: bool) -> Option<(String, Style)> {
    let CalendarCell::Day {
        date,
        finals,
        selected,
    } = cell
    else {
        return None;
    };
    let s = if focused {
        format!("[{:2}]", date.day())
    } else {
        format!(" {:2} ", date.day())
    };
    let style = if *selected {
        SELECTED_STYLE
    } else if *finals {
        FINALS_STYLE
    } else {
        BASE_STYLE
    };
    Some((s, style))
}
