use super::layout::{DayColumn, MeetingBlock, WeekLayout};
use super::{hm, meeting_type_name, DaySet, ScheduleLayout, TimeExt};
use crate::calendar::WeekdayExt;
use crate::canvas::BufferCanvas;
use crate::theme::{
    schedule::{
        CURRENT_MEETING_STYLE, DISCLAIMER_STYLE, EXAM_STYLE, GUTTER_STYLE, MEETING_STYLE,
        NOW_STYLE, SELECTED_DAY_STYLE,
    },
    TITLE_STYLE, WEEKDAY_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
use time::Weekday;

static EMPTY_MESSAGE: &str =
    "This room isn't used for any classes this week, as far as the schedule is concerned.";

static DISCLAIMER: &str = "Note: some classes book rooms but don't meet.";

/// Minutes of meeting time per terminal line
const MINUTES_PER_LINE: u16 = 10;

/// Number of lines taken up by the title, the day names, and their rule
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by the disclaimer
const FOOTER_LINES: u16 = 1;

/// Width of the time labels on the left, including their trailing space
const GUTTER_WIDTH: u16 = 6;

/// Number of columns per day when the whole week is shown
const DAY_WIDTH: u16 = 16;

const ACS_HLINE: char = '─';

/// The weekly schedule of a single room.  Its state is the number of lines
/// the day columns are scrolled down by.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Schedule<'a> {
    title: String,
    layout: &'a ScheduleLayout<'a>,
    week_days: DaySet,
    selected: Option<Weekday>,
}

impl<'a> Schedule<'a> {
    pub(crate) fn new(
        title: String,
        layout: &'a ScheduleLayout<'a>,
        week_days: DaySet,
        selected: Option<Weekday>,
    ) -> Self {
        Schedule {
            title,
            layout,
            week_days,
            selected,
        }
    }

    fn day_x(&self, wd: Weekday) -> u16 {
        let i = self.week_days.iter().take_while(|&d| d != wd).count();
        GUTTER_WIDTH.saturating_add(DAY_WIDTH.saturating_mul(u16::try_from(i).unwrap_or(u16::MAX)))
    }
}

impl StatefulWidget for Schedule<'_> {
    type State = u16;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut u16) {
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.mvprint(0, 0, &self.title, Some(TITLE_STYLE));
        let week = match self.layout {
            ScheduleLayout::Empty => {
                *scroll = 0;
                canvas.mvprint(2, 0, EMPTY_MESSAGE, None);
                return;
            }
            ScheduleLayout::Populated(week) => week,
        };
        for wd in self.week_days.iter() {
            let style = if self.selected == Some(wd) {
                SELECTED_DAY_STYLE
            } else {
                WEEKDAY_STYLE
            };
            canvas.mvprint(1, self.day_x(wd), format!(" {} ", wd.abbr()), Some(style));
        }
        canvas.hline(2, 0, ACS_HLINE, canvas.width(), None);
        let body_lines = canvas.height().saturating_sub(HEADER_LINES + FOOTER_LINES);
        let total_lines = week.height.div_ceil(MINUTES_PER_LINE);
        *scroll = (*scroll).min(total_lines.saturating_sub(body_lines));
        let mut body = Body {
            canvas: &mut canvas,
            scroll: *scroll,
            lines: body_lines,
        };
        body.draw_gutter(week, total_lines);
        for column in &week.columns {
            let (x, width) = if self.selected.is_some() {
                (GUTTER_WIDTH, body.canvas.width().saturating_sub(GUTTER_WIDTH))
            } else {
                (self.day_x(column.weekday), DAY_WIDTH - 1)
            };
            body.draw_column(column, x, width);
        }
        let footer = canvas.height().saturating_sub(FOOTER_LINES);
        if footer >= HEADER_LINES {
            canvas.mvprint(footer, 0, DISCLAIMER, Some(DISCLAIMER_STYLE));
        }
    }
}

/// The scrollable part of the schedule, between the day names and the
/// disclaimer
#[derive(Debug)]
struct Body<'a, 'b> {
    canvas: &'a mut BufferCanvas<'b>,
    scroll: u16,
    lines: u16,
}

impl Body<'_, '_> {
    /// Maps a line of the day columns to a line of the canvas
    fn screen_y(&self, line: u16) -> Option<u16> {
        line.checked_sub(self.scroll)
            .filter(|&y| y < self.lines)
            .map(|y| y + HEADER_LINES)
    }

    fn draw_gutter(&mut self, week: &WeekLayout<'_>, total_lines: u16) {
        // Hour labels sit on the line containing the top of the hour.
        let earliest = week.earliest.minutes();
        let end = earliest.saturating_add(total_lines.saturating_mul(MINUTES_PER_LINE));
        for hour in (earliest.div_ceil(60) * 60..end).step_by(60) {
            if let Some(y) = self.screen_y((hour - earliest) / MINUTES_PER_LINE) {
                self.canvas.mvprint(y, 0, hm(hour), Some(GUTTER_STYLE));
            }
        }
        if let Some(y) = self.screen_y(total_lines) {
            let label = hm(week.latest.minutes());
            self.canvas.mvprint(y, 0, label, Some(GUTTER_STYLE));
        }
    }

    fn draw_column(&mut self, column: &DayColumn<'_>, x: u16, width: u16) {
        // Later blocks are drawn over earlier ones that they overlap.
        for block in &column.blocks {
            self.draw_block(block, x, width);
        }
        if let Some(y) = column
            .now
            .and_then(|now| self.screen_y(now / MINUTES_PER_LINE))
        {
            self.canvas.hline(y, x, ACS_HLINE, width, Some(NOW_STYLE));
        }
    }

    fn draw_block(&mut self, block: &MeetingBlock<'_>, x: u16, width: u16) {
        let meeting = block.meeting;
        let style = if block.current {
            CURRENT_MEETING_STYLE
        } else if meeting.is_exam() {
            EXAM_STYLE
        } else {
            MEETING_STYLE
        };
        let top = block.top / MINUTES_PER_LINE;
        let height = block.height.div_ceil(MINUTES_PER_LINE).max(1);
        let text = [
            format!("{} ({})", meeting.course, meeting.kind),
            format!("{}–{}", hm(meeting.start.minutes()), hm(meeting.end.minutes())),
            meeting_type_name(&meeting.kind).map_or_else(|| meeting.kind.clone(), String::from),
        ];
        for i in 0..height {
            let Some(y) = self.screen_y(top.saturating_add(i)) else {
                continue;
            };
            self.canvas.fill(y, x, width, style);
            if let Some(s) = text.get(usize::from(i)) {
                self.canvas.mvprint_clipped(y, x, width, s, Some(style));
            }
        }
    }
}
