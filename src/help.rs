use crate::app::View;
use ratatui::{
    buffer::Buffer,
    layout::Flex,
    layout::{Alignment, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static COMMON: &[&str] = &[
    "TAB             Switch schedule/calendar",
    "?               Show this help",
    "q, ESC          Quit",
];

static SCHEDULE: &[&str] = &[
    "1-7             Show only that day",
    "0               Show the whole week",
    "j, DOWN         Scroll down",
    "k, UP           Scroll up",
];

static CALENDAR: &[&str] = &[
    "k, UP           Same day last week",
    "j, DOWN         Same day next week",
    "h, LEFT         Previous day",
    "l, RIGHT        Next day",
    "ENTER           Show schedule for date",
];

/// Pop-up listing the keys for the current view
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help {
    pub(crate) view: View,
    pub(crate) style: Style,
}

impl Help {
    fn text(&self) -> Text<'static> {
        let view_lines = match self.view {
            View::Schedule => SCHEDULE,
            View::Calendar => CALENDAR,
        };
        view_lines
            .iter()
            .chain(COMMON)
            .map(|&s| Line::raw(s))
            .chain([Line::raw(""), Line::raw("Press the Any Key to dismiss.")])
            .collect()
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.style);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(self.style).render(outer_area, buf);
        para.render(help_area, buf);
    }
}
