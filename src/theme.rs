use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) mod schedule {
    use super::*;

    pub(crate) const SELECTED_DAY_STYLE: Style = WEEKDAY_STYLE.add_modifier(Modifier::REVERSED);

    pub(crate) const GUTTER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const MEETING_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

    pub(crate) const CURRENT_MEETING_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightGreen)
        .add_modifier(Modifier::BOLD);

    pub(crate) const EXAM_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightMagenta);

    pub(crate) const NOW_STYLE: Style = Style::new()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD);

    pub(crate) const DISCLAIMER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::ITALIC);
}

pub(crate) mod calendar {
    use super::*;

    pub(crate) const HEADING_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const WEEK_LABEL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const FINALS_STYLE: Style = BASE_STYLE.fg(Color::LightYellow);

    pub(crate) const SELECTED_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);
}
