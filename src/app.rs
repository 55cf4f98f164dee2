use crate::calendar::{Calendar, CalendarGrid, GridPos, NavKey};
use crate::data::RoomData;
use crate::help::Help;
use crate::schedule::{layout, toggle_day, used, week_days, weekday_from_number, Schedule};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::{Date, Time, Weekday};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    room: RoomData,
    grid: CalendarGrid,
    /// The date whose weekday the schedule treats as today
    date: Date,
    time: Time,
    /// Single day the schedule is narrowed to
    day: Option<Weekday>,
    /// Calendar cell with keyboard focus; `None` while the selected date is
    /// outside the term, until a navigation key moves into it
    focus: Option<GridPos>,
    /// Lines the schedule's day columns are scrolled by
    scroll: u16,
    view: View,
    state: AppState,
}

impl App {
    pub(crate) fn new(room: RoomData, date: Date, time: Time) -> App {
        let grid = CalendarGrid::new(room.term);
        let focus = grid.position_of(date);
        App {
            room,
            grid,
            date,
            time,
            day: None,
            focus,
            scroll: 0,
            view: View::Schedule,
            state: AppState::Browsing,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                tracing::debug!(?code, ?modifiers, "Rejected key");
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Browsing => match key {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    self.switch_view(self.view.other());
                    true
                }
                _ => match self.view {
                    View::Schedule => self.handle_schedule_key(key),
                    View::Calendar => self.handle_calendar_key(key),
                },
            },
            AppState::Helping => {
                self.state = AppState::Browsing;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn handle_schedule_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('0') => {
                self.day = None;
                true
            }
            KeyCode::Char(c @ '1'..='7') => {
                let Some(wd) = c
                    .to_digit(10)
                    .and_then(|n| u8::try_from(n).ok())
                    .and_then(weekday_from_number)
                else {
                    return false;
                };
                if !week_days(&self.room.meetings).contains(wd) {
                    return false;
                }
                self.day = toggle_day(self.day, wd);
                true
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    fn handle_calendar_key(&mut self, key: KeyCode) -> bool {
        let nav = match key {
            KeyCode::Char('k') | KeyCode::Up => NavKey::Up,
            KeyCode::Char('j') | KeyCode::Down => NavKey::Down,
            KeyCode::Char('h') | KeyCode::Left => NavKey::Left,
            KeyCode::Char('l') | KeyCode::Right => NavKey::Right,
            KeyCode::Enter => {
                self.switch_view(View::Schedule);
                return true;
            }
            _ => return false,
        };
        let navigation = match self.focus {
            Some(focus) => self.grid.navigate(focus, nav),
            None => self.grid.entry_point(self.date),
        };
        let Some(navigation) = navigation else {
            return false;
        };
        tracing::debug!(
            from = ?self.date,
            to = ?navigation.date,
            focus = ?navigation.focus,
            "Calendar navigation"
        );
        self.date = navigation.date;
        self.focus = Some(navigation.focus);
        true
    }

    fn switch_view(&mut self, view: View) {
        tracing::debug!(?view, date = %self.date, "Switching view");
        self.view = view;
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn title(&self) -> String {
        format!(
            "{} · {} {} {:02}:{:02}",
            self.room.room,
            self.date.weekday(),
            self.date,
            self.time.hour(),
            self.time.minute()
        )
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        match self.view {
            View::Schedule => {
                let weekday = self.date.weekday();
                let in_session = used(weekday, self.time).on_date(self.date);
                let meetings = &self.room.meetings;
                let schedule = layout(meetings, self.day, weekday, self.time, |m| {
                    in_session.check(m)
                });
                Schedule::new(self.title(), &schedule, week_days(meetings), self.day).render(
                    area,
                    buf,
                    &mut self.scroll,
                );
            }
            View::Calendar => {
                Calendar::new(&self.grid, self.date)
                    .term_name(self.room.term_name.as_deref())
                    .focus(self.focus)
                    .render(area, buf);
            }
        }
        if self.state == AppState::Helping {
            Help {
                view: self.view,
                style: BASE_STYLE,
            }
            .render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum View {
    Schedule,
    Calendar,
}

impl View {
    fn other(self) -> View {
        match self {
            View::Schedule => View::Calendar,
            View::Calendar => View::Schedule,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Browsing,
    Helping,
    Quitting,
}
