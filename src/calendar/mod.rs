mod grid;
mod util;
mod widget;
pub(crate) use self::grid::{CalendarGrid, GridPos, NavKey};
pub(crate) use self::util::WeekdayExt;
pub(crate) use self::widget::Calendar;
use thiserror::Error;
use time::Date;

/// The span of days covered by an academic term.  Days from `finals` through
/// `end` form the finals period.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct TermDays {
    start: Date,
    finals: Date,
    end: Date,
}

impl TermDays {
    pub(crate) fn new(start: Date, finals: Date, end: Date) -> Result<TermDays, TermError> {
        if start <= finals && finals <= end {
            Ok(TermDays { start, finals, end })
        } else {
            Err(TermError { start, finals, end })
        }
    }

    pub(crate) fn start(&self) -> Date {
        self.start
    }

    pub(crate) fn finals(&self) -> Date {
        self.finals
    }

    pub(crate) fn end(&self) -> Date {
        self.end
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("term days out of order: start {start}, finals {finals}, end {end}")]
pub(crate) struct TermError {
    start: Date,
    finals: Date,
    end: Date,
}
