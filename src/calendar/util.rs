use super::TermDays;
use std::fmt;
use time::{Date, Duration, Month, Weekday};

pub(super) const DAYS_IN_WEEK: usize = 7;

/// Week number shown as "Final" instead of a number
const FINALS_WEEK: i64 = 11;

pub(crate) trait WeekdayExt {
    /// Column of the weekday in a Monday-first week
    fn index0(&self) -> usize;

    fn abbr(&self) -> &'static str;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        self.number_days_from_monday().into()
    }

    fn abbr(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

pub(crate) fn add_days(date: Date, n: i64) -> Option<Date> {
    date.checked_add(Duration::days(n))
}

pub(super) fn monday_on_or_before(date: Date) -> Option<Date> {
    add_days(date, -i64::from(date.weekday().number_days_from_monday()))
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum WeekLabel {
    Week(i64),
    Final,
}

impl WeekLabel {
    pub(crate) fn for_monday(monday: Date, term: &TermDays) -> WeekLabel {
        match (monday - term.start()).whole_days().div_euclid(7) + 1 {
            FINALS_WEEK => WeekLabel::Final,
            n => WeekLabel::Week(n),
        }
    }
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekLabel::Week(n) => write!(f, "{n}"),
            WeekLabel::Final => write!(f, "Final"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CalendarCell {
    Blank,
    Day {
        date: Date,
        finals: bool,
        selected: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct WeekRow {
    pub(crate) label: WeekLabel,
    pub(crate) cells: [CalendarCell; DAYS_IN_WEEK],
}

/// The date shown in column `col` of the week starting on `monday`, if it is
/// in the term and (when `month` is given) in that month
pub(super) fn cell_date(
    monday: Date,
    month: Option<Month>,
    term: &TermDays,
    col: usize,
) -> Option<Date> {
    if col >= DAYS_IN_WEEK {
        return None;
    }
    let day = i64::try_from(col)
        .ok()
        .and_then(|n| add_days(monday, n))?;
    if month.is_some_and(|m| day.month() != m) || !term.contains(day) {
        None
    } else {
        Some(day)
    }
}

pub(crate) fn week_row(
    monday: Date,
    month: Option<Month>,
    term: &TermDays,
    selected: Date,
) -> WeekRow {
    let cells = std::array::from_fn(|col| match cell_date(monday, month, term, col) {
        Some(date) => CalendarCell::Day {
            date,
            finals: date >= term.finals(),
            selected: date == selected,
        },
        None => CalendarCell::Blank,
    });
    WeekRow {
        label: WeekLabel::for_monday(monday, term),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month::{December, October, September};

    fn fall() -> TermDays {
        TermDays::new(
            date!(2024 - 09 - 23),
            date!(2024 - 12 - 02),
            date!(2024 - 12 - 06),
        )
        .unwrap()
    }

    fn date_of(cell: &CalendarCell) -> Option<Date> {
        match cell {
            CalendarCell::Blank => None,
            CalendarCell::Day { date, .. } => Some(*date),
        }
    }

    fn dates(row: &WeekRow) -> Vec<Option<Date>> {
        row.cells.iter().map(date_of).collect()
    }

    #[test]
    fn test_first_week() {
        let row = week_row(date!(2024 - 09 - 23), None, &fall(), date!(2024 - 09 - 25));
        assert_eq!(row.label, WeekLabel::Week(1));
        assert_eq!(row.label.to_string(), "1");
        assert_eq!(
            dates(&row),
            [
                Some(date!(2024 - 09 - 23)),
                Some(date!(2024 - 09 - 24)),
                Some(date!(2024 - 09 - 25)),
                Some(date!(2024 - 09 - 26)),
                Some(date!(2024 - 09 - 27)),
                Some(date!(2024 - 09 - 28)),
                Some(date!(2024 - 09 - 29)),
            ]
        );
        assert_eq!(
            row.cells[2],
            CalendarCell::Day {
                date: date!(2024 - 09 - 25),
                finals: false,
                selected: true,
            }
        );
        assert_eq!(
            row.cells.iter().filter(|c| matches!(c, CalendarCell::Day { selected: true, .. })).count(),
            1
        );
    }

    #[test]
    fn test_finals_week() {
        let row = week_row(date!(2024 - 12 - 02), None, &fall(), date!(2024 - 10 - 01));
        assert_eq!(row.label, WeekLabel::Final);
        assert_eq!(row.label.to_string(), "Final");
        for cell in &row.cells[..5] {
            assert!(matches!(cell, CalendarCell::Day { finals: true, selected: false, .. }));
        }
        assert_eq!(row.cells[5], CalendarCell::Blank);
        assert_eq!(row.cells[6], CalendarCell::Blank);
    }

    #[test]
    fn test_week_numbers() {
        let term = fall();
        let mut monday = term.start();
        for n in 1..=10 {
            assert_eq!(WeekLabel::for_monday(monday, &term), WeekLabel::Week(n));
            monday = add_days(monday, 7).unwrap();
        }
        assert_eq!(WeekLabel::for_monday(monday, &term), WeekLabel::Final);
        let after = add_days(monday, 7).unwrap();
        assert_eq!(WeekLabel::for_monday(after, &term), WeekLabel::Week(12));
        let before = add_days(term.start(), -7).unwrap();
        assert_eq!(WeekLabel::for_monday(before, &term), WeekLabel::Week(0));
    }

    #[test]
    fn test_week_number_rounds_down() {
        let term = TermDays::new(
            date!(2024 - 09 - 26),
            date!(2024 - 12 - 05),
            date!(2024 - 12 - 13),
        )
        .unwrap();
        // The Monday before a Thursday start is in week 0
        assert_eq!(
            WeekLabel::for_monday(date!(2024 - 09 - 23), &term),
            WeekLabel::Week(0)
        );
        assert_eq!(
            WeekLabel::for_monday(date!(2024 - 09 - 30), &term),
            WeekLabel::Week(1)
        );
        let row = week_row(date!(2024 - 09 - 23), None, &term, date!(2024 - 09 - 26));
        assert_eq!(row.cells[2], CalendarCell::Blank);
        assert_eq!(date_of(&row.cells[3]), Some(date!(2024 - 09 - 26)));
    }

    #[test]
    fn test_month_filter() {
        let term = fall();
        let sept = week_row(date!(2024 - 09 - 30), Some(September), &term, term.start());
        assert_eq!(date_of(&sept.cells[0]), Some(date!(2024 - 09 - 30)));
        assert!(sept.cells[1..].iter().all(|c| *c == CalendarCell::Blank));
        let oct = week_row(date!(2024 - 09 - 30), Some(October), &term, term.start());
        assert_eq!(oct.cells[0], CalendarCell::Blank);
        assert_eq!(date_of(&oct.cells[1]), Some(date!(2024 - 10 - 01)));
        assert_eq!(date_of(&oct.cells[6]), Some(date!(2024 - 10 - 06)));
        let dec = week_row(date!(2024 - 09 - 30), Some(December), &term, term.start());
        assert!(dec.cells.iter().all(|c| *c == CalendarCell::Blank));
    }

    #[test]
    fn test_outside_term_is_blank() {
        let term = fall();
        let before = week_row(date!(2024 - 09 - 16), None, &term, term.start());
        assert!(before.cells.iter().all(|c| *c == CalendarCell::Blank));
        let after = week_row(date!(2024 - 12 - 09), None, &term, term.start());
        assert!(after.cells.iter().all(|c| *c == CalendarCell::Blank));
    }

    #[test]
    fn test_monday_on_or_before() {
        assert_eq!(
            monday_on_or_before(date!(2024 - 09 - 23)),
            Some(date!(2024 - 09 - 23))
        );
        assert_eq!(
            monday_on_or_before(date!(2024 - 09 - 29)),
            Some(date!(2024 - 09 - 23))
        );
        assert_eq!(
            monday_on_or_before(date!(2024 - 10 - 01)),
            Some(date!(2024 - 09 - 30))
        );
    }
}
