mod layout;
mod session;
mod widget;
pub(crate) use self::layout::{layout, toggle_day, week_days, ScheduleLayout};
pub(crate) use self::session::used;
pub(crate) use self::widget::Schedule;
use crate::calendar::WeekdayExt;
use time::{Date, Time, Weekday, Weekday::*};

/// The days of the week in display order
pub(crate) const MONDAY_FIRST: [Weekday; 7] =
    [Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday];

/// A recurring block of time during which a course occupies the room
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Meeting {
    pub(crate) course: String,
    /// Meeting-type code, e.g. "LE" or "FI"
    pub(crate) kind: String,
    pub(crate) start: Time,
    pub(crate) end: Time,
    pub(crate) days: DaySet,
    /// Set only for exams, which occupy the room on a single date
    pub(crate) exam_date: Option<Date>,
}

impl Meeting {
    pub(crate) fn is_exam(&self) -> bool {
        self.exam_date.is_some()
    }
}

/// A set of weekdays, stored as a bitmask with Monday in the lowest bit
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct DaySet(u8);

impl DaySet {
    pub(crate) const ALL: DaySet = DaySet(0b111_1111);
    pub(crate) const WORKDAYS: DaySet = DaySet(0b001_1111);
    pub(crate) const WEEKEND: DaySet = DaySet(0b110_0000);

    pub(crate) fn single(wd: Weekday) -> DaySet {
        DaySet(Self::bit(wd))
    }

    fn bit(wd: Weekday) -> u8 {
        1 << wd.index0()
    }

    pub(crate) fn insert(&mut self, wd: Weekday) {
        self.0 |= Self::bit(wd);
    }

    pub(crate) fn contains(self, wd: Weekday) -> bool {
        self.0 & Self::bit(wd) != 0
    }

    pub(crate) fn intersects(self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    pub(crate) fn iter(self) -> impl Iterator<Item = Weekday> {
        MONDAY_FIRST.into_iter().filter(move |&wd| self.contains(wd))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> DaySet {
        let mut days = DaySet::default();
        for wd in iter {
            days.insert(wd);
        }
        days
    }
}

/// Converts a weekday number (Monday = 1 through Sunday = 7)
pub(crate) fn weekday_from_number(n: u8) -> Option<Weekday> {
    n.checked_sub(1)
        .and_then(|i| MONDAY_FIRST.get(usize::from(i)))
        .copied()
}

pub(crate) trait TimeExt {
    /// Minutes since midnight, ignoring seconds
    fn minutes(&self) -> u16;
}

impl TimeExt for Time {
    fn minutes(&self) -> u16 {
        u16::from(self.hour()) * 60 + u16::from(self.minute())
    }
}

/// Formats a count of minutes since midnight as "HH:MM"
pub(crate) fn hm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

pub(crate) fn meeting_type_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "LE" => "Lecture",
        "DI" => "Discussion",
        "LA" => "Lab",
        "SE" => "Seminar",
        "ST" => "Studio",
        "TU" => "Tutorial",
        "PB" => "Problem Session",
        "RE" => "Review Session",
        "FW" => "Fieldwork",
        "IN" => "Independent Study",
        "PR" => "Practicum",
        "CL" => "Clinical Clerkship",
        "OT" => "Other Additional Meeting",
        "MU" => "Make-up Session",
        "MI" => "Midterm",
        "FI" => "Final Exam",
        _ => return None,
    };
    Some(name)
}
