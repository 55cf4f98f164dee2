use super::{DaySet, Meeting, TimeExt};
use time::{Time, Weekday};

/// Minutes of meeting time per layout unit.  Every column shares it, so
/// blocks on different days line up.
pub(crate) const SCALE: u16 = 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum ScheduleLayout<'a> {
    /// The room has no meetings at all
    Empty,
    Populated(WeekLayout<'a>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct WeekLayout<'a> {
    pub(crate) earliest: Time,
    pub(crate) latest: Time,
    /// Height of every day column
    pub(crate) height: u16,
    pub(crate) columns: Vec<DayColumn<'a>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DayColumn<'a> {
    pub(crate) weekday: Weekday,
    /// Sorted by start time; meetings starting together keep their input
    /// order
    pub(crate) blocks: Vec<MeetingBlock<'a>>,
    /// Offset of the "now" line, if it falls in this column
    pub(crate) now: Option<u16>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MeetingBlock<'a> {
    pub(crate) meeting: &'a Meeting,
    pub(crate) top: u16,
    pub(crate) height: u16,
    pub(crate) current: bool,
}

/// The days offered for display: the whole week if anything meets on a
/// weekend, otherwise Monday through Friday
pub(crate) fn week_days(meetings: &[Meeting]) -> DaySet {
    if meetings.iter().any(|m| m.days.intersects(DaySet::WEEKEND)) {
        DaySet::ALL
    } else {
        DaySet::WORKDAYS
    }
}

pub(crate) fn visible_days(meetings: &[Meeting], selected: Option<Weekday>) -> DaySet {
    match selected {
        Some(wd) => DaySet::single(wd),
        None => week_days(meetings),
    }
}

/// Selecting the already-selected day clears the selection.
pub(crate) fn toggle_day(selected: Option<Weekday>, day: Weekday) -> Option<Weekday> {
    (selected != Some(day)).then_some(day)
}

/// Lays out a room's meetings as one column per visible day.
///
/// `weekday` and `time` locate the "now" line; `in_use` decides which
/// meetings are flagged as currently in session.
pub(crate) fn layout<F>(
    meetings: &[Meeting],
    selected: Option<Weekday>,
    weekday: Weekday,
    time: Time,
    in_use: F,
) -> ScheduleLayout<'_>
where
    F: Fn(&Meeting) -> bool,
{
    let Some(first) = meetings.first() else {
        return ScheduleLayout::Empty;
    };
    let earliest = meetings.iter().map(|m| m.start).fold(first.start, Ord::min);
    let latest = meetings.iter().map(|m| m.end).fold(first.end, Ord::max);
    let columns = visible_days(meetings, selected)
        .iter()
        .map(|wd| {
            let mut todays = meetings
                .iter()
                .filter(|m| m.days.contains(wd))
                .collect::<Vec<_>>();
            todays.sort_by_key(|m| m.start);
            let blocks = todays
                .into_iter()
                .map(|meeting| MeetingBlock {
                    meeting,
                    top: offset(earliest, meeting.start),
                    height: offset(meeting.start, meeting.end),
                    current: in_use(meeting),
                })
                .collect();
            let now = (wd == weekday && earliest <= time && time < latest)
                .then(|| offset(earliest, time));
            DayColumn {
                weekday: wd,
                blocks,
                now,
            }
        })
        .collect();
    ScheduleLayout::Populated(WeekLayout {
        earliest,
        latest,
        height: offset(earliest, latest),
        columns,
    })
}

fn offset(from: Time, to: Time) -> u16 {
    to.minutes().saturating_sub(from.minutes()) / SCALE
}
