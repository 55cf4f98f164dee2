use super::Meeting;
use time::{Date, Time, Weekday};

/// Predicate for whether a meeting has the room at a given moment
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct InSession {
    weekday: Weekday,
    time: Time,
    date: Option<Date>,
}

impl InSession {
    /// Also require exams to fall on `date`.  Without a date, exams are
    /// treated like any other weekly meeting.
    pub(crate) fn on_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    pub(crate) fn check(&self, meeting: &Meeting) -> bool {
        if matches!((meeting.exam_date, self.date), (Some(exam), Some(today)) if exam != today) {
            return false;
        }
        meeting.days.contains(self.weekday) && meeting.start <= self.time && self.time < meeting.end
    }
}

pub(crate) fn used(weekday: Weekday, time: Time) -> InSession {
    InSession {
        weekday,
        time,
        date: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::DaySet;
    use time::macros::{date, time};
    use time::Weekday::*;

    fn lecture() -> Meeting {
        Meeting {
            course: String::from("CSE 11"),
            kind: String::from("LE"),
            start: time!(9:00),
            end: time!(9:50),
            days: [Monday, Wednesday, Friday].into_iter().collect::<DaySet>(),
            exam_date: None,
        }
    }

    #[test]
    fn test_weekly_meeting() {
        let m = lecture();
        assert!(used(Monday, time!(9:00)).check(&m));
        assert!(used(Friday, time!(9:49)).check(&m));
        assert!(!used(Friday, time!(9:50)).check(&m));
        assert!(!used(Monday, time!(8:59)).check(&m));
        assert!(!used(Tuesday, time!(9:10)).check(&m));
    }

    #[test]
    fn test_exam_on_date() {
        let exam = Meeting {
            kind: String::from("FI"),
            days: DaySet::single(Saturday),
            exam_date: Some(date!(2024 - 12 - 07)),
            ..lecture()
        };
        assert!(used(Saturday, time!(9:30)).check(&exam));
        assert!(used(Saturday, time!(9:30))
            .on_date(date!(2024 - 12 - 07))
            .check(&exam));
        assert!(!used(Saturday, time!(9:30))
            .on_date(date!(2024 - 11 - 30))
            .check(&exam));
        assert!(used(Monday, time!(9:30))
            .on_date(date!(2024 - 12 - 02))
            .check(&lecture()));
    }
}
