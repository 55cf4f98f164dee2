//! Loading a room's meetings and term from a JSON data file

use crate::calendar::{TermDays, TermError};
use crate::schedule::{weekday_from_number, DaySet, Meeting};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date, Time};

pub(crate) static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

pub(crate) static HM_FMT: &[FormatItem<'_>] = format_description!("[hour]:[minute]");

/// Everything known about one room for one term
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RoomData {
    pub(crate) room: String,
    pub(crate) term_name: Option<String>,
    pub(crate) term: TermDays,
    pub(crate) meetings: Vec<Meeting>,
}

impl RoomData {
    pub(crate) fn load(path: &Path) -> anyhow::Result<RoomData> {
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let data = RoomData::from_json(&src)
            .with_context(|| format!("failed to load room data from {}", path.display()))?;
        tracing::info!(
            room = %data.room,
            meetings = data.meetings.len(),
            term_start = %data.term.start(),
            term_end = %data.term.end(),
            "Loaded room data"
        );
        Ok(data)
    }

    pub(crate) fn from_json(src: &str) -> Result<RoomData, DataError> {
        let raw = serde_json::from_str::<RawRoom>(src)?;
        let term = TermDays::new(
            parse_date(&raw.term.start)?,
            parse_date(&raw.term.finals)?,
            parse_date(&raw.term.end)?,
        )?;
        let meetings = raw
            .meetings
            .into_iter()
            .map(RawMeeting::into_meeting)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RoomData {
            room: raw.room,
            term_name: raw.term.name,
            term,
            meetings,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum DataError {
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    #[error("invalid date {value:?}; expected YYYY-MM-DD")]
    Date {
        value: String,
        source: time::error::Parse,
    },
    #[error("invalid time {value:?}; expected HH:MM")]
    Time {
        value: String,
        source: time::error::Parse,
    },
    #[error("meeting {course:?} has invalid weekday number {day}; expected 1 through 7")]
    Weekday { course: String, day: u8 },
    #[error("meeting {course:?} ends before it starts")]
    Backwards { course: String },
    #[error(transparent)]
    Term(#[from] TermError),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct RawRoom {
    room: String,
    term: RawTerm,
    #[serde(default)]
    meetings: Vec<RawMeeting>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct RawTerm {
    #[serde(default)]
    name: Option<String>,
    start: String,
    finals: String,
    end: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct RawMeeting {
    course: String,
    #[serde(rename = "type")]
    kind: String,
    start: String,
    end: String,
    days: Vec<u8>,
    #[serde(default)]
    date: Option<String>,
}

impl RawMeeting {
    fn into_meeting(self) -> Result<Meeting, DataError> {
        let start = parse_time(&self.start)?;
        let end = parse_time(&self.end)?;
        if end < start {
            return Err(DataError::Backwards {
                course: self.course,
            });
        }
        let mut days = DaySet::default();
        for &day in &self.days {
            let Some(wd) = weekday_from_number(day) else {
                return Err(DataError::Weekday {
                    course: self.course,
                    day,
                });
            };
            days.insert(wd);
        }
        let exam_date = self.date.as_deref().map(parse_date).transpose()?;
        Ok(Meeting {
            course: self.course,
            kind: self.kind,
            start,
            end,
            days,
            exam_date,
        })
    }
}

fn parse_date(value: &str) -> Result<Date, DataError> {
    Date::parse(value, &YMD_FMT).map_err(|source| DataError::Date {
        value: value.to_owned(),
        source,
    })
}

fn parse_time(value: &str) -> Result<Time, DataError> {
    Time::parse(value, &HM_FMT).map_err(|source| DataError::Time {
        value: value.to_owned(),
        source,
    })
}
