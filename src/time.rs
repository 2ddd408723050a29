use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 1440;

/// Minute of the day, `00:00` ..= `24:00`.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time(pub u32);

impl Time {
    pub fn hm(hours: u32, minutes: u32) -> Time {
        Time(hours * 60 + minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day '{0}', expected HH:MM between 00:00 and 24:00")]
pub struct ParseTimeError(pub String);

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        let hours = h.parse::<u32>().map_err(|_| err())?;
        let minutes = m.parse::<u32>().map_err(|_| err())?;
        if hours > 24 || minutes >= 60 || hours * 60 + minutes > MINUTES_PER_DAY {
            return Err(err());
        }
        Ok(Time::hm(hours, minutes))
    }
}

impl TryFrom<String> for Time {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Time> for String {
    fn from(value: Time) -> Self {
        value.to_string()
    }
}

impl Add<u32> for Time {
    type Output = Self;

    fn add(self, rhs: u32) -> Self::Output {
        Time(self.0.saturating_add(rhs))
    }
}

impl Sub<Time> for Time {
    type Output = u32;

    fn sub(self, rhs: Time) -> Self::Output {
        self.0.saturating_sub(rhs.0)
    }
}

/// Half-open interval `[start, end)` within the operating window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub label: String,
    pub start: Time,
    pub end: Time,
}

impl TimeSlot {
    pub fn new(start: Time, end: Time) -> TimeSlot {
        TimeSlot {
            label: format!("{}-{}", start, end),
            start,
            end,
        }
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// UTC bounds of this slot on `date`.
    pub fn on(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        (combine(date, self.start), combine(date, self.end))
    }
}

/// Cuts `[start, end)` into consecutive slots of `slot_minutes`. A trailing remainder
/// shorter than a full slot is only emitted when `include_partial` is set.
pub fn generate_slots(start: Time, end: Time, slot_minutes: u32, include_partial: bool) -> Vec<TimeSlot> {
    if slot_minutes == 0 || end <= start {
        return vec![];
    }
    let mut slots = vec![];
    let mut cursor = start;
    while cursor < end {
        let next = cursor.0.checked_add(slot_minutes).map(Time);
        let Some(next) = next.filter(|n| *n <= end) else {
            if include_partial {
                slots.push(TimeSlot::new(cursor, end));
            }
            break;
        };
        slots.push(TimeSlot::new(cursor, next));
        cursor = next;
    }
    slots
}

pub fn combine(date: NaiveDate, time: Time) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc() + TimeDelta::minutes(time.0 as i64)
}

/// Start and end of the 24h window of `date`.
pub fn day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    (combine(date, Time(0)), combine(date, Time(MINUTES_PER_DAY)))
}

/// Inclusive overlap: touching endpoints count.
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// Overlap of half-open intervals: touching endpoints do not count.
pub fn overlaps_half_open<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && b_start < a_end
}
