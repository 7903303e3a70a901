//! Time-of-day offsets used by time-based conditions.
//!
//! On the wire a [`TimeSpan`] is a string of the form
//! `[-][d.]hh:mm:ss[.fffffff]`, e.g. `09:30:00` or `1.02:00:00`.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time span `{input}`: {reason}")]
pub struct ParseTimeSpanError {
    input: String,
    reason: &'static str,
}

/// A signed duration, typically an offset from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan(TimeDelta);

impl TimeSpan {
    pub fn zero() -> Self {
        Self(TimeDelta::zero())
    }

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self(TimeDelta::seconds(
            i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds),
        ))
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self(TimeDelta::seconds(seconds))
    }

    pub fn one_day() -> Self {
        Self(TimeDelta::seconds(SECONDS_PER_DAY))
    }

    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < TimeDelta::zero()
    }

    /// True when the span is a valid time of day: `00:00:00` up to, but
    /// excluding, `24:00:00`.
    pub fn is_time_of_day(&self) -> bool {
        !self.is_negative() && *self < Self::one_day()
    }
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<TimeDelta> for TimeSpan {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut delta = self.0;
        if delta < TimeDelta::zero() {
            f.write_str("-")?;
            delta = -delta;
        }
        let total = delta.num_seconds();
        let days = total / SECONDS_PER_DAY;
        let rem = total % SECONDS_PER_DAY;
        if days > 0 {
            write!(f, "{days}.")?;
        }
        write!(f, "{:02}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60)?;
        let nanos = delta.subsec_nanos();
        if nanos > 0 {
            // 100ns ticks, seven digits.
            write!(f, ".{:07}", nanos / 100)?;
        }
        Ok(())
    }
}

impl FromStr for TimeSpan {
    type Err = ParseTimeSpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| ParseTimeSpanError {
            input: s.to_string(),
            reason,
        };

        let text = s.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        // A dot before the first colon separates the day count.
        let (days, clock) = match body.split_once('.') {
            Some((day_part, rest)) if !day_part.contains(':') => {
                let days = parse_component(day_part).ok_or_else(|| fail("bad day count"))?;
                (days, rest)
            }
            _ => (0, body),
        };

        let (clock, fraction) = match clock.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (clock, None),
        };

        let mut parts = clock.split(':');
        let (Some(h), Some(m), Some(sec), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(fail("expected hh:mm:ss"));
        };
        let hours = parse_component(h).filter(|v| *v < 24).ok_or_else(|| fail("bad hours"))?;
        let minutes = parse_component(m).filter(|v| *v < 60).ok_or_else(|| fail("bad minutes"))?;
        let seconds = parse_component(sec).filter(|v| *v < 60).ok_or_else(|| fail("bad seconds"))?;

        let nanos = match fraction {
            None => 0,
            Some(digits)
                if !digits.is_empty()
                    && digits.len() <= 9
                    && digits.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let padded = format!("{digits:0<9}");
                padded.parse::<i64>().map_err(|_| fail("bad fraction"))?
            }
            Some(_) => return Err(fail("bad fraction")),
        };

        let total = days * SECONDS_PER_DAY + hours * 3600 + minutes * 60 + seconds;
        let delta = TimeDelta::seconds(total) + TimeDelta::nanoseconds(nanos);
        Ok(Self(if negative { -delta } else { delta }))
    }
}

fn parse_component(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl Serialize for TimeSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
