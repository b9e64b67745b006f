//! Life events (birth, death) attached to person records
//!
//! Genealogical dates are frequently partial or uncertain, so an event date
//! is an exact calendar date when the record gives one (`1880-05-12`), a bare
//! year (`1880`), or free text kept verbatim (`about 1850`, `before 1776`).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("Event date cannot be empty")]
    Empty,

    #[error("Event year out of range: {0}")]
    YearOutOfRange(i32),
}

/// A recorded date: exact, year-only, or free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventDate {
    /// Full calendar date, stored as `YYYY-MM-DD` in the record file
    Exact(NaiveDate),
    /// Year only
    Year(i32),
    /// Anything else, kept as written
    Text(String),
}

impl EventDate {
    /// Returns the year when the date carries one
    pub fn year(&self) -> Option<i32> {
        match self {
            EventDate::Exact(date) => Some(date.year()),
            EventDate::Year(year) => Some(*year),
            EventDate::Text(_) => None,
        }
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventDate::Exact(date) => write!(f, "{}", date.format("%-d %B %Y")),
            EventDate::Year(year) => write!(f, "{}", year),
            EventDate::Text(text) => f.write_str(text),
        }
    }
}

impl FromStr for EventDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DateError::Empty);
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(EventDate::Exact(date));
        }

        if let Ok(year) = s.parse::<i32>() {
            if !(1..=9999).contains(&year) {
                return Err(DateError::YearOutOfRange(year));
            }
            return Ok(EventDate::Year(year));
        }

        Ok(EventDate::Text(s.to_string()))
    }
}

impl TryFrom<String> for EventDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventDate> for String {
    fn from(date: EventDate) -> Self {
        match date {
            // Stored back in the parseable form
            EventDate::Exact(d) => d.format("%Y-%m-%d").to_string(),
            EventDate::Year(y) => y.to_string(),
            EventDate::Text(t) => t,
        }
    }
}

/// A life event: an optional date and an optional place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<EventDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl Event {
    /// Event on an exact calendar date
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(EventDate::Exact(date)),
            place: None,
        }
    }

    /// Event in a given year
    pub fn in_year(year: i32) -> Self {
        Self {
            date: Some(EventDate::Year(year)),
            place: None,
        }
    }

    /// Attaches a place
    pub fn at(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Long-form rendering: date and place joined with a comma,
    /// e.g. `12 May 1880, Boston, Massachusetts`
    pub fn long(&self) -> String {
        match (&self.date, &self.place) {
            (Some(date), Some(place)) => format!("{}, {}", date, place),
            (Some(date), None) => date.to_string(),
            (None, Some(place)) => place.clone(),
            (None, None) => String::new(),
        }
    }
}
