//! Display language for the calendar title, headers and labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalendarError;

/// Language of the user-facing calendar text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Dutch,
    English,
}

const DUTCH_MONTHS: [&str; 12] = [
    "januari", "februari", "maart", "april", "mei", "juni",
    "juli", "augustus", "september", "oktober", "november", "december",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const DUTCH_WEEKDAYS: [&str; 7] = ["ma", "di", "wo", "do", "vr", "za", "zo"];
const ENGLISH_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

impl Locale {
    /// BCP 47 tag of the locale
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Dutch => "nl-NL",
            Locale::English => "en-US",
        }
    }

    /// Long month name for a 1-based month number
    pub fn month_name(&self, month: u32) -> &'static str {
        let names = match self {
            Locale::Dutch => &DUTCH_MONTHS,
            Locale::English => &ENGLISH_MONTHS,
        };
        let index = month.clamp(1, 12) as usize - 1;
        names[index]
    }

    /// Title shown above the grid, e.g. "oktober 2026"
    pub fn month_title(&self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_name(month), year)
    }

    /// Column headers, Monday first
    pub fn weekday_headers(&self) -> &'static [&'static str; 7] {
        match self {
            Locale::Dutch => &DUTCH_WEEKDAYS,
            Locale::English => &ENGLISH_WEEKDAYS,
        }
    }

    pub fn register_label(&self) -> &'static str {
        match self {
            Locale::Dutch => "registreren voor",
            Locale::English => "register for",
        }
    }

    /// Label for cells that already hold a registration. The legacy page
    /// reused the register wording ("registreren voor") for these cells.
    pub fn deregister_label(&self) -> &'static str {
        match self {
            Locale::Dutch => "afmelden voor",
            Locale::English => "deregister from",
        }
    }

    pub fn previous_month_label(&self) -> &'static str {
        match self {
            Locale::Dutch => "vorige maand",
            Locale::English => "previous month",
        }
    }

    pub fn next_month_label(&self) -> &'static str {
        match self {
            Locale::Dutch => "volgende maand",
            Locale::English => "next month",
        }
    }

    pub fn today_label(&self) -> &'static str {
        match self {
            Locale::Dutch => "vandaag",
            Locale::English => "today",
        }
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "nl" => Ok(Locale::Dutch),
            "en" => Ok(Locale::English),
            _ => Err(CalendarError::UnknownLocale(tag.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
