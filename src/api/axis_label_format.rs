use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const FULL_DATE_PATTERN: &str = "%b %d,%Y";
const SHORT_DATE_PATTERN: &str = "%b %d";
const MONTH_YEAR_PATTERN: &str = "%b %Y";

/// Date label shape used on the time axis and in tooltips.
///
/// Month names always come from chrono's fixed English table; calendar fields
/// are read in UTC and no time-of-day is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateLabelFormat {
    /// `Jan 01,2023`
    FullDate,
    /// `Jan 01`
    ShortDate,
    /// `Jan 2023`
    MonthYear,
}

impl DateLabelFormat {
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::FullDate => FULL_DATE_PATTERN,
            Self::ShortDate => SHORT_DATE_PATTERN,
            Self::MonthYear => MONTH_YEAR_PATTERN,
        }
    }

    #[must_use]
    pub fn format(self, time: Option<DateTime<Utc>>) -> String {
        time.map_or_else(String::new, |time| time.format(self.pattern()).to_string())
    }

    /// Returns the matching free formatter.
    #[must_use]
    pub fn formatter(self) -> fn(Option<DateTime<Utc>>) -> String {
        match self {
            Self::FullDate => format_full_date,
            Self::ShortDate => format_short_date,
            Self::MonthYear => format_month_year,
        }
    }
}

#[must_use]
pub fn format_full_date(time: Option<DateTime<Utc>>) -> String {
    DateLabelFormat::FullDate.format(time)
}

#[must_use]
pub fn format_short_date(time: Option<DateTime<Utc>>) -> String {
    DateLabelFormat::ShortDate.format(time)
}

#[must_use]
pub fn format_month_year(time: Option<DateTime<Utc>>) -> String {
    DateLabelFormat::MonthYear.format(time)
}
