use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use studiodesk_types::Ticket;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Unknown time range: {0} (expected 7d, 30d, 90d or 12m)")]
    UnknownRange(String),
}

/// Dashboard time-range selector
///
/// Validated and echoed back; the trend window is 30 days for every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "12m")]
    Year,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "12m",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            "90d" => Ok(TimeRange::Quarter),
            "12m" => Ok(TimeRange::Year),
            other => Err(AnalyticsError::UnknownRange(other.to_string())),
        }
    }
}

/// `all`, or one studio id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StudioFilter {
    #[default]
    All,
    Studio(String),
}

impl StudioFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("all") => StudioFilter::All,
            Some(id) => StudioFilter::Studio(id.to_string()),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            StudioFilter::All => true,
            StudioFilter::Studio(id) => ticket.studio_id.as_deref() == Some(id.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StudioFilter::All => "all",
            StudioFilter::Studio(id) => id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsQuery {
    pub range: TimeRange,
    pub studio: StudioFilter,
}

impl AnalyticsQuery {
    /// Build from raw query-string values; an unknown range is an error
    pub fn parse(range: Option<&str>, studio: Option<&str>) -> Result<Self, AnalyticsError> {
        let range = match range {
            Some(value) => value.parse()?,
            None => TimeRange::default(),
        };
        Ok(Self {
            range,
            studio: StudioFilter::parse(studio),
        })
    }
}
