//! Records extracted from Markdown documents.

use chrono::NaiveDate;
use std::fmt;

/// Rendered in place of a missing or invalid date.
pub const UNKNOWN_DATE: &str = "Sin fecha";

/// Rendered in place of an ADR number when the file name has none.
pub const UNNUMBERED: &str = "Sin número";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated calendar date, or `Unknown`.
///
/// `Unknown` orders before every known date, so undated records are the
/// oldest when sorting by recency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RecordDate {
    #[default]
    Unknown,
    Known(NaiveDate),
}

impl RecordDate {
    /// Parse a strict `YYYY-MM-DD` date. Anything else is `Unknown`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.len() != 10 {
            return Self::Unknown;
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self::Known)
            .unwrap_or(Self::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Known(date) => Some(*date),
            Self::Unknown => None,
        }
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        Self::Known(date)
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Unknown => f.write_str(UNKNOWN_DATE),
        }
    }
}

/// One extracted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    /// ADR status or session report summary.
    pub status_or_summary: String,
    pub date: RecordDate,
    /// File name relative to the scanned directory.
    pub source_file: String,
    /// Leading number of the file name.
    pub ordinal: Option<u32>,
}

impl Record {
    /// Create a record with the ordinal taken from the file name.
    pub fn new(
        source_file: impl Into<String>,
        title: impl Into<String>,
        status_or_summary: impl Into<String>,
        date: RecordDate,
    ) -> Self {
        let source_file = source_file.into();
        Self {
            ordinal: parse_ordinal(&source_file),
            title: title.into(),
            status_or_summary: status_or_summary.into(),
            date,
            source_file,
        }
    }

    /// `ADR-001` style label, or "Sin número".
    pub fn adr_label(&self) -> String {
        match self.ordinal {
            Some(n) => format!("ADR-{n:03}"),
            None => UNNUMBERED.to_string(),
        }
    }
}

/// Parse the run of ASCII digits at the start of a file name.
///
/// Returns `None` when there are no leading digits or the number does not
/// fit in a `u32`.
pub fn parse_ordinal(file_name: &str) -> Option<u32> {
    let end = file_name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(file_name.len());
    let digits = &file_name[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
