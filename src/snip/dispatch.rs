//! Format dispatch
//!
//! The only place that knows both extractors exist. Routes a
//! `(content, format)` pair to the matching scanner and folds the
//! unknown-format case into the shared [`SnipOutcome`] shape.

use std::fmt;
use std::str::FromStr;

use crate::snip::json::snip_json;
use crate::snip::outcome::SnipOutcome;
use crate::snip::tag::{snip_by_tag, TagOptions};

pub const CHOOSE_A_FORMAT: &str = "Please choose a format";

/// The supported format selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Balanced markup fragment (`"tag"`).
    Tag,
    /// JSON object or array (`"json"`).
    Json,
}

impl Format {
    pub const ALL: &'static [Format] = &[Format::Tag, Format::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Tag => "tag",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised only at the dispatch boundary; inside the engine every failure is
/// a [`SnipOutcome::Fail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format: {}", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag" => Ok(Format::Tag),
            "json" => Ok(Format::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Routes `content` to the extractor selected by `format`.
///
/// Any selector outside the supported set yields a fixed configuration
/// failure without looking at the content at all.
pub fn snip_smart(content: &str, format: &str) -> SnipOutcome {
    match format.parse::<Format>() {
        Ok(Format::Tag) => snip_by_tag(content, &TagOptions::default()),
        Ok(Format::Json) => snip_json(content),
        Err(_) => SnipOutcome::fail(CHOOSE_A_FORMAT),
    }
}
