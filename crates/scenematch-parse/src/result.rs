use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured view of a scene release name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// The name exactly as it was handed to the parser.
    pub original_name: String,
    /// Show name with scene separators turned back into spaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    /// Episode numbers, more than one for multi-episode releases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<u32>,
    /// Broadcast date for date-indexed releases (`Show.2010.03.15`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_date: Option<NaiveDate>,
    /// Everything between the episode designator and the release group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    /// Group tag after the final dash (e.g., "LOL" in `...HDTV.XviD-LOL`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_group: Option<String>,
    /// Container extension that was stripped before parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
}
