use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::exceptions::SceneExceptions;
use crate::models::{Episode, Show};

use super::dedup_ordered;
use super::names::make_scene_show_search_strings;

/// Source of the number of distinct non-special seasons recorded for a show.
pub trait SeasonCounter {
    fn season_count(&self, show_id: i64) -> Result<u32, SceneError>;
}

/// Fixed counts keyed by show id; unknown shows have no seasons.
impl SeasonCounter for HashMap<i64, u32> {
    fn season_count(&self, show_id: i64) -> Result<u32, SceneError> {
        Ok(self.get(&show_id).copied().unwrap_or(0))
    }
}

/// Provider-specific query formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraSearchType {
    /// Accepts several OR-ed terms and wildcards in a single request.
    #[serde(rename = "nzbmatrix")]
    NzbMatrix,
}

impl FromStr for ExtraSearchType {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nzbmatrix" => Ok(Self::NzbMatrix),
            other => Err(SceneError::Config(format!("unknown extra search type {other:?}"))),
        }
    }
}

impl fmt::Display for ExtraSearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NzbMatrix => f.write_str("nzbmatrix"),
        }
    }
}

/// What a season search targets: a season number, or a date fragment for
/// air-by-date shows (`"2010-03"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Season(u32),
    AirDate(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Season(season) => write!(f, "{season}"),
            Self::AirDate(date) => f.write_str(date),
        }
    }
}

/// Search strings for a whole season (or date range) of a show.
///
/// Air-by-date shows search the segment literally and never consult
/// `counter`. Other shows search `S%02d`, plus `%ix` for
/// [`ExtraSearchType::NzbMatrix`]. A show with a single recorded season is
/// searched by name alone.
pub fn make_scene_season_search_string(
    show: &Show,
    segment: &Segment,
    extra: Option<ExtraSearchType>,
    counter: &dyn SeasonCounter,
    exceptions: &SceneExceptions,
) -> Result<Vec<String>, SceneError> {
    let (season_count, season_strings) = if show.air_by_date {
        (0, vec![segment.to_string()])
    } else {
        let count = counter.season_count(show.id)?;
        let strings = match segment {
            Segment::Season(season) => {
                let mut strings = vec![format!("S{season:02}")];
                if extra == Some(ExtraSearchType::NzbMatrix) {
                    strings.push(format!("{season}x"));
                }
                strings
            }
            Segment::AirDate(raw) => vec![raw.clone()],
        };
        (count, strings)
    };

    let show_names = dedup_ordered(make_scene_show_search_strings(show, exceptions));
    let mut results = Vec::new();
    let mut terms = Vec::new();

    for name in &show_names {
        match extra {
            None if season_count == 1 => results.push(name.clone()),
            None => {
                results.extend(season_strings.iter().map(|season| format!("{name}.{season}")));
            }
            Some(ExtraSearchType::NzbMatrix) => match season_count {
                1 => results.push(format!("\"{name}\"")),
                0 => results.push(format!("\"{name} {}\"", segment.to_string().replace('-', " "))),
                _ => {
                    terms = season_strings
                        .iter()
                        .map(|season| {
                            if show.air_by_date {
                                format!("\"{season}*\"")
                            } else {
                                format!("{season}*")
                            }
                        })
                        .collect();
                    results.push(format!("\"{name}\""));
                }
            },
        }
    }

    if extra == Some(ExtraSearchType::NzbMatrix) {
        let mut grouped = vec![format!("+({})", results.join(","))];
        if !terms.is_empty() {
            grouped.push(format!("+({})", terms.join(",")));
        }
        results = grouped;
    }

    tracing::debug!(show = %show.name, %segment, season_count, ?results, "Built season search strings");
    Ok(results)
}

/// Search strings for one episode.
///
/// Each show name is paired with `S%02dE%02d` and `%dx%02d`, or with the ISO
/// air date for air-by-date shows whose date is known. A single-season show
/// pairs every name with an empty episode string, giving `"<show>."`.
pub fn make_scene_search_string(
    episode: &Episode,
    counter: &dyn SeasonCounter,
    exceptions: &SceneExceptions,
) -> Result<Vec<String>, SceneError> {
    let show = &episode.show;
    let season_count = counter.season_count(show.id)?;

    let mut episode_strings = match episode.airdate {
        Some(airdate) if show.air_by_date => vec![airdate.format("%Y-%m-%d").to_string()],
        _ => vec![
            format!("S{:02}E{:02}", episode.season, episode.episode),
            format!("{}x{:02}", episode.season, episode.episode),
        ],
    };
    if season_count == 1 {
        episode_strings = vec![String::new()];
    }

    let show_names = dedup_ordered(make_scene_show_search_strings(show, exceptions));
    let results: Vec<String> = show_names
        .iter()
        .flat_map(|name| {
            episode_strings
                .iter()
                .map(move |ep| format!("{name}.{ep}"))
        })
        .collect();

    tracing::debug!(
        show = %show.name,
        season = episode.season,
        episode = episode.episode,
        ?results,
        "Built episode search strings"
    );
    Ok(results)
}
