use regex::Regex;
use std::sync::LazyLock;

use super::RawMatch;

/// "Show.Name.S02.720p", "Show Name Season 2".
static RE_SEASON_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?P<series>.+?)[. _\-]+)?s(?:eason[. _\-])?(?P<season>\d+)(?:[. _\-]+(?P<rest>.*))?$",
    )
    .unwrap()
});

/// Whole-season releases carry a season but no episode numbers.
pub(crate) fn try_extract(text: &str) -> Option<RawMatch<'_>> {
    let caps = RE_SEASON_ONLY.captures(text)?;
    let season: u32 = caps["season"].parse().ok()?;
    Some(RawMatch {
        series: caps.name("series").map(|m| m.as_str()),
        season: Some(season),
        episodes: Vec::new(),
        air_date: None,
        rest: caps.name("rest").map_or("", |m| m.as_str()),
    })
}
