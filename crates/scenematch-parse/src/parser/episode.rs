use regex::Regex;
use std::sync::LazyLock;

use super::RawMatch;

// ── Regex patterns (compiled once) ──────────────────────────────

/// "Show.Name.S01E02", "Show.Name.S01E02E03", "Show Name - S01E02-E03".
///
/// Extra episodes are capped at three digits and must end on a word boundary
/// so a trailing "-720p" is never read as episode 720.
static RE_STANDARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?P<series>.+?)[. _\-]+)?s(?P<season>\d+)[. _\-]*e(?P<ep>\d+)(?P<more>(?:(?:[. _\-]*e|-)\d{1,3}\b)*)[. _\-]*(?P<rest>.*)$",
    )
    .unwrap()
});

/// "Show Name - 1x02", "Show.Name.1x02x03", "Show Name [1x02]".
static RE_FOV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?P<series>.+?)[\[. _\-]+)?(?P<season>\d{1,2})x(?P<ep>\d{1,3})(?P<more>(?:(?:[. _\-]*x|-)\d{1,3}\b)*)[\]. _\-]*(?P<rest>.*)$",
    )
    .unwrap()
});

/// "Show Name Season 1 Episode 2 Title".
static RE_VERBOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<series>.+?)[. _\-]+season[. _\-]+(?P<season>\d+)[. _\-]+episode[. _\-]+(?P<ep>\d+)[. _\-]*(?P<rest>.*)$",
    )
    .unwrap()
});

static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

pub(crate) fn try_standard(text: &str) -> Option<RawMatch<'_>> {
    capture(&RE_STANDARD, text)
}

pub(crate) fn try_fov(text: &str) -> Option<RawMatch<'_>> {
    capture(&RE_FOV, text)
}

pub(crate) fn try_verbose(text: &str) -> Option<RawMatch<'_>> {
    capture(&RE_VERBOSE, text)
}

/// Run one of the season/episode patterns and collect its groups.
fn capture<'a>(re: &Regex, text: &'a str) -> Option<RawMatch<'a>> {
    let caps = re.captures(text)?;
    let season: u32 = caps.name("season")?.as_str().parse().ok()?;
    let first: u32 = caps.name("ep")?.as_str().parse().ok()?;

    let mut episodes = vec![first];
    if let Some(more) = caps.name("more") {
        for m in RE_DIGITS.find_iter(more.as_str()) {
            episodes.push(m.as_str().parse().ok()?);
        }
    }

    Some(RawMatch {
        series: caps.name("series").map(|m| m.as_str()),
        season: Some(season),
        episodes,
        air_date: None,
        rest: caps.name("rest").map_or("", |m| m.as_str()),
    })
}
