mod date;
mod episode;
mod season;

use chrono::NaiveDate;

use crate::error::InvalidName;
use crate::result::ParseResult;

/// Anything that can turn a release name into a [`ParseResult`].
pub trait NameParser {
    fn parse(&self, name: &str) -> Result<ParseResult, InvalidName>;
}

/// The built-in regex-driven scene name parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneNameParser;

impl NameParser for SceneNameParser {
    fn parse(&self, name: &str) -> Result<ParseResult, InvalidName> {
        parse(name)
    }
}

/// Designator found by one of the strategy modules, borrowing the input.
pub(crate) struct RawMatch<'a> {
    pub series: Option<&'a str>,
    pub season: Option<u32>,
    pub episodes: Vec<u32>,
    pub air_date: Option<NaiveDate>,
    /// Text following the designator: extra info plus release group.
    pub rest: &'a str,
}

/// Characters that separate words in a scene name.
const SEPARATORS: &[char] = &['.', ' ', '_', '-'];

/// Extensions stripped before parsing. Compared case-insensitively.
const EXTENSIONS: &[&str] = &[
    "mkv", "avi", "mp4", "m4v", "ogm", "wmv", "mpg", "mpeg", "ts", "m2ts", "mov", "rmvb", "nzb",
    "torrent",
];

/// Parse a scene release name into its season/episode designation.
///
/// # Example
/// ```
/// let r = scenematch_parse::parse("Show.Name.S01E02.720p.HDTV.x264-GROUP.mkv").unwrap();
/// assert_eq!(r.series_name.as_deref(), Some("Show Name"));
/// assert_eq!(r.season, Some(1));
/// assert_eq!(r.episodes, vec![2]);
/// assert_eq!(r.extra_info.as_deref(), Some("720p.HDTV.x264"));
/// assert_eq!(r.release_group.as_deref(), Some("GROUP"));
/// ```
pub fn parse(name: &str) -> Result<ParseResult, InvalidName> {
    let (base, extension) = strip_extension(name);

    // Strategies run from most to least specific; the first hit wins.
    let raw = if let Some(m) = episode::try_standard(base) {
        m
    } else if let Some(m) = episode::try_fov(base) {
        m
    } else if let Some(m) = date::try_extract(base) {
        let air_date = NaiveDate::from_ymd_opt(m.year, m.month, m.day).ok_or_else(|| {
            InvalidName::InvalidDate {
                name: name.to_string(),
                year: m.year,
                month: m.month,
                day: m.day,
            }
        })?;
        RawMatch {
            series: m.series,
            season: None,
            episodes: Vec::new(),
            air_date: Some(air_date),
            rest: m.rest,
        }
    } else if let Some(m) = episode::try_verbose(base) {
        m
    } else if let Some(m) = season::try_extract(base) {
        m
    } else {
        return Err(InvalidName::Unrecognized(name.to_string()));
    };

    let (extra_info, release_group) = split_release_group(raw.rest);
    let result = ParseResult {
        original_name: name.to_string(),
        series_name: raw.series.map(clean_series_name).filter(|s| !s.is_empty()),
        season: raw.season,
        episodes: raw.episodes,
        air_date: raw.air_date,
        extra_info,
        release_group,
        file_extension: extension.map(|e| e.to_lowercase()),
    };

    tracing::trace!(
        name,
        series = ?result.series_name,
        season = ?result.season,
        episodes = ?result.episodes,
        extra_info = ?result.extra_info,
        "Parsed release name"
    );

    Ok(result)
}

/// Strip a known media extension, returning the base name and the extension.
fn strip_extension(input: &str) -> (&str, Option<&str>) {
    let Some((base, ext)) = input.rsplit_once('.') else {
        return (input, None);
    };
    if base.is_empty() {
        return (input, None);
    }
    if EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)) {
        (base, Some(ext))
    } else {
        (input, None)
    }
}

/// Split trailing text into extra info and a `-GROUP` suffix.
///
/// The group is whatever follows the last dash, provided the dash is not
/// itself preceded by a separator (`720p.-x` is not a group boundary).
fn split_release_group(rest: &str) -> (Option<String>, Option<String>) {
    let rest = rest.trim_end_matches(SEPARATORS);
    if rest.is_empty() {
        return (None, None);
    }

    if let Some(pos) = rest.rfind('-') {
        let (info, group) = (&rest[..pos], &rest[pos + 1..]);
        let boundary_ok = info
            .chars()
            .last()
            .is_some_and(|c| !SEPARATORS.contains(&c));
        if boundary_ok && !group.is_empty() {
            return (Some(info.to_string()), Some(group.to_string()));
        }
    }

    (Some(rest.to_string()), None)
}

/// Turn a dotted scene series name back into a readable one.
///
/// Dots between digits stay (`Show 2.0`), other dots and underscores become
/// spaces, and a dangling dash is dropped.
fn clean_series_name(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '.' => {
                let digit_before = i > 0 && chars[i - 1].is_ascii_digit();
                let digit_after = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
                if digit_before && digit_after {
                    out.push('.');
                } else {
                    out.push(' ');
                }
            }
            '_' => out.push(' '),
            c => out.push(c),
        }
    }

    let trimmed = out.trim().trim_end_matches('-');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}
