use regex::Regex;
use std::sync::LazyLock;

/// Raw date designator; calendar validation happens in the caller.
pub(crate) struct DateMatch<'a> {
    pub series: Option<&'a str>,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub rest: &'a str,
}

/// "Show.Name.2010.03.15", "Show Name 2010-03-15".
static RE_SCENE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?P<series>.+?)[. _\-]+)?(?P<year>\d{4})[. _\-]+(?P<month>\d{2})[. _\-]+(?P<day>\d{2})(?:[. _\-]+(?P<rest>.*))?$",
    )
    .unwrap()
});

pub(crate) fn try_extract(text: &str) -> Option<DateMatch<'_>> {
    let caps = RE_SCENE_DATE.captures(text)?;
    Some(DateMatch {
        series: caps.name("series").map(|m| m.as_str()),
        year: caps["year"].parse().ok()?,
        month: caps["month"].parse().ok()?,
        day: caps["day"].parse().ok()?,
        rest: caps.name("rest").map_or("", |m| m.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_date() {
        let m = try_extract("Show Name 2011-01-04 Guest").unwrap();
        assert_eq!(m.series, Some("Show Name"));
        assert_eq!((m.year, m.month, m.day), (2011, 1, 4));
        assert_eq!(m.rest, "Guest");
    }

    #[test]
    fn test_bare_date() {
        let m = try_extract("2011.01.04").unwrap();
        assert_eq!(m.series, None);
        assert_eq!(m.rest, "");
    }

    #[test]
    fn test_year_alone_is_not_a_date() {
        assert!(try_extract("Show.Name.2011.HDTV").is_none());
    }
}
