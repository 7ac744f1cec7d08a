use std::sync::LazyLock;

use regex::Regex;
use scenematch_parse::{NameParser, SceneNameParser};

use crate::error::SceneError;

/// Release tags that disqualify a result, checked in order.
pub const RESULT_FILTERS: &[&str] = &[
    "sub(pack|s|bed)",
    "nlsub(bed|s)?",
    "swesub(bed)?",
    "(dir|sample|nfo)fix",
    "sample",
    "(dvd)?extras",
    "dubbed",
    "german",
    "french",
    "core2hd",
];

static DEFAULT_FILTER: LazyLock<ReleaseFilter> = LazyLock::new(ReleaseFilter::default);

/// Compiled bad-release patterns.
#[derive(Debug, Clone)]
pub struct ReleaseFilter {
    patterns: Vec<(String, Regex)>,
}

impl Default for ReleaseFilter {
    fn default() -> Self {
        Self::new(RESULT_FILTERS).expect("built-in release filters are valid regex")
    }
}

impl ReleaseFilter {
    /// Compile a list of pattern fragments.
    ///
    /// Each fragment must stand alone as a word: it is anchored between the
    /// string edges or non-word characters (underscore counts as non-word).
    pub fn new<I, S>(fragments: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = fragments
            .into_iter()
            .map(|fragment| -> Result<(String, Regex), SceneError> {
                let fragment = fragment.as_ref();
                let re = Regex::new(&format!(r"(?i)(?:^|[\W_])(?:{fragment})(?:$|[\W_])"))?;
                Ok((fragment.to_string(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// The built-in list followed by `extra` fragments.
    pub fn with_extra_patterns(extra: &[String]) -> Result<Self, SceneError> {
        Self::new(
            RESULT_FILTERS
                .iter()
                .copied()
                .chain(extra.iter().map(String::as_str)),
        )
    }

    /// Pattern fragments in the order they are checked.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(fragment, _)| fragment.as_str())
    }

    /// First fragment found in `extra_info`, if any.
    pub fn rejection(&self, extra_info: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(extra_info))
            .map(|(fragment, _)| fragment.as_str())
    }

    /// Whether a release name is acceptable.
    ///
    /// Unparseable names are rejected. Names with nothing after the episode
    /// designator are accepted without inspection.
    pub fn check(&self, name: &str, parser: &dyn NameParser) -> bool {
        let parsed = match parser.parse(name) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(name, error = %e, "Unable to parse the release name into a valid episode");
                return false;
            }
        };

        let Some(extra_info) = parsed.extra_info.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };

        if let Some(fragment) = self.rejection(extra_info) {
            tracing::debug!(name, pattern = fragment, "Invalid scene release, ignoring it");
            return false;
        }

        true
    }
}

/// Check a release name against the built-in filters with the default parser.
pub fn filter_bad_releases(name: &str) -> bool {
    DEFAULT_FILTER.check(name, &SceneNameParser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenematch_parse::{InvalidName, ParseResult};

    #[test]
    fn test_sample_rejected() {
        assert!(!filter_bad_releases("Show.Name.S01E02.sample.mkv"));
    }

    #[test]
    fn test_plain_quality_accepted() {
        assert!(filter_bad_releases("Show.Name.S01E02.720p.mkv"));
    }

    #[test]
    fn test_no_extra_info_accepted() {
        assert!(filter_bad_releases("Show.Name.S01E02"));
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(!filter_bad_releases("Some Random Movie"));
    }

    #[test]
    fn test_each_builtin_tag() {
        for tag in [
            "SUBPACK", "subs", "nlsub", "NLSubbed", "swesub", "dirfix", "nfofix", "samplefix",
            "extras", "DVDExtras", "DUBBED", "German", "french", "core2hd",
        ] {
            let name = format!("Show.Name.S01E02.{tag}.XviD-GRP");
            assert!(!filter_bad_releases(&name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_tags_must_be_whole_words() {
        // "subsequent" contains "subs" but not as a standalone tag.
        assert!(filter_bad_releases("Show.Name.S01E02.Subsequent.Events.HDTV-GRP"));
        assert!(filter_bad_releases("Show.Name.S01E02.Germany.HDTV-GRP"));
    }

    #[test]
    fn test_underscore_is_a_boundary() {
        assert!(!filter_bad_releases("Show_Name_S01E02_german_HDTV"));
    }

    #[test]
    fn test_rejection_reports_first_match() {
        let filter = ReleaseFilter::default();
        assert_eq!(filter.rejection("720p.german.dubbed"), Some("dubbed"));
        assert_eq!(filter.rejection("720p.HDTV"), None);
    }

    #[test]
    fn test_extra_patterns() {
        let filter = ReleaseFilter::with_extra_patterns(&["hc|hardcoded".to_string()]).unwrap();
        assert_eq!(filter.patterns().count(), RESULT_FILTERS.len() + 1);
        assert!(!filter.check("Show.Name.S01E02.HC.720p-GRP", &SceneNameParser));
        assert!(filter.check("Show.Name.S01E02.720p-GRP", &SceneNameParser));
    }

    #[test]
    fn test_invalid_extra_pattern() {
        let err = ReleaseFilter::with_extra_patterns(&["(unclosed".to_string()]).unwrap_err();
        assert!(matches!(err, SceneError::Pattern(_)));
    }

    struct AlwaysFails;

    impl NameParser for AlwaysFails {
        fn parse(&self, name: &str) -> Result<ParseResult, InvalidName> {
            Err(InvalidName::Unrecognized(name.to_string()))
        }
    }

    struct FixedExtra(&'static str);

    impl NameParser for FixedExtra {
        fn parse(&self, name: &str) -> Result<ParseResult, InvalidName> {
            Ok(ParseResult {
                original_name: name.to_string(),
                extra_info: Some(self.0.to_string()),
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_parser_capability() {
        let filter = ReleaseFilter::default();
        assert!(!filter.check("Show.Name.S01E02.720p", &AlwaysFails));
        assert!(!filter.check("anything", &FixedExtra("swesubbed")));
        assert!(filter.check("anything", &FixedExtra("PROPER.720p")));
    }
}
