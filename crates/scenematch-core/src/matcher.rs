use scenematch_parse::{NameParser, SceneNameParser};

use crate::config::AppConfig;
use crate::error::SceneError;
use crate::exceptions::SceneExceptions;
use crate::models::{Episode, Show};
use crate::scene::{self, ExtraSearchType, ReleaseFilter, SeasonCounter, Segment};

/// Everything needed to build searches for a show and vet what comes back.
///
/// Holds the release-name parser, the bad-release filter, the scene
/// exceptions table, and the provider quirk to format season searches for.
pub struct SceneMatcher<P = SceneNameParser> {
    parser: P,
    filter: ReleaseFilter,
    exceptions: SceneExceptions,
    extra_search_type: Option<ExtraSearchType>,
}

impl SceneMatcher {
    /// A matcher with the built-in parser and filters.
    pub fn new(exceptions: SceneExceptions) -> Self {
        Self::with_parser(SceneNameParser, exceptions)
    }

    /// Build a matcher from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, SceneError> {
        let exceptions = config.scene_exceptions()?;
        tracing::debug!(shows = exceptions.len(), "Loaded scene exceptions");
        Ok(Self {
            parser: SceneNameParser,
            filter: config.release_filter()?,
            exceptions,
            extra_search_type: config.extra_search_type()?,
        })
    }
}

impl<P: NameParser> SceneMatcher<P> {
    /// A matcher with a custom name parser.
    pub fn with_parser(parser: P, exceptions: SceneExceptions) -> Self {
        Self {
            parser,
            filter: ReleaseFilter::default(),
            exceptions,
            extra_search_type: None,
        }
    }

    pub fn with_filter(mut self, filter: ReleaseFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_extra_search_type(mut self, extra: Option<ExtraSearchType>) -> Self {
        self.extra_search_type = extra;
        self
    }

    pub fn exceptions(&self) -> &SceneExceptions {
        &self.exceptions
    }

    pub fn extra_search_type(&self) -> Option<ExtraSearchType> {
        self.extra_search_type
    }

    /// Whether a release name carries no disqualifying tag.
    pub fn filter_release(&self, name: &str) -> bool {
        self.filter.check(name, &self.parser)
    }

    /// Every name the show might be released under.
    pub fn show_names(&self, show: &Show) -> Vec<String> {
        scene::all_possible_show_names(show, &self.exceptions)
    }

    /// Sanitized search names for the show.
    pub fn show_search_strings(&self, show: &Show) -> Vec<String> {
        scene::make_scene_show_search_strings(show, &self.exceptions)
    }

    pub fn season_search_strings(
        &self,
        show: &Show,
        segment: &Segment,
        counter: &dyn SeasonCounter,
    ) -> Result<Vec<String>, SceneError> {
        scene::make_scene_season_search_string(
            show,
            segment,
            self.extra_search_type,
            counter,
            &self.exceptions,
        )
    }

    pub fn episode_search_strings(
        &self,
        episode: &Episode,
        counter: &dyn SeasonCounter,
    ) -> Result<Vec<String>, SceneError> {
        scene::make_scene_search_string(episode, counter, &self.exceptions)
    }

    /// Whether a result names the show and passes the release filter.
    ///
    /// Stricter than [`scene::is_good_result`], which only checks the name.
    pub fn accepts_result(&self, name: &str, show: &Show) -> bool {
        scene::is_good_result(name, show, &self.exceptions, true) && self.filter_release(name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use scenematch_parse::{InvalidName, ParseResult};

    use super::*;

    fn matcher() -> SceneMatcher {
        SceneMatcher::new(SceneExceptions::parse("1: Alt Show\n").unwrap())
    }

    #[test]
    fn test_show_names_use_exceptions() {
        let show = Show::new(1, "Show Name");
        assert_eq!(matcher().show_names(&show), vec!["Show Name", "Alt Show"]);
        assert_eq!(matcher().show_search_strings(&show), vec!["Show.Name", "Alt.Show"]);
    }

    #[test]
    fn test_season_uses_configured_search_type() {
        let show = Show::new(1, "Show Name");
        let counts: HashMap<i64, u32> = HashMap::from([(1, 2)]);

        let plain = matcher()
            .season_search_strings(&show, &Segment::Season(2), &counts)
            .unwrap();
        assert_eq!(plain, vec!["Show.Name.S02", "Alt.Show.S02"]);

        let grouped = matcher()
            .with_extra_search_type(Some(ExtraSearchType::NzbMatrix))
            .season_search_strings(&show, &Segment::Season(2), &counts)
            .unwrap();
        assert_eq!(grouped, vec!["+(\"Show.Name\",\"Alt.Show\")", "+(S02*,2x*)"]);
    }

    #[test]
    fn test_episode_search_strings() {
        let episode = Episode::new(Show::new(1, "Show Name"), 3, 4);
        let counts: HashMap<i64, u32> = HashMap::from([(1, 5)]);
        let strings = matcher().episode_search_strings(&episode, &counts).unwrap();
        assert_eq!(
            strings,
            vec!["Show.Name.S03E04", "Show.Name.3x04", "Alt.Show.S03E04", "Alt.Show.3x04"]
        );
    }

    #[test]
    fn test_accepts_result_needs_name_and_clean_release() {
        let show = Show::new(1, "Show Name");
        let m = matcher();
        assert!(m.accepts_result("Alt.Show.S01E01.720p.HDTV-GRP", &show));
        assert!(!m.accepts_result("Alt.Show.S01E01.SUBPACK-GRP", &show));
        assert!(!m.accepts_result("Other.Show.S01E01.720p-GRP", &show));

        // The bare name check still passes a bad release of the right show.
        assert!(scene::is_good_result(
            "Alt.Show.S01E01.SUBPACK-GRP",
            &show,
            m.exceptions(),
            false
        ));
    }

    #[test]
    fn test_custom_filter() {
        let filter = ReleaseFilter::new(["hdtv"]).unwrap();
        let m = matcher().with_filter(filter);
        assert!(!m.filter_release("Show.Name.S01E01.HDTV-GRP"));
        assert!(m.filter_release("Show.Name.S01E01.SUBPACK-GRP"));
    }

    #[test]
    fn test_custom_parser() {
        struct Rejecting;
        impl NameParser for Rejecting {
            fn parse(&self, name: &str) -> Result<ParseResult, InvalidName> {
                Err(InvalidName::Unrecognized(name.into()))
            }
        }

        let m = SceneMatcher::with_parser(Rejecting, SceneExceptions::new());
        assert!(!m.filter_release("Show.Name.S01E01.HDTV-GRP"));
    }

    #[test]
    fn test_from_default_config() {
        let m = SceneMatcher::from_config(&AppConfig::default()).unwrap();
        assert!(!m.exceptions().is_empty());
        assert_eq!(m.extra_search_type(), None);
    }
}
