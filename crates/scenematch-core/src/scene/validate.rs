use std::sync::LazyLock;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::exceptions::SceneExceptions;
use crate::models::Show;

use super::dedup_ordered;
use super::names::{all_possible_show_names, sanitize_scene_name};

/// An escaped `.` or `-` inside an escaped show name.
static RE_ESCAPED_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\[.\-]").unwrap());

/// Markers that may follow the show name in a genuine result.
const EPISODE_MARKERS: &str = r"(?:(?:S\d\d)|(?:\d\d?x)|(?:\d{4}\W\d\d\W\d\d)|(?:(?:part|pt)[\._ -]?(\d|[ivx]))|Season\W+\d+\W+|E\d+\W+)";

/// Build the anchored pattern for one show name.
fn show_pattern(name: &str) -> String {
    let escaped = regex::escape(name);
    let loosened = RE_ESCAPED_SEPARATOR.replace_all(&escaped, NoExpand(r"\W+"));
    format!(r"^{loosened}\W+{EPISODE_MARKERS}")
}

/// Whether a search result really names `show` followed by an episode marker.
///
/// Every sanitized and raw name variant of the show is tried; the first match
/// accepts. With `log` set, each attempt is logged at debug level and a
/// rejection at info level.
pub fn is_good_result(name: &str, show: &Show, exceptions: &SceneExceptions, log: bool) -> bool {
    let raw_names = all_possible_show_names(show, exceptions);
    let candidates = dedup_ordered(
        raw_names
            .iter()
            .map(|n| sanitize_scene_name(n))
            .chain(raw_names.iter().cloned()),
    );

    for candidate in &candidates {
        let pattern = show_pattern(candidate);
        if log {
            tracing::debug!(result = name, pattern = %pattern, "Checking result against show pattern");
        }

        let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!(show = %candidate, error = %e, "Could not build show pattern");
                continue;
            }
        };
        if re.is_match(name) {
            return true;
        }
    }

    if log {
        tracing::info!(
            result = name,
            show = %show.name,
            "Provider result does not look like a valid result for this show, ignoring it"
        );
    }
    false
}
