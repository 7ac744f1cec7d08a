use std::sync::LazyLock;

use regex::Regex;

use crate::countries;
use crate::exceptions::SceneExceptions;
use crate::models::Show;

use super::dedup_ordered;

/// Characters dropped outright by [`sanitize_scene_name`].
const STRIPPED_CHARS: &[char] = &[',', ':', '(', ')', '\'', '!'];

static RE_DOTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.+").unwrap());

/// A standalone "and" between dots or spaces.
static RE_AND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)([. ])and([. ])").unwrap());

/// A 4-digit year at the end of a name, not glued to other digits.
static RE_TRAILING_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\D)(\d{4})$").unwrap());

/// A country abbreviation at the end of a name.
static RE_TRAILING_COUNTRY: LazyLock<Regex> = LazyLock::new(|| {
    let codes: Vec<String> = countries::abbreviations().map(regex::escape).collect();
    Regex::new(&format!(r"(?i)([. _-])({})$", codes.join("|"))).unwrap()
});

/// Turn a show name into the dotted form release groups use.
///
/// `"Law & Order: SVU"` becomes `"Law.and.Order.SVU"`. Applying it twice
/// gives the same result as applying it once.
pub fn sanitize_scene_name(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    let dotted = stripped
        .replace("- ", ".")
        .replace(' ', ".")
        .replace('&', "and")
        .replace('/', ".");
    let collapsed = RE_DOTS.replace_all(&dotted, ".");
    collapsed
        .strip_suffix('.')
        .unwrap_or(&collapsed)
        .to_string()
}

/// Name variants a release might use for a scene-style show name.
///
/// Covers "and" written as "&", and a trailing year or country code wrapped
/// in parentheses. Only and→& is generated, never &→and, and only the first
/// two standalone "and"s are rewritten.
pub fn scene_to_normal_show_names(name: &str) -> Vec<String> {
    if name.is_empty() {
        return Vec::new();
    }

    let mut bases = vec![name.to_string()];
    let with_ampersand = RE_AND.replacen(name, 2, "${1}&${2}").into_owned();
    if !bases.contains(&with_ampersand) {
        bases.push(with_ampersand);
    }

    let mut results = Vec::with_capacity(bases.len() * 3);
    for base in &bases {
        results.push(RE_TRAILING_YEAR.replace(base, "${1}(${2})").into_owned());
        results.push(RE_TRAILING_COUNTRY.replace(base, "${1}(${2})").into_owned());
    }
    results.extend(bases);

    dedup_ordered(results)
}

/// Every name a show might be released under.
///
/// Starts from the canonical name, the scene exceptions for the show, and its
/// regional name, then adds a country-swapped variant for any name ending in
/// a country name or code (`"Show AU"` → `"Show (Australia)"`). The result
/// may hold duplicates; callers that need unique names deduplicate it.
pub fn all_possible_show_names(show: &Show, exceptions: &SceneExceptions) -> Vec<String> {
    let mut names = vec![show.name.clone()];
    names.extend(exceptions.names_for(show.id).iter().cloned());
    if let Some(regional) = show.regional_name() {
        names.push(regional.to_string());
    }

    let mut swapped = Vec::new();
    for name in dedup_ordered(names.iter().cloned()) {
        for (token, other) in countries::bidirectional() {
            let bare = format!(" {token}");
            let wrapped = format!(" ({token})");
            if let Some(stem) = name.strip_suffix(&bare) {
                swapped.push(format!("{stem} ({other})"));
            } else if let Some(stem) = name.strip_suffix(&wrapped) {
                swapped.push(format!("{stem} ({other})"));
            }
        }
    }

    names.extend(swapped);
    names
}

/// Sanitized form of every name from [`all_possible_show_names`].
pub fn make_scene_show_search_strings(show: &Show, exceptions: &SceneExceptions) -> Vec<String> {
    all_possible_show_names(show, exceptions)
        .iter()
        .map(|name| sanitize_scene_name(name))
        .collect()
}
