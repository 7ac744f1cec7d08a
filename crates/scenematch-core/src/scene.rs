//! Scene-name heuristics: release filtering, show-name variants, search
//! strings, and the result-validation gate.

mod filter;
mod names;
mod search;
mod validate;

use std::collections::HashSet;

pub use filter::{filter_bad_releases, ReleaseFilter, RESULT_FILTERS};
pub use names::{
    all_possible_show_names, make_scene_show_search_strings, sanitize_scene_name,
    scene_to_normal_show_names,
};
pub use search::{
    make_scene_search_string, make_scene_season_search_string, ExtraSearchType, SeasonCounter,
    Segment,
};
pub use validate::is_good_result;

/// Drop repeated strings, keeping the first occurrence of each.
pub(crate) fn dedup_ordered<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
