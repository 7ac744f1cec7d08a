use wasm_bindgen::prelude::*;

/// Parse a release name to JSON, or `{}` when it is not recognized.
#[wasm_bindgen]
pub fn parse_release(input: &str) -> String {
    scenematch_parse::parse(input)
        .ok()
        .and_then(|result| serde_json::to_string(&result).ok())
        .unwrap_or_else(|| "{}".to_string())
}

#[wasm_bindgen]
pub fn sanitize(name: &str) -> String {
    scenematch_core::scene::sanitize_scene_name(name)
}

#[wasm_bindgen]
pub fn filter_release(name: &str) -> bool {
    scenematch_core::scene::filter_bad_releases(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_json() {
        let json: serde_json::Value =
            serde_json::from_str(&parse_release("Show.Name.S01E02.HDTV-LOL")).unwrap();
        assert_eq!(json["series_name"], "Show Name");
        assert_eq!(json["episodes"][0], 2);
        assert_eq!(parse_release("nothing to see"), "{}");
    }

    #[test]
    fn test_sanitize_and_filter() {
        assert_eq!(sanitize("Law & Order: SVU"), "Law.and.Order.SVU");
        assert!(filter_release("Show.Name.S01E02.720p-GRP"));
        assert!(!filter_release("Show.Name.S01E02.SUBPACK-GRP"));
    }
}
