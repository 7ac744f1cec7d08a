use std::collections::HashMap;
use std::path::Path;

use crate::error::SceneError;

/// Embedded alternate-name table shipped with the crate.
const EMBEDDED_DATA: &str = include_str!("../data/scene-exceptions.txt");

/// Alternate names ("scene exceptions") keyed by show id.
///
/// Read-only once built; names keep the order they were listed in.
#[derive(Debug, Clone, Default)]
pub struct SceneExceptions {
    by_show: HashMap<i64, Vec<String>>,
}

impl SceneExceptions {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded table.
    pub fn embedded() -> Result<Self, SceneError> {
        Self::parse(EMBEDDED_DATA)
    }

    /// Load a table from a file in the embedded format.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// Parse `<id>: <name> | <name>` lines.
    ///
    /// Names may instead be given as a comma-separated list of quoted
    /// strings (`<id>: 'Name', "Other, Name"`), which allows `|` and `,`
    /// inside a name.
    pub fn parse(data: &str) -> Result<Self, SceneError> {
        let mut table = Self::new();

        for (index, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, names) = line.split_once(':').ok_or_else(|| SceneError::Exceptions {
                line: index + 1,
                message: "expected '<show id>: <names>'".into(),
            })?;
            let id: i64 = id.trim().parse().map_err(|_| SceneError::Exceptions {
                line: index + 1,
                message: format!("invalid show id {:?}", id.trim()),
            })?;

            let names = names.trim();
            if names.starts_with(['\'', '"']) {
                let quoted = parse_quoted_list(names).map_err(|message| {
                    SceneError::Exceptions {
                        line: index + 1,
                        message,
                    }
                })?;
                for name in quoted.into_iter().filter(|n| !n.is_empty()) {
                    table.insert(id, name);
                }
            } else {
                for name in names.split('|').map(str::trim).filter(|n| !n.is_empty()) {
                    table.insert(id, name);
                }
            }
        }

        Ok(table)
    }

    /// Add one alternate name, ignoring exact duplicates.
    pub fn insert(&mut self, show_id: i64, name: impl Into<String>) {
        let name = name.into();
        let names = self.by_show.entry(show_id).or_default();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    /// Merge another table into this one; its names go after existing ones.
    pub fn extend(&mut self, other: SceneExceptions) {
        for (show_id, names) in other.by_show {
            for name in names {
                self.insert(show_id, name);
            }
        }
    }

    /// Alternate names for a show; empty when it has none.
    pub fn names_for(&self, show_id: i64) -> &[String] {
        self.by_show.get(&show_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of shows with at least one alternate name.
    pub fn len(&self) -> usize {
        self.by_show.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_show.is_empty()
    }
}

/// Split `'a', "b"` into its unquoted items.
fn parse_quoted_list(input: &str) -> Result<Vec<String>, String> {
    let mut items = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let quote = match chars.next() {
            Some(q @ ('\'' | '"')) => q,
            Some(c) => return Err(format!("expected a quoted name, found {c:?}")),
            None => return Err("expected a quoted name after ','".into()),
        };

        let mut item = String::new();
        loop {
            match chars.next() {
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
                None => return Err(format!("unterminated name {item:?}")),
            }
        }
        items.push(item.trim().to_string());

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            Some(',') => continue,
            Some(c) => return Err(format!("expected ',' between names, found {c:?}")),
            None => return Ok(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_parses() {
        let table = SceneExceptions::embedded().unwrap();
        assert!(!table.is_empty());
        assert_eq!(
            table.names_for(71489),
            &["Law & Order: Criminal Intent".to_string(), "Law & Order: CI".to_string()]
        );
        assert_eq!(table.names_for(71256), &["The Daily Show".to_string()]);
    }

    #[test]
    fn test_unknown_show_is_empty() {
        let table = SceneExceptions::embedded().unwrap();
        assert!(table.names_for(-1).is_empty());
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let table = SceneExceptions::parse("# comment\n\n1: One | Uno\n2: Two\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.names_for(1), &["One".to_string(), "Uno".to_string()]);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        let err = SceneExceptions::parse("1: Fine\nnot a rule\n").unwrap_err();
        assert!(matches!(err, SceneError::Exceptions { line: 2, .. }));

        let err = SceneExceptions::parse("abc: Name\n").unwrap_err();
        assert!(matches!(err, SceneError::Exceptions { line: 1, .. }));
    }

    #[test]
    fn test_parse_quoted_names() {
        let table =
            SceneExceptions::parse("1: 'Alt Name', 'Other Alt'\n2: \"Comma, Show\" , 'Pipe | Show'\n")
                .unwrap();
        assert_eq!(
            table.names_for(1),
            &["Alt Name".to_string(), "Other Alt".to_string()]
        );
        assert_eq!(
            table.names_for(2),
            &["Comma, Show".to_string(), "Pipe | Show".to_string()]
        );
    }

    #[test]
    fn test_parse_rejects_malformed_quoted_names() {
        for line in ["1: 'Unterminated\n", "1: 'One' 'Two'\n", "1: 'One', Two\n", "1: 'One',\n"] {
            let err = SceneExceptions::parse(line).unwrap_err();
            assert!(
                matches!(err, SceneError::Exceptions { line: 1, .. }),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_extend_deduplicates() {
        let mut table = SceneExceptions::parse("1: One\n").unwrap();
        table.extend(SceneExceptions::parse("1: One | Uno\n3: Three\n").unwrap());
        assert_eq!(table.names_for(1), &["One".to_string(), "Uno".to_string()]);
        assert_eq!(table.names_for(3), &["Three".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exceptions.txt");
        std::fs::write(&path, "42: Answer Show\n").unwrap();
        let table = SceneExceptions::load(&path).unwrap();
        assert_eq!(table.names_for(42), &["Answer Show".to_string()]);
    }
}
