use serde::{Deserialize, Serialize};

/// A tracked television show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Indexer identifier; also the key into the scene exceptions table.
    pub id: i64,
    pub name: String,
    /// Alternate name used by a regional listings source. Empty means unset.
    pub regional_name: Option<String>,
    /// Indexed by broadcast date rather than season/episode.
    pub air_by_date: bool,
}

impl Show {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            regional_name: None,
            air_by_date: false,
        }
    }

    pub fn with_regional_name(mut self, name: impl Into<String>) -> Self {
        self.regional_name = Some(name.into());
        self
    }

    pub fn with_air_by_date(mut self) -> Self {
        self.air_by_date = true;
        self
    }

    /// The regional name, if one is set and non-empty.
    pub fn regional_name(&self) -> Option<&str> {
        self.regional_name.as_deref().filter(|n| !n.is_empty())
    }
}
