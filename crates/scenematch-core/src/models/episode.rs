use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Show;

/// A single episode of a [`Show`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub show: Show,
    pub season: u32,
    pub episode: u32,
    /// `None` when the broadcast date is unknown.
    pub airdate: Option<NaiveDate>,
}

impl Episode {
    pub fn new(show: Show, season: u32, episode: u32) -> Self {
        Self {
            show,
            season,
            episode,
            airdate: None,
        }
    }

    pub fn with_airdate(mut self, airdate: NaiveDate) -> Self {
        self.airdate = Some(airdate);
        self
    }
}
