use thiserror::Error;

/// A release name that could not be turned into a season/episode designation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidName {
    #[error("unable to parse {0:?} into a valid episode")]
    Unrecognized(String),

    #[error("{name:?} carries an impossible air date {year}-{month:02}-{day:02}")]
    InvalidDate {
        name: String,
        year: i32,
        month: u32,
        day: u32,
    },
}
