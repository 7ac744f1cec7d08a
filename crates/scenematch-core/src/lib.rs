pub mod config;
pub mod countries;
pub mod error;
pub mod exceptions;
pub mod matcher;
pub mod models;
pub mod scene;
#[cfg(feature = "storage")]
pub mod storage;
