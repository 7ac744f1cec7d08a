pub mod error;
pub mod parser;
pub mod result;

pub use error::InvalidName;
pub use parser::{parse, NameParser, SceneNameParser};
pub use result::ParseResult;
