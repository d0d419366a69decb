pub mod parser;
pub mod schema;
pub mod types;

pub use types::*;
pub use parser::{build_detector, parse_config};
