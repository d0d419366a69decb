pub mod types;
pub mod classification;

pub use types::PlagiarismError;
pub use classification::ErrorClassification;
