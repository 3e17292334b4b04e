mod matcher;
mod status;

pub use matcher::BodyMatcher;
pub use status::{StatusAnalyzer, StatusClass};
