pub mod baseline;
pub mod config;
pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod types;

pub use baseline::Baseline;
pub use config::{CheckConfig, Directives};
pub use matcher::{check_diffs, Report};
pub use parser::{extract_hunks, parse_expected};
pub use types::Hunk;
