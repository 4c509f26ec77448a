pub mod app;
pub mod cli;
pub mod constants;
pub mod merge;
pub mod utils;

pub use app::{load_config, Config};
pub use merge::{MergeOutcome, MergeReport, Merger};
pub use utils::MergeError;
