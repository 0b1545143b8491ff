pub mod config;
mod deviation;
mod error;
mod outcome;
mod stats;
mod word_count;

pub use deviation::*;
pub use error::*;
pub use outcome::*;
pub use stats::*;
pub use word_count::*;
