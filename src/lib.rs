pub mod core;
pub mod implementations;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::contract::{Factory, MAX_WORD_LENGTH, WordStatistics};
pub use core::harness::Harness;
pub use core::main_shared::run_main;
pub use core::registry::ImplementationRegistry;
pub use core::runner::SuiteRunner;
pub use core::suite::Suite;
