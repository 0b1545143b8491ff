pub mod contract;
pub mod harness;
pub mod logging;
pub mod main_shared;
pub mod registry;
pub mod report;
pub mod runner;
pub mod suite;
pub mod types;
