pub mod catalog;
pub mod mutants;
pub mod reference;
pub mod text;

pub use catalog::MutantId;
pub use reference::ReferenceStatistics;
