pub mod caching;
pub mod case_folding;
pub mod emptiness;
pub mod ordering;
pub mod storage;
pub mod truncation;
