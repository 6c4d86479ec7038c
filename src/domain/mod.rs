pub mod filter;
pub mod property;
pub mod recent;
pub mod stats;
