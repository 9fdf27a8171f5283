pub mod dashboard;
pub mod filter;
pub mod log;
pub mod placement;
pub mod session;
pub mod summary;
