pub mod config;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod list;
pub mod locate;
pub mod log;
pub mod session;
