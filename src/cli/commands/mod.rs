//! Command implementations

pub mod bench;
pub mod completions;
pub mod gap;
pub mod init;
pub mod report;
pub mod roi;
pub mod score;
pub mod timeline;
pub mod vendor;
