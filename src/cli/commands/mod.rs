//! Command implementations

mod config;
mod init;
mod verify;

pub use config::config;
pub use init::init;
pub use verify::verify;
