//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;

pub use manage_config::ConfigService;
