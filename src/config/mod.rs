pub mod error;
pub mod pleasantness_config;
