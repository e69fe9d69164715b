pub mod app;
pub mod config;
pub mod error;
pub mod setup;
pub mod shutdown;

pub use error::InfraError;
