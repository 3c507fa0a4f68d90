//! Common utilities and shared types for photogram.
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Telemetry**: Tracing subscriber setup via [`telemetry::init`]
//!
//! # Example
//!
//! ```no_run
//! use photogram_common::{AppResult, Config, telemetry};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     telemetry::init(&config.logging)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{Config, DatabaseConfig, LogFormat, LoggingConfig};
pub use error::{AppError, AppResult, ErrorKind};
