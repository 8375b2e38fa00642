//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns supporting the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered figment configuration (defaults, TOML, environment) |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`bootstrap`] | Composition root wiring providers into the pipeline |
//! | [`constants`] | Configuration and logging constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
