//! # Linter configuration
//!
//! Loads `ui5lint.config.{yaml,yml,json,toml}` files:
//!
//! ```yaml
//! ignores:
//!   - "webapp/thirdparty/**"
//!   - "**/*.gen.js"
//! coverage: true
//! details: false
//! ```
//!
//! Use [`find_config`] to locate the file for a project directory and
//! [`load_config`] to read it. A missing file means [`LinterConfig::default`].

mod config;
mod error;
mod loader;

pub use config::{IgnoreMatcher, LinterConfig};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILES};
