//! Configuration file loading for tourmate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./tourmate.toml` or `./.tourmate.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/tourmate/config.toml`
//! 4. Fallback: `~/.config/tourmate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileAgentConfig, FileConfig, FileEngineConfig, FileLookupConfig};
pub use loader::ConfigLoader;
