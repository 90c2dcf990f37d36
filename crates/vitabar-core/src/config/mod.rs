//! Configuration management for vitabar.
//!
//! Configuration is loaded from a hierarchy of TOML files and merged,
//! with later sources overriding earlier ones:
//! 1. Hardcoded defaults
//! 2. User config: `~/.vitabar/config.toml`
//! 3. Project config: `./.vitabar/config.toml`
//! 4. CLI flags (applied by the binary, highest priority)

pub mod defaults;
pub mod loading;
pub mod types;

pub use loading::{load_hierarchy, merge_configs};
pub use types::{NotifyConfig, PollConfig, VitabarConfig};
