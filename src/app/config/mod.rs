//! Environment- and filesystem-backed configuration loading.
//!
//! Pure schema parsing and override rules live in `domain::config`.

mod load_config;

pub use load_config::{CONFIG_FILE, default_storage_dir, load_config, load_config_from};
