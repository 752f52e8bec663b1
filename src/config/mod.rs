//! Settings loading.
//!
//! stayshelf reads an optional YAML settings file:
//!
//! ```yaml
//! data_dir: ~/hotel-lists
//! output: quiet
//! ```
//!
//! Command-line flags override whatever the file sets.

pub mod loader;
pub mod schema;

pub use loader::{default_data_dir, default_settings_path, load_settings, parse_settings};
pub use schema::{OutputSetting, Settings};
