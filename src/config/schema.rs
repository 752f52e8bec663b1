//! Settings file schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of the settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the slot files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Default output verbosity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputSetting>,
}

/// Output verbosity as written in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSetting {
    Verbose,
    Normal,
    Quiet,
}
