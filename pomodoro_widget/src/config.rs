use serde::Deserialize;
use std::path::PathBuf;

use crate::presenter::DEFAULT_PACKAGE_NAME;

/// Settings for the `widget_refresh` binary, read from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// JSON object file the application publishes its timer state to
    pub widget_data_path: PathBuf,
    #[serde(default = "default_package_name")]
    pub package_name: String,
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}
