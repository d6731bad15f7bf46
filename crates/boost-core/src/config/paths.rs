//! Path utilities for AudioBoost configuration files

use std::path::PathBuf;

/// File name of the parameter file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Get the default config directory
///
/// Returns: `{platform config dir}/audioboost`, falling back to
/// `./audioboost` when the platform has no config directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("audioboost")
}

/// Get the default parameter file path
///
/// Returns: `{platform config dir}/audioboost/config.yaml`
pub fn default_config_path() -> PathBuf {
    default_config_dir().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_app_name() {
        assert!(default_config_dir().ends_with("audioboost"));
    }

    #[test]
    fn test_config_path_includes_filename() {
        let path = default_config_path();
        assert!(path.ends_with("audioboost/config.yaml"));
    }
}
