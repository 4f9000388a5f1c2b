use std::path::PathBuf;

/// Returns the base directory for alert service data.
///
/// Uses `$A3S_ALERTS_HOME` if set, otherwise defaults to `~/.a3s/alerts`.
pub fn alerts_home() -> PathBuf {
    if let Ok(home) = std::env::var("A3S_ALERTS_HOME") {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".a3s")
        .join("alerts")
}

/// Returns the default path of the JSON alert file.
pub fn data_file() -> PathBuf {
    alerts_home().join("alerts.json")
}

/// Returns the path to the user configuration file.
pub fn config_path() -> PathBuf {
    alerts_home().join("config.toml")
}
