use crate::config::AlertsConfig;
use crate::dirs;
use crate::error::Result;

/// Execute the `config` command: print the effective configuration.
pub fn execute(config: &AlertsConfig) -> Result<()> {
    println!("# {}", dirs::config_path().display());
    print!("{}", config.to_toml()?);
    Ok(())
}
