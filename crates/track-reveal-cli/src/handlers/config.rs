//! Config command handler

use track_reveal::config::RevealConfig;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::ConfigArgs;

/// Execute the config command
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let effective = if args.defaults {
        RevealConfig::default()
    } else {
        config.reveal_config()?
    };
    print!("{}", render_config(&effective)?);
    Ok(())
}

/// YAML text of a configuration
pub fn render_config(config: &RevealConfig) -> CliResult<String> {
    Ok(config.to_yaml()?)
}
