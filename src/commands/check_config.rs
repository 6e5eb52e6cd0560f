//! Check-config command - Reports the effective configuration.

use crate::config::Config;
use crate::errors::AppResult;

/// Execute the check-config command.
///
/// Loading already validated the configuration; this only reports it.
pub async fn execute(config: Config) -> AppResult<()> {
    println!("Configuration OK ({} environment)", config.environment);
    println!("{:#?}", config);
    Ok(())
}
