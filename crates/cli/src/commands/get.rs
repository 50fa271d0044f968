//! Get command: print one resolved configuration value.

use anyhow::Result;

use svcutil_config::Config;

pub fn run(config: &Config, name: &str) -> Result<()> {
    // The sentinel prints verbatim; scripts key off it the same way the
    // services do.
    println!("{}", config.get_value(name));
    Ok(())
}
