//! Check command: resolve the snapshot and print a redacted summary.

use anyhow::Result;
use secrecy::ExposeSecret;

use svcutil_config::Config;
use svcutil_config::constants::NO_VALUE_FOUND;

pub fn run(config: &Config) -> Result<()> {
    let db = config.db_config();
    let api = config.api_config();

    println!("stack:           {}", config.stack());
    println!("db.host:         {}", db.host);
    println!("db.port:         {}", db.port);
    println!("db.service:      {}", db.service);
    println!("db.user:         {}", db.user);
    println!("db.password:     {}", presence(db.password.expose_secret()));
    println!("api.key:         {}", presence(api.api_key.expose_secret()));
    println!("api.title:       {}", api.title);
    println!("api.description: {}", api.description);
    println!(
        "api.url_prefix:  {}",
        api.url_prefix.as_deref().unwrap_or("(none)")
    );

    Ok(())
}

/// Secrets are never printed, only whether they resolved.
fn presence(value: &str) -> &'static str {
    if value.is_empty() || value == NO_VALUE_FOUND {
        "missing"
    } else {
        "configured"
    }
}
