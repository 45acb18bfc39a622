//! Basic usage example

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Loaded from DATABASE_URL
    #[env("DATABASE_URL")]
    pub database_url: String,

    // Numeric type, zero when unset or malformed
    #[env("MAX_CONNECTIONS")]
    pub max_connections: u32,

    // Boolean type: true, on, yes or 1
    #[env("DEBUG_MODE")]
    pub debug_mode: bool,

    // No tag: never read from the environment
    pub build_id: u64,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MAX_CONNECTIONS", " 42 ");
    std::env::set_var("DEBUG_MODE", "on");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Build ID: {}", config.build_id);

    Ok(())
}
