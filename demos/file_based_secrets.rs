//! File-based secrets example

use envbind::EnvBind;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Load from API_KEY or the file named by API_KEY_FILE
    #[env("API_KEY,file")]
    pub api_key: String,

    // Secrets do not have to be text
    #[env("DATABASE_PORT,file")]
    pub database_port: u16,

    // Regular environment variable
    #[env("DATABASE_HOST")]
    pub database_host: String,
}

fn main() -> anyhow::Result<()> {
    // Save secrets to files, the way Kubernetes or Docker mount them
    let mut api_key_file = NamedTempFile::new()?;
    writeln!(api_key_file, "super_secret_api_key_12345")?;

    let mut db_port_file = NamedTempFile::new()?;
    writeln!(db_port_file, "5432")?;

    // Set environment variables (with _FILE suffix)
    std::env::set_var("API_KEY_FILE", api_key_file.path());
    std::env::set_var("DATABASE_PORT_FILE", db_port_file.path());
    std::env::set_var("DATABASE_HOST", "localhost");

    let config = Config::from_env()?;

    println!("Configuration loaded from files:");
    println!("  API Key: {}", config.api_key);
    println!("  Database Port: {}", config.database_port);
    println!("  Database Host: {}", config.database_host);

    // A direct value always wins over the file
    std::env::set_var("API_KEY", "local_development_key");
    let config = Config::from_env()?;
    println!("  API Key (direct): {}", config.api_key);

    Ok(())
}
