//! Nested sections example

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Nested records need no tag
    pub mysql: MySql,
    pub http: Http,
}

#[derive(Debug, Default, EnvBind)]
struct MySql {
    #[env("MYSQL_HOST")]
    pub host: String,

    #[env("MYSQL_USER")]
    pub username: String,

    #[env("MYSQL_PASSWORD,file")]
    pub password: String,

    #[env("MYSQL_DATABASE")]
    pub database: String,
}

#[derive(Debug, Default, EnvBind)]
struct Http {
    #[env("HTTP_PORT")]
    pub port: u16,

    #[env("HTTP_TIMEOUT_SECS")]
    pub timeout_secs: f64,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYSQL_HOST", "db.internal");
    std::env::set_var("MYSQL_USER", "app");
    std::env::set_var("MYSQL_PASSWORD", "hunter2");
    std::env::set_var("MYSQL_DATABASE", "orders");
    std::env::set_var("HTTP_PORT", "8080");
    std::env::set_var("HTTP_TIMEOUT_SECS", "2.5");

    let config = Config::from_env()?;

    println!("{config:#?}");

    Ok(())
}
