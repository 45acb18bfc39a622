//! Strict mode example

use envbind::{BindError, Binder, EnvBind};

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env("WORKERS")]
    pub workers: u32,

    #[env("TLS_CERT,file")]
    pub tls_cert: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("WORKERS", "-4");
    std::env::remove_var("TLS_CERT");
    std::env::set_var("TLS_CERT_FILE", "/run/secrets/does-not-exist");

    // Lenient (default): problems are absorbed, fields fall back to zero
    let mut config = Config::default();
    let report = Binder::new().bind(&mut config)?;
    println!("Lenient: {config:?} ({} issue(s))", report.issues.len());

    // Strict: the same problems become an error
    match Binder::new().strict(true).bind(&mut config) {
        Ok(_) => println!("Strict: clean"),
        Err(BindError::Strict { issues }) => {
            println!("Strict: {} issue(s)", issues.len());
            println!("{}", serde_json::to_string_pretty(&issues)?);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
