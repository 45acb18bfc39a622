//! Comma-separated list example

use envbind::{Binder, EnvBind, MapEnv};

#[derive(Debug, Default, EnvBind)]
struct Cluster {
    #[env("NODES")]
    pub nodes: Vec<String>,

    #[env("PORTS")]
    pub ports: Vec<u16>,

    #[env("WEIGHTS")]
    pub weights: Vec<f64>,

    // Arrays have a fixed length and are never written
    #[env("PAIR")]
    pub pair: [u8; 2],
}

fn main() -> anyhow::Result<()> {
    // Bind from an in-memory snapshot instead of the process environment
    let env = MapEnv::new()
        .with("NODES", "node-1, node-2,, node-3")
        .with("PORTS", "8080,-1,9090")
        .with("WEIGHTS", ",0.5,1e2")
        .with("PAIR", "1,2");

    let mut cluster = Cluster::default();
    let report = Binder::with_source(&env).bind(&mut cluster)?;

    println!("Nodes: {:?}", cluster.nodes);
    println!("Ports: {:?}", cluster.ports);
    println!("Weights: {:?}", cluster.weights);
    println!("Pair: {:?}", cluster.pair);

    for issue in &report.issues {
        println!("  note: {issue}");
    }

    Ok(())
}
