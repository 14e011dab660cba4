use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    #[clap(long, env, default_value = "assets")]
    pub assets_dir: PathBuf,
    /// Store connection string. Optional so a misconfigured deployment
    /// still comes up and serves; data routes then fail per request.
    #[clap(long, env)]
    pub sqlite_connection_string: Option<String>,
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
}
