use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
    sync::Arc,
};

use clap::Parser;
use server::{db, routes, AppState, Cli};
use shared::{configure_tracing, load_dotenv};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Fallback database path when no connection string is configured
const DEFAULT_CONNECTION_STRING: &str = "exercise.sqlite";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing();

    let args = Cli::parse();
    debug!(?args);

    let connection_string = match args.sqlite_connection_string.clone() {
        Some(connection_string) => connection_string,
        None => {
            warn!("No sqlite connection string configured, using {DEFAULT_CONNECTION_STRING}");
            DEFAULT_CONNECTION_STRING.to_owned()
        }
    };

    // Run the migrations synchronously before creating the pool or launching
    // the server. A failure leaves the server up; routes that need the store
    // surface errors per request instead of the process dying.
    match db::run_migrations(&connection_string) {
        Ok(ran) => info!("Ran {ran} db migrations"),
        Err(e) => error!("Database unavailable at startup: {e}"),
    }

    let pool = db::build_pool(&connection_string)?;

    let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);

    let listener = TcpListener::bind(socket).await?;
    debug!("listening on {}", listener.local_addr()?);

    let state = AppState {
        pool,
        args: Arc::new(args),
    };

    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}
