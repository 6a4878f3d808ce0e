//! `sudoku-server`: HTTP API for validating and solving Sudoku puzzles.

mod error;
mod routes;

use clap::Parser;

/// Command line options for the server binary.
#[derive(Debug, Parser)]
#[command(name = "sudoku-server", about = "HTTP API for validating and solving Sudoku puzzles")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to listen on.
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");
    axum::serve(listener, routes::router()).await?;

    Ok(())
}
