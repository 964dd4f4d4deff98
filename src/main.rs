mod body;
mod err;
mod file;
mod mime;
mod opt;
mod resolve;
mod routes;
mod server;
mod shutdown;

use crate::routes::State;
use crate::server::Server;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let opt::Options {
        port,
        bind,
        root,
        index,
        verbose,
    } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let root = root.canonicalize().unwrap_or(root);
    if !root.exists() {
        return Err(format!("Root directory does not exist: {}", root.display()).into());
    }
    if !root.is_dir() {
        return Err(format!("Root path is not a directory: {}", root.display()).into());
    }

    let state = State {
        root: root.clone(),
        index,
    };
    let server = Server::bind(SocketAddr::from((bind, port)), state).await?;
    log::info!(
        "Serving {} on http://{}",
        root.display(),
        server.local_addr()?
    );

    server.serve(shutdown::wait()).await?;
    log::info!("Server stopped");

    Ok(())
}
