use clap::{ArgAction, Parser};
use std::net::IpAddr;
use std::path::PathBuf;

/// Serve files from a directory over HTTP
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Directory to serve files from
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// File served when the request path is /
    #[arg(short, long, default_value = "data-page.html")]
    pub index: String,

    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }
}
