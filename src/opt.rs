use clap::{ArgAction, Parser};
use std::net::SocketAddr;
use std::path::PathBuf;
use urlshort::fallback::Fallback;

/// Redirect request paths to URLs
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Socket address to listen on
    pub listen: SocketAddr,

    #[arg(
        help = "YAML file of redirect rules (--help for more)",
        long_help = r"YAML file of redirect rules:
    - a sequence of records with `path` and `url` fields
    - checked before any --redirect rules
    - later records with the same path win
Example:
    - path: /urlshort
      url: https://github.com/gophercises/urlshort"
    )]
    #[arg(long)]
    pub rules: Option<PathBuf>,

    #[arg(
        help = "Redirect a single path (--help for more)",
        long_help = r"Redirect a single path, as PATH=URL:
    - the path must match the request path exactly
    - may be given multiple times
Examples:
    - /docs=https://docs.rs/urlshort
    - /=https://example.com/"
    )]
    #[arg(short, long, value_parser = redirect_pair)]
    pub redirect: Vec<(String, String)>,

    #[arg(
        help = "Response for unmatched paths (--help for more)",
        long_help = r"Response for unmatched paths:
    - status://<code> (empty response with that status)
    - file://<path> (contents of that file)
Examples:
    - status://404
    - file://./static/index.html"
    )]
    #[arg(short, long, default_value = "status://404")]
    pub fallback: Fallback,
}

fn redirect_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((path, url)) if !path.is_empty() && !url.is_empty() => {
            Ok((path.to_owned(), url.to_owned()))
        }
        _ => Err(format!("expected PATH=URL, got {:?}", arg)),
    }
}
