use tokio::net::TcpListener;
use urlshort::err::DisplayError;
use urlshort::{Redirector, Rules};

mod opt;

#[tokio::main]
async fn main() -> Result<(), DisplayError> {
    let opt::Options {
        verbose,
        listen,
        rules,
        redirect,
        fallback,
    } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let redirects = Redirector::new(Rules::from_pairs(redirect)?, fallback);
    let yaml = match &rules {
        Some(path) => Some(tokio::fs::read(path).await?),
        None => None,
    };

    log::info!("Binding to: {}", listen);
    let listener = TcpListener::bind(listen).await?;

    match yaml {
        Some(yaml) => {
            let handler = Redirector::from_yaml(&yaml, redirects)?;
            log::info!("Loaded {} rules", handler.rules().len());
            urlshort::http::serve(listener, handler).await?;
        }
        None => urlshort::http::serve(listener, redirects).await?,
    }

    Ok(())
}
