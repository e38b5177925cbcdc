use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use manjugloss::{AppState, load_dictionaries, router};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_SOURCES: &str = "english=words_28April2025.json,chinese=db_ph2.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config()?;
    info!("binding to {}:{}", config.host, config.port);
    for (label, path) in &config.sources {
        info!("dictionary {label} from {path}");
    }

    let start = Instant::now();
    let slots = load_dictionaries(config.sources).await;
    info!("dictionaries loaded in {} ms", start.elapsed().as_millis());

    let state = AppState {
        dictionaries: Arc::new(slots),
    };

    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug)]
struct Config {
    host: String,
    port: u16,
    sources: Vec<(String, String)>,
}

fn load_config() -> anyhow::Result<Config> {
    let mut cli_sources: Vec<(String, String)> = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dict" => {
                if let Some(pair) = args.next() {
                    cli_sources.push(parse_source(&pair)?);
                }
            }
            _ => {
                if let Some(pair) = arg.strip_prefix("--dict=") {
                    cli_sources.push(parse_source(pair)?);
                }
            }
        }
    }

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let sources = if !cli_sources.is_empty() {
        cli_sources
    } else {
        let raw = env::var("DICT_SOURCES").unwrap_or_else(|_| DEFAULT_SOURCES.to_string());
        raw.split(',')
            .filter(|pair| !pair.trim().is_empty())
            .map(|pair| parse_source(pair.trim()))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    Ok(Config {
        host,
        port,
        sources,
    })
}

fn parse_source(pair: &str) -> anyhow::Result<(String, String)> {
    let (label, path) = pair
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("dictionary source must be LABEL=PATH, got {pair:?}"))?;
    if label.is_empty() || path.is_empty() {
        anyhow::bail!("dictionary source must be LABEL=PATH, got {pair:?}");
    }
    Ok((label.to_string(), path.to_string()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
