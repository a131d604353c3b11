use std::sync::Arc;
use std::time::SystemTime;

use tinyhttpd::config::Config;
use tinyhttpd::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::from_args(std::env::args().skip(1))?;
    logging::init(&cfg);

    let started = format!("Server started at {}", httpdate::fmt_http_date(SystemTime::now()));
    let base_path = format!("base path: {}", cfg.base_path);
    let port = format!("port: {}", cfg.port);
    logging::log(&[started.as_str(), base_path.as_str(), port.as_str()]);

    tokio::select! {
        res = server::listener::run(Arc::new(cfg)) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
