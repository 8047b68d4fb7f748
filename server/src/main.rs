use loan_server::error::AppError;
use loan_server::{telemetry, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(err) = start().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn start() -> Result<(), AppError> {
    let config = ServerConfig::load()?;
    telemetry::init(&config.log_level)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    loan_server::run(listener).await?;
    Ok(())
}
