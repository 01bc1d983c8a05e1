use std::sync::Arc;

use honeytrap::config::HoneypotConfig;
use honeytrap::persona::PersonaEngine;
use honeytrap::pipeline::Orchestrator;
use honeytrap::report::{EscalationSink, HttpEscalationSink};
use honeytrap::server::{self, AppState};
use honeytrap::session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = HoneypotConfig::from_env()?;

    eprintln!("🍯 Honeytrap v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: http://0.0.0.0:{}/api/honeypot", config.port);
    eprintln!(
        "   Auth: {}",
        if config.api_key.is_some() {
            "x-api-key configured"
        } else {
            "NOT configured — all requests will be rejected"
        }
    );
    eprintln!(
        "   Reporting: {}\n",
        config.report_url.as_deref().unwrap_or("disabled")
    );

    let sink: Option<Arc<dyn EscalationSink>> = config
        .report_url
        .clone()
        .map(|url| Arc::new(HttpEscalationSink::new(url)) as Arc<dyn EscalationSink>);

    let orchestrator = Arc::new(Orchestrator::new(
        Arc::new(SessionStore::new()),
        PersonaEngine::new(),
        sink,
    ));

    let app = server::router(AppState {
        orchestrator,
        api_key: config.api_key.clone(),
    });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(port = config.port, "Honeypot server started");
    axum::serve(listener, app).await?;

    Ok(())
}
