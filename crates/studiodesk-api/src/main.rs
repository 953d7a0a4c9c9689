use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studiodesk_api::{app::build_router, config::Config, state::AppState};
use studiodesk_flow::{Gateway, GatewayConfig};
use studiodesk_llm::{ClientFactory, ProviderConfig};
use studiodesk_persist::TicketStoreBuilder;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;

    init_logging(&config);

    tracing::info!("Starting studiodesk API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Ticket store
    let mut store_builder = TicketStoreBuilder::new()
        .backend(config.store.backend)
        .database(&config.mongodb.database)
        .seed_reference_data(config.mongodb.seed_reference_data);
    if let Some(uri) = &config.mongodb_uri {
        store_builder = store_builder.mongodb_uri(uri);
    }
    let store = store_builder
        .build()
        .await
        .context("Failed to initialize ticket store")?;
    tracing::info!(backend = store.backend_name(), "Ticket store initialized");

    // LLM gateway
    let gateway_config = GatewayConfig::from(&config.llm);
    let gateway = match &config.openai_api_key {
        Some(api_key) => {
            let provider = match &config.llm.base_url {
                Some(base_url) => ProviderConfig::openai_compatible(api_key, base_url),
                None => ProviderConfig::openai(api_key),
            };
            let client = ClientFactory::create_chat_client(provider)?;
            tracing::info!(model = %gateway_config.model, "LLM client initialized");
            Gateway::new(client, gateway_config)
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set; analysis and chat replies will be degraded");
            Gateway::unconfigured(gateway_config)
        }
    };

    let state = Arc::new(AppState::new(config.clone(), store, gateway));

    if config.server.session_idle_timeout_secs > 0 {
        let max_idle = Duration::from_secs(config.server.session_idle_timeout_secs);
        state
            .sessions
            .spawn_idle_sweep(max_idle, SESSION_SWEEP_INTERVAL);
        tracing::info!(idle_timeout_secs = max_idle.as_secs(), "Idle session sweep started");
    }

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("API docs: http://{}/api/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
