use anyhow::{Context, Result};
use axum::Router;
use nexglab_config::AppConfig;
use nexglab_gateway::{create_router, PortalState};
use tracing::info;

pub mod telemetry {
    use anyhow::Result;
    use tracing::Level;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_max_level(Level::DEBUG)
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// Everything the HTTP server needs, built from a loaded configuration.
pub struct PortalServices {
    address: String,
    router: Router,
}

impl PortalServices {
    pub fn initialise(config: &AppConfig) -> Result<Self> {
        let state = PortalState::new(config.clone());
        let protected = state.authenticator().protected_paths().matchers().len();

        let router = create_router(state).context("failed to build portal router")?;

        info!(
            protected,
            fallback = %config.auth.fallback_path,
            default_locale = %config.locale.default,
            "route guard ready"
        );

        Ok(Self {
            address: format!("{}:{}", config.http.address, config.http.port),
            router,
        })
    }

    /// `address:port` the server should bind.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
