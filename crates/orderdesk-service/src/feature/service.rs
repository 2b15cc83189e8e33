//! Feature flags that can be reloaded without restarting the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use orderdesk_core::config::{ConfigSource, FeatureConfig};
use orderdesk_core::result::AppResult;

/// Holds the current feature flags and reloads them from the
/// configuration sources on demand.
#[derive(Debug)]
pub struct FeatureFlagService {
    /// Flags currently served.
    flags: RwLock<FeatureConfig>,
    /// Where to re-read the `[features]` section from.
    source: ConfigSource,
}

impl FeatureFlagService {
    /// Creates a service serving `initial` until the first refresh.
    pub fn new(initial: FeatureConfig, source: ConfigSource) -> Self {
        Self {
            flags: RwLock::new(initial),
            source,
        }
    }

    /// Returns a snapshot of the current flags.
    pub async fn current(&self) -> FeatureConfig {
        self.flags.read().await.clone()
    }

    /// Re-reads the configuration files and environment.
    ///
    /// On failure the previous flags stay in place and the error is returned.
    pub async fn refresh(&self) -> AppResult<FeatureConfig> {
        let loaded = self.source.load_features().inspect_err(|e| {
            warn!(error = %e, "Feature flag reload failed, keeping previous flags");
        })?;

        let mut flags = self.flags.write().await;
        if *flags != loaded {
            info!(
                express_checkout = loaded.checkout.express,
                currency = %loaded.checkout.currency,
                "Feature flags changed"
            );
        }
        *flags = loaded.clone();

        Ok(loaded)
    }

    /// Spawns a task that refreshes the flags every `interval` until the
    /// shutdown channel flips to `true`.
    pub fn spawn_refresher(
        self: &Arc<Self>,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        let service = Arc::clone(self);

        tokio::spawn(async move {
            info!(interval_secs = interval.as_secs(), "Feature flag refresher started");

            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; flags were just loaded.
            ticker.tick().await;

            loop {
                tokio::select! {
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        // Failure already logged; keep serving the old flags.
                        let _ = service.refresh().await;
                    }
                }
            }

            info!("Feature flag refresher stopped");
        })
    }
}
