//! Connection-triggered resource synchronization.
//!
//! The coordinator owns the lifecycle of in-flight resource loads. A new
//! session connection supersedes whatever load is still running: the old
//! load is cancelled before the new one starts, and any result the old load
//! manages to produce anyway is discarded by its load identity. At most one
//! load is live at any time.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

use crate::endpoints::{EndpointProvider, EndpointTable};
use crate::error::SyncError;
use crate::gamedata::{GameDataLoader, GameDataStore};
use crate::hotel::domain_from_game_host;

use super::events::SessionConnected;

/// One in-flight resource load.
///
/// Superseding a handle aborts its task; the load id doubles as the store
/// generation, so a completion that races past the abort is still rejected
/// by identity.
struct LoadHandle {
    id: u64,
    domain: String,
    task: JoinHandle<()>,
}

struct CoordinatorState {
    current: Option<LoadHandle>,
    next_load_id: u64,
}

/// Reacts to session connections: cancels stale loads, resolves the new
/// domain, rebuilds the endpoint table and starts the new resource load.
///
/// Observable states are Idle (no load in flight) and Loading (exactly one
/// load in flight). Connection handling runs under a single mutex, so the
/// cancel-then-start sequence is atomic with respect to other connection
/// events.
pub struct SyncCoordinator {
    endpoints: Arc<EndpointProvider>,
    loader: Arc<dyn GameDataLoader>,
    store: Arc<GameDataStore>,
    state: Arc<Mutex<CoordinatorState>>,
}

impl SyncCoordinator {
    /// Create a coordinator.
    ///
    /// # Arguments
    ///
    /// * `endpoints` - Provider owning the active endpoint table
    /// * `loader` - Collaborator that fetches game-definition datasets
    /// * `store` - Store the loaded datasets are published into
    pub fn new(
        endpoints: Arc<EndpointProvider>,
        loader: Arc<dyn GameDataLoader>,
        store: Arc<GameDataStore>,
    ) -> Self {
        Self {
            endpoints,
            loader,
            store,
            state: Arc::new(Mutex::new(CoordinatorState {
                current: None,
                next_load_id: 1,
            })),
        }
    }

    /// Handle a new game-session connection.
    ///
    /// Cancels the current load if one exists, resolves the web domain from
    /// the connected host, rebuilds the endpoint table for it and starts a
    /// new asynchronous resource load.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The resync was started
    /// * `Err(SyncError)` - The attempt was aborted; previously established
    ///   domain, table and datasets are untouched
    pub async fn on_session_connected(&self, event: SessionConnected) -> Result<(), SyncError> {
        let mut state = self.state.lock().await;

        // Cancel before resolving: a stale load must never outlive the
        // session that started it, even if the new host turns out to be
        // unsupported.
        if let Some(handle) = state.current.take() {
            tracing::debug!(
                "superseding load {} for domain '{}'",
                handle.id,
                handle.domain
            );
            handle.task.abort();
        }

        let domain = domain_from_game_host(&event.host)
            .ok_or_else(|| SyncError::UnsupportedHost(event.host.clone()))?;

        tracing::info!(
            "session connected to {}:{}, resolved domain '{}'",
            event.host,
            event.port,
            domain
        );

        let table = self.endpoints.rebuild(&domain).await?;

        let id = state.next_load_id;
        state.next_load_id += 1;

        self.store.begin_generation(id, &domain).await;

        let task = tokio::spawn(run_load(
            id,
            domain.clone(),
            table,
            Arc::clone(&self.loader),
            Arc::clone(&self.store),
            Arc::clone(&self.state),
        ));

        state.current = Some(LoadHandle { id, domain, task });

        Ok(())
    }

    /// Whether a resource load is currently in flight
    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.current.is_some()
    }
}

/// Run one resource load to completion.
///
/// Both datasets are fetched concurrently and published as each one
/// finishes; publication is keyed by the load id so a superseded load
/// cannot write into a newer generation. Dataset failures are reported and
/// contained to this attempt.
async fn run_load(
    id: u64,
    domain: String,
    table: Arc<EndpointTable>,
    loader: Arc<dyn GameDataLoader>,
    store: Arc<GameDataStore>,
    state: Arc<Mutex<CoordinatorState>>,
) {
    let furni = async {
        match loader.load_furni(&table).await {
            Ok(furni) => {
                if store.publish_furni(id, furni).await {
                    tracing::info!("furni data loaded for domain '{}'", domain);
                    true
                } else {
                    tracing::debug!("discarded stale furni data from load {}", id);
                    false
                }
            }
            Err(e) => {
                tracing::error!("furni data load failed for domain '{}': {}", domain, e);
                false
            }
        }
    };

    let texts = async {
        match loader.load_texts(&table).await {
            Ok(texts) => {
                if store.publish_texts(id, texts).await {
                    tracing::info!("external texts loaded for domain '{}'", domain);
                    true
                } else {
                    tracing::debug!("discarded stale external texts from load {}", id);
                    false
                }
            }
            Err(e) => {
                tracing::error!("external texts load failed for domain '{}': {}", domain, e);
                false
            }
        }
    };

    let (furni_loaded, texts_loaded) = tokio::join!(furni, texts);

    // Loading -> Idle, but only if this load is still the current one.
    let mut state = state.lock().await;
    if state.current.as_ref().is_some_and(|handle| handle.id == id) {
        state.current = None;

        if furni_loaded && texts_loaded {
            tracing::info!("resource load {} complete for domain '{}'", id, domain);
        } else {
            tracing::warn!(
                "resource load {} for domain '{}' finished with errors; previous data remains in use",
                id,
                domain
            );
        }
    }
}

/// Consume session-connection events in arrival order.
///
/// Errors abort only the attempt that raised them; the loop keeps running.
pub async fn run_event_loop(
    coordinator: Arc<SyncCoordinator>,
    mut events: mpsc::UnboundedReceiver<SessionConnected>,
) {
    while let Some(event) = events.recv().await {
        let host = event.host.clone();
        if let Err(e) = coordinator.on_session_connected(event).await {
            tracing::error!("resync aborted for host \"{}\": {}", host, e);
        }
    }
}
