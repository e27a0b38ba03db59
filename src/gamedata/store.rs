//! Generation-keyed publication of loaded datasets.
//!
//! The store is where load results become visible to the rest of the system.
//! Every resynchronization begins a new generation; publications carry the
//! generation of the load that produced them, and a publication whose
//! generation is not current is rejected. Staleness is decided by that
//! identity, never by which publication arrived last.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::model::{ExternalTexts, FurniData, FurniIndex};

#[derive(Default)]
struct StoreInner {
    generation: u64,
    domain: Option<String>,
    furni: Option<Arc<FurniData>>,
    texts: Option<Arc<ExternalTexts>>,
    index: Option<Arc<FurniIndex>>,
}

/// Shared store for loaded game-definition datasets.
///
/// Owned by the data-loading side, observed read-only by everyone else.
/// Once both required datasets of a generation are present, the
/// cross-dataset [`FurniIndex`] is initialized exactly once for that
/// generation.
#[derive(Default)]
pub struct GameDataStore {
    inner: Mutex<StoreInner>,
}

impl GameDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new load generation, discarding all datasets of the previous
    /// one.
    ///
    /// # Arguments
    ///
    /// * `generation` - Identity of the load that will publish into this
    ///   generation
    /// * `domain` - The domain the new datasets belong to
    pub async fn begin_generation(&self, generation: u64, domain: &str) {
        let mut inner = self.inner.lock().await;
        inner.generation = generation;
        inner.domain = Some(domain.to_string());
        inner.furni = None;
        inner.texts = None;
        inner.index = None;
    }

    /// Publish the furniture dataset for a generation.
    ///
    /// # Returns
    ///
    /// `true` if the publication was accepted, `false` if it belonged to a
    /// superseded generation and was discarded.
    pub async fn publish_furni(&self, generation: u64, furni: FurniData) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return false;
        }
        inner.furni = Some(Arc::new(furni));
        Self::on_dataset_loaded(&mut inner);
        true
    }

    /// Publish the localized text dataset for a generation.
    ///
    /// # Returns
    ///
    /// `true` if the publication was accepted, `false` if it belonged to a
    /// superseded generation and was discarded.
    pub async fn publish_texts(&self, generation: u64, texts: ExternalTexts) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return false;
        }
        inner.texts = Some(Arc::new(texts));
        Self::on_dataset_loaded(&mut inner);
        true
    }

    /// Load-completion handler, run after every accepted publication.
    ///
    /// No-op until both required datasets are present; then initializes the
    /// cross-dataset index exactly once for the current generation. Safe to
    /// run repeatedly.
    fn on_dataset_loaded(inner: &mut StoreInner) {
        if inner.index.is_some() {
            return;
        }

        let (Some(furni), Some(texts)) = (&inner.furni, &inner.texts) else {
            return;
        };

        inner.index = Some(Arc::new(FurniIndex::build(furni, texts)));
        tracing::info!(
            "game data initialized for domain '{}' ({} furni, {} texts)",
            inner.domain.as_deref().unwrap_or("?"),
            furni.len(),
            texts.len(),
        );
    }

    /// The furniture dataset of the current generation, if loaded
    pub async fn furni(&self) -> Option<Arc<FurniData>> {
        self.inner.lock().await.furni.clone()
    }

    /// The localized text dataset of the current generation, if loaded
    pub async fn texts(&self) -> Option<Arc<ExternalTexts>> {
        self.inner.lock().await.texts.clone()
    }

    /// The cross-dataset index, if both datasets are present
    pub async fn index(&self) -> Option<Arc<FurniIndex>> {
        self.inner.lock().await.index.clone()
    }

    /// The domain the current generation belongs to
    pub async fn domain(&self) -> Option<String> {
        self.inner.lock().await.domain.clone()
    }

    /// Whether the combined ready state has been reached
    pub async fn is_ready(&self) -> bool {
        self.inner.lock().await.index.is_some()
    }
}
