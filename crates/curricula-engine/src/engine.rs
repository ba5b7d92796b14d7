//! The resolution engine.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use curricula_core::ResolvedStandard;
use curricula_traits::{CatalogProvider, ResolutionConfig, StorageAdapter, TraitError};

use crate::admin::StandardsAdmin;
use crate::error::EngineError;
use crate::merge;
use crate::request::{Layer, Resolution, ResolutionRequest};

/// Resolves the standards that apply to a `(jurisdiction, subject, grade,
/// district?, school?)` key by merging five ordered layers.
///
/// The engine holds no mutable state. Every call recomputes from the catalog
/// and the store, so admin writes are visible on the next call and two
/// concurrent calls never share an accumulator.
pub struct ResolutionEngine {
    config: ResolutionConfig,
    catalog: Arc<dyn CatalogProvider>,
    storage: StorageAdapter,
}

impl ResolutionEngine {
    /// Create a new engine.
    pub fn new(
        config: ResolutionConfig,
        catalog: Arc<dyn CatalogProvider>,
        storage: StorageAdapter,
    ) -> Self {
        info!(
            "Resolution engine {} ready (default jurisdiction {}, store timeout {:?})",
            config.name, config.default_jurisdiction, config.store_timeout
        );
        Self {
            config,
            catalog,
            storage,
        }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Admin API over the same store.
    pub fn admin(&self) -> StandardsAdmin {
        StandardsAdmin::new(self.storage.clone())
    }

    /// Resolve and return only the standards.
    ///
    /// Never fails: store problems degrade to fewer layers.
    pub async fn resolve_standards(&self, request: &ResolutionRequest) -> Vec<ResolvedStandard> {
        self.resolve_detailed(request).await.standards
    }

    /// Resolve and project each entry to `"<standardId> — <description>"`.
    pub async fn standards_for_lesson(&self, request: &ResolutionRequest) -> Vec<String> {
        self.resolve_detailed(request).await.lesson_lines()
    }

    /// Resolve, racing against `cancel`.
    ///
    /// If `cancel` completes first, in-flight store reads are dropped and
    /// [`EngineError::Cancelled`] is returned; a partial merge is never
    /// returned.
    pub async fn resolve_until<C>(
        &self,
        request: &ResolutionRequest,
        cancel: C,
    ) -> Result<Resolution, EngineError>
    where
        C: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                info!(subject = %request.subject, grade = %request.grade, "resolution cancelled");
                Err(EngineError::Cancelled)
            }
            resolution = self.resolve_detailed(request) => Ok(resolution),
        }
    }

    /// Resolve and report degraded layers and dropped overrides.
    pub async fn resolve_detailed(&self, request: &ResolutionRequest) -> Resolution {
        let default_jurisdiction = &self.config.default_jurisdiction;

        // Layers 1-2: in-process catalog.
        let mut standards =
            self.catalog
                .base_standards(&request.subject, request.grade, default_jurisdiction);
        let state_baseline =
            self.catalog
                .base_standards(&request.subject, request.grade, &request.jurisdiction);
        merge::merge_baseline(&mut standards, state_baseline);

        // Layers 3-5: fan out the three independent reads, fan in, then apply
        // in fixed order regardless of completion order.
        let state_read = async {
            if request.jurisdiction == *default_jurisdiction {
                Ok(Vec::new())
            } else {
                self.fetch(
                    Layer::StateOverride,
                    self.storage
                        .state_overrides
                        .query(&request.jurisdiction, &request.subject),
                )
                .await
            }
        };
        let district_read = async {
            match &request.district_id {
                Some(district_id) => {
                    self.fetch(
                        Layer::District,
                        self.storage
                            .district_standards
                            .query(district_id, &request.subject, request.grade),
                    )
                    .await
                }
                None => Ok(Vec::new()),
            }
        };
        let school_read = async {
            match &request.school_id {
                Some(school_id) => {
                    self.fetch(Layer::School, self.storage.school_overrides.query(school_id))
                        .await
                }
                None => Ok(Vec::new()),
            }
        };

        let (state_overrides, district_standards, school_overrides) =
            tokio::join!(state_read, district_read, school_read);

        let mut degraded_layers = Vec::new();
        let state_overrides = recover(state_overrides, &mut degraded_layers);
        let district_standards = recover(district_standards, &mut degraded_layers);
        let school_overrides = recover(school_overrides, &mut degraded_layers);

        let mut dropped = 0;
        dropped += merge::apply_state_overrides(&mut standards, &state_overrides, &request.jurisdiction)
            .dropped;
        dropped += merge::append_district_standards(&mut standards, &district_standards).dropped;
        dropped += merge::apply_school_overrides(&mut standards, &school_overrides).dropped;

        debug!(
            jurisdiction = %request.jurisdiction,
            subject = %request.subject,
            grade = %request.grade,
            count = standards.len(),
            dropped,
            degraded = degraded_layers.len(),
            "resolved standards"
        );

        Resolution {
            standards,
            degraded_layers,
            dropped_overrides: dropped,
        }
    }

    /// One store read under the configured timeout.
    async fn fetch<T, F>(&self, layer: Layer, read: F) -> Result<Vec<T>, EngineError>
    where
        F: Future<Output = Result<Vec<T>, TraitError>>,
    {
        match tokio::time::timeout(self.config.store_timeout, read).await {
            Ok(Ok(records)) => Ok(records),
            Ok(Err(e)) => Err(EngineError::StoreUnavailable {
                layer,
                reason: e.to_string(),
            }),
            Err(_) => Err(EngineError::StoreUnavailable {
                layer,
                reason: TraitError::Timeout.to_string(),
            }),
        }
    }
}

/// Treat a failed layer as empty, recording it as degraded.
fn recover<T>(result: Result<Vec<T>, EngineError>, degraded: &mut Vec<Layer>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!("{}; layer treated as empty", e);
            if let EngineError::StoreUnavailable { layer, .. } = e {
                degraded.push(layer);
            }
            Vec::new()
        }
    }
}

impl std::fmt::Debug for ResolutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
