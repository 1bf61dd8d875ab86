use warren_core::{KeyspaceStats, RecordStore};
use warren_store::{SlugService, SummaryAssembler};

/// Shared handler state: the operation facade plus the summary view,
/// both over the same store.
#[derive(Clone)]
pub struct AppState<S> {
    service: SlugService<S>,
    assembler: SummaryAssembler<S>,
}

impl<S> AppState<S>
where
    S: RecordStore + KeyspaceStats + Clone,
{
    pub fn new(store: S) -> Self {
        Self {
            service: SlugService::new(store.clone()),
            assembler: SummaryAssembler::new(store),
        }
    }

    pub fn with_sample_limit(store: S, sample_limit: usize) -> Self {
        Self {
            service: SlugService::new(store.clone()),
            assembler: SummaryAssembler::with_sample_limit(store, sample_limit),
        }
    }

    pub fn service(&self) -> &SlugService<S> {
        &self.service
    }

    pub fn assembler(&self) -> &SummaryAssembler<S> {
        &self.assembler
    }
}
