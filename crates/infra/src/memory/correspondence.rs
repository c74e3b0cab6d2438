//! Correspondence store kept in memory

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use diwan_core::CorrespondenceStore;
use diwan_domain::{CorrespondenceDraft, DiwanError, Result};
use parking_lot::RwLock;

/// Upserts drafts by id, or by number for records without an id
#[derive(Debug, Default)]
pub struct InMemoryCorrespondenceStore {
    records: RwLock<Vec<CorrespondenceDraft>>,
    failing: AtomicBool,
}

impl InMemoryCorrespondenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every `save` is rejected with `Unavailable`
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<CorrespondenceDraft> {
        self.records.read().clone()
    }

    pub fn find_by_number(&self, number: &str) -> Option<CorrespondenceDraft> {
        self.records.read().iter().find(|r| r.number == number).cloned()
    }
}

fn same_record(a: &CorrespondenceDraft, b: &CorrespondenceDraft) -> bool {
    match (&a.id, &b.id) {
        (Some(left), Some(right)) => left == right,
        (None, None) => a.number == b.number,
        _ => false,
    }
}

#[async_trait]
impl CorrespondenceStore for InMemoryCorrespondenceStore {
    async fn save(&self, draft: &CorrespondenceDraft) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DiwanError::Unavailable("correspondence store rejected the write".into()));
        }

        let mut records = self.records.write();
        match records.iter_mut().find(|r| same_record(r, draft)) {
            Some(existing) => *existing = draft.clone(),
            None => records.push(draft.clone()),
        }
        tracing::debug!(number = %draft.number, total = records.len(), "correspondence stored");
        Ok(())
    }
}
