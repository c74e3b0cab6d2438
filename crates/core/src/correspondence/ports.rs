//! Port interfaces for correspondence persistence

use async_trait::async_trait;
use diwan_domain::{CorrespondenceDraft, Result};

/// Persists validated outgoing drafts
///
/// Only drafts that passed validation reach this port. A failed save must
/// leave the caller's draft untouched so the user can retry.
#[async_trait]
pub trait CorrespondenceStore: Send + Sync {
    /// Insert or update the record behind `draft`
    async fn save(&self, draft: &CorrespondenceDraft) -> Result<()>;
}
