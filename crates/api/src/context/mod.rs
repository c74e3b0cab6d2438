//! Application context - dependency injection container

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use diwan_core::{
    CorrespondenceStore, DirectoryProvider, FolderService, FolderStore, NotificationFeed,
    NotificationService, OutgoingForm, PerformanceService, SubmitOutcome,
};
use diwan_domain::{Config, CorrespondenceDraft, Result};
use diwan_infra::{
    InMemoryCorrespondenceStore, InMemoryDirectory, InMemoryNotificationStore, JsonFolderStore,
    SeedData,
};
use tracing::{info, warn};

use crate::utils::logging::error_label;

/// Type alias for directory port trait object
type DynDirectoryProvider = dyn DirectoryProvider + 'static;

/// Type alias for correspondence persistence port trait object
type DynCorrespondenceStore = dyn CorrespondenceStore + 'static;

/// Type alias for notification port trait object
type DynNotificationService = dyn NotificationService + 'static;

/// Subdirectory of `data_dir` that holds the folder store
const FILES_SUBDIR: &str = "files";

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub directory: Arc<DynDirectoryProvider>,
    pub correspondence: Arc<DynCorrespondenceStore>,
    pub notifications: Arc<DynNotificationService>,
    pub folders: Arc<FolderService>,
    pub performance: Arc<PerformanceService>,
}

impl AppContext {
    /// Build the adapters described by `config`.
    ///
    /// The directory and notification store start from `storage.seed_file`
    /// when one is configured, otherwise empty.
    ///
    /// # Errors
    /// A configured seed file that is missing or malformed.
    pub fn new(config: Config) -> Result<Self> {
        let seed = match config.storage.seed_file.as_deref() {
            Some(path) => SeedData::from_file(path)?,
            None => {
                info!("no seed file configured, starting with an empty directory");
                SeedData::default()
            }
        };
        let notifications = seed.notifications.clone();

        let directory: Arc<DynDirectoryProvider> = Arc::new(InMemoryDirectory::new(seed));
        let correspondence: Arc<DynCorrespondenceStore> =
            Arc::new(InMemoryCorrespondenceStore::new());
        let notifications: Arc<DynNotificationService> =
            Arc::new(InMemoryNotificationStore::new(notifications));

        let files_root = Path::new(&config.storage.data_dir).join(FILES_SUBDIR);
        let folder_store: Arc<dyn FolderStore> = Arc::new(JsonFolderStore::new(&files_root));
        let folders = Arc::new(FolderService::new(folder_store));
        let performance = Arc::new(PerformanceService::new(Arc::clone(&directory)));

        info!(data_dir = %config.storage.data_dir, files_root = %files_root.display(), "application context ready");

        Ok(Self { config, directory, correspondence, notifications, folders, performance })
    }

    /// Open an outgoing form on `existing` (or a fresh draft) with reference
    /// data already loaded
    pub async fn outgoing_form(&self, existing: Option<CorrespondenceDraft>) -> OutgoingForm {
        let mut form = OutgoingForm::new();
        form.initialize(existing);
        form.load_references(self.directory.as_ref()).await;
        form
    }

    /// Submit `form` to the configured correspondence store
    ///
    /// # Errors
    /// See [`OutgoingForm::submit`].
    pub async fn submit_outgoing(&self, form: &mut OutgoingForm) -> Result<SubmitOutcome> {
        form.submit(self.correspondence.as_ref()).await
    }

    /// Start a session for `user_id` with a freshly loaded notification feed.
    ///
    /// A feed that fails to load is still handed out, empty.
    pub async fn sign_in(&self, user_id: &str) -> UserSession {
        let mut feed = NotificationFeed::new(Arc::clone(&self.notifications), user_id);
        if let Err(err) = feed.load().await {
            warn!(user_id, error_type = error_label(&err), "signed in without notifications");
        }
        info!(user_id, unread = feed.unread_count(), "user signed in");
        UserSession { feed, signed_in_at: Utc::now() }
    }
}

/// State owned by one signed-in user; dropped on sign-out
#[derive(Debug)]
pub struct UserSession {
    feed: NotificationFeed,
    signed_in_at: DateTime<Utc>,
}

impl UserSession {
    pub fn user_id(&self) -> &str {
        self.feed.user_id()
    }

    pub const fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }

    pub const fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut NotificationFeed {
        &mut self.feed
    }

    /// End the session, discarding the cached feed
    pub fn sign_out(self) {
        info!(
            user_id = self.feed.user_id(),
            session_secs = (Utc::now() - self.signed_in_at).num_seconds(),
            "user signed out"
        );
    }
}
