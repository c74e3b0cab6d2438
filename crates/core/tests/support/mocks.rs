//! In-memory mocks for the core ports
//!
//! Every mock can be switched into a failing mode so tests can check that a
//! rejected call leaves caller state untouched.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use diwan_core::{CorrespondenceStore, DirectoryProvider, FolderStore, NotificationService};
use diwan_domain::{
    CorrespondenceDraft, Department, DiwanError, Division, Employee, Notification,
    ReferenceData, Result as DomainResult, StoredFile, Task,
};
use parking_lot::Mutex;

fn unavailable(what: &str) -> DiwanError {
    DiwanError::Unavailable(format!("{what} is offline"))
}

/// Directory mock serving fixed collections.
#[derive(Default, Clone)]
pub struct MockDirectory {
    references: Arc<ReferenceData>,
    tasks: Arc<Vec<Task>>,
    failing: Arc<AtomicBool>,
}

impl MockDirectory {
    pub fn new(references: ReferenceData) -> Self {
        Self { references: Arc::new(references), ..Self::default() }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = Arc::new(tasks);
        self
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(unavailable("directory"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DirectoryProvider for MockDirectory {
    async fn employees(&self) -> DomainResult<Vec<Employee>> {
        self.check()?;
        Ok(self.references.employees.clone())
    }

    async fn departments(&self) -> DomainResult<Vec<Department>> {
        self.check()?;
        Ok(self.references.departments.clone())
    }

    async fn divisions(&self) -> DomainResult<Vec<Division>> {
        self.check()?;
        Ok(self.references.divisions.clone())
    }

    async fn tasks(&self) -> DomainResult<Vec<Task>> {
        self.check()?;
        Ok(self.tasks.as_ref().clone())
    }
}

/// Correspondence store that records every saved draft.
#[derive(Default, Clone)]
pub struct MockCorrespondenceStore {
    saved: Arc<Mutex<Vec<CorrespondenceDraft>>>,
    attempts: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl MockCorrespondenceStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail(true);
        store
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn saved(&self) -> Vec<CorrespondenceDraft> {
        self.saved.lock().clone()
    }

    /// Number of `save` calls, successful or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CorrespondenceStore for MockCorrespondenceStore {
    async fn save(&self, draft: &CorrespondenceDraft) -> DomainResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(unavailable("correspondence store"));
        }
        self.saved.lock().push(draft.clone());
        Ok(())
    }
}

/// Notification service over a shared list.
#[derive(Default, Clone)]
pub struct MockNotificationService {
    notifications: Arc<Mutex<Vec<Notification>>>,
    failing: Arc<AtomicBool>,
}

impl MockNotificationService {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications: Arc::new(Mutex::new(notifications)), ..Self::default() }
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// Add a notification behind the feed's back
    pub fn push(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }

    fn check(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(unavailable("notification service"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NotificationService for MockNotificationService {
    async fn get_user_notifications(&self, user_id: &str) -> DomainResult<Vec<Notification>> {
        self.check()?;
        Ok(self.notifications.lock().iter().filter(|n| n.user_id == user_id).cloned().collect())
    }

    async fn mark_as_read(&self, id: &str) -> DomainResult<()> {
        self.check()?;
        if let Some(n) = self.notifications.lock().iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
        Ok(())
    }

    async fn mark_all_as_read(&self, user_id: &str) -> DomainResult<()> {
        self.check()?;
        for n in self.notifications.lock().iter_mut().filter(|n| n.user_id == user_id) {
            n.read = true;
        }
        Ok(())
    }

    async fn delete_notification(&self, id: &str) -> DomainResult<()> {
        self.check()?;
        self.notifications.lock().retain(|n| n.id != id);
        Ok(())
    }
}

/// Folder store kept in nested ordered maps.
#[derive(Default, Clone)]
pub struct MockFolderStore {
    folders: Arc<Mutex<BTreeMap<String, BTreeMap<String, StoredFile>>>>,
}

impl FolderStore for MockFolderStore {
    fn create_folder(&self, folder: &str) -> DomainResult<()> {
        self.folders.lock().entry(folder.to_string()).or_default();
        Ok(())
    }

    fn list_folders(&self) -> DomainResult<Vec<String>> {
        Ok(self.folders.lock().keys().cloned().collect())
    }

    fn write_file(&self, folder: &str, name: &str, file: &StoredFile) -> DomainResult<()> {
        let mut folders = self.folders.lock();
        let files = folders
            .get_mut(folder)
            .ok_or_else(|| DiwanError::NotFound(format!("folder {folder}")))?;
        files.insert(name.to_string(), file.clone());
        Ok(())
    }

    fn read_file(&self, folder: &str, name: &str) -> DomainResult<Option<StoredFile>> {
        Ok(self.folders.lock().get(folder).and_then(|files| files.get(name)).cloned())
    }

    fn list_files(&self, folder: &str) -> DomainResult<Vec<String>> {
        Ok(self
            .folders
            .lock()
            .get(folder)
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn delete_file(&self, folder: &str, name: &str) -> DomainResult<()> {
        if let Some(files) = self.folders.lock().get_mut(folder) {
            files.remove(name);
        }
        Ok(())
    }
}
