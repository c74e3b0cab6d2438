//! JSON seed snapshot for the in-memory adapters

use std::path::Path;

use diwan_domain::{Department, Division, Employee, Notification, ReferenceData, Result, Task};
use serde::{Deserialize, Serialize};

/// Everything the in-memory directory and notification store start with.
///
/// Every section is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub divisions: Vec<Division>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl SeedData {
    /// Read a seed snapshot from a JSON file
    ///
    /// # Errors
    /// `NotFound` for a missing file, `Storage` for unreadable or malformed
    /// content.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let seed: Self = serde_json::from_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            employees = seed.employees.len(),
            departments = seed.departments.len(),
            divisions = seed.divisions.len(),
            tasks = seed.tasks.len(),
            notifications = seed.notifications.len(),
            "seed data loaded"
        );
        Ok(seed)
    }

    pub fn reference_data(&self) -> ReferenceData {
        ReferenceData {
            employees: self.employees.clone(),
            departments: self.departments.clone(),
            divisions: self.divisions.clone(),
        }
    }
}
