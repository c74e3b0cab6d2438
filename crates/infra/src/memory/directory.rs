//! Directory adapter over an in-memory seed snapshot

use async_trait::async_trait;
use diwan_core::DirectoryProvider;
use diwan_domain::{Department, Division, Employee, Result, Task};
use parking_lot::RwLock;

use crate::seed::SeedData;

/// Serves employees, departments, divisions and tasks from memory
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    data: RwLock<SeedData>,
}

impl InMemoryDirectory {
    pub fn new(seed: SeedData) -> Self {
        Self { data: RwLock::new(seed) }
    }

    /// Swap in a new snapshot; later calls see the new collections
    pub fn replace(&self, seed: SeedData) {
        *self.data.write() = seed;
    }
}

#[async_trait]
impl DirectoryProvider for InMemoryDirectory {
    async fn employees(&self) -> Result<Vec<Employee>> {
        Ok(self.data.read().employees.clone())
    }

    async fn departments(&self) -> Result<Vec<Department>> {
        Ok(self.data.read().departments.clone())
    }

    async fn divisions(&self) -> Result<Vec<Division>> {
        Ok(self.data.read().divisions.clone())
    }

    async fn tasks(&self) -> Result<Vec<Task>> {
        Ok(self.data.read().tasks.clone())
    }
}
