//! Port interfaces for directory reference data
//!
//! The directory service owns employees, departments, divisions and tasks.
//! Each call returns the full current collection; there is no paging and no
//! partial-list fallback.

use async_trait::async_trait;
use diwan_domain::{Department, Division, Employee, Result, Task};

/// Read-only access to the organisation directory
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// All employees
    async fn employees(&self) -> Result<Vec<Employee>>;

    /// All departments
    async fn departments(&self) -> Result<Vec<Department>>;

    /// All divisions, across every department
    async fn divisions(&self) -> Result<Vec<Division>>;

    /// All tasks
    async fn tasks(&self) -> Result<Vec<Task>>;
}
