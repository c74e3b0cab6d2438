//! Directory reference data: employees, departments, divisions and tasks
//!
//! These records are owned by the external directory service. Business logic
//! in `diwan-core` only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Employment status of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Disabled,
    OnLeave,
}

impl_domain_status_conversions!(EmployeeStatus {
    Active => "active",
    Disabled => "disabled",
    OnLeave => "on_leave",
});

/// Employee record as served by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub employee_number: String,
    #[serde(default)]
    pub email: String,
    /// Department id
    pub department: String,
    /// Division id, empty when the employee is attached to the department only
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub position: String,
    /// Accumulated performance points
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// Department reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// Division reference record; a division belongs to exactly one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: String,
    pub name: String,
    pub department_id: String,
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Overdue,
}

impl_domain_status_conversions!(TaskStatus {
    New => "new",
    InProgress => "in_progress",
    Completed => "completed",
    Overdue => "overdue",
});

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl_domain_status_conversions!(TaskPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

/// Task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Ids of the employees the task is assigned to
    #[serde(default)]
    pub assigned_to: Vec<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Whether `employee_id` appears in the assignment list
    pub fn is_assigned_to(&self, employee_id: &str) -> bool {
        self.assigned_to.iter().any(|id| id == employee_id)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// The full reference snapshot a form or dashboard works against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub divisions: Vec<Division>,
}
