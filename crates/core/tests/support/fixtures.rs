//! Fixture builders for directory and notification data

use chrono::{TimeZone, Utc};
use diwan_domain::{
    Department, Division, Employee, EmployeeStatus, Notification, NotificationKind,
    NotificationPriority, ReferenceData, Task, TaskPriority, TaskStatus,
};

pub fn employee(id: &str, department: &str, division: &str, points: i64) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {id}"),
        employee_number: format!("EMP-{id}"),
        email: format!("{id}@irrigation.example"),
        department: department.to_string(),
        division: division.to_string(),
        position: "Engineer".to_string(),
        points,
        status: EmployeeStatus::Active,
    }
}

pub fn department(id: &str, name: &str) -> Department {
    Department { id: id.to_string(), name: name.to_string() }
}

pub fn division(id: &str, name: &str, department_id: &str) -> Division {
    Division { id: id.to_string(), name: name.to_string(), department_id: department_id.to_string() }
}

pub fn task(id: &str, assigned_to: &[&str], status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        assigned_to: assigned_to.iter().map(|a| (*a).to_string()).collect(),
        status,
        priority: TaskPriority::Medium,
        points: 10,
        completed_at: None,
    }
}

/// Two departments, three divisions, four employees.
///
/// `dep-water` owns `div-canals` and `div-dams`; `dep-admin` owns `div-hr`.
/// `emp-4` sits in `dep-water` without a division.
pub fn organisation() -> ReferenceData {
    ReferenceData {
        employees: vec![
            employee("emp-1", "dep-water", "div-canals", 120),
            employee("emp-2", "dep-water", "div-dams", 80),
            employee("emp-3", "dep-admin", "div-hr", 40),
            employee("emp-4", "dep-water", "", 0),
        ],
        departments: vec![
            department("dep-water", "Water Resources"),
            department("dep-admin", "Administration"),
            department("dep-empty", "Archives"),
        ],
        divisions: vec![
            division("div-canals", "Canals", "dep-water"),
            division("div-dams", "Dams", "dep-water"),
            division("div-hr", "Human Resources", "dep-admin"),
        ],
    }
}

pub fn notification(id: &str, user_id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        kind: NotificationKind::Info,
        title: format!("Notice {id}"),
        message: "A task was assigned to you".to_string(),
        user_id: user_id.to_string(),
        read,
        priority: NotificationPriority::Medium,
        created_at: Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap(),
        related_entity: None,
        action_url: None,
    }
}
