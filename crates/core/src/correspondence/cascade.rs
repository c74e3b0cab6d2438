//! Department → division → employee cascade for the outgoing form
//!
//! Everything here is a pure function of the draft and the reference lists.
//! Stale selections are not cleared in place; they are reported in
//! [`Cascade::cleared`] and the caller applies them.

use diwan_domain::{CorrespondenceDraft, DraftField, Division, Employee, ReferenceData};

/// Derived select lists plus the dependent fields that must be emptied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cascade {
    pub available_divisions: Vec<Division>,
    pub available_employees: Vec<Employee>,
    pub cleared: Vec<DraftField>,
}

/// Divisions belonging to `department`; empty when no department is chosen
pub fn divisions_for_department(department: &str, divisions: &[Division]) -> Vec<Division> {
    if department.is_empty() {
        return Vec::new();
    }
    divisions.iter().filter(|division| division.department_id == department).cloned().collect()
}

/// Employees narrowed by department (if set) and then by division (if set)
pub fn assignable_employees(
    department: &str,
    division: &str,
    employees: &[Employee],
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| department.is_empty() || employee.department == department)
        .filter(|employee| division.is_empty() || employee.division == division)
        .cloned()
        .collect()
}

/// Recompute both select lists for `draft` and report stale selections.
///
/// A division outside the department's divisions clears the division and the
/// assignee. An assignee outside the narrowed employee list clears the
/// assignee. The employee list is computed against the division as it will be
/// after the clears are applied.
pub fn reconcile(draft: &CorrespondenceDraft, references: &ReferenceData) -> Cascade {
    let available_divisions = divisions_for_department(&draft.department, &references.divisions);
    let mut cleared = Vec::new();

    let division_is_stale = !draft.division.is_empty()
        && !available_divisions.iter().any(|division| division.id == draft.division);
    if division_is_stale {
        cleared.push(DraftField::Division);
        if !draft.assigned_to.is_empty() {
            cleared.push(DraftField::AssignedTo);
        }
    }

    let effective_division = if division_is_stale { "" } else { draft.division.as_str() };
    let available_employees =
        assignable_employees(&draft.department, effective_division, &references.employees);

    let assignee_is_stale = !draft.assigned_to.is_empty()
        && !cleared.contains(&DraftField::AssignedTo)
        && !available_employees.iter().any(|employee| employee.id == draft.assigned_to);
    if assignee_is_stale {
        cleared.push(DraftField::AssignedTo);
    }

    Cascade { available_divisions, available_employees, cleared }
}
