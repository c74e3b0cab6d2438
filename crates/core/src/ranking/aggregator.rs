//! Top performers leaderboard
//!
//! A pure function of the employee, task, department and division
//! collections. Employees without positive points never enter the ranking,
//! but they still count towards the population-wide average.

use ahash::{AHashMap, AHashSet};
use diwan_domain::constants::{PLACEHOLDER_AVERAGE_TIME_DAYS, TOP_PERFORMERS_LIMIT};
use diwan_domain::{
    Department, Division, Employee, Leaderboard, RankedPerformer, RankingSummary, Task, Trend,
};

/// Build the top-five leaderboard and its summary statistics.
///
/// Ties on points keep their input order.
pub fn rank_top_performers(
    employees: &[Employee],
    tasks: &[Task],
    departments: &[Department],
    divisions: &[Division],
) -> Leaderboard {
    let completed = completed_task_counts(tasks);
    let department_names: AHashMap<&str, &str> =
        departments.iter().map(|d| (d.id.as_str(), d.name.as_str())).collect();
    let division_names: AHashMap<&str, &str> =
        divisions.iter().map(|d| (d.id.as_str(), d.name.as_str())).collect();

    let mut candidates: Vec<&Employee> = employees.iter().filter(|e| e.points > 0).collect();
    // `sort_by` is stable
    candidates.sort_by(|a, b| b.points.cmp(&a.points));

    let performers: Vec<RankedPerformer> = candidates
        .into_iter()
        .take(TOP_PERFORMERS_LIMIT)
        .enumerate()
        .map(|(index, employee)| RankedPerformer {
            id: employee.id.clone(),
            name: employee.name.clone(),
            department: display_name(&department_names, &employee.department),
            division: display_name(&division_names, &employee.division),
            points: employee.points,
            completed_tasks: completed.get(employee.id.as_str()).copied().unwrap_or(0),
            average_time: PLACEHOLDER_AVERAGE_TIME_DAYS,
            rank: index + 1,
            trend: Trend::Up,
        })
        .collect();

    let summary = summarize(employees, &performers);
    Leaderboard { performers, summary }
}

/// Completed tasks per assignee id. An id listed twice on one task counts once.
pub fn completed_task_counts(tasks: &[Task]) -> AHashMap<&str, usize> {
    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for task in tasks.iter().filter(|task| task.is_completed()) {
        let assignees: AHashSet<&str> = task.assigned_to.iter().map(String::as_str).collect();
        for id in assignees {
            *counts.entry(id).or_default() += 1;
        }
    }
    counts
}

fn display_name(names: &AHashMap<&str, &str>, id: &str) -> String {
    names.get(id).map_or_else(|| id.to_string(), |name| (*name).to_string())
}

/// Round half towards positive infinity, so `-2.5` becomes `-2`
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn summarize(employees: &[Employee], performers: &[RankedPerformer]) -> RankingSummary {
    let average_points = if employees.is_empty() {
        0
    } else {
        // summed wide, two large point values overflow i64
        let total: i128 = employees.iter().map(|e| i128::from(e.points)).sum();
        round_half_up(total as f64 / employees.len() as f64) as i64
    };

    if performers.is_empty() {
        return RankingSummary { average_points, ..RankingSummary::default() };
    }

    let count = performers.len() as f64;
    let completed: usize = performers.iter().map(|p| p.completed_tasks).sum();
    let time: f64 = performers.iter().map(|p| p.average_time).sum();

    RankingSummary {
        average_points,
        average_completed_tasks: round_half_up(completed as f64 / count) as i64,
        average_time: round_half_up(time / count * 10.0) / 10.0,
    }
}
