//! Leaderboard service over the directory port

use std::sync::Arc;

use diwan_domain::{Leaderboard, Result};
use tracing::{debug, error};

use super::aggregator::rank_top_performers;
use crate::directory::DirectoryProvider;

/// Fetches directory collections and ranks the top performers
pub struct PerformanceService {
    directory: Arc<dyn DirectoryProvider>,
}

impl PerformanceService {
    /// Rank over `directory`
    pub fn new(directory: Arc<dyn DirectoryProvider>) -> Self {
        Self { directory }
    }

    /// Fetch employees, tasks, departments and divisions, then rank.
    ///
    /// # Errors
    /// The first directory failure, after logging it.
    pub async fn leaderboard(&self) -> Result<Leaderboard> {
        let fetched = futures::try_join!(
            self.directory.employees(),
            self.directory.tasks(),
            self.directory.departments(),
            self.directory.divisions()
        );

        let (employees, tasks, departments, divisions) = match fetched {
            Ok(collections) => collections,
            Err(err) => {
                error!(error = %err, "failed to load data for top performers");
                return Err(err);
            }
        };

        let board = rank_top_performers(&employees, &tasks, &departments, &divisions);
        debug!(
            ranked = board.performers.len(),
            employees = employees.len(),
            average_points = board.summary.average_points,
            "computed top performers"
        );
        Ok(board)
    }
}
