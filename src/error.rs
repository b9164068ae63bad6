use thiserror::Error;

use crate::models::EmployeeId;

/// Errors returned by the team building pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamBuildError {
    #[error("team size mismatch: {team_leads} team leads vs {juniors} juniors")]
    TeamSizeMismatch { team_leads: usize, juniors: usize },

    #[error("empty wishlist for employee {0}")]
    EmptyWishlist(EmployeeId),
}
