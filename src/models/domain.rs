use serde::{Deserialize, Serialize};

/// Identifier of a team lead or junior, unique within its group
pub type EmployeeId = u32;

/// A hackathon participant (either a team lead or a junior)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default)]
    pub name: String,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Ranked preferences of one participant, most wanted first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    #[serde(rename = "employeeId")]
    pub employee_id: EmployeeId,
    #[serde(rename = "desiredEmployees", default)]
    pub desired_employees: Vec<EmployeeId>,
}

impl Wishlist {
    pub fn new(employee_id: EmployeeId, desired_employees: Vec<EmployeeId>) -> Self {
        Self {
            employee_id,
            desired_employees,
        }
    }

    /// 0-based rank of `target`, `None` if it is not on the list
    #[inline]
    pub fn rank_of(&self, target: EmployeeId) -> Option<usize> {
        self.desired_employees.iter().position(|&id| id == target)
    }

    pub fn is_empty(&self) -> bool {
        self.desired_employees.is_empty()
    }
}

/// A formed team: one team lead paired with one junior
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "teamLead")]
    pub team_lead: Employee,
    pub junior: Employee,
}

impl Team {
    pub fn new(team_lead: Employee, junior: Employee) -> Self {
        Self { team_lead, junior }
    }
}

/// What to do with a wishlist that is present but has no entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyWishlistPolicy {
    /// Handle it exactly like a missing wishlist (zero satisfaction)
    #[default]
    TreatAsMissing,
    /// Fail the build with `TeamBuildError::EmptyWishlist`
    Reject,
}

/// Optimizer tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizerSettings {
    pub max_sweeps: usize,
    pub empty_wishlist_policy: EmptyWishlistPolicy,
}

/// Sweep cap used when nothing else is configured
pub const DEFAULT_MAX_SWEEPS: usize = 1000;

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
            empty_wishlist_policy: EmptyWishlistPolicy::default(),
        }
    }
}

/// Teams together with the statistics of the run that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamBuildReport {
    pub teams: Vec<Team>,
    #[serde(rename = "greedyCost")]
    pub greedy_cost: u64,
    #[serde(rename = "totalCost")]
    pub total_cost: u64,
    pub sweeps: usize,
    pub swaps: usize,
    pub converged: bool,
    #[serde(rename = "harmonicMean")]
    pub harmonic_mean: f64,
}
