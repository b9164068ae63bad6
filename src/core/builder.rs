use crate::core::{
    cost::build_cost_matrix,
    evaluation::harmonic_mean_satisfaction,
    greedy::greedy_assign,
    optimizer::{local_optimize, total_cost},
};
use crate::error::TeamBuildError;
use crate::models::{Employee, OptimizerSettings, Team, TeamBuildReport, Wishlist};

/// Team building orchestrator
///
/// # Pipeline Stages
/// 1. Input shape validation
/// 2. Cost matrix from both sides' wishlists
/// 3. Greedy initial assignment
/// 4. Pairwise-swap local optimization
/// 5. Index assignment to named teams
#[derive(Debug, Clone, Default)]
pub struct TeamBuilder {
    settings: OptimizerSettings,
}

impl TeamBuilder {
    pub fn new(settings: OptimizerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &OptimizerSettings {
        &self.settings
    }

    /// Pair every team lead with exactly one junior
    ///
    /// # Arguments
    /// * `team_leads` - Team leads, output teams follow this order
    /// * `juniors` - Juniors, must be as many as team leads
    /// * `team_leads_wishlists` - Team lead preferences over juniors
    /// * `juniors_wishlists` - Junior preferences over team leads
    ///
    /// # Errors
    /// `TeamSizeMismatch` when the groups differ in size, `EmptyWishlist`
    /// when the reject policy is configured and an empty wishlist is found.
    pub fn build_teams(
        &self,
        team_leads: &[Employee],
        juniors: &[Employee],
        team_leads_wishlists: &[Wishlist],
        juniors_wishlists: &[Wishlist],
    ) -> Result<Vec<Team>, TeamBuildError> {
        self.build_with_report(team_leads, juniors, team_leads_wishlists, juniors_wishlists)
            .map(|report| report.teams)
    }

    /// Same as [`TeamBuilder::build_teams`], with the run's statistics
    pub fn build_with_report(
        &self,
        team_leads: &[Employee],
        juniors: &[Employee],
        team_leads_wishlists: &[Wishlist],
        juniors_wishlists: &[Wishlist],
    ) -> Result<TeamBuildReport, TeamBuildError> {
        if team_leads.len() != juniors.len() {
            tracing::warn!(
                "Rejecting team build: {} team leads vs {} juniors",
                team_leads.len(),
                juniors.len()
            );
            return Err(TeamBuildError::TeamSizeMismatch {
                team_leads: team_leads.len(),
                juniors: juniors.len(),
            });
        }

        let matrix = build_cost_matrix(
            team_leads,
            juniors,
            team_leads_wishlists,
            juniors_wishlists,
            self.settings.empty_wishlist_policy,
        )?;

        let initial = greedy_assign(&matrix);
        let greedy_cost = total_cost(&matrix, &initial);
        tracing::debug!("Greedy assignment for {} teams costs {}", matrix.size(), greedy_cost);

        let outcome = local_optimize(&matrix, initial, self.settings.max_sweeps);
        let optimized_cost = total_cost(&matrix, &outcome.assignment);
        tracing::debug!(
            "Local optimization: cost {} -> {} in {} sweeps ({} swaps, converged: {})",
            greedy_cost,
            optimized_cost,
            outcome.sweeps,
            outcome.swaps,
            outcome.converged
        );

        let teams: Vec<Team> = outcome
            .assignment
            .iter()
            .enumerate()
            .map(|(lead, &junior)| Team::new(team_leads[lead].clone(), juniors[junior].clone()))
            .collect();

        let harmonic_mean =
            harmonic_mean_satisfaction(&teams, team_leads_wishlists, juniors_wishlists);

        Ok(TeamBuildReport {
            teams,
            greedy_cost,
            total_cost: optimized_cost,
            sweeps: outcome.sweeps,
            swaps: outcome.swaps,
            converged: outcome.converged,
            harmonic_mean,
        })
    }
}

/// Build teams with default optimizer settings
pub fn build_teams(
    team_leads: &[Employee],
    juniors: &[Employee],
    team_leads_wishlists: &[Wishlist],
    juniors_wishlists: &[Wishlist],
) -> Result<Vec<Team>, TeamBuildError> {
    TeamBuilder::default().build_teams(team_leads, juniors, team_leads_wishlists, juniors_wishlists)
}
