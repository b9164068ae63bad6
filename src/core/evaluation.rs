use std::collections::HashMap;

use crate::core::cost::satisfaction;
use crate::models::{EmployeeId, Team, Wishlist};

fn first_by_owner(wishlists: &[Wishlist]) -> HashMap<EmployeeId, &Wishlist> {
    let mut index = HashMap::with_capacity(wishlists.len());
    for wishlist in wishlists {
        index.entry(wishlist.employee_id).or_insert(wishlist);
    }
    index
}

/// Harmonic mean of every participant's satisfaction with their partner
///
/// Uses the same per-participant satisfaction as the cost model. A single
/// participant at zero drags the mean to zero, as does an empty team list.
pub fn harmonic_mean_satisfaction(
    teams: &[Team],
    team_leads_wishlists: &[Wishlist],
    juniors_wishlists: &[Wishlist],
) -> f64 {
    if teams.is_empty() {
        return 0.0;
    }

    let lead_index = first_by_owner(team_leads_wishlists);
    let junior_index = first_by_owner(juniors_wishlists);

    let mut reciprocal_sum = 0.0;
    for team in teams {
        let lead = satisfaction(lead_index.get(&team.team_lead.id).copied(), team.junior.id);
        let junior = satisfaction(junior_index.get(&team.junior.id).copied(), team.team_lead.id);
        if lead == 0.0 || junior == 0.0 {
            return 0.0;
        }
        reciprocal_sum += 1.0 / lead + 1.0 / junior;
    }

    (teams.len() * 2) as f64 / reciprocal_sum
}
