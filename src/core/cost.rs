use std::collections::HashMap;

use crate::error::TeamBuildError;
use crate::models::{Employee, EmployeeId, EmptyWishlistPolicy, Wishlist};

/// Cost of a pair where neither side expressed any preference
pub const MAX_PAIR_COST: u32 = 1000;

/// Square table of pairing costs, rows are team leads and columns are juniors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl CostMatrix {
    /// Build a matrix from explicit rows, every row must have `rows.len()` cells
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        let size = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == size));
        Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, lead: usize, junior: usize) -> u32 {
        self.cells[lead * self.size + junior]
    }

    #[inline]
    pub fn row(&self, lead: usize) -> &[u32] {
        &self.cells[lead * self.size..(lead + 1) * self.size]
    }

    /// Cheapest cost available to a team lead
    pub fn row_min(&self, lead: usize) -> u32 {
        self.row(lead).iter().copied().min().unwrap_or(MAX_PAIR_COST)
    }
}

/// How satisfied an owner is with `target`, in `[0, 1]`
///
/// A target at rank `r` of a list with `L` entries scores `(L - r) / L`.
/// No list, an empty list or a target missing from the list all score 0.
#[inline]
pub fn satisfaction(wishlist: Option<&Wishlist>, target: EmployeeId) -> f64 {
    let Some(wishlist) = wishlist else {
        return 0.0;
    };
    let len = wishlist.desired_employees.len();
    match wishlist.rank_of(target) {
        Some(rank) if len > 0 => (len - rank) as f64 / len as f64,
        _ => 0.0,
    }
}

/// Pairing cost from the two satisfactions, 1000 for no interest down to 333
#[inline]
pub fn pair_cost(lead_satisfaction: f64, junior_satisfaction: f64) -> u32 {
    ((1.0 / (lead_satisfaction + junior_satisfaction + 1.0)) * MAX_PAIR_COST as f64) as u32
}

/// Index wishlists by owner, restricted to members of `group`
///
/// The first wishlist seen for an owner wins.
fn index_wishlists<'a>(
    group: &[Employee],
    wishlists: &'a [Wishlist],
    policy: EmptyWishlistPolicy,
) -> Result<HashMap<EmployeeId, &'a Wishlist>, TeamBuildError> {
    let mut index: HashMap<EmployeeId, &'a Wishlist> = HashMap::with_capacity(group.len());
    for wishlist in wishlists {
        index.entry(wishlist.employee_id).or_insert(wishlist);
    }
    index.retain(|id, _| group.iter().any(|employee| employee.id == *id));

    if policy == EmptyWishlistPolicy::Reject {
        // Report in group order so the error is deterministic
        if let Some(employee) = group
            .iter()
            .find(|employee| index.get(&employee.id).is_some_and(|w| w.is_empty()))
        {
            return Err(TeamBuildError::EmptyWishlist(employee.id));
        }
    }

    Ok(index)
}

/// Build the cost matrix for every (team lead, junior) pair
pub fn build_cost_matrix(
    team_leads: &[Employee],
    juniors: &[Employee],
    team_leads_wishlists: &[Wishlist],
    juniors_wishlists: &[Wishlist],
    policy: EmptyWishlistPolicy,
) -> Result<CostMatrix, TeamBuildError> {
    let lead_index = index_wishlists(team_leads, team_leads_wishlists, policy)?;
    let junior_index = index_wishlists(juniors, juniors_wishlists, policy)?;

    let size = team_leads.len();
    let mut cells = Vec::with_capacity(size * juniors.len());
    for lead in team_leads {
        let lead_wishlist = lead_index.get(&lead.id).copied();
        for junior in juniors {
            let junior_wishlist = junior_index.get(&junior.id).copied();
            cells.push(pair_cost(
                satisfaction(lead_wishlist, junior.id),
                satisfaction(junior_wishlist, lead.id),
            ));
        }
    }

    Ok(CostMatrix { size, cells })
}
