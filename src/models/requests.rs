use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Employee, Wishlist};

/// Largest group accepted over HTTP
pub const MAX_GROUP_SIZE: u64 = 1000;

/// Request to build teams
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BuildTeamsRequest {
    #[validate(length(max = MAX_GROUP_SIZE))]
    #[serde(alias = "team_leads", rename = "teamLeads")]
    pub team_leads: Vec<Employee>,
    #[validate(length(max = MAX_GROUP_SIZE))]
    pub juniors: Vec<Employee>,
    #[serde(default)]
    #[serde(alias = "team_leads_wishlists", rename = "teamLeadsWishlists")]
    pub team_leads_wishlists: Vec<Wishlist>,
    #[serde(default)]
    #[serde(alias = "juniors_wishlists", rename = "juniorsWishlists")]
    pub juniors_wishlists: Vec<Wishlist>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_wishlists() {
        let req: BuildTeamsRequest = serde_json::from_str(
            r#"{"teamLeads": [{"id": 1, "name": "A"}], "juniors": [{"id": 2}]}"#,
        )
        .unwrap();

        assert_eq!(req.team_leads.len(), 1);
        assert_eq!(req.juniors[0].name, "");
        assert!(req.team_leads_wishlists.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_too_large() {
        let leads = (0..=MAX_GROUP_SIZE as u32)
            .map(|id| Employee::new(id, ""))
            .collect::<Vec<_>>();
        let req = BuildTeamsRequest {
            team_leads: leads.clone(),
            juniors: leads,
            team_leads_wishlists: vec![],
            juniors_wishlists: vec![],
        };

        assert!(req.validate().is_err());
    }
}
