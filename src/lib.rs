//! Team Builder - wishlist-driven pairing of team leads and juniors
//!
//! This library turns the ranked wishlists of both groups into a pairing cost
//! matrix, assigns greedily and then improves the assignment with pairwise
//! swaps until no swap helps or the sweep budget runs out.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{build_teams, TeamBuilder};
pub use error::TeamBuildError;
pub use models::{Employee, EmployeeId, Wishlist, Team, TeamBuildReport, OptimizerSettings, EmptyWishlistPolicy};
