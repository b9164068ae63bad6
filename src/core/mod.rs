// Core algorithm exports
pub mod builder;
pub mod cost;
pub mod evaluation;
pub mod greedy;
pub mod optimizer;

pub use builder::{build_teams, TeamBuilder};
pub use cost::{build_cost_matrix, pair_cost, satisfaction, CostMatrix, MAX_PAIR_COST};
pub use evaluation::harmonic_mean_satisfaction;
pub use greedy::greedy_assign;
pub use optimizer::{local_optimize, total_cost, OptimizationOutcome};
