// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Employee, EmployeeId, Wishlist, Team, TeamBuildReport, EmptyWishlistPolicy, OptimizerSettings,
    DEFAULT_MAX_SWEEPS,
};
pub use requests::{BuildTeamsRequest, MAX_GROUP_SIZE};
pub use responses::{BuildTeamsResponse, HealthResponse, ErrorResponse};
