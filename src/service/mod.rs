pub mod requests;
pub mod roster;

pub use requests::RequestAggregationService;
pub use roster::RosterService;
