pub mod session;
pub mod share;

pub use crate::domain::plan::{CostPlan, CostSummary, FlatMap};
pub use crate::domain::ports::PlanStore;
pub use crate::utils::error::Result;
