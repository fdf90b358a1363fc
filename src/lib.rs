pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{cli::JsonPlanStore, AppConfig};

pub use core::session::PlannerSession;
pub use domain::bounded::BoundedValue;
pub use domain::field::{FieldId, FieldSpec};
pub use domain::plan::{CostPlan, CostSummary, FlatMap};
pub use domain::ports::PlanStore;
pub use utils::error::{PlannerError, Result};
