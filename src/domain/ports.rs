use crate::domain::plan::FlatMap;
use crate::utils::error::Result;

/// Persistence collaborator: holds at most one flat-map record.
pub trait PlanStore {
    /// Returns the saved record, or `None` when nothing usable is saved.
    fn load(&self) -> Result<Option<FlatMap>>;

    fn save(&self, map: &FlatMap) -> Result<()>;

    fn clear(&self) -> Result<()>;
}
