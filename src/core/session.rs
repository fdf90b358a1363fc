use crate::core::share;
use crate::domain::field::FieldId;
use crate::domain::plan::CostPlan;
use crate::domain::ports::PlanStore;
use crate::utils::error::Result;
use url::Url;

/// One open planner: a cost plan tied to its store. Hydrates from the
/// saved record on open and writes the record back after every mutation.
pub struct PlannerSession<S: PlanStore> {
    plan: CostPlan,
    store: S,
}

impl<S: PlanStore> PlannerSession<S> {
    pub fn open(store: S) -> Result<Self> {
        let mut plan = CostPlan::new();
        if let Some(saved) = store.load()? {
            tracing::debug!("Hydrating plan from saved record ({} keys)", saved.len());
            plan.from_flat_map(&saved);
        }
        Ok(Self { plan, store })
    }

    pub fn plan(&self) -> &CostPlan {
        &self.plan
    }

    pub fn set_value(&mut self, id: FieldId, raw: f64) -> Result<()> {
        self.plan.set(id, raw);
        tracing::info!("{} = {}", id.wire_key(), self.plan.field(id).value());
        self.persist()
    }

    pub fn increment(&mut self, id: FieldId) -> Result<()> {
        self.plan.increment(id);
        tracing::info!("{} = {}", id.wire_key(), self.plan.field(id).value());
        self.persist()
    }

    pub fn decrement(&mut self, id: FieldId) -> Result<()> {
        self.plan.decrement(id);
        tracing::info!("{} = {}", id.wire_key(), self.plan.field(id).value());
        self.persist()
    }

    pub fn set_team_name(&mut self, name: &str) -> Result<()> {
        self.plan.set_team_name(name);
        self.persist()
    }

    pub fn set_logo_url(&mut self, url: &str) -> Result<()> {
        self.plan.set_logo_url(url);
        self.persist()
    }

    /// Hydrates from a pasted share link. Link values win over whatever is
    /// currently loaded, and the result is persisted.
    pub fn import_share_url(&mut self, link: &str) -> Result<()> {
        let map = share::parse_share_url(link)?;
        tracing::info!("Importing {} parameters from share link", map.len());
        self.plan.from_flat_map(&map);
        self.persist()
    }

    pub fn share_url(&self, base: &str) -> Result<Url> {
        share::share_url(base, &self.plan.to_flat_map())
    }

    /// Restores defaults and clears the saved record.
    pub fn reset(&mut self) -> Result<()> {
        self.plan.reset();
        self.store.clear()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.plan.to_flat_map())
    }
}
