use crate::domain::bounded::BoundedValue;
use crate::domain::field::FieldId;
use crate::utils::error::{PlannerError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Single-level field-name -> primitive-value mapping, the shape shared by
/// the persisted record and share URL parameters.
pub type FlatMap = HashMap<String, Value>;

pub const TEAM_NAME_KEY: &str = "teamName";
pub const LOGO_URL_KEY: &str = "logoUrl";

pub const DEFAULT_TEAM_NAME: &str = "Team Hawks";

/// Derived totals, recomputed after every field change. Never serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostSummary {
    pub subtotal: f64,
    pub total_fees: f64,
    pub total_cost: f64,
    pub cost_per_player: f64,
}

/// The season cost plan: team identity, seven bounded numeric fields and
/// the derived totals.
#[derive(Debug, Clone)]
pub struct CostPlan {
    team_name: String,
    logo_url: String,
    number_of_players: BoundedValue,
    ice_hours: BoundedValue,
    ice_cost_per_hour: BoundedValue,
    coach_cost: BoundedValue,
    jersey_cost: BoundedValue,
    fee_percentage: BoundedValue,
    fixed_fee: BoundedValue,
    summary: CostSummary,
}

fn default_field(id: FieldId) -> BoundedValue {
    let s = id.spec();
    // The static field table always satisfies the range contract.
    BoundedValue::new(s.default, s.min, s.max, s.step).unwrap()
}

impl CostPlan {
    pub fn new() -> Self {
        let mut plan = Self {
            team_name: DEFAULT_TEAM_NAME.to_string(),
            logo_url: String::new(),
            number_of_players: default_field(FieldId::NumberOfPlayers),
            ice_hours: default_field(FieldId::IceHours),
            ice_cost_per_hour: default_field(FieldId::IceCostPerHour),
            coach_cost: default_field(FieldId::CoachCost),
            jersey_cost: default_field(FieldId::JerseyCost),
            fee_percentage: default_field(FieldId::FeePercentage),
            fixed_fee: default_field(FieldId::FixedFee),
            summary: CostSummary::default(),
        };
        plan.recompute();
        plan
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }

    pub fn field(&self, id: FieldId) -> &BoundedValue {
        match id {
            FieldId::NumberOfPlayers => &self.number_of_players,
            FieldId::IceHours => &self.ice_hours,
            FieldId::IceCostPerHour => &self.ice_cost_per_hour,
            FieldId::CoachCost => &self.coach_cost,
            FieldId::JerseyCost => &self.jersey_cost,
            FieldId::FeePercentage => &self.fee_percentage,
            FieldId::FixedFee => &self.fixed_fee,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut BoundedValue {
        match id {
            FieldId::NumberOfPlayers => &mut self.number_of_players,
            FieldId::IceHours => &mut self.ice_hours,
            FieldId::IceCostPerHour => &mut self.ice_cost_per_hour,
            FieldId::CoachCost => &mut self.coach_cost,
            FieldId::JerseyCost => &mut self.jersey_cost,
            FieldId::FeePercentage => &mut self.fee_percentage,
            FieldId::FixedFee => &mut self.fixed_fee,
        }
    }

    pub fn summary(&self) -> CostSummary {
        self.summary
    }

    /// Ice Time row of the cost breakdown.
    pub fn ice_total(&self) -> f64 {
        self.ice_hours.value() * self.ice_cost_per_hour.value()
    }

    /// Jerseys row of the cost breakdown.
    pub fn jersey_total(&self) -> f64 {
        self.jersey_cost.value() * self.number_of_players.value()
    }

    /// Clamped assignment by field, followed by recomputation.
    pub fn set(&mut self, id: FieldId, raw: f64) {
        let raw = id.coerce(raw);
        self.field_mut(id).set_value(raw);
        self.recompute();
    }

    /// Assignment by wire key; unrecognized names are rejected.
    pub fn set_field(&mut self, name: &str, raw: f64) -> Result<()> {
        let id = FieldId::from_wire_key(name).ok_or_else(|| PlannerError::UnknownField {
            name: name.to_string(),
        })?;
        self.set(id, raw);
        Ok(())
    }

    pub fn increment(&mut self, id: FieldId) {
        self.field_mut(id).increment();
        self.recompute();
    }

    pub fn decrement(&mut self, id: FieldId) {
        self.field_mut(id).decrement();
        self.recompute();
    }

    pub fn set_team_name(&mut self, name: &str) {
        self.team_name = name.to_string();
    }

    pub fn set_logo_url(&mut self, url: &str) {
        self.logo_url = url.to_string();
    }

    fn recompute(&mut self) {
        let subtotal = self.ice_total() + self.coach_cost.value() + self.jersey_total();
        let total_fees = subtotal * (self.fee_percentage.value() / 100.0) + self.fixed_fee.value();
        let total_cost = subtotal + total_fees;

        let players = self.number_of_players.value();
        // Bounds keep players >= 1, but hydrated data must never be able to
        // force a non-finite result.
        let cost_per_player = if players == 0.0 {
            0.0
        } else {
            total_cost / players
        };

        self.summary = CostSummary {
            subtotal,
            total_fees,
            total_cost,
            cost_per_player,
        };
    }

    /// Serializes every field (team name and logo included, derived totals
    /// excluded). Whole numbers are written as JSON integers, matching the
    /// persisted record shape.
    pub fn to_flat_map(&self) -> FlatMap {
        let mut map = FlatMap::new();
        map.insert(
            TEAM_NAME_KEY.to_string(),
            Value::String(self.team_name.clone()),
        );
        map.insert(
            LOGO_URL_KEY.to_string(),
            Value::String(self.logo_url.clone()),
        );
        for id in FieldId::ALL {
            map.insert(id.wire_key().to_string(), number_value(self.field(id).value()));
        }
        map
    }

    /// Applies every recognized key in `map`; unrecognized keys are ignored
    /// and missing keys leave current values untouched. Recomputes once at
    /// the end.
    pub fn from_flat_map(&mut self, map: &FlatMap) {
        if let Some(Value::String(name)) = map.get(TEAM_NAME_KEY) {
            self.team_name = name.clone();
        }
        if let Some(Value::String(url)) = map.get(LOGO_URL_KEY) {
            self.logo_url = url.clone();
        }
        for id in FieldId::ALL {
            if let Some(value) = map.get(id.wire_key()) {
                let raw = match value {
                    Value::Number(n) => n
                        .as_f64()
                        .filter(|v| v.is_finite())
                        .map(|v| id.coerce(v))
                        .unwrap_or(id.spec().min),
                    Value::String(s) => id.parse_raw(s),
                    _ => id.spec().min,
                };
                self.field_mut(id).set_value(raw);
            }
        }
        self.recompute();
    }

    /// Restores the default configuration. Clearing any persisted copy is
    /// the caller's job.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for CostPlan {
    fn default() -> Self {
        Self::new()
    }
}

fn number_value(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}
