use crate::utils::error::{PlannerError, Result};

/// A scalar constrained to an inclusive [min, max] range with a positive
/// step. Every mutation clamps, so `min <= value <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedValue {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl BoundedValue {
    /// The initial value is clamped into range; a non-finite initial falls
    /// back to `min`.
    pub fn new(initial: f64, min: f64, max: f64, step: f64) -> Result<Self> {
        if max < min || !(step > 0.0) {
            return Err(PlannerError::InvalidRange { min, max, step });
        }

        let mut bounded = Self {
            value: min,
            min,
            max,
            step,
        };
        bounded.set_value(initial);
        Ok(bounded)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// The original widgets disable their "-" button on this condition.
    pub fn at_min(&self) -> bool {
        self.value <= self.min
    }

    pub fn at_max(&self) -> bool {
        self.value >= self.max
    }

    /// Clamped assignment. Non-finite input falls back to `min`.
    pub fn set_value(&mut self, v: f64) {
        self.value = if v.is_finite() {
            v.clamp(self.min, self.max)
        } else {
            self.min
        };
    }

    /// Adds one step, clamped. No-op at `max`.
    pub fn increment(&mut self) {
        self.set_value(self.value + self.step);
    }

    /// Subtracts one step, clamped. No-op at `min`.
    pub fn decrement(&mut self) {
        self.set_value(self.value - self.step);
    }
}
