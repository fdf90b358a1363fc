use serde::{Deserialize, Serialize};

/// The seven numeric inputs of the cost plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    NumberOfPlayers,
    IceHours,
    IceCostPerHour,
    CoachCost,
    JerseyCost,
    FeePercentage,
    FixedFee,
}

/// Bounds, step and default for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl FieldId {
    /// Canonical field order, used for serialization and share links.
    pub const ALL: [FieldId; 7] = [
        FieldId::NumberOfPlayers,
        FieldId::IceHours,
        FieldId::IceCostPerHour,
        FieldId::CoachCost,
        FieldId::JerseyCost,
        FieldId::FeePercentage,
        FieldId::FixedFee,
    ];

    /// Key used in the persisted record and in share URL parameters.
    pub fn wire_key(&self) -> &'static str {
        match self {
            FieldId::NumberOfPlayers => "numberOfPlayers",
            FieldId::IceHours => "iceHours",
            FieldId::IceCostPerHour => "iceCostPerHour",
            FieldId::CoachCost => "coachCost",
            FieldId::JerseyCost => "jerseyCost",
            FieldId::FeePercentage => "feePercentage",
            FieldId::FixedFee => "fixedFee",
        }
    }

    pub fn from_wire_key(key: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|id| id.wire_key() == key)
    }

    pub fn spec(&self) -> FieldSpec {
        match self {
            FieldId::NumberOfPlayers => FieldSpec {
                min: 1.0,
                max: 50.0,
                step: 1.0,
                default: 1.0,
            },
            FieldId::IceHours => FieldSpec {
                min: 1.0,
                max: 200.0,
                step: 0.5,
                default: 50.0,
            },
            FieldId::IceCostPerHour => FieldSpec {
                min: 50.0,
                max: 1000.0,
                step: 10.0,
                default: 300.0,
            },
            FieldId::CoachCost => FieldSpec {
                min: 0.0,
                max: 10000.0,
                step: 100.0,
                default: 3000.0,
            },
            FieldId::JerseyCost => FieldSpec {
                min: 0.0,
                max: 300.0,
                step: 5.0,
                default: 88.0,
            },
            FieldId::FeePercentage => FieldSpec {
                min: 0.0,
                max: 10.0,
                step: 0.1,
                default: 2.0,
            },
            FieldId::FixedFee => FieldSpec {
                min: 0.0,
                max: 50.0,
                step: 0.01,
                default: 0.99,
            },
        }
    }

    /// Player counts are whole numbers; fractional input is truncated.
    pub fn coerce(&self, v: f64) -> f64 {
        match self {
            FieldId::NumberOfPlayers => v.trunc(),
            _ => v,
        }
    }

    /// Parses raw text into a value for this field. Unparsable or
    /// non-finite input falls back to the field's minimum.
    pub fn parse_raw(&self, raw: &str) -> f64 {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => self.coerce(v),
            _ => self.spec().min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_key_round_trip() {
        for id in FieldId::ALL {
            assert_eq!(FieldId::from_wire_key(id.wire_key()), Some(id));
        }
        assert_eq!(FieldId::from_wire_key("unknownKey"), None);
        assert_eq!(FieldId::from_wire_key("teamName"), None);
    }

    #[test]
    fn test_spec_table_is_well_formed() {
        for id in FieldId::ALL {
            let s = id.spec();
            assert!(s.min <= s.max, "{:?}", id);
            assert!(s.step > 0.0, "{:?}", id);
            assert!(s.default >= s.min && s.default <= s.max, "{:?}", id);
        }
    }

    #[test]
    fn test_parse_raw_float_fields() {
        assert_eq!(FieldId::IceHours.parse_raw("75"), 75.0);
        assert_eq!(FieldId::IceHours.parse_raw("75.5"), 75.5);
        assert_eq!(FieldId::FixedFee.parse_raw("0.99"), 0.99);
    }

    #[test]
    fn test_parse_raw_integer_field_truncates() {
        assert_eq!(FieldId::NumberOfPlayers.parse_raw("10"), 10.0);
        assert_eq!(FieldId::NumberOfPlayers.parse_raw("10.9"), 10.0);
    }

    #[test]
    fn test_parse_raw_falls_back_to_min() {
        assert_eq!(FieldId::IceHours.parse_raw("abc"), 1.0);
        assert_eq!(FieldId::IceHours.parse_raw(""), 1.0);
        assert_eq!(FieldId::IceHours.parse_raw("NaN"), 1.0);
        assert_eq!(FieldId::IceCostPerHour.parse_raw("inf"), 50.0);
    }
}
