use ice_planner::{CostPlan, FieldId, FlatMap};
use serde_json::Value;

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_default_plan_breakdown() {
    let plan = CostPlan::new();

    assert_eq!(plan.team_name(), "Team Hawks");
    assert_eq!(plan.logo_url(), "");
    assert_approx(plan.ice_total(), 15000.0);
    assert_approx(plan.jersey_total(), 88.0);

    let summary = plan.summary();
    assert_approx(summary.subtotal, 18088.0);
    assert_approx(summary.total_fees, 18088.0 * 0.02 + 0.99);
    assert_approx(summary.total_cost, summary.subtotal + summary.total_fees);
    // One player carries the whole cost.
    assert_approx(summary.cost_per_player, summary.total_cost);
}

#[test]
fn test_ten_players_breakdown() {
    let mut plan = CostPlan::new();
    plan.set_field("numberOfPlayers", 10.0).unwrap();

    assert_approx(plan.jersey_total(), 880.0);

    let summary = plan.summary();
    assert_approx(summary.subtotal, 18880.0);
    assert_approx(summary.total_fees, 378.59);
    assert_approx(summary.total_cost, 19258.59);
    assert_approx(summary.cost_per_player, 1925.859);
}

#[test]
fn test_oversized_roster_clamps_to_max() {
    let mut plan = CostPlan::new();
    plan.set_field("numberOfPlayers", 999.0).unwrap();
    assert_eq!(plan.field(FieldId::NumberOfPlayers).value(), 50.0);
}

#[test]
fn test_negative_roster_clamps_to_min() {
    let mut plan = CostPlan::new();
    plan.set_field("numberOfPlayers", -5.0).unwrap();
    assert_eq!(plan.field(FieldId::NumberOfPlayers).value(), 1.0);
}

#[test]
fn test_hydration_ignores_unknown_keys() {
    let mut plan = CostPlan::new();

    let mut map = FlatMap::new();
    map.insert("unknownKey".to_string(), Value::from(5));
    map.insert("iceHours".to_string(), Value::String("75".to_string()));
    plan.from_flat_map(&map);

    assert_eq!(plan.field(FieldId::IceHours).value(), 75.0);
    assert_eq!(plan.field(FieldId::IceCostPerHour).value(), 300.0);
}

#[test]
fn test_recompute_is_deterministic() {
    let mut a = CostPlan::new();
    let mut b = CostPlan::new();
    for plan in [&mut a, &mut b] {
        plan.set(FieldId::NumberOfPlayers, 23.0);
        plan.set(FieldId::IceHours, 120.5);
        plan.set(FieldId::FeePercentage, 7.3);
    }
    assert_eq!(a.summary(), b.summary());
}

#[test]
fn test_hydration_cannot_force_non_finite_cost_per_player() {
    let mut plan = CostPlan::new();

    let mut map = FlatMap::new();
    map.insert("numberOfPlayers".to_string(), Value::from(0));
    plan.from_flat_map(&map);

    // Clamped back to 1, so the division stays well-defined.
    assert_eq!(plan.field(FieldId::NumberOfPlayers).value(), 1.0);
    assert!(plan.summary().cost_per_player.is_finite());
}
