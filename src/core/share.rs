use crate::domain::field::FieldId;
use crate::domain::plan::{FlatMap, LOGO_URL_KEY, TEAM_NAME_KEY};
use crate::utils::error::{PlannerError, Result};
use serde_json::Value;
use url::Url;

/// Builds a shareable link: the flat map encoded as query parameters on
/// `base`, in canonical order (team name, logo, then the field table
/// order). Any query already on `base` is replaced.
pub fn share_url(base: &str, map: &FlatMap) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| PlannerError::InvalidShareUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for key in [TEAM_NAME_KEY, LOGO_URL_KEY] {
            if let Some(value) = map.get(key) {
                pairs.append_pair(key, &param_text(value));
            }
        }
        for id in FieldId::ALL {
            if let Some(value) = map.get(id.wire_key()) {
                pairs.append_pair(id.wire_key(), &param_text(value));
            }
        }
    }

    Ok(url)
}

/// Decodes a pasted share link back into a flat map. Every query value
/// comes back as a string entry; key recognition is the plan's job.
pub fn parse_share_url(input: &str) -> Result<FlatMap> {
    let url = Url::parse(input).map_err(|e| PlannerError::InvalidShareUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    let mut map = FlatMap::new();
    for (key, value) in url.query_pairs() {
        map.insert(key.into_owned(), Value::String(value.into_owned()));
    }
    Ok(map)
}

// Query parameters are human-readable: strings go in bare, numbers via
// their JSON rendering (no trailing `.0` on whole numbers).
fn param_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::CostPlan;

    #[test]
    fn test_share_url_canonical_order() {
        let url = share_url("https://example.com/planner", &CostPlan::new().to_flat_map()).unwrap();
        let query = url.query().unwrap();

        assert!(query.starts_with("teamName=Team+Hawks&logoUrl="));
        let keys: Vec<&str> = query.split('&').map(|p| p.split('=').next().unwrap()).collect();
        assert_eq!(
            keys,
            vec![
                "teamName",
                "logoUrl",
                "numberOfPlayers",
                "iceHours",
                "iceCostPerHour",
                "coachCost",
                "jerseyCost",
                "feePercentage",
                "fixedFee"
            ]
        );
    }

    #[test]
    fn test_share_url_replaces_existing_query() {
        let url = share_url(
            "https://example.com/planner?stale=1",
            &CostPlan::new().to_flat_map(),
        )
        .unwrap();
        assert!(!url.query().unwrap().contains("stale"));
    }

    #[test]
    fn test_share_url_rejects_invalid_base() {
        assert!(matches!(
            share_url("not a url", &FlatMap::new()),
            Err(PlannerError::InvalidShareUrl { .. })
        ));
    }

    #[test]
    fn test_parse_share_url_decodes_pairs() {
        let map =
            parse_share_url("https://example.com/planner?teamName=Polar+Bears&iceHours=75.5")
                .unwrap();
        assert_eq!(
            map.get("teamName"),
            Some(&Value::String("Polar Bears".to_string()))
        );
        assert_eq!(
            map.get("iceHours"),
            Some(&Value::String("75.5".to_string()))
        );
    }

    #[test]
    fn test_whole_numbers_have_no_decimal_point() {
        let url = share_url("https://example.com/planner", &CostPlan::new().to_flat_map()).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("iceHours=50"));
        assert!(!query.contains("iceHours=50.0"));
        assert!(query.contains("fixedFee=0.99"));
    }
}
