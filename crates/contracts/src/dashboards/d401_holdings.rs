use serde::Deserialize;
use std::collections::BTreeMap;

/// Response of `/api/holdings/data/`: one equity series per holding name,
/// all over the same date labels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HoldingsSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: BTreeMap<String, Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_endpoint_payload() {
        let series: HoldingsSeries = serde_json::from_str(
            r#"{
                "labels": ["2024-01-01", "2024-01-02"],
                "datasets": {
                    "AAPL": [500.0, 512.0],
                    "VOD.L": [200.0, 198.5]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(series.labels.len(), 2);
        assert_eq!(series.datasets.len(), 2);
        assert_eq!(series.datasets["VOD.L"][1], 198.5);
    }

    #[test]
    fn test_empty_payload() {
        let series: HoldingsSeries = serde_json::from_str("{}").unwrap();
        assert!(series.labels.is_empty());
        assert!(series.datasets.is_empty());
    }
}
