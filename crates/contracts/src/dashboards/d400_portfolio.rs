use serde::Deserialize;

/// Response of `/api/portfolio/data/`: parallel series over shared date
/// labels. `transactions` is signed (deposits positive, withdrawals
/// negative), which drives the per-bar coloring.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PortfolioSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub principal: Vec<f64>,
    #[serde(default)]
    pub equity: Vec<f64>,
    #[serde(default)]
    pub transactions: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_endpoint_payload() {
        let series: PortfolioSeries = serde_json::from_str(
            r#"{
                "labels": ["2024-01-01", "2024-01-02"],
                "principal": [1000.0, 1000.0],
                "equity": [1000.0, 1012.5],
                "transactions": [1000.0, -50.0]
            }"#,
        )
        .unwrap();
        assert_eq!(series.labels.len(), 2);
        assert_eq!(series.equity[1], 1012.5);
        assert_eq!(series.transactions[1], -50.0);
    }

    #[test]
    fn test_missing_series_default_to_empty() {
        let series: PortfolioSeries = serde_json::from_str(r#"{"labels": []}"#).unwrap();
        assert!(series.principal.is_empty());
        assert!(series.transactions.is_empty());
    }
}
