use contracts::dashboards::d401_holdings::HoldingsSeries;
use serde_json::{json, Value};

/// Line chart config with one series per holding. The charting library picks
/// the line colors; series come out in stable key order.
pub fn holdings_chart_config(series: &HoldingsSeries) -> Value {
    let datasets: Vec<Value> = series
        .datasets
        .iter()
        .map(|(name, values)| {
            json!({
                "label": name,
                "data": values,
                "borderWidth": 2,
                "fill": false,
            })
        })
        .collect();

    json!({
        "type": "line",
        "data": {
            "labels": series.labels,
            "datasets": datasets,
        },
        "options": {
            "responsive": true,
            "plugins": {
                "legend": { "display": true },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::holdings_chart_config;
    use contracts::dashboards::d401_holdings::HoldingsSeries;
    use std::collections::BTreeMap;

    fn sample() -> HoldingsSeries {
        let mut datasets = BTreeMap::new();
        datasets.insert("AAPL".to_string(), vec![100.0, 110.0]);
        datasets.insert("MSFT".to_string(), vec![200.0, 190.0]);
        HoldingsSeries {
            labels: vec!["2024-01".to_string(), "2024-02".to_string()],
            datasets,
        }
    }

    #[test]
    fn test_one_line_per_holding() {
        let config = holdings_chart_config(&sample());
        assert_eq!(config["type"], "line");
        let datasets = config["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0]["label"], "AAPL");
        assert_eq!(datasets[0]["data"][1], 110.0);
        assert_eq!(datasets[0]["borderWidth"], 2);
        assert_eq!(datasets[1]["label"], "MSFT");
    }

    #[test]
    fn test_legend_is_shown() {
        let config = holdings_chart_config(&sample());
        assert_eq!(config["options"]["plugins"]["legend"]["display"], true);
    }

    #[test]
    fn test_empty_series_still_builds() {
        let config = holdings_chart_config(&HoldingsSeries::default());
        assert_eq!(config["data"]["datasets"].as_array().unwrap().len(), 0);
        assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 0);
    }
}
