use contracts::dashboards::d400_portfolio::PortfolioSeries;
use serde_json::{json, Value};

/// Bars for inflows.
pub const INFLOW_BAR_COLOR: &str = "rgba(0, 119, 0, 0.6)";
/// Bars for outflows.
pub const OUTFLOW_BAR_COLOR: &str = "rgba(200, 0, 0, 0.6)";

/// Mixed chart config: principal and equity as lines over one bar series of
/// monthly transaction flows, all on a shared value axis.
pub fn portfolio_chart_config(series: &PortfolioSeries) -> Value {
    let bar_colors: Vec<&str> = series
        .transactions
        .iter()
        .map(|flow| {
            if *flow >= 0.0 {
                INFLOW_BAR_COLOR
            } else {
                OUTFLOW_BAR_COLOR
            }
        })
        .collect();

    json!({
        "data": {
            "labels": series.labels,
            "datasets": [
                {
                    "type": "line",
                    "label": "Principal",
                    "data": series.principal,
                    "borderColor": "blue",
                    "fill": false,
                    "pointRadius": 0,
                    "pointHoverRadius": 0,
                    "yAxisID": "y",
                },
                {
                    "type": "line",
                    "label": "Equity",
                    "data": series.equity,
                    "borderColor": "green",
                    "fill": false,
                    "pointRadius": 0,
                    "pointHoverRadius": 0,
                    "yAxisID": "y",
                },
                {
                    "type": "bar",
                    "label": "Transaction",
                    "data": series.transactions,
                    "backgroundColor": bar_colors,
                    "yAxisID": "y",
                    // Draw bars behind the lines.
                    "order": 0,
                },
            ],
        },
        "options": {
            "responsive": true,
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "title": { "display": true, "text": "Value" },
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{portfolio_chart_config, INFLOW_BAR_COLOR, OUTFLOW_BAR_COLOR};
    use contracts::dashboards::d400_portfolio::PortfolioSeries;

    fn sample() -> PortfolioSeries {
        PortfolioSeries {
            labels: vec!["2024-01".to_string(), "2024-02".to_string(), "2024-03".to_string()],
            principal: vec![1000.0, 1500.0, 1500.0],
            equity: vec![1000.0, 1600.0, 1550.0],
            transactions: vec![1000.0, 500.0, -200.0],
        }
    }

    #[test]
    fn test_three_datasets_in_order() {
        let config = portfolio_chart_config(&sample());
        let datasets = config["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 3);
        assert_eq!(datasets[0]["label"], "Principal");
        assert_eq!(datasets[0]["type"], "line");
        assert_eq!(datasets[0]["borderColor"], "blue");
        assert_eq!(datasets[1]["label"], "Equity");
        assert_eq!(datasets[1]["borderColor"], "green");
        assert_eq!(datasets[2]["label"], "Transaction");
        assert_eq!(datasets[2]["type"], "bar");
    }

    #[test]
    fn test_bar_color_follows_flow_sign() {
        let config = portfolio_chart_config(&sample());
        let colors = config["data"]["datasets"][2]["backgroundColor"]
            .as_array()
            .unwrap();
        assert_eq!(colors[0], INFLOW_BAR_COLOR);
        assert_eq!(colors[1], INFLOW_BAR_COLOR);
        assert_eq!(colors[2], OUTFLOW_BAR_COLOR);
    }

    #[test]
    fn test_zero_flow_counts_as_inflow() {
        let mut series = sample();
        series.transactions = vec![0.0];
        let config = portfolio_chart_config(&series);
        assert_eq!(
            config["data"]["datasets"][2]["backgroundColor"][0],
            INFLOW_BAR_COLOR
        );
    }

    #[test]
    fn test_value_axis_starts_at_zero() {
        let config = portfolio_chart_config(&sample());
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(config["options"]["scales"]["y"]["title"]["text"], "Value");
    }

    #[test]
    fn test_labels_pass_through() {
        let config = portfolio_chart_config(&sample());
        assert_eq!(config["data"]["labels"][0], "2024-01");
        assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 3);
    }
}
