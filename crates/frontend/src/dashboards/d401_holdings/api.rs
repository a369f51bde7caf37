use contracts::dashboards::d401_holdings::HoldingsSeries;
use gloo_net::http::Request;

const DATA_ENDPOINT: &str = "/api/holdings/data/";

/// Equity series per holding, keyed by security.
pub async fn get_holdings_series() -> Result<HoldingsSeries, String> {
    let response = Request::get(DATA_ENDPOINT)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: HoldingsSeries = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
