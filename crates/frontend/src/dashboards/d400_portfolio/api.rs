use contracts::dashboards::d400_portfolio::PortfolioSeries;
use gloo_net::http::Request;

const DATA_ENDPOINT: &str = "/api/portfolio/data/";

/// Monthly principal, equity and transaction series for the whole portfolio.
pub async fn get_portfolio_series() -> Result<PortfolioSeries, String> {
    let response = Request::get(DATA_ENDPOINT)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: PortfolioSeries = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
