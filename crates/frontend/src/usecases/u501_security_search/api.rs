use crate::shared::csrf::{csrf_token, CSRF_HEADER};
use contracts::usecases::u501_security_search::{
    AddSecurityResponse, NewSecurityRequest, SecuritySearchResponse,
};
use gloo_net::http::Request;

const API_BASE: &str = "/api/security";

/// Query both market data providers for securities matching `query`.
pub async fn search_securities(query: &str) -> Result<SecuritySearchResponse, String> {
    let url = format!("{}/search/?q={}", API_BASE, urlencoding::encode(query));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SecuritySearchResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Store one picked search result as a tracked security.
pub async fn add_security(request: &NewSecurityRequest) -> Result<AddSecurityResponse, String> {
    let url = format!("{}/add/", API_BASE);

    let response = Request::post(&url)
        .header(CSRF_HEADER, &csrf_token().unwrap_or_default())
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: AddSecurityResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
