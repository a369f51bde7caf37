use crate::shared::csrf::{csrf_token, CSRF_HEADER};
use contracts::domain::EntityConfig;
use contracts::shared::forms::FormSubmission;
use contracts::shared::http::WriteMethod;
use gloo_net::http::Request;

/// Outcome of a form submission the server actually answered.
pub enum SubmitOutcome {
    /// 2xx: the entity was saved.
    Saved,
    /// Non-2xx: the raw response body, which may carry field errors.
    Rejected(String),
}

/// Fetch a server-rendered HTML fragment (form modals, list tables).
pub async fn fetch_fragment(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Send a collected form as JSON to the URL the form itself points at.
///
/// The method follows from the URL shape: paths ending in an id segment are
/// updates (PUT), everything else is a create (POST).
pub async fn send_form(url: &str, submission: &FormSubmission) -> Result<SubmitOutcome, String> {
    let method = WriteMethod::for_url(url);
    let builder = match method {
        WriteMethod::Post => Request::post(url),
        WriteMethod::Put => Request::put(url),
    };

    let response = builder
        .header(CSRF_HEADER, &csrf_token().unwrap_or_default())
        .json(&submission.to_json())
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        Ok(SubmitOutcome::Saved)
    } else {
        let body = response.text().await.unwrap_or_default();
        Ok(SubmitOutcome::Rejected(body))
    }
}

/// Delete one entity row. Returns whether the server accepted the delete.
pub async fn delete_entity(config: &EntityConfig, id: i64) -> Result<bool, String> {
    let response = Request::delete(&config.delete_endpoint(id))
        .header(CSRF_HEADER, &csrf_token().unwrap_or_default())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    Ok(response.ok())
}
