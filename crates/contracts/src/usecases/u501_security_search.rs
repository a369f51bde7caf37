//! Ticker search across the two upstream quote providers.
//!
//! `/api/security/search/?q=` aggregates both providers server-side and
//! returns one array per provider, each with its own field naming. The panel
//! shows them as a single table, so the provider differences are normalized
//! away here.

use serde::{Deserialize, Serialize};

/// Response of `/api/security/search/?q=<query>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecuritySearchResponse {
    #[serde(default)]
    pub yahoo: Vec<YahooHit>,
    #[serde(default)]
    pub eodhd: Vec<EodhdHit>,
}

impl SecuritySearchResponse {
    /// Rows of the unified results table: yahoo hits first, then eodhd, so
    /// row numbering continues across providers.
    pub fn merge(self) -> Vec<SecurityCandidate> {
        let mut rows: Vec<SecurityCandidate> =
            self.yahoo.into_iter().map(Into::into).collect();
        rows.extend(self.eodhd.into_iter().map(SecurityCandidate::from));
        rows
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YahooHit {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub shortname: Option<String>,
    #[serde(default)]
    pub longname: Option<String>,
    #[serde(default, rename = "quoteType")]
    pub quote_type: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EodhdHit {
    #[serde(default, rename = "Code")]
    pub code: String,
    #[serde(default, rename = "Exchange")]
    pub exchange: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Type")]
    pub kind: String,
    #[serde(default, rename = "Currency")]
    pub currency: String,
    #[serde(default, rename = "Country")]
    pub country: String,
}

/// Which upstream a hit came from; echoed back to the server on add so it
/// knows where to pull quotes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Yahoo,
    Eodhd,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Yahoo => "yahoo",
            Provider::Eodhd => "eodhd",
        }
    }
}

/// One row of the merged results table.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityCandidate {
    pub code: String,
    pub exchange: String,
    pub name: String,
    pub kind: String,
    pub currency: String,
    pub country: String,
    pub source: Provider,
}

impl From<YahooHit> for SecurityCandidate {
    fn from(hit: YahooHit) -> Self {
        // Yahoo has no single name field; prefer the short form.
        let name = hit
            .shortname
            .filter(|s| !s.is_empty())
            .or(hit.longname)
            .unwrap_or_default();
        Self {
            code: hit.symbol,
            exchange: hit.exchange,
            name,
            kind: hit.quote_type,
            currency: hit.currency,
            country: hit.country,
            source: Provider::Yahoo,
        }
    }
}

impl From<EodhdHit> for SecurityCandidate {
    fn from(hit: EodhdHit) -> Self {
        Self {
            code: hit.code,
            exchange: hit.exchange,
            name: hit.name,
            kind: hit.kind,
            currency: hit.currency,
            country: hit.country,
            source: Provider::Eodhd,
        }
    }
}

impl SecurityCandidate {
    pub fn to_request(&self) -> NewSecurityRequest {
        NewSecurityRequest {
            code: self.code.clone(),
            exchange: self.exchange.clone(),
            name: self.name.clone(),
            kind: self.kind.clone(),
            currency: self.currency.clone(),
            country: self.country.clone(),
            api_source: self.source,
        }
    }
}

/// Payload of POST `/api/security/add/`; the same shape regardless of which
/// provider the row came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSecurityRequest {
    pub code: String,
    pub exchange: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub currency: String,
    pub country: String,
    pub api_source: Provider,
}

/// Response of `/api/security/add/`: `"ok"` on insert, `"exists"` when the
/// security is already tracked.
#[derive(Debug, Clone, Deserialize)]
pub struct AddSecurityResponse {
    pub status: String,
}

impl AddSecurityResponse {
    pub fn is_new(&self) -> bool {
        self.status == "ok"
    }
}

/// Enter-gated query normalization: trimmed, and anything under two
/// characters means "clear the table, send nothing".
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.chars().count() < 2 {
        None
    } else {
        Some(query.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> SecuritySearchResponse {
        serde_json::from_str(
            r#"{
                "yahoo": [
                    {"symbol": "AAPL", "exchange": "NMS", "shortname": "Apple Inc.",
                     "longname": "Apple Inc. (Cupertino)", "quoteType": "EQUITY",
                     "currency": "USD", "country": "United States"},
                    {"symbol": "APC.DE", "exchange": "GER", "longname": "Apple Inc. Xetra",
                     "quoteType": "EQUITY", "currency": "EUR", "country": "Germany"}
                ],
                "eodhd": [
                    {"Code": "AAPL", "Exchange": "US", "Name": "Apple Inc",
                     "Type": "Common Stock", "Currency": "USD", "Country": "USA"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_merge_keeps_yahoo_rows_first() {
        let rows = sample_response().merge();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].source, Provider::Yahoo);
        assert_eq!(rows[1].source, Provider::Yahoo);
        assert_eq!(rows[2].source, Provider::Eodhd);
        assert_eq!(rows[2].code, "AAPL");
        assert_eq!(rows[2].kind, "Common Stock");
    }

    #[test]
    fn test_yahoo_name_falls_back_to_longname() {
        let rows = sample_response().merge();
        assert_eq!(rows[0].name, "Apple Inc.");
        assert_eq!(rows[1].name, "Apple Inc. Xetra");
    }

    #[test]
    fn test_missing_provider_fields_default_to_empty() {
        let response: SecuritySearchResponse =
            serde_json::from_str(r#"{"yahoo": [{"symbol": "VOD.L"}]}"#).unwrap();
        let rows = response.merge();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "VOD.L");
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].country, "");
    }

    #[test]
    fn test_empty_response_merges_to_no_rows() {
        let response: SecuritySearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.merge().is_empty());
    }

    #[test]
    fn test_add_request_payload_shape() {
        let rows = sample_response().merge();
        let json = serde_json::to_value(rows[2].to_request()).unwrap();
        assert_eq!(json["code"], "AAPL");
        assert_eq!(json["type"], "Common Stock");
        assert_eq!(json["api_source"], "eodhd");
        assert_eq!(json["country"], "USA");
    }

    #[test]
    fn test_add_response_status() {
        let added: AddSecurityResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        let exists: AddSecurityResponse =
            serde_json::from_str(r#"{"status": "exists"}"#).unwrap();
        assert!(added.is_new());
        assert!(!exists.is_new());
    }

    #[test]
    fn test_query_gate() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" a "), None);
        assert_eq!(normalize_query("ab"), Some("ab".to_string()));
        assert_eq!(normalize_query("  msft  "), Some("msft".to_string()));
    }
}
