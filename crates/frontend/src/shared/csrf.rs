use wasm_bindgen::JsCast;

/// Cookie the backend sets its anti-forgery token in.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header every mutating request echoes the token back in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Reads the anti-forgery token from the document cookies.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    token_from_cookies(&cookies)
}

fn token_from_cookies(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|part| {
        let value = part.trim_start().strip_prefix(CSRF_COOKIE)?.strip_prefix('=')?;
        (!value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::token_from_cookies;

    #[test]
    fn test_finds_token_among_other_cookies() {
        let cookies = "sessionid=abc123; csrftoken=tok456; theme=dark";
        assert_eq!(token_from_cookies(cookies), Some("tok456".to_string()));
    }

    #[test]
    fn test_finds_token_when_first() {
        assert_eq!(
            token_from_cookies("csrftoken=only"),
            Some("only".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty_token_yields_none() {
        assert_eq!(token_from_cookies(""), None);
        assert_eq!(token_from_cookies("sessionid=abc123"), None);
        assert_eq!(token_from_cookies("csrftoken="), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        assert_eq!(token_from_cookies("xcsrftoken=nope"), None);
    }
}
