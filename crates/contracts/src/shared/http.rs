//! Write-method selection for form submissions.

/// HTTP method for a mutating form submission, chosen from the shape of the
/// form's target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Put,
}

impl WriteMethod {
    /// A URL ending in a slash-delimited digit run (optional trailing slash)
    /// targets an existing record and gets PUT; anything else is a create and
    /// gets POST. This is a URL-shape heuristic, not a resource lookup; the
    /// server's routing depends on this exact rule, so it must not be
    /// tightened or loosened.
    pub fn for_url(url: &str) -> Self {
        if ends_with_id_segment(url) {
            WriteMethod::Put
        } else {
            WriteMethod::Post
        }
    }
}

fn ends_with_id_segment(url: &str) -> bool {
    // At most one trailing slash is tolerated after the digits.
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    match trimmed.rsplit_once('/') {
        Some((_, last)) => !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_id_selects_put() {
        assert_eq!(WriteMethod::for_url("/api/transaction/5/"), WriteMethod::Put);
        assert_eq!(WriteMethod::for_url("/api/transaction/5"), WriteMethod::Put);
        assert_eq!(WriteMethod::for_url("/api/entry/12345/"), WriteMethod::Put);
        assert_eq!(
            WriteMethod::for_url("https://example.org/api/exit/9"),
            WriteMethod::Put
        );
        assert_eq!(WriteMethod::for_url("/5/"), WriteMethod::Put);
    }

    #[test]
    fn test_everything_else_selects_post() {
        assert_eq!(WriteMethod::for_url("/api/transaction/"), WriteMethod::Post);
        assert_eq!(WriteMethod::for_url("/account/create/"), WriteMethod::Post);
        assert_eq!(WriteMethod::for_url("/api/security/add/"), WriteMethod::Post);
        // digits not slash-delimited
        assert_eq!(WriteMethod::for_url("/api/v2"), WriteMethod::Post);
        assert_eq!(WriteMethod::for_url("/api/abc123/"), WriteMethod::Post);
        // bare digits with no separator at all
        assert_eq!(WriteMethod::for_url("123"), WriteMethod::Post);
        // more than one trailing slash
        assert_eq!(WriteMethod::for_url("/api/entry/5//"), WriteMethod::Post);
        assert_eq!(WriteMethod::for_url(""), WriteMethod::Post);
    }

    #[test]
    fn test_inner_id_segments_do_not_count() {
        // only the final segment matters
        assert_eq!(WriteMethod::for_url("/api/5/detail/"), WriteMethod::Post);
        assert_eq!(WriteMethod::for_url("/api/5/6"), WriteMethod::Put);
    }
}
