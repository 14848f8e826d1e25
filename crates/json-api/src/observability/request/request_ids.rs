//! Request ID resolution and response header helpers.

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse the caller's request ID when one is supplied, otherwise mint a
/// time-ordered one.
pub(super) fn resolve(incoming: Option<String>) -> String {
    incoming
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn echo(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "could not encode request id header: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn test_incoming_id_is_kept() {
        assert_eq!(resolve(Some(" abc-123 ".to_owned())), "abc-123");
    }

    #[test]
    fn test_blank_or_missing_id_is_generated() {
        assert_eq!(resolve(Some("   ".to_owned())).len(), 36);
        assert_eq!(resolve(None).len(), 36);
    }
}
