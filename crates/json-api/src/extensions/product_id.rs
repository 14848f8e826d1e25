//! Product ID path parameter parsing.

use salvo::prelude::{Request, StatusError};

use product_app::domain::products::models::ProductId;

use crate::extensions::*;

const PRODUCT_ID_PARAM: &str = "id";

pub(crate) trait ProductIdExt {
    fn product_id_or_400(&self) -> Result<ProductId, StatusError>;
}

impl ProductIdExt for Request {
    fn product_id_or_400(&self) -> Result<ProductId, StatusError> {
        let segment = self.param::<String>(PRODUCT_ID_PARAM).unwrap_or_default();

        parse_product_id(&segment)
    }
}

/// Only plain ASCII digits are accepted; `parse::<u64>` alone would let a
/// leading `+` through.
fn parse_product_id(segment: &str) -> Result<ProductId, StatusError> {
    if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(StatusError::bad_request().brief("Invalid product id"));
    }

    segment
        .parse::<u64>()
        .map(ProductId::new)
        .or_400("Invalid product id")
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn test_numeric_segment_parses() {
        assert_eq!(parse_product_id("42").ok(), Some(ProductId::new(42)));
    }

    #[test]
    fn test_non_numeric_segment_is_bad_request() {
        for segment in ["abc", "-1", "+1", "1.5", " 1", ""] {
            let status = parse_product_id(segment).err().map(|error| error.code);

            assert_eq!(
                status,
                Some(StatusCode::BAD_REQUEST),
                "{segment:?} should be rejected"
            );
        }
    }
}
