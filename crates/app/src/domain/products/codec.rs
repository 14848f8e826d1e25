//! Product wire format.
//!
//! Products travel as JSON objects with the keys `id`, `name`, `desc`,
//! `price` and `sku`. Timestamps are server-side state and never appear on
//! the wire.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::products::models::{NewProduct, Product, ProductId};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unable to decode product: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unable to encode products: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Product Payload
///
/// Missing fields take their zero value and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub price: f64,
    pub sku: String,
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            sku: product.sku.clone(),
        }
    }
}

impl From<ProductPayload> for NewProduct {
    fn from(payload: ProductPayload) -> Self {
        NewProduct {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            sku: payload.sku,
        }
    }
}

/// Serialise products, in order, to a JSON array.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when serialisation fails.
pub fn encode_products(products: &[Product]) -> Result<String, CodecError> {
    let payloads: Vec<ProductPayload> = products.iter().map(ProductPayload::from).collect();

    serde_json::to_string(&payloads).map_err(CodecError::Encode)
}

/// Serialise a single product to a JSON object.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when serialisation fails.
pub fn encode_product(product: &Product) -> Result<String, CodecError> {
    serde_json::to_string(&ProductPayload::from(product)).map_err(CodecError::Encode)
}

/// Parse a single JSON object into a product payload.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed input.
pub fn decode_product(bytes: &[u8]) -> Result<ProductPayload, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    fn make_product() -> Product {
        Product {
            id: ProductId::new(7),
            name: "Mocha".to_string(),
            description: "Chocolate coffee".to_string(),
            price: 3.5,
            sku: "ab-cd-ef".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    #[test]
    fn test_encoded_products_round_trip_wire_fields() -> TestResult {
        let product = make_product();

        let encoded: Vec<Value> =
            serde_json::from_str(&encode_products(std::slice::from_ref(&product))?)?;

        let decoded = encoded
            .iter()
            .map(|item| decode_product(item.to_string().as_bytes()))
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(decoded, vec![ProductPayload::from(&product)]);

        Ok(())
    }

    #[test]
    fn test_encoding_omits_timestamps() -> TestResult {
        let encoded: Value = serde_json::from_str(&encode_product(&make_product())?)?;

        assert_eq!(
            encoded,
            json!({
                "id": 7,
                "name": "Mocha",
                "desc": "Chocolate coffee",
                "price": 3.5,
                "sku": "ab-cd-ef",
            })
        );

        Ok(())
    }

    #[test]
    fn test_decode_defaults_missing_and_ignores_unknown_fields() -> TestResult {
        let payload = decode_product(br#"{"name":"Tea","colour":"green"}"#)?;

        assert_eq!(
            payload,
            ProductPayload {
                name: "Tea".to_string(),
                ..ProductPayload::default()
            }
        );

        Ok(())
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let result = decode_product(b"{\"name\":");

        assert!(
            matches!(result, Err(CodecError::Decode(_))),
            "expected Decode error, got {result:?}"
        );
    }

    #[test]
    fn test_new_product_drops_caller_id() {
        let payload = ProductPayload {
            id: ProductId::new(99),
            ..ProductPayload::from(&make_product())
        };

        let product = NewProduct::from(payload);

        assert_eq!(product.name, "Mocha");
        assert_eq!(product.sku, "ab-cd-ef");
    }
}
