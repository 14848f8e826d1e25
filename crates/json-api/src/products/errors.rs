//! Product Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use product_app::domain::products::{CodecError, ProductsServiceError, ValidationError};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound(id) => {
            warn!(product_id = %id, "product not found");

            StatusError::not_found().brief("Product not found")
        }
    }
}

pub(crate) fn codec_status_error(error: CodecError) -> StatusError {
    match error {
        CodecError::Decode(source) => {
            warn!("failed to decode product payload: {source}");

            StatusError::bad_request().brief("Unable to unmarshal JSON")
        }
        CodecError::Encode(source) => {
            error!("failed to encode products: {source}");

            StatusError::internal_server_error().brief("Unable to encode JSON")
        }
    }
}

pub(crate) fn validation_status_error(error: ValidationError) -> StatusError {
    let ValidationError::Failed(violations) = &error;

    warn!(fields = ?violations.fields().collect::<Vec<_>>(), "product failed validation");

    StatusError::bad_request()
        .brief("Invalid product payload")
        .detail(error.to_string())
}
