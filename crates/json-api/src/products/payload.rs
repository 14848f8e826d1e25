//! Inbound product payload handling.

use salvo::prelude::{Request, StatusError};

use product_app::domain::products::{codec::decode_product, models::NewProduct, validation::validate};

use crate::{
    extensions::*,
    products::errors::{codec_status_error, validation_status_error},
};

/// Decode and validate a product body, ahead of the create and update
/// handlers touching the store.
pub(crate) async fn read_new_product(req: &mut Request) -> Result<NewProduct, StatusError> {
    let body = req.payload().await.or_400("Unable to read request body")?;

    let product = NewProduct::from(decode_product(body).map_err(codec_status_error)?);

    validate(&product).map_err(validation_status_error)?;

    Ok(product)
}
