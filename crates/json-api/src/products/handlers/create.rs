//! Create Product Handler

use salvo::{http::header::LOCATION, prelude::*, writing::Text};
use tracing::info;

use product_app::domain::products::codec::encode_product;

use crate::{
    extensions::*,
    products::{
        errors::{codec_status_error, into_status_error},
        payload::read_new_product,
    },
};

/// Create Product Handler
///
/// Responds `201 Created` with the stored product and its location.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    info!("handle POST products");

    let product = read_new_product(req).await?;
    let state = depot.state_or_500()?;

    let created = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    let body = encode_product(&created).map_err(codec_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(product_id = %created.id, "created product");

    res.render(Text::Json(body));

    Ok(())
}
