//! Update Product Handler

use salvo::{prelude::*, writing::Text};
use tracing::info;

use product_app::domain::products::codec::encode_product;

use crate::{
    extensions::*,
    products::{
        errors::{codec_status_error, into_status_error},
        payload::read_new_product,
    },
};

/// Product Update Handler
///
/// Replaces the product named by the `{id}` path segment. The identifier in
/// the body, if any, is ignored.
#[handler]
#[tracing::instrument(name = "products.update", skip_all, fields(product_id = tracing::field::Empty))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    info!("handle PUT products");

    let id = req.product_id_or_400()?;

    tracing::Span::current().record("product_id", tracing::field::display(id));

    let update = read_new_product(req).await?;
    let state = depot.state_or_500()?;

    let updated = state
        .app
        .products
        .update_product(id, update)
        .await
        .map_err(into_status_error)?;

    let body = encode_product(&updated).map_err(codec_status_error)?;

    info!(product_id = %updated.id, "updated product");

    res.render(Text::Json(body));

    Ok(())
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use product_app::domain::products::{
        MockProductsService, ProductsServiceError,
        models::{NewProduct, ProductId},
    };

    use crate::{products::handlers::tests::make_product, test_helpers::products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{id}").put(handler))
    }

    fn frappe() -> NewProduct {
        NewProduct {
            name: "Frappe".to_string(),
            description: "Iced".to_string(),
            price: 4.25,
            sku: "ab-cd-ef".to_string(),
        }
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .with(eq(ProductId::new(2)), eq(frappe()))
            .return_once(|id, update| {
                let mut product = make_product(id.into_inner(), &update.name);
                product.description = update.description;
                product.price = update.price;
                Ok(product)
            });

        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_create_product().never();

        let mut res = TestClient::put("http://example.com/products/2")
            .json(&json!({ "id": 99, "name": "Frappe", "desc": "Iced", "price": 4.25, "sku": "ab-cd-ef" }))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "id": 2, "name": "Frappe", "desc": "Iced", "price": 4.25, "sku": "ab-cd-ef" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_unknown_id_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|id, _| Err(ProductsServiceError::NotFound(id)));

        let res = TestClient::put("http://example.com/products/9999")
            .json(&json!({ "name": "Frappe", "price": 4.25, "sku": "ab-cd-ef" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_non_numeric_id_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put("http://example.com/products/abc")
            .json(&json!({ "name": "Frappe", "price": 4.25, "sku": "ab-cd-ef" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_invalid_body_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put("http://example.com/products/2")
            .json(&json!({ "name": "Frappe", "price": -1, "sku": "ab-cd-ef" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
