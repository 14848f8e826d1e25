//! Product Index Handler

use salvo::{prelude::*, writing::Text};
use tracing::info;

use product_app::domain::products::codec::encode_products;

use crate::{
    extensions::*,
    products::errors::{codec_status_error, into_status_error},
};

/// Product Index Handler
///
/// Returns every product as a JSON array.
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    info!("handle GET products");

    let state = depot.state_or_500()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    let body = encode_products(&products).map_err(codec_status_error)?;

    res.render(Text::Json(body));

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use product_app::domain::products::MockProductsService;

    use crate::{products::handlers::tests::make_product, test_helpers::products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_json_array() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product(1, "Latte"), make_product(2, "Espresso")]));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_default();

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            content_type.starts_with("application/json"),
            "unexpected content type {content_type}"
        );
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Latte", "desc": "", "price": 3.5, "sku": "ab-cd-ef" },
                { "id": 2, "name": "Espresso", "desc": "", "price": 3.5, "sku": "ab-cd-ef" },
            ])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_array() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().once().return_once(|| Ok(vec![]));

        let body: Value = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(body, json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_without_state_returns_500() {
        let service = Service::new(Router::with_path("products").get(handler));

        let res = TestClient::get("http://example.com/products")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
