//! App Router

use std::{sync::Arc, time::Duration};

use salvo::{
    Router, affix_state::inject, catch_panic::CatchPanic, timeout::Timeout,
    trailing_slash::remove_slash,
};

use crate::{observability, products, state::State};

/// Product routes with a method-not-allowed fallback on each known path.
pub(crate) fn products_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .post(products::create::handler)
        .goal(products::not_allowed::handler)
        .push(
            Router::with_path("{id}")
                .put(products::update::handler)
                .goal(products::not_allowed::handler),
        )
}

/// Full application router with shared middleware.
pub(crate) fn app_router(state: Arc<State>, request_timeout: Duration, metrics: bool) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(Timeout::new(request_timeout))
        .hoop(inject(state))
        .push(products_router());

    if metrics {
        router.push(Router::with_path("metrics").get(observability::metrics_handler))
    } else {
        router
    }
}
