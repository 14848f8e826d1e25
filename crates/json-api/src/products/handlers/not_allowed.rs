//! Method Not Allowed Handler

use salvo::prelude::*;
use tracing::info;

/// Fallback for a known path requested with an unsupported method.
#[handler]
pub(crate) async fn handler(req: &mut Request, res: &mut Response) {
    info!(method = %req.method(), path = %req.uri().path(), "handle unsupported method");

    res.render(StatusError::method_not_allowed());
}
