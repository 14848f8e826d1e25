//! HTTP span helpers.

/// Label used for any path outside the known route table.
pub(super) const UNMATCHED_ROUTE: &str = "{unmatched}";

/// Map a request path onto its route template, e.g. `/products/42` becomes
/// `/products/{id}`. The label set stays fixed whatever the client sends.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

    match segments.as_slice() {
        [] => "/",
        ["products"] => "/products",
        ["products", _] => "/products/{id}",
        ["metrics"] => "/metrics",
        _ => UNMATCHED_ROUTE,
    }
}
