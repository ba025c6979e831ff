//! Root endpoint handler.
//!
//! Lists the available API routes as a small HTML fragment.

use axum::response::Html;

const ROUTE_LISTING: &str = "Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/&lt;start&gt;<br/>\
/api/v1.0/&lt;start&gt;/&lt;end&gt;";

/// Handle GET / requests
pub async fn index_handler() -> Html<&'static str> {
    Html(ROUTE_LISTING)
}
