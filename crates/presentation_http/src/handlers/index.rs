//! Route index

use axum::response::Html;

/// Report routes listed on the index page, in display order
pub const REPORT_ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/start",
    "/api/v1.0/start/end",
];

/// List all available report routes
pub async fn index() -> Html<String> {
    Html(index_body())
}

fn index_body() -> String {
    format!("Available Routes:<br/>{}", REPORT_ROUTES.join("<br/>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lists_every_route_in_order() {
        assert_eq!(
            index_body(),
            "Available Routes:<br/>/api/v1.0/precipitation<br/>/api/v1.0/stations<br/>\
             /api/v1.0/tobs<br/>/api/v1.0/start<br/>/api/v1.0/start/end"
        );
    }

    #[tokio::test]
    async fn index_returns_html() {
        let Html(body) = index().await;
        assert!(body.starts_with("Available Routes:"));
        assert_eq!(body.matches("<br/>").count(), 5);
    }
}
