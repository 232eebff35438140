use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// `GET /`: dashboard page. Data is fetched client-side from `/api/winrates`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
