/// Landing page
use axum::response::Html;

/// GET / - Static greeting, not part of the API
pub async fn index() -> Html<&'static str> {
    Html("<h1>User Directory</h1>")
}
