use axum::response::Html;

use crate::pages::LANDING_PAGE;

pub async fn landing_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
