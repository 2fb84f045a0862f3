use crate::app_context::AppContext;
use crate::page::html;
use axum::extract::State;
use axum::response::Html;

#[axum::debug_handler]
pub async fn index(State(app_context): State<AppContext>) -> Html<String> {
    let networks = app_context.foodbanks.networks().await;
    Html(html::render_index(&networks))
}
