use axum::response::{Html, Redirect};

static APP_HTML: &str = include_str!("../web/app.html");

pub async fn app_page() -> Html<&'static str> {
    Html(APP_HTML)
}

pub async fn redirect_to_app() -> Redirect {
    Redirect::permanent("/app")
}
