use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::assets::AssetsService;
use crate::template::Template;

mod booking;
mod health;
mod index;
mod puja;
mod pujas;
mod theme;
pub mod widgets;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/pujas", get(pujas::page))
        .route("/puja/{id}", get(puja::page))
        .route("/puja/{id}/quick-view", get(puja::quick_view))
        .route("/puja/{id}/share", get(puja::share))
        .route("/puja/{id}/book", get(booking::choose))
        .route(
            "/puja/{id}/book/{kind}",
            get(booking::details).post(booking::submit),
        )
        .route("/widgets/date-picker", get(widgets::date_picker))
        .route("/widgets/time-picker", get(widgets::time_picker))
        .route("/theme", post(theme::toggle))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
}
