use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use devdarshan_catalog::{HIGHLIGHTS, INCLUDED, Offering, PROCESS, REVIEWS, Review};
use devdarshan_shared::share::ShareData;
use serde_json::json;

use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "puja.html")]
pub struct PujaTemplate {
    pub layout: Layout,
    pub offering: &'static Offering,
    pub included: &'static [&'static str],
    pub process: &'static [(&'static str, &'static str)],
    pub highlights: &'static [&'static str],
    pub reviews: &'static [Review],
}

#[derive(askama::Template)]
#[template(path = "partials/puja-quick-view.html")]
pub struct QuickViewTemplate {
    pub offering: &'static Offering,
    pub included: &'static [&'static str],
}

pub async fn page(template: Template, Path(id): Path<u32>) -> Response {
    let offering = crate::try_page_response!(opt: devdarshan_catalog::find(id), template);

    template.render(PujaTemplate {
        layout: template.layout("/pujas"),
        offering,
        included: &INCLUDED,
        process: &PROCESS,
        highlights: &HIGHLIGHTS,
        reviews: REVIEWS,
    })
}

pub async fn quick_view(template: Template, Path(id): Path<u32>) -> Response {
    let offering = crate::try_page_response!(opt: devdarshan_catalog::find(id), template);

    template.render(QuickViewTemplate {
        offering,
        included: &INCLUDED[..4],
    })
}

pub fn share_data(offering: &Offering, config: &crate::config::Config) -> ShareData {
    ShareData::new(
        offering.title,
        offering.description,
        config.url(&format!("/puja/{}", offering.id)),
    )
}

pub async fn share(template: Template, Path(id): Path<u32>) -> Response {
    let Some(offering) = devdarshan_catalog::find(id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "puja not found" })),
        )
            .into_response();
    };

    Json(share_data(offering, template.config())).into_response()
}
