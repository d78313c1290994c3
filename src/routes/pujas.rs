use axum::response::IntoResponse;
use axum_extra::extract::Query;
use devdarshan_catalog::{CATALOG, FilterState, Offering, SHOW_ALL};

use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "pujas.html")]
pub struct PujasTemplate {
    pub layout: Layout,
    pub filter: FilterState,
    pub results: Vec<&'static Offering>,
    pub show_all: &'static str,
}

impl PujasTemplate {
    pub fn is_category(&self, value: &str) -> bool {
        match self.filter.category() {
            Some(category) => category == value,
            None => value == self.show_all,
        }
    }

    pub fn is_trending(&self, value: &str) -> bool {
        self.filter.trending() == Some(value)
    }

    pub fn is_region(&self, value: &str) -> bool {
        self.filter.region() == Some(value)
    }
}

pub async fn page(template: Template, Query(filter): Query<FilterState>) -> impl IntoResponse {
    let results = devdarshan_catalog::filter(CATALOG, &filter);

    tracing::debug!(
        search = filter.search(),
        category = filter.category(),
        trending = filter.trending(),
        region = filter.region(),
        results = results.len(),
        "catalog filtered"
    );

    template.render(PujasTemplate {
        layout: template.layout("/pujas"),
        filter,
        results,
        show_all: SHOW_ALL,
    })
}
