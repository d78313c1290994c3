use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use std::convert::Infallible;
use time::Date;

use crate::navigation::{self, NavItem};
use crate::view_state::{CookieStore, Overlay, Theme, ViewState};

/// Chrome shared by every full page: header, sub-header, offcanvas panels and footer.
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_name: String,
    pub theme: Theme,
    pub scroll_locked: bool,
    pub menu_open: bool,
    pub catalog_open: bool,
    pub current_path: String,
    pub active: &'static str,
    pub header: &'static [NavItem],
    pub subheader: &'static [NavItem],
    pub subheader_compact_after: u32,
    pub quick_links: &'static [NavItem],
    pub legal_links: &'static [NavItem],
    pub languages: &'static [&'static str],
    pub categories: &'static [&'static str],
    pub trending: &'static [&'static str],
    pub regions: &'static [&'static str],
    pub year: i32,
}

impl Layout {
    pub fn is_active(&self, path: &str) -> bool {
        self.active == path
    }

    /// Current path without its query, used to close overlays without scripts.
    pub fn base_path(&self) -> &str {
        self.current_path.split('?').next().unwrap_or("/")
    }
}

#[derive(Deserialize)]
struct OverlayQuery {
    overlay: Option<Overlay>,
}

pub struct Template {
    pub timezone: String,
    pub view_state: ViewState,
    current_path: String,
    config: crate::config::Config,
}

impl Template {
    pub fn config(&self) -> &crate::config::Config {
        &self.config
    }

    /// Visitor's local date, from the `TS-Timezone` header.
    pub fn today(&self) -> Date {
        devdarshan_calendar::today(&self.timezone)
    }

    pub fn layout(&self, active: &'static str) -> Layout {
        Layout {
            site_name: self.config.site.name.to_owned(),
            theme: self.view_state.theme(),
            scroll_locked: self.view_state.scroll_locked(),
            menu_open: self.view_state.is_open(Overlay::Menu),
            catalog_open: self.view_state.is_open(Overlay::Catalog),
            current_path: self.current_path.to_owned(),
            active,
            header: navigation::HEADER,
            subheader: navigation::SUBHEADER,
            subheader_compact_after: navigation::SUBHEADER_COMPACT_AFTER,
            quick_links: navigation::QUICK_LINKS,
            legal_links: navigation::LEGAL_LINKS,
            languages: &navigation::LANGUAGES,
            categories: &devdarshan_catalog::CATEGORIES,
            trending: &devdarshan_catalog::TRENDING,
            regions: &devdarshan_catalog::REGIONS,
            year: self.today().year(),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_status(StatusCode::OK, template)
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }

    pub fn not_found(&self) -> Response {
        self.render_status(
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                layout: self.layout(""),
            },
        )
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let mut view_state = ViewState::load(&CookieStore::new(jar));

        if let Ok(Query(OverlayQuery {
            overlay: Some(overlay),
        })) = Query::<OverlayQuery>::try_from_uri(&parts.uri)
        {
            view_state.open_overlay(overlay);
        }

        let timezone = parts
            .headers
            .get("TS-Timezone")
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or_else(|| "UTC".to_string());

        let current_path = parts
            .uri
            .path_and_query()
            .map(|p| p.as_str().to_owned())
            .unwrap_or_else(|| "/".to_owned());

        Ok(Template {
            timezone,
            view_state,
            current_path,
            config: state.config.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

/// Unwraps an `Option`, answering with the not found page on `None`.
#[macro_export]
macro_rules! try_page_response {
    (opt: $option:expr, $template:expr) => {
        match $option {
            Some(r) => r,
            None => return $template.not_found(),
        }
    };
}
