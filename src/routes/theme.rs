use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::{CookieJar, Form};
use serde::Deserialize;

use crate::view_state::{CookieStore, ViewState};

#[derive(Deserialize, Default)]
pub struct ThemeForm {
    #[serde(default)]
    pub redirect: String,
}

/// Only same-site paths are followed back. Browsers read `\` as `/` and drop
/// tabs and newlines, so those never pass.
fn redirect_target(redirect: &str) -> &str {
    let same_site = redirect.starts_with('/')
        && !redirect.starts_with("//")
        && !redirect.contains('\\')
        && !redirect.chars().any(char::is_control);

    if same_site { redirect } else { "/" }
}

pub async fn toggle(jar: CookieJar, Form(input): Form<ThemeForm>) -> impl IntoResponse {
    let mut store = CookieStore::new(jar);
    let mut view_state = ViewState::load(&store);
    let theme = view_state.toggle_theme(&mut store);

    tracing::debug!(theme = %theme, "theme changed");

    (store.into_jar(), Redirect::to(redirect_target(&input.redirect)))
}
