#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use devdarshan::config::{
    BookingConfig, Config, ObservabilityConfig, ServerConfig, SiteConfig,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            name: "Shri Dev Darshan".to_string(),
            base_url: "https://devdarshan.test".to_string(),
        },
        booking: BookingConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app() -> Router {
    devdarshan::create_app(test_config())
}

pub async fn get(uri: &str) -> Response<Body> {
    create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_with_cookie(uri: &str, cookie: &str) -> Response<Body> {
    create_test_app()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_form(uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
