use axum::http::StatusCode;
use time::{Duration, OffsetDateTime};

mod common;
use common::{body_string, get, post_form};

fn in_a_week() -> String {
    (OffsetDateTime::now_utc().date() + Duration::days(7)).to_string()
}

#[tokio::test]
async fn test_choose_type_page() {
    let response = get("/puja/1/book").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Choose Booking Type"));
    assert!(html.contains(r#"href="/puja/1/book/in-person""#));
    assert!(html.contains(r#"href="/puja/1/book/video-call""#));
}

#[tokio::test]
async fn test_details_page() {
    let response = get("/puja/1/book/video-call").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Video Call Booking"));
    assert!(html.contains(r#"value="google-meet""#));
    assert!(html.contains(r#"data-widget="/widgets/date-picker""#));
    assert!(html.contains(r#"data-widget="/widgets/time-picker""#));
}

#[tokio::test]
async fn test_unknown_kind_is_not_found() {
    let response = get("/puja/1/book/teleport").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_submission_is_rejected() {
    let response = post_form(
        "/puja/1/book/in-person",
        &[("full_name", ""), ("email", "not-an-email"), ("members", "1")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("field-error"));
    assert!(html.contains(r#"value="not-an-email""#));
}

#[tokio::test]
async fn test_valid_submission_is_confirmed() {
    let date = in_a_week();
    let response = post_form(
        "/puja/3/book/video-call",
        &[
            ("full_name", "Meera Joshi"),
            ("phone", "+91 98765 43210"),
            ("email", "meera@example.org"),
            ("date", &date),
            ("time", "18:00"),
            ("members", "250"),
            ("platform", "whatsapp"),
            ("gotra", "Kashyap"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Booking Confirmed"));
    assert!(html.contains("Booking reference"));
    assert!(html.contains("WhatsApp"));
    assert!(html.contains("<dd>99</dd>"));
}

#[tokio::test]
async fn test_date_outside_window_is_rejected() {
    let response = post_form(
        "/puja/3/book/in-person",
        &[
            ("full_name", "Meera Joshi"),
            ("phone", "9876543210"),
            ("email", "meera@example.org"),
            ("date", "2001-01-01"),
            ("members", "2"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
