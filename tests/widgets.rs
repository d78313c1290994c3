use axum::http::StatusCode;

mod common;
use common::{body_string, get};

#[tokio::test]
async fn test_date_picker_navigates_across_years() {
    let response =
        get("/widgets/date-picker?name=date&year=2026&month=12&open=true&action=next").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("January 2027"));
    assert!(html.contains(r#"data-param="month" value="1""#));
}

#[tokio::test]
async fn test_date_picker_select_fills_hidden_input() {
    let html = body_string(
        get("/widgets/date-picker?name=date&year=2030&month=3&open=true&action=select&day=14")
            .await,
    )
    .await;

    assert!(html.contains(r#"name="date" value="2030-03-14""#));
    assert!(html.contains("14 Mar 2030"));
    assert!(!html.contains("picker-panel"));
}

#[tokio::test]
async fn test_time_picker_preset() {
    let html = body_string(
        get("/widgets/time-picker?name=time&open=true&action=preset&preset=evening").await,
    )
    .await;

    assert!(html.contains(r#"name="time" value="18:00""#));
    assert!(html.contains("6:00 PM"));
}

#[tokio::test]
async fn test_time_picker_ignores_garbage() {
    let response = get("/widgets/time-picker?value=99:99&action=explode&step=abc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains(r#"name="time" value="""#));
}

#[tokio::test]
async fn test_date_picker_out_of_range_year_shows_current_month() {
    let response = get("/widgets/date-picker?name=date&year=2147483647&month=3&open=true").await;
    assert_eq!(response.status(), StatusCode::OK);

    let current = devdarshan_calendar::CalendarView::of(devdarshan_calendar::today("UTC"));
    let html = body_string(response).await;
    assert!(html.contains(&current.title()));
    assert!(!html.contains("2147483647"));
}
