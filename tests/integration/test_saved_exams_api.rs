//! Saved Exams API Integration Tests
//!
//! The selection round-trips through the `savedExams` cookie.

use crate::support::{exchange, test_app};
use axum::http::StatusCode;
use serde_json::{json, Value};

const EXPIRY: &str = "Expires=Tue, 31 Dec 2024 08:30:00 GMT; Path=/; SameSite=Strict";
const DELETED: &str = "savedExams=; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Path=/; SameSite=Strict";

fn cmput_175() -> Value {
    json!(["CMPUT 175", "A1", "12/14/2024", "09:00 AM", "3 hrs", "", "MAIN GYM"])
}

fn math_100() -> Value {
    json!(["MATH 100", "A01", "12/09/2024", "02:00 PM", "3 hrs", "", "BUTTERDOME"])
}

fn manual_draft() -> Value {
    json!({
        "course": "CMPUT 175",
        "section": "A1",
        "date": "12/15/2024",
        "time": "09:00 AM",
        "length": "2",
        "window": "within 24h",
        "location": "Main Hall"
    })
}

#[tokio::test]
async fn test_first_visit_has_no_selection() {
    let response = exchange(test_app(), "GET", "/api/saved", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_toggle_sets_cookie_with_thirty_day_expiry() {
    let response = exchange(test_app(), "POST", "/api/saved/toggle", None, Some(cmput_175())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([cmput_175()]));
    assert_eq!(response.set_cookies.len(), 1);
    assert!(response.set_cookies[0].starts_with("savedExams="));
    assert!(response.set_cookies[0].ends_with(EXPIRY));

    let saved = exchange(test_app(), "GET", "/api/saved", Some(&response.cookie()), None).await;
    assert_eq!(saved.body, json!([cmput_175()]));
}

#[tokio::test]
async fn test_toggle_off_last_exam_deletes_cookie() {
    let added = exchange(test_app(), "POST", "/api/saved/toggle", None, Some(cmput_175())).await;

    let removed = exchange(
        test_app(),
        "POST",
        "/api/saved/toggle",
        Some(&added.cookie()),
        Some(cmput_175()),
    )
    .await;

    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body, json!([]));
    assert_eq!(removed.set_cookies, vec![DELETED.to_string()]);
}

#[tokio::test]
async fn test_remove_keeps_other_exams_in_order() {
    let first = exchange(test_app(), "POST", "/api/saved/toggle", None, Some(math_100())).await;
    let second = exchange(
        test_app(),
        "POST",
        "/api/saved/toggle",
        Some(&first.cookie()),
        Some(cmput_175()),
    )
    .await;
    assert_eq!(second.body, json!([math_100(), cmput_175()]));

    let removed = exchange(
        test_app(),
        "POST",
        "/api/saved/remove",
        Some(&second.cookie()),
        Some(math_100()),
    )
    .await;

    assert_eq!(removed.body, json!([cmput_175()]));
    assert!(removed.set_cookies[0].ends_with(EXPIRY));
}

#[tokio::test]
async fn test_corrupt_cookie_reads_as_empty() {
    let response = exchange(
        test_app(),
        "GET",
        "/api/saved",
        Some("savedExams=not-valid-json"),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_manual_entry_is_saved_with_normalized_length() {
    let created = exchange(test_app(), "POST", "/api/saved", None, Some(manual_draft())).await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        created.body,
        json!(["CMPUT 175", "A1", "12/15/2024", "09:00 AM", "2 hours", "within 24h", "Main Hall"])
    );

    let saved = exchange(test_app(), "GET", "/api/saved", Some(&created.cookie()), None).await;
    assert_eq!(saved.body[0][4], "2 hours");
}

#[tokio::test]
async fn test_invalid_manual_entry_is_rejected_per_field() {
    let mut draft = manual_draft();
    draft["course"] = json!("cmput 175");
    draft["length"] = json!("two hours");

    let response = exchange(test_app(), "POST", "/api/saved", None, Some(draft)).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.set_cookies.is_empty());
    assert_eq!(response.body["error"], "ValidationError");
    assert_eq!(
        response.body["details"],
        json!([
            {"field": "course", "message": "Format should be like \"CMPUT 175\""},
            {"field": "length", "message": "Format: X hours or X hrs"}
        ])
    );
}

#[tokio::test]
async fn test_duplicate_manual_entry_is_rejected() {
    let created = exchange(test_app(), "POST", "/api/saved", None, Some(manual_draft())).await;

    let duplicate = exchange(
        test_app(),
        "POST",
        "/api/saved",
        Some(&created.cookie()),
        Some(manual_draft()),
    )
    .await;

    assert_eq!(duplicate.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        duplicate.body["details"],
        json!([{"field": "section", "message": "This exam is already saved"}])
    );
}

#[tokio::test]
async fn test_selection_too_large_for_cookie_is_an_error() {
    let mut cookie: Option<String> = None;

    for i in 0..60 {
        let exam = json!([format!("CMPUT {}", 100 + i), "A01", "12/14/2024", "09:00 AM", "3 hrs", "", "MAIN GYM"]);
        let response = exchange(test_app(), "POST", "/api/saved/toggle", cookie.as_deref(), Some(exam)).await;

        if response.status != StatusCode::OK {
            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.body["error"], "StorageError");
            assert!(response.set_cookies.is_empty());

            // The browser keeps the last selection that fit
            let saved = exchange(test_app(), "GET", "/api/saved", cookie.as_deref(), None).await;
            assert_eq!(saved.body.as_array().unwrap().len(), i);
            return;
        }
        cookie = Some(response.cookie());
    }

    panic!("selection never outgrew the cookie");
}
