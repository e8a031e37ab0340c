//! Exam Search API Integration Tests

use crate::support::test_app;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::new(test_app()).unwrap();

    let response = server.get("/api/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_first_chunk_of_full_schedule() {
    let server = TestServer::new(test_app()).unwrap();

    let response = server.get("/api/exams").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page: Value = response.json();
    assert_eq!(page["query"], "");
    assert_eq!(page["total_matches"], 19);
    assert_eq!(page["visible"], 8);
    assert_eq!(page["chunks_shown"], 1);
    assert_eq!(page["can_show_more"], true);
    assert_eq!(page["rows"][0][0], "ACCTG 200");
    assert_eq!(page["rows"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_course_search_is_case_insensitive() {
    let server = TestServer::new(test_app()).unwrap();

    let lower: Value = server
        .get("/api/exams")
        .add_query_param("course", "cmput")
        .await
        .json();
    let upper: Value = server
        .get("/api/exams")
        .add_query_param("course", "CMPUT")
        .await
        .json();

    assert_eq!(lower["rows"], upper["rows"]);
    assert_eq!(lower["total_matches"], 7);
    assert_eq!(lower["can_show_more"], false);
}

#[tokio::test]
async fn test_show_more_chunks() {
    let server = TestServer::new(test_app()).unwrap();

    let page: Value = server
        .get("/api/exams")
        .add_query_param("chunks", 2)
        .await
        .json();
    assert_eq!(page["visible"], 16);
    assert_eq!(page["can_show_more"], true);

    let page: Value = server
        .get("/api/exams")
        .add_query_param("chunks", 10)
        .await
        .json();
    assert_eq!(page["visible"], 19);
    assert_eq!(page["chunks_shown"], 3);
    assert_eq!(page["can_show_more"], false);
}

#[tokio::test]
async fn test_no_matches() {
    let server = TestServer::new(test_app()).unwrap();

    let page: Value = server
        .get("/api/exams")
        .add_query_param("course", "HIST 101")
        .await
        .json();

    assert_eq!(page["total_matches"], 0);
    assert_eq!(page["rows"], Value::Array(vec![]));
    assert_eq!(page["can_show_more"], false);
}
