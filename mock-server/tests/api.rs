use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Mode, RoadsPage, Street, DISTRICTS};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- districts ---

#[tokio::test]
async fn districts_lists_every_district() {
    let resp = app().oneshot(get("/districts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let districts: Vec<String> = body_json(resp).await;
    assert_eq!(districts.len(), DISTRICTS.len());
    assert!(districts.iter().any(|d| d == "天河区"));
}

#[tokio::test]
async fn districts_accepts_trailing_question_mark() {
    let resp = app().oneshot(get("/districts?")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_mode_returns_numbers() {
    let resp = app_with(Mode::MalformedDistricts)
        .oneshot(get("/districts"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!([1, 2]));
}

#[tokio::test]
async fn failing_mode_returns_error_body() {
    let resp = app_with(Mode::Failing(500))
        .oneshot(get("/districts"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

// --- streets ---

#[tokio::test]
async fn streets_filter_by_district() {
    let resp = app()
        .oneshot(get("/streets?district=%E5%A4%A9%E6%B2%B3%E5%8C%BA"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let streets: Vec<Street> = body_json(resp).await;
    assert!(!streets.is_empty());
    assert!(streets.iter().all(|s| s.district_name == "天河区"));
}

#[tokio::test]
async fn streets_fuzzy_name_search() {
    // name=沙
    let resp = app().oneshot(get("/streets?name=%E6%B2%99")).await.unwrap();

    let streets: Vec<Street> = body_json(resp).await;
    assert!(streets.len() > 1);
    assert!(streets.iter().all(|s| s.street_name.contains('沙')));
}

#[tokio::test]
async fn streets_empty_filter_is_ignored() {
    let all: Vec<Street> = body_json(app().oneshot(get("/streets")).await.unwrap()).await;
    let blank: Vec<Street> =
        body_json(app().oneshot(get("/streets?district=&name=")).await.unwrap()).await;
    assert_eq!(all, blank);
}

#[tokio::test]
async fn streets_unknown_district_is_empty() {
    let resp = app().oneshot(get("/streets?district=nowhere")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"[]");
}

// --- roads ---

#[tokio::test]
async fn roads_default_paging() {
    let resp = app().oneshot(get("/roads")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: RoadsPage = body_json(resp).await;
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.page_size, 20);
    assert_eq!(page.meta.total_records as usize, page.data.len());
    assert_eq!(page.meta.total_pages, 1);
}

#[tokio::test]
async fn roads_reverse_lookup_by_name() {
    // name=中山大道西
    let resp = app()
        .oneshot(get(
            "/roads?name=%E4%B8%AD%E5%B1%B1%E5%A4%A7%E9%81%93%E8%A5%BF",
        ))
        .await
        .unwrap();

    let page: RoadsPage = body_json(resp).await;
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].districts, vec!["天河区"]);
    assert!(page.data[0].streets.contains(&"五山街道".to_string()));
}

#[tokio::test]
async fn roads_spanning_two_districts_match_either() {
    // district=白云区
    let resp = app()
        .oneshot(get("/roads?district=%E7%99%BD%E4%BA%91%E5%8C%BA"))
        .await
        .unwrap();

    let page: RoadsPage = body_json(resp).await;
    assert!(page
        .data
        .iter()
        .any(|r| r.road_name == "华南快速干线" && r.districts.len() == 2));
}

#[tokio::test]
async fn roads_paginate() {
    let resp = app().oneshot(get("/roads?page=2&pageSize=2")).await.unwrap();

    let page: RoadsPage = body_json(resp).await;
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.page_size, 2);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.total_pages, page.meta.total_records.div_ceil(2));
}

#[tokio::test]
async fn roads_page_past_end_is_empty() {
    let resp = app().oneshot(get("/roads?page=99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: RoadsPage = body_json(resp).await;
    assert!(page.data.is_empty());
    assert!(page.meta.total_records > 0);
}

#[tokio::test]
async fn roads_bad_page_returns_400_with_error() {
    let resp = app().oneshot(get("/roads?page=0")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "page must be a positive integer");
}

#[tokio::test]
async fn roads_oversized_page_size_returns_400() {
    let resp = app().oneshot(get("/roads?pageSize=1000")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/provinces")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
