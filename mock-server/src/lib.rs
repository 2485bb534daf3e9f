use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

pub const DISTRICTS: &[&str] = &[
    "白云区", "从化区", "番禺区", "海珠区", "花都区", "黄埔区", "荔湾区", "南沙区", "天河区", "越秀区",
    "增城区",
];

const STREETS: &[(&str, &str)] = &[
    ("五山街道", "天河区"),
    ("冼村街道", "天河区"),
    ("天园街道", "天河区"),
    ("沙河街道", "天河区"),
    ("龙洞街道", "天河区"),
    ("北京街道", "越秀区"),
    ("农林街道", "越秀区"),
    ("同和街道", "白云区"),
    ("京溪街道", "白云区"),
    ("沙园街道", "海珠区"),
    ("沙湾街道", "番禺区"),
    ("沙面街道", "荔湾区"),
];

const ROADS: &[(&str, &[&str], &[&str])] = &[
    ("中山大道西", &["五山街道", "天园街道"], &["天河区"]),
    (
        "华南快速干线",
        &["五山街道", "龙洞街道", "同和街道", "京溪街道"],
        &["天河区", "白云区"],
    ),
    ("天河路", &["冼村街道", "天园街道"], &["天河区"]),
    ("五山路", &["五山街道"], &["天河区"]),
    ("北京路", &["北京街道"], &["越秀区"]),
    ("环市东路", &["农林街道", "冼村街道"], &["越秀区", "天河区"]),
    (
        "广园快速路",
        &["同和街道", "京溪街道", "龙洞街道"],
        &["白云区", "天河区"],
    ),
    ("江南大道", &["沙园街道"], &["海珠区"]),
    ("沙面大街", &["沙面街道"], &["荔湾区"]),
];

const MAX_PAGE_SIZE: u64 = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Street {
    pub street_name: String,
    pub district_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Road {
    pub road_name: String,
    pub streets: Vec<String>,
    pub districts: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total_records: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadsPage {
    pub meta: Meta,
    pub data: Vec<Road>,
}

#[derive(Deserialize, Default)]
pub struct StreetParams {
    pub district: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct RoadParams {
    pub district: Option<String>,
    pub street: Option<String>,
    pub name: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// How the server behaves, so clients can exercise their failure paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Healthy,
    /// Every route answers with this status code and an `{"error": ...}` body.
    Failing(u16),
    /// `/districts` answers 200 with numbers instead of names.
    MalformedDistricts,
}

pub fn app() -> Router {
    app_with(Mode::Healthy)
}

pub fn app_with(mode: Mode) -> Router {
    Router::new()
        .route("/districts", get(list_districts))
        .route("/streets", get(list_streets))
        .route("/roads", get(list_roads))
        .with_state(Arc::new(mode))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Mode::Healthy).await
}

pub async fn run_with(listener: TcpListener, mode: Mode) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(mode)).await
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn failing(mode: &Mode) -> Option<Response> {
    match mode {
        Mode::Failing(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Some(error_response(status, "service unavailable"))
        }
        _ => None,
    }
}

/// Missing and empty query values both mean "no filter".
fn filter(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_positive(name: &str, value: &Option<String>, default: u64) -> Result<u64, Response> {
    match filter(value) {
        None => Ok(default),
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("{name} must be a positive integer"),
            )),
        },
    }
}

async fn list_districts(State(mode): State<Arc<Mode>>) -> Response {
    if let Some(resp) = failing(&mode) {
        return resp;
    }
    if *mode == Mode::MalformedDistricts {
        return Json(json!([1, 2])).into_response();
    }
    Json(DISTRICTS).into_response()
}

async fn list_streets(State(mode): State<Arc<Mode>>, Query(params): Query<StreetParams>) -> Response {
    if let Some(resp) = failing(&mode) {
        return resp;
    }
    let district = filter(&params.district);
    let name = filter(&params.name);
    let streets: Vec<Street> = STREETS
        .iter()
        .filter(|(_, d)| district.map_or(true, |want| *d == want))
        .filter(|(s, _)| name.map_or(true, |want| s.contains(want)))
        .map(|(s, d)| Street {
            street_name: s.to_string(),
            district_name: d.to_string(),
        })
        .collect();
    Json(streets).into_response()
}

async fn list_roads(State(mode): State<Arc<Mode>>, Query(params): Query<RoadParams>) -> Response {
    if let Some(resp) = failing(&mode) {
        return resp;
    }
    let page = match parse_positive("page", &params.page, 1) {
        Ok(n) => n,
        Err(resp) => return resp,
    };
    let page_size = match parse_positive("pageSize", &params.page_size, 20) {
        Ok(n) if n <= MAX_PAGE_SIZE => n,
        Ok(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("pageSize must not exceed {MAX_PAGE_SIZE}"),
            )
        }
        Err(resp) => return resp,
    };

    let district = filter(&params.district);
    let street = filter(&params.street);
    let name = filter(&params.name);
    let matched: Vec<Road> = ROADS
        .iter()
        .filter(|(_, _, ds)| district.map_or(true, |want| ds.contains(&want)))
        .filter(|(_, ss, _)| street.map_or(true, |want| ss.contains(&want)))
        .filter(|(r, _, _)| name.map_or(true, |want| r.contains(want)))
        .map(|(r, ss, ds)| Road {
            road_name: r.to_string(),
            streets: ss.iter().map(|s| s.to_string()).collect(),
            districts: ds.iter().map(|d| d.to_string()).collect(),
        })
        .collect();

    let total_records = matched.len() as u64;
    let data = matched
        .into_iter()
        .skip((page - 1).saturating_mul(page_size) as usize)
        .take(page_size as usize)
        .collect();
    Json(RoadsPage {
        meta: Meta {
            total_records,
            page,
            page_size,
            total_pages: total_records.div_ceil(page_size),
        },
        data,
    })
    .into_response()
}
