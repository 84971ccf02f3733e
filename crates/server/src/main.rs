// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod wiring;

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use race_schedule_api::{
    ApiError, ListCalendarResponse, ListPlacesResponse, ListRacesResponse, MessageResponse,
    RegisterResponse, SearchQuery, UpdateRequest, cleanse_calendar, fetch_calendar, fetch_places,
    fetch_races, update_calendar, update_places, update_races,
};
use race_schedule_domain::RaceType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};
use wiring::{AppState, build_app_state, calendar_config, calendar_gateway, storage_gateway};

/// Race Schedule Server - aggregates race schedules into calendars
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, env = "RACE_SCHEDULE_PORT", default_value_t = 3000)]
    port: u16,

    /// Directory holding the CSV object store. If not provided, uses in-memory storage.
    #[arg(long, env = "RACE_SCHEDULE_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// Bearer token for the Google Calendar API. If not provided, uses an in-memory calendar.
    #[arg(long, env = "RACE_SCHEDULE_CALENDAR_TOKEN", hide_env_values = true)]
    calendar_token: Option<String>,

    /// Calendar id for JRA races
    #[arg(long, env = "JRA_CALENDAR_ID")]
    jra_calendar_id: Option<String>,

    /// Calendar id for NAR races
    #[arg(long, env = "NAR_CALENDAR_ID")]
    nar_calendar_id: Option<String>,

    /// Calendar id for overseas races
    #[arg(long, env = "OVERSEAS_CALENDAR_ID")]
    overseas_calendar_id: Option<String>,

    /// Calendar id for keirin races
    #[arg(long, env = "KEIRIN_CALENDAR_ID")]
    keirin_calendar_id: Option<String>,

    /// Calendar id for autorace races
    #[arg(long, env = "AUTORACE_CALENDAR_ID")]
    autorace_calendar_id: Option<String>,

    /// Calendar id for boatrace races
    #[arg(long, env = "BOATRACE_CALENDAR_ID")]
    boatrace_calendar_id: Option<String>,
}

impl Args {
    fn calendar_ids(&self) -> [(RaceType, Option<String>); 6] {
        [
            (RaceType::Jra, self.jra_calendar_id.clone()),
            (RaceType::Nar, self.nar_calendar_id.clone()),
            (RaceType::Overseas, self.overseas_calendar_id.clone()),
            (RaceType::Keirin, self.keirin_calendar_id.clone()),
            (RaceType::Autorace, self.autorace_calendar_id.clone()),
            (RaceType::Boatrace, self.boatrace_calendar_id.clone()),
        ]
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

#[allow(clippy::unused_async)] // axum handlers are async
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

async fn handle_fetch_places(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ListPlacesResponse>, HttpError> {
    Ok(Json(fetch_places(&app_state.place_usecase, &query).await?))
}

/// Answers with the aggregate register code as the HTTP status.
fn register_response(response: RegisterResponse) -> (StatusCode, Json<RegisterResponse>) {
    match StatusCode::from_u16(response.code) {
        Ok(status) => (status, Json(response)),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, Json(response)),
    }
}

async fn handle_update_places(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), HttpError> {
    Ok(register_response(update_places(&app_state.place_usecase, &request).await?))
}

async fn handle_fetch_races(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ListRacesResponse>, HttpError> {
    Ok(Json(fetch_races(&app_state.race_usecase, &query).await?))
}

async fn handle_update_races(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), HttpError> {
    Ok(register_response(update_races(&app_state.race_usecase, &request).await?))
}

async fn handle_fetch_calendar(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ListCalendarResponse>, HttpError> {
    Ok(Json(fetch_calendar(&app_state.calendar_usecase, &query).await?))
}

async fn handle_update_calendar(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    Ok(Json(update_calendar(&app_state.calendar_usecase, &request).await?))
}

async fn handle_cleanse_calendar(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    Ok(Json(cleanse_calendar(&app_state.calendar_usecase, &request).await?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/places", get(handle_fetch_places))
        .route("/places", post(handle_update_places))
        .route("/races", get(handle_fetch_races))
        .route("/races", post(handle_update_races))
        .route("/calendar", get(handle_fetch_calendar))
        .route("/calendar", post(handle_update_calendar))
        .route("/calendar/cleanse", post(handle_cleanse_calendar))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Race Schedule Server");

    let storage = storage_gateway(args.storage_dir.as_deref());
    let calendar = calendar_gateway(args.calendar_token.as_deref())?;
    let config = calendar_config(&args.calendar_ids());
    for race_type in RaceType::ALL {
        if !config.is_configured(race_type) {
            info!(%race_type, "No calendar configured");
        }
    }

    let app: Router = build_router(build_app_state(&storage, calendar, config));

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use race_schedule_calendar::{CalendarConfig, CalendarGateway, InMemoryCalendarGateway};
    use race_schedule_persistence::{InMemoryStorageGateway, StorageGateway};
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOATRACE_RACE_CSV: &str = "id,name,stage,dateTime,location,grade,number,updateDate\n\
        boatrace202406201212,グランプリ,優勝戦,2024-06-20 16:30:00,住之江,SG,12,2024-06-01 09:00:00\n\
        boatrace202406201211,住之江選抜,準優勝戦,2024-06-20 15:55:00,住之江,GⅠ,11,2024-06-01 09:00:00\n";

    const KEIRIN_RACE_CSV: &str = "id,name,stage,dateTime,location,grade,number,updateDate\n\
        keirin202406052801,立川記念,S級決勝,2024-06-05 15:40:00,立川,GⅢ,1,2024-06-01 09:00:00\n";

    /// Helper to create test app state over in-memory storage and calendar.
    fn create_test_app_state() -> AppState {
        let objects = [("boatrace/raceList.csv", BOATRACE_RACE_CSV)];
        let storage: Arc<dyn StorageGateway> =
            Arc::new(InMemoryStorageGateway::with_objects(objects));
        let calendar: Arc<dyn CalendarGateway> = Arc::new(InMemoryCalendarGateway::new());
        build_app_state(
            &storage,
            calendar,
            CalendarConfig::new().with_calendar(RaceType::Boatrace, "boatrace@calendar"),
        )
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_request(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    fn june_body() -> serde_json::Value {
        serde_json::json!({
            "startDate": "2024-06-01",
            "finishDate": "2024-06-30",
            "raceTypeList": ["BOATRACE"],
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let app: Router = build_router(create_test_app_state());

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_fetch_races_with_filters() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_request(
                "/races?startDate=2024-06-01&finishDate=2024-06-30&raceType=BOATRACE&grade=SG",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json: serde_json::Value = body_json(response).await;
        let races = json["races"].as_array().unwrap();
        assert_eq!(races.len(), 1);
        assert_eq!(races[0]["id"], "boatrace202406201212");
        assert_eq!(races[0]["stage"], "優勝戦");
    }

    #[tokio::test]
    async fn test_unknown_race_type_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_request(
                "/places?startDate=2024-06-01&finishDate=2024-06-30&raceType=CYCLING",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["error"], true);
        assert!(json["message"].as_str().unwrap().contains("raceType"));
    }

    #[tokio::test]
    async fn test_update_places_without_web_sources_fails() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_request("/places", &june_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["code"], 500);
        assert_eq!(json["message"], "No web place repository for BOATRACE");
        assert_eq!(json["successDataCount"], 0);
    }

    #[tokio::test]
    async fn test_update_races_without_web_sources_fails() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_request("/races", &june_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["code"], 500);
        assert_eq!(json["message"], "No web race repository for BOATRACE");
    }

    #[tokio::test]
    async fn test_update_then_list_calendar() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .clone()
            .oneshot(post_request("/calendar", &june_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app
            .oneshot(get_request(
                "/calendar?startDate=2024-06-01&finishDate=2024-06-30&raceType=BOATRACE",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["events"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_calendar_update_fails_for_unconfigured_race_type() {
        let app: Router = build_router(create_test_app_state());
        let body: serde_json::Value = serde_json::json!({
            "startDate": "2024-06-01",
            "finishDate": "2024-06-30",
            "raceTypeList": ["KEIRIN"],
        });
        let objects = [("keirin/raceList.csv", KEIRIN_RACE_CSV)];
        let storage: Arc<dyn StorageGateway> =
            Arc::new(InMemoryStorageGateway::with_objects(objects));
        let keirin_app: Router = build_router(build_app_state(
            &storage,
            Arc::new(InMemoryCalendarGateway::new()),
            CalendarConfig::new(),
        ));

        let response = app
            .oneshot(post_request("/calendar/cleanse", &june_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = keirin_app
            .oneshot(post_request("/calendar", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_file_storage_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage: Arc<dyn StorageGateway> = storage_gateway(Some(dir.path()));
        let app: Router = build_router(build_app_state(
            &storage,
            Arc::new(InMemoryCalendarGateway::new()),
            CalendarConfig::new(),
        ));

        let response = app
            .oneshot(get_request("/places?startDate=2024-06-01&finishDate=2024-06-30"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json: serde_json::Value = body_json(response).await;
        assert!(json["places"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_calendar_config_skips_blank_ids() {
        let config: CalendarConfig = calendar_config(&[
            (RaceType::Jra, Some(String::from("jra@calendar"))),
            (RaceType::Nar, Some(String::from("  "))),
            (RaceType::Keirin, None),
        ]);

        assert!(config.is_configured(RaceType::Jra));
        assert!(!config.is_configured(RaceType::Nar));
        assert!(!config.is_configured(RaceType::Keirin));
    }
}
