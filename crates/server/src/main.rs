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

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use clap::Parser;
use passage_planner::PlanningSnapshot;
use passage_planner_api::{
    ApiError, DayEventsRequest, DayEventsResponse, MonthEventsRequest, MonthEventsResponse,
    PlannerState, PlanningSnapshotRequest, ScheduleRequest, ScheduleResponse,
    SnapshotSummaryResponse, TeamSummaryRequest, TeamSummaryResponse, get_day_events,
    get_month_events, get_schedule, get_team_summary, replace_snapshot,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Passage Planner Server - HTTP server for annual visit scheduling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON planning snapshot to load at startup. Starts empty if not provided.
    #[arg(short, long)]
    snapshot: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Allow weekend visits when a request does not say
    #[arg(long)]
    show_weekends: bool,
}

/// Application state shared across handlers.
///
/// The planner state is wrapped in a Mutex because reading a schedule may
/// fill the schedule cache.
#[derive(Clone)]
struct AppState {
    /// The current snapshot and its cached schedules.
    planner: Arc<Mutex<PlannerState>>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` when the server answers.
    status: String,
    /// The current snapshot revision.
    revision: u64,
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
        warn!(error = %err, "Request rejected");
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for PUT `/snapshot` endpoint.
///
/// Replaces the planning snapshot and discards cached schedules.
async fn handle_replace_snapshot(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<PlanningSnapshotRequest>,
) -> Result<Json<SnapshotSummaryResponse>, HttpError> {
    info!(
        projects = req.projects.len(),
        locks = req.locks.len(),
        "Handling replace_snapshot request"
    );

    let mut planner = app_state.planner.lock().await;
    let response: SnapshotSummaryResponse = replace_snapshot(&mut planner, &req)?;
    drop(planner);

    Ok(Json(response))
}

/// Handler for GET `/schedule` endpoint.
async fn handle_get_schedule(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, HttpError> {
    info!(year = query.year, "Handling get_schedule request");

    let mut planner = app_state.planner.lock().await;
    let response: ScheduleResponse = get_schedule(&mut planner, &query)?;
    drop(planner);

    Ok(Json(response))
}

/// Handler for GET `/events/day` endpoint.
async fn handle_get_day_events(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DayEventsRequest>,
) -> Result<Json<DayEventsResponse>, HttpError> {
    info!(date = %query.date, "Handling get_day_events request");

    let mut planner = app_state.planner.lock().await;
    let response: DayEventsResponse = get_day_events(&mut planner, &query)?;
    drop(planner);

    Ok(Json(response))
}

/// Handler for GET `/events/month` endpoint.
async fn handle_get_month_events(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MonthEventsRequest>,
) -> Result<Json<MonthEventsResponse>, HttpError> {
    info!(
        year = query.year,
        month = query.month,
        "Handling get_month_events request"
    );

    let mut planner = app_state.planner.lock().await;
    let response: MonthEventsResponse = get_month_events(&mut planner, &query)?;
    drop(planner);

    Ok(Json(response))
}

/// Handler for GET `/teams/summary` endpoint.
async fn handle_get_team_summary(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<TeamSummaryRequest>,
) -> Result<Json<TeamSummaryResponse>, HttpError> {
    info!(year = query.year, "Handling get_team_summary request");

    let mut planner = app_state.planner.lock().await;
    let response: TeamSummaryResponse = get_team_summary(&mut planner, &query)?;
    drop(planner);

    Ok(Json(response))
}

/// Handler for GET `/health` endpoint.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    let revision: u64 = app_state.planner.lock().await.revision();
    Json(HealthResponse {
        status: String::from("ok"),
        revision,
    })
}

/// Builds the application router with all routes.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/snapshot", put(handle_replace_snapshot))
        .route("/schedule", get(handle_get_schedule))
        .route("/events/day", get(handle_get_day_events))
        .route("/events/month", get(handle_get_month_events))
        .route("/teams/summary", get(handle_get_team_summary))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

/// Builds the initial planner state, loading a snapshot file if given.
fn load_planner(args: &Args) -> Result<PlannerState, Box<dyn std::error::Error>> {
    let mut planner: PlannerState = PlannerState::new(PlanningSnapshot::new(), args.show_weekends);

    if let Some(path) = &args.snapshot {
        info!("Loading planning snapshot from: {}", path);
        let contents: String = std::fs::read_to_string(path)?;
        let request: PlanningSnapshotRequest = serde_json::from_str(&contents)?;
        replace_snapshot(&mut planner, &request)?;
    } else {
        info!("Starting with an empty planning snapshot");
    }

    Ok(planner)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Passage Planner Server");

    let planner: PlannerState = load_planner(&args)?;
    let app_state: AppState = AppState {
        planner: Arc::new(Mutex::new(planner)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
