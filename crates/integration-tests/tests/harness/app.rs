//! Demo application that routes every failure through the error pipeline

use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::get;
use faultline_core::{FieldFailure, OperationalError, RawFault};
use faultline_http::{ErrorPipeline, RequestInfo, guard};
use http::StatusCode;
use serde_json::json;

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<ErrorPipeline>,
}

pub fn demo_router(pipeline: Arc<ErrorPipeline>) -> Router {
    Router::new()
        .route("/ok", get(ok))
        .route("/cast", get(cast))
        .route("/validation", get(validation))
        .route("/duplicate", get(duplicate))
        .route("/token/invalid", get(invalid_token))
        .route("/token/expired", get(expired_token))
        .route("/missing", get(missing))
        .route("/unknown", get(unknown))
        .with_state(AppState { pipeline })
}

fn info(request: Request) -> RequestInfo {
    let (parts, _body) = request.into_parts();
    RequestInfo::from_parts(&parts)
}

async fn ok(State(state): State<AppState>, request: Request) -> Response {
    let request_info = info(request);
    guard(&state.pipeline, &request_info, async {
        Ok::<_, OperationalError>((StatusCode::OK, axum::Json(json!({"status": "success"}))))
    })
    .await
}

async fn cast(State(state): State<AppState>, request: Request) -> Response {
    let request_info = info(request);
    guard(&state.pipeline, &request_info, async {
        Err::<Response, _>(
            RawFault::new("CastError", "Cast to ObjectId failed")
                .with_path_value("id", json!("xyz"))
                .with_trace("CastError: Cast to ObjectId failed\n    at tour lookup"),
        )
    })
    .await
}

async fn validation(State(state): State<AppState>, request: Request) -> Response {
    let request_info = info(request);
    guard(&state.pipeline, &request_info, async {
        Err::<Response, _>(
            RawFault::new("ValidationError", "Tour validation failed")
                .with_field("difficulty", FieldFailure::new("Difficulty is either: easy, medium, difficult"))
                .with_field("name", FieldFailure::new("A tour must have a name")),
        )
    })
    .await
}

async fn duplicate(State(state): State<AppState>, request: Request) -> Response {
    let request_info = info(request);
    guard(&state.pipeline, &request_info, async {
        Err::<Response, _>(
            RawFault::new("MongoServerError", "E11000 duplicate key error")
                .with_code(faultline_classify::UNIQUE_VIOLATION_CODE)
                .with_key_value(json!({"name": "The Forest Hiker"})),
        )
    })
    .await
}

async fn invalid_token(State(state): State<AppState>, request: Request) -> Response {
    let request_info = info(request);
    guard(&state.pipeline, &request_info, async {
        Err::<Response, _>(RawFault::new("JsonWebTokenError", "invalid signature"))
    })
    .await
}

async fn expired_token(State(state): State<AppState>, request: Request) -> Response {
    let request_info = info(request);
    guard(&state.pipeline, &request_info, async {
        Err::<Response, _>(RawFault::new("TokenExpiredError", "jwt expired"))
    })
    .await
}

async fn missing(State(state): State<AppState>, request: Request) -> Response {
    let request_info = info(request);
    guard(&state.pipeline, &request_info, async {
        Err::<Response, _>(OperationalError::new("No tour found with that ID", 404))
    })
    .await
}

async fn unknown(State(state): State<AppState>, request: Request) -> Response {
    let request_info = info(request);
    guard(&state.pipeline, &request_info, async {
        Err::<Response, _>(
            RawFault::new("PoolTimeout", "connection pool exhausted")
                .with_trace("PoolTimeout: connection pool exhausted\n    at checkout\n    at session start"),
        )
    })
    .await
}
