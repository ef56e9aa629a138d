//! Axum router wiring.
//!
//! Each echo handler is wrapped once, here, with the logger from `AppState`.
//! Extractors bind the query and body first; the route closure then hands the
//! bound arguments to the wrapped handler. Blocking handlers run on the
//! blocking pool, suspending handlers are awaited in place.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};
use timedecho_core::instrument::Instrumented;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::handlers::{self, PostArgs, SleepArgs, SleepQuery};
use crate::ops;

pub fn build_router(state: AppState) -> Router {
    let log = state.log();

    let sync_get = Arc::new(Instrumented::blocking("sync_get", log.clone(), handlers::sync_get));
    let sync_post = Arc::new(Instrumented::blocking("sync_post", log.clone(), handlers::sync_post));
    let async_get = Arc::new(Instrumented::suspending("async_get", log.clone(), handlers::async_get));
    let async_post = Arc::new(Instrumented::suspending("async_post", log, handlers::async_post));

    for (route, handler, mode) in [
        ("GET /sync-get", sync_get.name(), sync_get.mode()),
        ("POST /sync-post", sync_post.name(), sync_post.mode()),
        ("GET /async-get", async_get.name(), async_get.mode()),
        ("POST /async-post", async_post.name(), async_post.mode()),
    ] {
        tracing::info!(route, handler, %mode, "route registered");
    }

    Router::new()
        .route(
            "/sync-get",
            get(move |State(app): State<AppState>, Query(q): Query<SleepQuery>| async move {
                let args = SleepArgs::new(q.sleep_sec, app.max_sleep_sec())?;
                let env = app.blocking().run(move || sync_get.call(args)).await??;
                Ok::<_, ApiError>(Json(env))
            }),
        )
        .route(
            "/sync-post",
            post(
                move |State(app): State<AppState>,
                      Query(q): Query<SleepQuery>,
                      Json(payload): Json<Map<String, Value>>| async move {
                    let sleep = SleepArgs::new(q.sleep_sec, app.max_sleep_sec())?;
                    let args = PostArgs { sleep, payload };
                    let env = app.blocking().run(move || sync_post.call(args)).await??;
                    Ok::<_, ApiError>(Json(env))
                },
            ),
        )
        .route(
            "/async-get",
            get(move |State(app): State<AppState>, Query(q): Query<SleepQuery>| async move {
                let args = SleepArgs::new(q.sleep_sec, app.max_sleep_sec())?;
                let env = async_get.call(args).await?;
                Ok::<_, ApiError>(Json(env))
            }),
        )
        .route(
            "/async-post",
            post(
                move |State(app): State<AppState>,
                      Query(q): Query<SleepQuery>,
                      Json(payload): Json<Map<String, Value>>| async move {
                    let sleep = SleepArgs::new(q.sleep_sec, app.max_sleep_sec())?;
                    let args = PostArgs { sleep, payload };
                    let env = async_post.call(args).await?;
                    Ok::<_, ApiError>(Json(env))
                },
            ),
        )
        .route("/healthz", get(ops::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
