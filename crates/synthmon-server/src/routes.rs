//! Plain-text telemetry route handlers.
//!
//! Each handler pops exactly one sample from every feed it is bound to,
//! waiting while a queue is empty, then renders a fixed template. Samples
//! are consumed permanently; nothing is cached across requests.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use synthmon_core::error::SynthmonError;
use synthmon_core::report;

use crate::app_state::AppState;
use crate::feeds::MetricFeed;

/// Error wrapper so handlers can use `?` over feed pops.
pub struct RouteError(SynthmonError);

impl From<SynthmonError> for RouteError {
    fn from(e: SynthmonError) -> Self {
        Self(e)
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

fn plain_text(body: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
}

async fn pop(state: &AppState, feed: &MetricFeed) -> Result<u64, RouteError> {
    let v = feed.next().await?;
    state
        .metrics()
        .samples_served
        .inc(&[("metric", feed.id().as_str())]);
    Ok(v)
}

pub async fn memory_usage(State(state): State<AppState>) -> Result<Response, RouteError> {
    state.metrics().http_requests.inc(&[("path", "/memory-usage")]);
    let feeds = state.feeds();
    let free = pop(&state, &feeds.free_mem).await?;
    let used = pop(&state, &feeds.used_mem).await?;
    let cached = pop(&state, &feeds.cached_mem).await?;
    Ok(plain_text(report::memory_usage(free, used, cached)))
}

pub async fn active_inactive_pages(State(state): State<AppState>) -> Result<Response, RouteError> {
    state.metrics().http_requests.inc(&[("path", "/active-inactive-pages")]);
    let feeds = state.feeds();
    let active = pop(&state, &feeds.active_pages).await?;
    let inactive = pop(&state, &feeds.inactive_pages).await?;
    Ok(plain_text(report::active_inactive_pages(active, inactive)))
}

pub async fn swap_info(State(state): State<AppState>) -> Result<Response, RouteError> {
    state.metrics().http_requests.inc(&[("path", "/swap-info")]);
    let feeds = state.feeds();
    let total = pop(&state, &feeds.total_swap).await?;
    let used = pop(&state, &feeds.used_swap).await?;
    let free = pop(&state, &feeds.free_swap).await?;
    Ok(plain_text(report::swap_info(total, used, free)))
}

pub async fn page_faults(State(state): State<AppState>) -> Result<Response, RouteError> {
    state.metrics().http_requests.inc(&[("path", "/page-faults")]);
    let feeds = state.feeds();
    let minor = pop(&state, &feeds.minor_faults).await?;
    let major = pop(&state, &feeds.major_faults).await?;
    Ok(plain_text(report::page_faults(minor, major)))
}

pub async fn top_memory_processes(State(state): State<AppState>) -> Result<Response, RouteError> {
    state.metrics().http_requests.inc(&[("path", "/top-memory-processes")]);
    // The pop keeps this endpoint paced like the others; the sample itself
    // is not part of the response.
    let _ = pop(&state, &state.feeds().proc_sample).await?;
    Ok(plain_text(report::top_processes()))
}
