//! Temperature summary handlers
//!
//! `start` and `end` are taken verbatim from the path and compared as text
//! against the stored dates. A malformed or inverted range is not an error;
//! it matches no rows and every statistic comes back `null`. Segments that
//! do not percent-decode to UTF-8 are decoded lossily instead of rejected.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::Uri,
};
use domain::{DateRange, TemperatureSummary};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Prefix shared by the summary routes
const SUMMARY_PREFIX: &str = "/api/v1.0/";

/// MIN/MAX/AVG temperature over a date range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummaryResponse {
    #[serde(rename = "Min Temperature")]
    pub min: Option<f64>,
    #[serde(rename = "Max Temperature")]
    pub max: Option<f64>,
    #[serde(rename = "Avg Temperature")]
    pub avg: Option<f64>,
}

impl From<TemperatureSummary> for TemperatureSummaryResponse {
    fn from(summary: TemperatureSummary) -> Self {
        Self {
            min: summary.min,
            max: summary.max,
            avg: summary.avg,
        }
    }
}

async fn summarize(
    state: &AppState,
    range: DateRange,
) -> Result<Json<Vec<TemperatureSummaryResponse>>, ApiError> {
    if range.is_inverted() {
        info!(range = %range, "Inverted range, summary will be empty");
    }

    let summary = state
        .climate_service
        .temperature_summary(&range)
        .await
        .inspect_err(|e| warn!(error = %e, range = %range, "Failed to summarize temperatures"))?;

    Ok(Json(vec![summary.into()]))
}

/// Summary over every date on or after `start`
///
/// GET /api/v1.0/{start}
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn summary_from(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<TemperatureSummaryResponse>>, ApiError> {
    let start = match path {
        Ok(Path(start)) => start,
        Err(rejection) => {
            debug!(error = %rejection, "Decoding start lossily");
            lossy_segments(&uri)
                .into_iter()
                .next()
                .ok_or_else(|| ApiError::Internal(rejection.body_text()))?
        },
    };

    summarize(&state, DateRange::starting_at(start)).await
}

/// Summary over `start..=end`
///
/// GET /api/v1.0/{start}/{end}
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn summary_between(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Vec<TemperatureSummaryResponse>>, ApiError> {
    let (start, end) = match path {
        Ok(Path(bounds)) => bounds,
        Err(rejection) => {
            debug!(error = %rejection, "Decoding range lossily");
            let mut segments = lossy_segments(&uri).into_iter();
            match (segments.next(), segments.next()) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(ApiError::Internal(rejection.body_text())),
            }
        },
    };

    summarize(&state, DateRange::between(start, end)).await
}

/// Segments after the summary prefix, percent-decoded lossily
fn lossy_segments(uri: &Uri) -> Vec<String> {
    uri.path()
        .strip_prefix(SUMMARY_PREFIX)
        .unwrap_or_default()
        .split('/')
        .map(percent_decode_lossy)
        .collect()
}

/// Percent-decode a path segment, replacing invalid UTF-8 with U+FFFD
///
/// A `%` not followed by two hex digits is kept as is.
fn percent_decode_lossy(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let escaped = if bytes[i] == b'%' {
            bytes
                .get(i + 1..i + 3)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
        } else {
            None
        };

        match escaped {
            Some(byte) => {
                decoded.push(byte);
                i += 3;
            },
            None => {
                decoded.push(bytes[i]);
                i += 1;
            },
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}
