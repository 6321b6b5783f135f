use axum::{extract::State, Json};

use super::error::AppError;
use super::AppState;
use crate::collectors::{self, SystemSnapshot};

/// GET /info
///
/// Collection blocks on the CPU sample, so it runs on the blocking pool.
pub async fn handler(State(state): State<AppState>) -> Result<Json<SystemSnapshot>, AppError> {
    let metrics = state.metrics.clone();
    let disk_mount = state.config.disk_mount.clone();

    let snapshot = tokio::task::spawn_blocking(move || {
        collectors::collect_snapshot(metrics.as_ref(), &disk_mount)
    })
    .await
    .map_err(|e| AppError::Internal(format!("metrics task failed: {e}")))??;

    Ok(Json(snapshot))
}
