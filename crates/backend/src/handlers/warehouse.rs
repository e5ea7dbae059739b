use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use contracts::api::{ClearCacheResponse, ErrorResponse};
use contracts::warehouse::{TableSnapshot, WarehouseTable};

use crate::warehouse::{self, export, DataAccessError};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Membership check at the HTTP boundary: anything outside the closed
/// enumeration is rejected before a query is ever built.
fn parse_table(raw: &str) -> Result<WarehouseTable, ApiError> {
    raw.parse::<WarehouseTable>().map_err(|e| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

fn load_failure(e: DataAccessError) -> ApiError {
    tracing::error!("warehouse load failed: {}", e);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// GET /api/warehouse/:table
pub async fn get_table(Path(table): Path<String>) -> Result<Json<TableSnapshot>, ApiError> {
    let table = parse_table(&table)?;
    let snapshot = warehouse::loader().load(table).await.map_err(load_failure)?;
    Ok(Json((*snapshot).clone()))
}

/// GET /api/warehouse/:table/csv
pub async fn export_csv(Path(table): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let table = parse_table(&table)?;
    let snapshot = warehouse::loader().load(table).await.map_err(load_failure)?;

    let bytes = export::to_csv_bytes(&snapshot).map_err(|e| {
        tracing::error!("csv export failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("csv export failed: {}", e),
            }),
        )
    })?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.csv\"", table.table_name()),
        ),
    ];
    Ok((headers, bytes))
}

/// POST /api/warehouse/cache/clear — the external cache invalidation
/// signal; the only other invalidation is a process restart.
pub async fn clear_cache() -> Json<ClearCacheResponse> {
    let cleared = warehouse::loader().clear_cache();
    tracing::info!("warehouse cache cleared, {} snapshots dropped", cleared);
    Json(ClearCacheResponse { cleared })
}
