use contracts::api::ErrorResponse;
use contracts::warehouse::{TableSnapshot, WarehouseTable};
use gloo_net::http::{Request, Response};

const API_BASE: &str = "/api/warehouse";

/// Fetch the full snapshot of one warehouse table.
pub async fn fetch_table(table: WarehouseTable) -> Result<TableSnapshot, String> {
    let url = format!("{}/{}", API_BASE, table.table_name());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: TableSnapshot = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch the CSV export of one warehouse table as text.
pub async fn fetch_table_csv(table: WarehouseTable) -> Result<String, String> {
    let url = format!("{}/{}/csv", API_BASE, table.table_name());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Prefer the backend's descriptive error body over the bare status code.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP error: {}", status),
    }
}
