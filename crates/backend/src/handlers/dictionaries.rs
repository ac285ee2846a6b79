use axum::{extract::Path, http::StatusCode, Json};
use contracts::shared::dictionary::{DictionaryEntryDto, DictionarySummary};

use crate::system::dictionaries::service;

/// GET /api/dictionaries
pub async fn list_all() -> Result<Json<Vec<DictionarySummary>>, StatusCode> {
    match service::list_dictionaries().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list dictionaries: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/dictionaries/:code
///
/// Неизвестный код отдаёт пустой массив, как пустой справочник.
pub async fn get_entries(
    Path(code): Path<String>,
) -> Result<Json<Vec<DictionaryEntryDto>>, StatusCode> {
    if code.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    match service::list_entries(&code).await {
        Ok(v) => {
            tracing::debug!("Dictionary '{}': {} entries", code, v.len());
            Ok(Json(v))
        }
        Err(e) => {
            tracing::error!("Failed to load dictionary '{}': {:#}", code, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
