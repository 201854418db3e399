//! Batch Import API Handlers

use axum::{
    Json,
    extract::{FromRequest, Multipart, Query, Request, State},
    http::header::CONTENT_TYPE,
};

use crate::api::LimitQuery;
use crate::db::repository::import_error;
use crate::import;
use crate::state::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{ImportError, ImportSummary, ProductDraft};
use shared::util::clamp_limit;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 500;

/// Body of the `file` field
async fn read_file_field(mut multipart: Multipart) -> AppResult<Vec<u8>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_request(format!("Invalid multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::invalid_request(format!("Multipart error: {e}")))?;
            return Ok(data.to_vec());
        }
    }
    Err(AppError::with_message(
        ErrorCode::NoFileProvided,
        "No 'file' field found. Field name must be 'file'",
    ))
}

/// POST /api/batch-import/products - 批量导入原料
///
/// `application/json`: array of product drafts.
/// `multipart/form-data`: CSV in field `file`, columns
/// `name,unit,cost_price,is_available`. A first row that is exactly this
/// header line is skipped rather than imported as a product.
pub async fn import_products(
    State(state): State<ServerState>,
    request: Request,
) -> AppResult<Json<ImportSummary>> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let records: Vec<ProductDraft> = if content_type.starts_with("application/json") {
        let Json(records) = Json::<Vec<ProductDraft>>::from_request(request, &state)
            .await
            .map_err(|e| AppError::with_message(ErrorCode::InvalidFormat, e.body_text()))?;
        records
    } else if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        let data = read_file_field(multipart).await?;
        import::csv::decode_products(&data).map_err(|e| {
            AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid CSV file: {e}"))
        })?
    } else {
        return Err(AppError::invalid_request(
            "provide JSON array or multipart file",
        ));
    };

    import::check_batch_size(records.len(), state.config.import_max_records)?;
    let summary = import::import_products(state.pool(), &records).await?;
    Ok(Json(summary))
}

/// GET /api/batch-import/errors - 导入错误日志 (最新在前)
pub async fn list_errors(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<ImportError>>> {
    let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let errors = import_error::find_recent(state.pool(), limit).await?;
    Ok(Json(errors))
}
