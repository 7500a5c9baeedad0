//! Cloze numbering endpoints for editors

use axum::Json;
use cloze_core::{cloze_numbers, next_cloze_number, prepare_cloze, sync_cloze_fields};

use crate::error::{ApiError, Result};
use crate::models::{
    ClozePreparation, FieldPlan, PrepareRequest, ScanRequest, ScanResponse, SyncRequest,
};

/// POST /api/clozes/scan
/// Lists cloze numbers in use and the number a new cloze would get
pub async fn scan(Json(request): Json<ScanRequest>) -> Json<ScanResponse> {
    let numbers = cloze_numbers(&request.content);
    let next = next_cloze_number(&numbers, request.reuse);

    Json(ScanResponse {
        cloze_numbers: numbers,
        next_cloze_number: next,
    })
}

/// POST /api/clozes/prepare
/// Plans a new cloze: either copy source content or wrap and update fields
pub async fn prepare(Json(request): Json<PrepareRequest>) -> Result<Json<ClozePreparation>> {
    if !request.fields.iter().any(|f| f.name == request.field_name) {
        return Err(ApiError::BadRequest(format!(
            "field {} is not part of the note",
            request.field_name
        )));
    }

    let preparation = prepare_cloze(
        &request.field_name,
        &request.fields,
        &request.content,
        request.reuse,
    )?;

    if let ClozePreparation::Wrap { number, ref plan, .. } = preparation {
        tracing::info!(
            field = %request.field_name,
            number,
            updates = plan.updates.len(),
            "prepared cloze"
        );
    }

    Ok(Json(preparation))
}

/// POST /api/clozes/sync
/// Re-syncs companion fields with the clozes the content currently uses
pub async fn sync(Json(request): Json<SyncRequest>) -> Result<Json<FieldPlan>> {
    let plan = sync_cloze_fields(&request.field_name, &request.fields, &request.content)?;

    tracing::debug!(
        field = %request.field_name,
        updates = plan.updates.len(),
        missing = plan.missing.len(),
        "synced cloze fields"
    );

    Ok(Json(plan))
}
