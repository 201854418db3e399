//! Batch product import
//!
//! Two failure tiers:
//!
//! - **record level**: a record with a missing name/unit, or one the store
//!   rejects with a constraint violation, is written to `import_errors` and
//!   skipped. The batch continues.
//! - **transaction level**: anything else (lost connection, busy store,
//!   failed savepoint, failed error-log write) drops the enclosing
//!   transaction. Accepted products and error rows of this batch vanish
//!   together and the caller gets [`ImportFailure`].
//!
//! Every record runs in its own savepoint so a rejected upsert never
//! poisons the enclosing transaction.

pub mod csv;

use crate::db::repository::{constraint_kind, import_error, product, store_message};
use shared::error::{AppError, ErrorCode};
use shared::models::{IMPORT_ENTITY_PRODUCT, ImportSummary, ProductDraft};
use sqlx::{Connection, SqlitePool};
use thiserror::Error;

/// Why a record was not imported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Required field missing
    Validation,
    /// Store refused the write
    Constraint,
}

/// Outcome of one candidate record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Imported { id: i64 },
    Rejected { reason: RejectReason, message: String },
}

/// Transaction-level import failure; nothing from the batch was kept
#[derive(Debug, Error)]
pub enum ImportFailure {
    #[error("Import aborted: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Import aborted, record could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<ImportFailure> for AppError {
    fn from(err: ImportFailure) -> Self {
        tracing::error!(error = %err, "Product import rolled back");
        AppError::with_message(
            ErrorCode::DatabaseError,
            "Import failed, no records were applied",
        )
    }
}

/// Required-field check; `Err` carries the message stored in the error log.
///
/// Only the empty string counts as missing; whitespace is stored as given.
pub fn validate_draft(draft: &ProductDraft) -> Result<(), String> {
    let missing_name = draft.name.is_empty();
    let missing_unit = draft.unit.is_empty();
    match (missing_name, missing_unit) {
        (false, false) => Ok(()),
        (true, false) => Err("name is required".to_string()),
        (false, true) => Err("unit is required".to_string()),
        (true, true) => Err("name and unit are required".to_string()),
    }
}

/// Reject oversized batches before touching the store
pub fn check_batch_size(len: usize, max: usize) -> Result<(), AppError> {
    if len > max {
        return Err(AppError::with_message(
            ErrorCode::ImportBatchTooLarge,
            format!("Batch has {len} records, at most {max} are accepted per call"),
        )
        .with_detail("records", len)
        .with_detail("max", max));
    }
    Ok(())
}

/// Apply every draft in input order inside one transaction.
///
/// Returns `{inserted, total}`; rejected records are in `import_errors`.
pub async fn import_products(
    pool: &SqlitePool,
    records: &[ProductDraft],
) -> Result<ImportSummary, ImportFailure> {
    let mut tx = pool.begin().await?;
    let mut outcomes: Vec<RecordOutcome> = Vec::with_capacity(records.len());

    for draft in records {
        let outcome = match validate_draft(draft) {
            Err(message) => RecordOutcome::Rejected {
                reason: RejectReason::Validation,
                message,
            },
            Ok(()) => {
                let mut savepoint = Connection::begin(&mut *tx).await?;
                match product::upsert(&mut *savepoint, draft).await {
                    Ok(id) => {
                        savepoint.commit().await?;
                        RecordOutcome::Imported { id }
                    }
                    Err(e) if constraint_kind(&e).is_some() => {
                        savepoint.rollback().await?;
                        RecordOutcome::Rejected {
                            reason: RejectReason::Constraint,
                            message: store_message(&e),
                        }
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        if let RecordOutcome::Rejected { reason, message } = &outcome {
            let raw = serde_json::to_string(draft)?;
            import_error::insert(&mut *tx, IMPORT_ENTITY_PRODUCT, &raw, message).await?;
            tracing::warn!(product = %draft.name, ?reason, error = %message, "Import record rejected");
        }
        outcomes.push(outcome);
    }

    tx.commit().await?;

    let inserted = outcomes
        .iter()
        .filter(|o| matches!(o, RecordOutcome::Imported { .. }))
        .count();
    let summary = ImportSummary {
        inserted,
        total: records.len(),
    };
    tracing::info!(
        inserted = summary.inserted,
        rejected = summary.total - summary.inserted,
        total = summary.total,
        "Product import finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing;

    fn draft(name: &str, unit: &str) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            unit: unit.into(),
            cost_price: Some(1.0),
            is_available: true,
        }
    }

    #[test]
    fn test_validate_draft_messages() {
        assert!(validate_draft(&draft("Tomato", "kg")).is_ok());
        assert_eq!(validate_draft(&draft("", "kg")).unwrap_err(), "name is required");
        assert_eq!(validate_draft(&draft("Salt", "")).unwrap_err(), "unit is required");
        assert!(validate_draft(&draft("  ", "kg")).is_ok());
        assert_eq!(
            validate_draft(&ProductDraft::default()).unwrap_err(),
            "name and unit are required"
        );
    }

    #[test]
    fn test_check_batch_size() {
        assert!(check_batch_size(5000, 5000).is_ok());
        let err = check_batch_size(5001, 5000).unwrap_err();
        assert_eq!(err.code, ErrorCode::ImportBatchTooLarge);
        assert_eq!(err.http_status(), http::StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_constraint_rejection_keeps_batch_going() {
        let (_dir, pool) = testing::pool().await;
        let mut negative = draft("Butter", "kg");
        negative.cost_price = Some(-3.0);

        let summary = import_products(&pool, &[draft("Flour", "kg"), negative, draft("Milk", "l")])
            .await
            .unwrap();
        assert_eq!(summary, ImportSummary { inserted: 2, total: 3 });

        let errors = import_error::find_recent(&pool, 10).await.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].entity, "product");
        assert!(errors[0].raw_data.contains("Butter"));
        assert!(errors[0].error_message.contains("CHECK"), "{}", errors[0].error_message);
        assert_eq!(product::count(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_transaction_failure_discards_everything() {
        let (_dir, pool) = testing::pool().await;
        // error log unwritable: the first rejection becomes a transaction-level fault
        sqlx::query("DROP TABLE import_errors")
            .execute(&pool)
            .await
            .unwrap();

        let result = import_products(&pool, &[draft("Flour", "kg"), draft("", "kg")]).await;
        assert!(matches!(result, Err(ImportFailure::Store(_))));
        assert_eq!(product::count(&pool).await.unwrap(), 0);
    }
}
