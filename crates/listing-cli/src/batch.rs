//! Batch loop over spreadsheet rows.
//!
//! Rows are independent: one failing row never stops the batch.

use tracing::{info, info_span, warn};

use listing_model::{NormalizedProductRequest, RawRow, ValidationError};
use listing_transform::{CategoryClassifier, CategoryResolver, RowConverter};

/// How each row is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Fail-fast conversion producing requests.
    Convert,
    /// Collect every violation without producing requests.
    Check,
}

#[derive(Debug)]
pub enum RowOutcome {
    Converted(Box<NormalizedProductRequest>),
    /// Passed every rule in check mode.
    Valid,
    Failed(Vec<ValidationError>),
}

#[derive(Debug)]
pub struct RowReport {
    pub row: usize,
    pub outcome: RowOutcome,
}

#[derive(Debug, Default)]
pub struct BatchResult {
    pub reports: Vec<RowReport>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn requests(&self) -> Vec<&NormalizedProductRequest> {
        self.reports
            .iter()
            .filter_map(|report| match &report.outcome {
                RowOutcome::Converted(request) => Some(request.as_ref()),
                _ => None,
            })
            .collect()
    }

    /// Rows that passed, converted or merely validated.
    pub fn succeeded(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| !matches!(report.outcome, RowOutcome::Failed(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Every error, in row order.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.reports.iter().flat_map(|report| match &report.outcome {
            RowOutcome::Failed(errors) => errors.as_slice(),
            _ => [].as_slice(),
        })
    }

    /// Number of failures that were category resolution misses.
    pub fn resolution_misses(&self) -> usize {
        self.errors().filter(|err| err.is_resolution_miss()).count()
    }
}

/// Run every row through `converter`.
pub fn run_batch<R, C>(
    converter: &RowConverter<'_, R, C>,
    rows: &[RawRow],
    mode: BatchMode,
) -> BatchResult
where
    R: CategoryResolver + ?Sized,
    C: CategoryClassifier + ?Sized,
{
    let span = info_span!("batch", rows = rows.len(), mode = ?mode);
    let _guard = span.enter();

    let reports: Vec<RowReport> = rows
        .iter()
        .map(|row| {
            let outcome = match mode {
                BatchMode::Convert => match converter.convert(row) {
                    Ok(request) => RowOutcome::Converted(Box::new(request)),
                    Err(err) => RowOutcome::Failed(vec![err]),
                },
                BatchMode::Check => {
                    let errors = converter.validate(row);
                    if errors.is_empty() {
                        RowOutcome::Valid
                    } else {
                        RowOutcome::Failed(errors)
                    }
                }
            };
            if let RowOutcome::Failed(errors) = &outcome {
                for err in errors {
                    warn!(row = row.index(), field = %err.field(), "{err}");
                }
            }
            RowReport {
                row: row.index(),
                outcome,
            }
        })
        .collect();

    let result = BatchResult { reports };
    info!(
        total = result.total(),
        succeeded = result.succeeded(),
        failed = result.failed(),
        "batch complete"
    );
    result
}
