//! Submit pipeline: validate the raw form, parse it, run the worksheet.
//!
//! Each submit is stateless: the request is rebuilt from the current field
//! values every call, with no memory of prior results.

use thiserror::Error;
use tracing::{debug, warn};

use rent_core::{FinancingDecision, FinancingWorksheet, FinancingWorksheetError};

use crate::models::{FinancingFormError, FinancingFormModel};

/// Errors surfaced by the submit pipeline.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form failed validation or parsing.
    #[error(transparent)]
    Form(#[from] FinancingFormError),

    /// The worksheet rejected the parsed request.
    #[error(transparent)]
    Worksheet(#[from] FinancingWorksheetError),
}

/// Runs the whole submit flow for a financing form.
///
/// Validation runs first; if any field is missing the submission is aborted
/// before any calculation, and every message is logged. Parsing failures on
/// present-but-malformed values surface as typed errors.
///
/// # Errors
///
/// Returns [`SubmitError`] on incomplete input, malformed field values, or
/// a worksheet rejection. A capped request is not an error.
pub fn submit(
    form: &FinancingFormModel,
    worksheet: &FinancingWorksheet,
) -> Result<FinancingDecision, SubmitError> {
    if let Err(errors) = form.validate_for_submit() {
        warn!("cannot submit financing form due to validation errors");
        for error in &errors {
            warn!(%error, "validation error");
        }
        return Err(FinancingFormError::Incomplete(errors).into());
    }

    let request = form.to_request()?;
    debug!(%form, "submitting financing request");

    Ok(worksheet.calculate(&request)?)
}
