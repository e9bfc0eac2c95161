use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use rent_core::{FinancingRequest, RepaymentPeriod};

use crate::utils::{ParseDecimalError, parse_decimal, parse_optional_decimal};

/// Errors produced when turning raw form fields into a financing request.
#[derive(Debug, Error)]
pub enum FinancingFormError {
    /// One or more required fields are missing or zero.
    #[error("please fill in all fields correctly ({})", .0.join(" "))]
    Incomplete(Vec<String>),

    /// A currency field holds a non-numeric value.
    #[error("invalid {field}: {source}")]
    InvalidAmount {
        field: &'static str,
        #[source]
        source: ParseDecimalError,
    },

    /// The renewal date is not a valid `YYYY-MM-DD` value.
    #[error("invalid renewal date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The repayment period is not one of the offered choices.
    #[error("invalid repayment period '{0}'")]
    InvalidPeriod(String),
}

/// Raw field values from the financing form, exactly as a presentation
/// layer holds them before submit.
#[derive(Clone, Debug, Default)]
pub struct FinancingFormModel {
    pub monthly_salary: String,
    pub requested_amount: String,
    /// ISO `YYYY-MM-DD`, the value a date input submits.
    pub renewal_date: String,
    /// Raw select value: "6", "9" or "12".
    pub repayment_period: String,
    pub contact_email: String,
}

impl FinancingFormModel {
    /// Validates that the model has all required values for submission.
    ///
    /// Rules:
    /// - all five fields are required
    /// - currency fields that parse to zero count as missing
    ///
    /// Collects one message per offending field rather than stopping at the
    /// first.
    pub fn validate_for_submit(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if Self::is_blank_or_zero(&self.monthly_salary) {
            errors.push("Monthly salary is required.".to_string());
        }

        if Self::is_blank_or_zero(&self.requested_amount) {
            errors.push("Requested financing amount is required.".to_string());
        }

        if self.renewal_date.trim().is_empty() {
            errors.push("Renewal date is required.".to_string());
        }

        if self.repayment_period.trim().is_empty() {
            errors.push("Repayment period is required.".to_string());
        }

        if self.contact_email.trim().is_empty() {
            errors.push("Contact email is required.".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Parses the raw field values into a typed [`FinancingRequest`].
    ///
    /// Call [`validate_for_submit`](Self::validate_for_submit) first;
    /// this method reports malformed values, not missing ones.
    ///
    /// # Errors
    ///
    /// Returns [`FinancingFormError`] when a currency field is not numeric,
    /// the renewal date is not `YYYY-MM-DD`, or the repayment period is not
    /// an offered choice. The email is carried as-is: it is collected but
    /// not validated beyond presence.
    pub fn to_request(&self) -> Result<FinancingRequest, FinancingFormError> {
        let monthly_salary =
            parse_decimal(&self.monthly_salary).map_err(|source| {
                FinancingFormError::InvalidAmount {
                    field: "monthly salary",
                    source,
                }
            })?;

        let requested_amount =
            parse_decimal(&self.requested_amount).map_err(|source| {
                FinancingFormError::InvalidAmount {
                    field: "requested financing amount",
                    source,
                }
            })?;

        let renewal_date = NaiveDate::parse_from_str(self.renewal_date.trim(), "%Y-%m-%d")
            .map_err(|source| FinancingFormError::InvalidDate {
                input: self.renewal_date.clone(),
                source,
            })?;

        let repayment_period = RepaymentPeriod::parse(self.repayment_period.trim())
            .ok_or_else(|| FinancingFormError::InvalidPeriod(self.repayment_period.clone()))?;

        Ok(FinancingRequest {
            monthly_salary,
            requested_amount,
            renewal_date,
            repayment_period,
            contact_email: self.contact_email.trim().to_string(),
        })
    }

    /// Returns `true` if a currency field is empty or parses to zero.
    fn is_blank_or_zero(value: &str) -> bool {
        if value.trim().is_empty() {
            return true;
        }
        parse_optional_decimal(value) == Some(Decimal::ZERO)
    }
}

impl fmt::Display for FinancingFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Monthly salary:   {}", self.monthly_salary)?;
        writeln!(f, "Requested amount: {}", self.requested_amount)?;
        writeln!(f, "Renewal date:     {}", self.renewal_date)?;
        writeln!(f, "Repayment period: {}", self.repayment_period)?;
        writeln!(f, "Contact email:    {}", self.contact_email)
    }
}
