//! Rent-financing eligibility worksheet.
//!
//! This module implements the repayment worksheet that decides whether a
//! financing request is approved with a repayment breakdown or capped by the
//! affordability policy.
//!
//! # Worksheet Structure
//!
//! The worksheet consists of the following lines:
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Advisory ceiling: monthly salary × salary multiple (display only) |
//! | 2    | Total repayment: requested amount × (1 + annualized rate) |
//! | 3    | Monthly repayment: Line 2 ÷ period months |
//! | 4    | Affordability cap: monthly salary × affordability ratio |
//! | 5    | Decision: capped if Line 3 > Line 4, approved otherwise |
//!
//! The advisory ceiling on Line 1 is never consulted by the decision on
//! Line 5. Requests above the ceiling are logged and still evaluated on
//! affordability alone.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use rent_core::{
//!     FinancingDecision, FinancingPolicy, FinancingRequest, FinancingWorksheet,
//!     RepaymentPeriod,
//! };
//!
//! let request = FinancingRequest {
//!     monthly_salary: dec!(500000.00),
//!     requested_amount: dec!(300000.00),
//!     renewal_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
//!     repayment_period: RepaymentPeriod::TwelveMonths,
//!     contact_email: "applicant@example.com".to_string(),
//! };
//!
//! let worksheet = FinancingWorksheet::new(FinancingPolicy::default());
//! let decision = worksheet.calculate(&request).unwrap();
//!
//! let offer = match decision {
//!     FinancingDecision::Approved(offer) => offer,
//!     FinancingDecision::Capped => unreachable!(),
//! };
//!
//! // Total repayment = 300,000 × 1.48 = 444,000; monthly = 444,000 ÷ 12
//! assert_eq!(offer.monthly_repayment, dec!(37000.00));
//! assert_eq!(offer.security_deposit, dec!(37000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{FinancingRequest, RepaymentPeriod};

/// Errors that can occur during financing worksheet calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinancingWorksheetError {
    /// The salary multiple must be positive.
    #[error("salary multiple must be positive, got {0}")]
    InvalidSalaryMultiple(Decimal),

    /// The affordability ratio must be between 0 and 1 (exclusive of 0).
    #[error("affordability ratio must be between 0 and 1, got {0}")]
    InvalidAffordabilityRatio(Decimal),

    /// The monthly salary must be positive.
    #[error("monthly salary must be positive, got {0}")]
    NonPositiveSalary(Decimal),

    /// The requested amount must be positive.
    #[error("requested amount must be positive, got {0}")]
    NonPositiveRequestedAmount(Decimal),
}

/// Policy factors for the financing worksheet.
///
/// These are product-wide constants rather than per-request inputs; the
/// [`Default`] implementation carries the current policy values.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use rent_core::FinancingPolicy;
///
/// let policy = FinancingPolicy::default();
///
/// assert_eq!(policy.salary_multiple, dec!(2.5));
/// assert_eq!(policy.affordability_ratio, dec!(0.3333));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingPolicy {
    /// Multiple of monthly salary used for the advisory ceiling (Line 1).
    ///
    /// The ceiling is shown to the applicant ("you can request up to …")
    /// but never gates the decision.
    pub salary_multiple: Decimal,

    /// Fraction of monthly salary the monthly repayment may not exceed
    /// (Line 4 multiplier). Currently 33.33%.
    pub affordability_ratio: Decimal,
}

impl Default for FinancingPolicy {
    fn default() -> Self {
        Self {
            salary_multiple: Decimal::new(25, 1),
            affordability_ratio: Decimal::new(3333, 4),
        }
    }
}

impl FinancingPolicy {
    /// Validates the policy values.
    ///
    /// # Errors
    ///
    /// Returns [`FinancingWorksheetError`] if:
    /// - `salary_multiple` is not positive
    /// - `affordability_ratio` is not in (0, 1]
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use rent_core::{FinancingPolicy, FinancingWorksheetError};
    ///
    /// let invalid_policy = FinancingPolicy {
    ///     salary_multiple: dec!(0.00),
    ///     affordability_ratio: dec!(0.3333),
    /// };
    ///
    /// let result = invalid_policy.validate();
    /// assert_eq!(
    ///     result,
    ///     Err(FinancingWorksheetError::InvalidSalaryMultiple(dec!(0.00)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), FinancingWorksheetError> {
        if self.salary_multiple <= Decimal::ZERO {
            return Err(FinancingWorksheetError::InvalidSalaryMultiple(
                self.salary_multiple,
            ));
        }
        if self.affordability_ratio <= Decimal::ZERO || self.affordability_ratio > Decimal::ONE {
            return Err(FinancingWorksheetError::InvalidAffordabilityRatio(
                self.affordability_ratio,
            ));
        }
        Ok(())
    }
}

/// Repayment breakdown for an approved financing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovedFinancing {
    /// The financing amount the applicant asked for.
    pub requested_amount: Decimal,

    /// Repayment due each month over the chosen period (Line 3).
    pub monthly_repayment: Decimal,

    /// Refundable deposit held as collateral.
    ///
    /// Always equal to one month's repayment.
    pub security_deposit: Decimal,

    /// The repayment period the breakdown was computed for.
    pub repayment_period: RepaymentPeriod,
}

/// Outcome of a financing worksheet calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinancingDecision {
    /// The request is affordable; carries the repayment breakdown.
    Approved(ApprovedFinancing),

    /// The monthly repayment would exceed the affordability cap.
    Capped,
}

/// Calculator for the rent-financing worksheet.
///
/// Encapsulates the policy factors and evaluates each line of the worksheet,
/// culminating in an approval with a repayment breakdown or a capped decision.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use rent_core::{
///     FinancingDecision, FinancingPolicy, FinancingRequest, FinancingWorksheet,
///     RepaymentPeriod,
/// };
///
/// let worksheet = FinancingWorksheet::new(FinancingPolicy::default());
///
/// // Monthly repayment 41,333.33 exceeds the 33.33% cap of 33,330.00
/// let request = FinancingRequest {
///     monthly_salary: dec!(100000.00),
///     requested_amount: dec!(200000.00),
///     renewal_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     repayment_period: RepaymentPeriod::SixMonths,
///     contact_email: "applicant@example.com".to_string(),
/// };
///
/// let decision = worksheet.calculate(&request).unwrap();
/// assert_eq!(decision, FinancingDecision::Capped);
/// ```
#[derive(Debug, Clone)]
pub struct FinancingWorksheet {
    policy: FinancingPolicy,
}

impl FinancingWorksheet {
    /// Creates a new financing worksheet with the given policy.
    pub fn new(policy: FinancingPolicy) -> Self {
        Self { policy }
    }

    /// Calculates the complete financing worksheet for a request.
    ///
    /// This is the main entry point. It validates the policy, rejects
    /// non-positive amounts, logs requests above the advisory ceiling, and
    /// returns either an approval with the repayment breakdown or a capped
    /// decision.
    ///
    /// # Errors
    ///
    /// Returns [`FinancingWorksheetError`] if the policy is invalid or if
    /// the salary or requested amount is not positive. An unaffordable
    /// request is not an error: it yields [`FinancingDecision::Capped`].
    pub fn calculate(
        &self,
        request: &FinancingRequest,
    ) -> Result<FinancingDecision, FinancingWorksheetError> {
        self.policy.validate()?;

        if request.monthly_salary <= Decimal::ZERO {
            return Err(FinancingWorksheetError::NonPositiveSalary(
                request.monthly_salary,
            ));
        }
        if request.requested_amount <= Decimal::ZERO {
            return Err(FinancingWorksheetError::NonPositiveRequestedAmount(
                request.requested_amount,
            ));
        }

        // Line 1: advisory ceiling, display only; never gates the decision
        let advisory_ceiling = self.advisory_ceiling(request.monthly_salary);
        if request.requested_amount > advisory_ceiling {
            warn!(
                requested_amount = %request.requested_amount,
                advisory_ceiling = %advisory_ceiling,
                "requested amount exceeds advisory ceiling"
            );
        }

        // Line 2: total repayment over the whole period
        let rate = request.repayment_period.annual_interest_rate();
        let total_repayment = self.total_repayment(request.requested_amount, rate);

        // Line 3: monthly repayment
        let monthly_repayment =
            self.monthly_repayment(total_repayment, request.repayment_period.months());

        // Line 4: affordability cap
        let affordability_cap = self.affordability_cap(request.monthly_salary);

        // Line 5: decision (strictly greater than the cap is unaffordable)
        if monthly_repayment > affordability_cap {
            warn!(
                monthly_repayment = %monthly_repayment,
                affordability_cap = %affordability_cap,
                "monthly repayment exceeds affordability cap; request capped"
            );
            return Ok(FinancingDecision::Capped);
        }

        Ok(FinancingDecision::Approved(ApprovedFinancing {
            requested_amount: request.requested_amount,
            monthly_repayment,
            security_deposit: monthly_repayment,
            repayment_period: request.repayment_period,
        }))
    }

    /// Calculates the advisory ceiling for a monthly salary (Line 1).
    ///
    /// This is the "you can request up to …" amount shown next to the
    /// salary field. It is advisory: requests above it are still evaluated
    /// on affordability alone.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use rent_core::{FinancingPolicy, FinancingWorksheet};
    ///
    /// let worksheet = FinancingWorksheet::new(FinancingPolicy::default());
    ///
    /// assert_eq!(worksheet.advisory_ceiling(dec!(100000.00)), dec!(250000.00));
    /// ```
    pub fn advisory_ceiling(
        &self,
        monthly_salary: Decimal,
    ) -> Decimal {
        round_half_up(monthly_salary * self.policy.salary_multiple)
    }

    /// Calculates the total repayment over the whole period (Line 2).
    ///
    /// Multiplies the requested amount by one plus the annualized rate for
    /// the chosen period.
    fn total_repayment(
        &self,
        requested_amount: Decimal,
        annual_interest_rate: Decimal,
    ) -> Decimal {
        round_half_up(requested_amount * (Decimal::ONE + annual_interest_rate))
    }

    /// Calculates the repayment due each month (Line 3).
    ///
    /// Divides the total repayment evenly over the period. The period is a
    /// fixed non-zero enum, so the division cannot fail.
    fn monthly_repayment(
        &self,
        total_repayment: Decimal,
        months: u32,
    ) -> Decimal {
        round_half_up(total_repayment / Decimal::from(months))
    }

    /// Calculates the affordability cap (Line 4).
    ///
    /// The monthly repayment may not exceed this fraction of the monthly
    /// salary. A repayment exactly at the cap is affordable.
    fn affordability_cap(
        &self,
        monthly_salary: Decimal,
    ) -> Decimal {
        round_half_up(monthly_salary * self.policy.affordability_ratio)
    }
}
