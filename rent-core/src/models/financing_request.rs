use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RepaymentPeriod;

/// A rent-financing request, rebuilt from the form fields on every submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingRequest {
    /// Applicant's monthly salary. Must be positive.
    pub monthly_salary: Decimal,

    /// Requested financing amount. Must be positive.
    pub requested_amount: Decimal,

    /// Lease renewal date. Carried for display; the calculation never
    /// consults it.
    pub renewal_date: NaiveDate,

    /// Chosen repayment period, which fixes the interest rate.
    pub repayment_period: RepaymentPeriod,

    /// Contact email for the follow-up offer.
    pub contact_email: String,
}
