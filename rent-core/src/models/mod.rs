mod financing_request;
mod repayment_period;

pub use financing_request::FinancingRequest;
pub use repayment_period::RepaymentPeriod;
