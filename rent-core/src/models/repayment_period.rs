use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Repayment period for a financing request.
///
/// Periods form a fixed set, each with a fixed annualized interest rate:
///
/// | Months | Annualized rate |
/// |--------|-----------------|
/// | 6      | 24%             |
/// | 9      | 36%             |
/// | 12     | 48%             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentPeriod {
    SixMonths,
    NineMonths,
    TwelveMonths,
}

impl RepaymentPeriod {
    /// Raw select value for this period, as submitted by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SixMonths => "6",
            Self::NineMonths => "9",
            Self::TwelveMonths => "12",
        }
    }

    /// Parses a raw select value ("6", "9" or "12").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "6" => Some(Self::SixMonths),
            "9" => Some(Self::NineMonths),
            "12" => Some(Self::TwelveMonths),
            _ => None,
        }
    }

    /// Period length in months.
    pub fn months(&self) -> u32 {
        match self {
            Self::SixMonths => 6,
            Self::NineMonths => 9,
            Self::TwelveMonths => 12,
        }
    }

    /// Annualized interest rate applied over the whole period.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use rent_core::RepaymentPeriod;
    ///
    /// assert_eq!(RepaymentPeriod::SixMonths.annual_interest_rate(), dec!(0.24));
    /// assert_eq!(RepaymentPeriod::NineMonths.annual_interest_rate(), dec!(0.36));
    /// assert_eq!(RepaymentPeriod::TwelveMonths.annual_interest_rate(), dec!(0.48));
    /// ```
    pub fn annual_interest_rate(&self) -> Decimal {
        match self {
            Self::SixMonths => Decimal::new(24, 2),
            Self::NineMonths => Decimal::new(36, 2),
            Self::TwelveMonths => Decimal::new(48, 2),
        }
    }
}
