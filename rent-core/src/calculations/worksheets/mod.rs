//! Financing worksheet implementations.
//!
//! This module contains the calculation logic that maps a financing request
//! to an approval or a capped decision.

pub mod financing;

pub use financing::{
    ApprovedFinancing, FinancingDecision, FinancingPolicy, FinancingWorksheet,
    FinancingWorksheetError,
};
